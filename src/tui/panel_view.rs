//! The settings panel as a tui-realm component.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm_actions::{AppEvent, NavigationEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    event::{MouseButton, MouseEvent, MouseEventKind},
    props::{AttrValue, Attribute, Props},
};

use super::Msg;
use super::canvas::BufferCanvas;
use super::event::{UserEvent, dispatcher, key_input};
use crate::gui::{Bounds, PanelController, Point};

/// Shared with the run loop, which commits the panel on exit.
pub type SharedPanel = Rc<RefCell<PanelController>>;

/// Scrollable, bordered view of the panel.
pub struct PanelView {
    props: Props,
    panel: SharedPanel,
    /// Inner area from the last draw; mouse events are mapped through it
    inner: Rect,
    scroll: i32,
}

impl PanelView {
    pub fn new(panel: SharedPanel) -> Self {
        Self {
            props: Props::default(),
            panel,
            inner: Rect::default(),
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> i32 {
        let content = self.panel.borrow().content_height();
        (content - i32::from(self.inner.height)).max(0)
    }

    fn scroll_by(&mut self, rows: i32) {
        self.scroll = (self.scroll + rows).clamp(0, self.max_scroll());
    }

    /// Terminal cell to panel coordinates.
    fn to_panel(&self, column: u16, row: u16) -> Point {
        Point::new(
            i32::from(column) - i32::from(self.inner.x),
            i32::from(row) - i32::from(self.inner.y) + self.scroll,
        )
    }

    fn on_mouse(&mut self, event: MouseEvent) {
        let at = self.to_panel(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.panel.borrow_mut().mouse_pressed(at),
            MouseEventKind::Up(MouseButton::Left) => self.panel.borrow_mut().mouse_released(at),
            MouseEventKind::Drag(MouseButton::Left) => self.panel.borrow_mut().mouse_dragged(at),
            MouseEventKind::Moved => self.panel.borrow_mut().mouse_moved(at),
            MouseEventKind::ScrollDown => self.scroll_by(1),
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            _ => {}
        }
    }
}

impl MockComponent for PanelView {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!(" {} ", self.panel.borrow().title());
        let block = Block::default()
            .title(title)
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL);
        self.inner = block.inner(area);
        frame.render_widget(block, area);
        self.scroll = self.scroll.clamp(0, self.max_scroll());

        let mut panel = self.panel.borrow_mut();
        panel.set_viewport(Bounds::new(
            0,
            self.scroll,
            i32::from(self.inner.width),
            i32::from(self.inner.height),
        ));
        let mut canvas = BufferCanvas::new(frame.buffer_mut(), self.inner, self.scroll);
        panel.draw(&mut canvas);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for PanelView {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        match ev {
            Event::Mouse(mouse) => {
                self.on_mouse(mouse);
                None
            }
            Event::Keyboard(key_event) => {
                let busy = {
                    let panel = self.panel.borrow();
                    panel.has_text_focus() || panel.has_open_picker()
                };
                // Text entry and open pickers see every key first
                if !busy && let Some(action) = dispatcher().dispatch(&key_event) {
                    match action {
                        TuiEvent::App(AppEvent::Quit) => return Some(Msg::Quit),
                        TuiEvent::Navigation(NavigationEvent::Up) => {
                            self.scroll_by(-1);
                            return None;
                        }
                        TuiEvent::Navigation(NavigationEvent::Down) => {
                            self.scroll_by(1);
                            return None;
                        }
                        _ => {}
                    }
                }
                let input = key_input(&key_event)?;
                self.panel.borrow_mut().key_typed(input);
                None
            }
            _ => None,
        }
    }
}
