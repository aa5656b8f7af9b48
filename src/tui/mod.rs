//! Terminal host for the settings panel.
//!
//! The panel widgets are drawn cell by cell into a ratatui buffer and fed
//! mouse and keyboard events through a single tui-realm component. Leaving
//! the panel commits it, exactly like closing it in a game would.

mod canvas;
mod event;
mod panel_view;

use std::cell::RefCell;
use std::io::{Stdout, stdout};
use std::rc::Rc;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::event::{DisableMouseCapture, EnableMouseCapture},
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tuirealm::{Application, EventListenerCfg, PollStrategy};

use crate::colorizer::SharedColorizer;
use crate::config::ConfigStore;
use crate::gui::{Bounds, LineStyle, Metrics, PanelController};
use crate::i18n::Localizer;

pub use canvas::BufferCanvas;
pub use event::{UserEvent, dispatcher, key_input};
pub use panel_view::{PanelView, SharedPanel};

/// Component identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Panel,
}

/// Messages bubbled up from the panel component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Quit,
}

const FOOTER: &str = " click: toggle/open  drag: pick  tab: next field  enter/esc: ok/cancel  q: quit ";

/// Run the panel until the user quits, then commit and save it.
pub fn run(
    colorizer: SharedColorizer,
    store: Box<dyn ConfigStore>,
    localizer: Box<dyn Localizer>,
    style: LineStyle,
) -> Result<()> {
    let panel = Rc::new(RefCell::new(PanelController::new(
        colorizer,
        store,
        localizer,
        Metrics::terminal(),
        style,
        Bounds::default(),
    )));
    panel.borrow_mut().on_panel_shown();

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = event_loop(&mut terminal, Rc::clone(&panel));

    // Cleanup terminal
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result?;
    panel
        .borrow_mut()
        .on_panel_hidden()
        .wrap_err("Failed to save configuration")
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, panel: SharedPanel) -> Result<()> {
    let mut app: Application<Id, Msg, UserEvent> = Application::init(
        EventListenerCfg::default()
            .crossterm_input_listener(Duration::from_millis(20), 10)
            .poll_timeout(Duration::from_millis(50)),
    );
    app.mount(Id::Panel, Box::new(PanelView::new(panel)), vec![])?;
    app.active(&Id::Panel)?;

    loop {
        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(frame.area());
            app.view(&Id::Panel, frame, rows[0]);
            let footer = Paragraph::new(FOOTER).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(footer, rows[1]);
        })?;

        // Use tick() - the canonical tui-realm heartbeat
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                if messages.contains(&Msg::Quit) {
                    tracing::debug!("quit requested");
                    return Ok(());
                }
            }
            Err(_) => {
                // Timeout is fine, just continue
            }
        }
    }
}
