//! The settings panel: global toggles above one line per effect.
//!
//! The controller owns every widget, routes host input to them and, when
//! the panel closes, writes the lines back into the shared configuration.

use super::checkbox::Checkbox;
use super::config_line::{ConfigLine, LineContext, LineRole, LineSpec, LineStyle};
use super::geometry::{Bounds, Point};
use super::input::{Key, KeyInput};
use super::metrics::Metrics;
use super::picker::PickerPart;
use super::render::RenderContext;
use super::widget::{Clickable, Drawable};
use crate::colorizer::{MOD_NAME, SharedColorizer};
use crate::config::{ConfigError, ConfigStore, ModConfig};
use crate::i18n::Localizer;

/// Number of global toggle rows above the effect lines.
pub const TOGGLE_ROWS: i32 = 3;

/// The global toggles, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleId {
    Deglint,
    Recolor,
    CustomColors,
}

impl ToggleId {
    pub const ALL: [ToggleId; 3] = [Self::Deglint, Self::Recolor, Self::CustomColors];

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Deglint => "config.deglint.text",
            Self::Recolor => "config.recolor.text",
            Self::CustomColors => "config.custom.text",
        }
    }

    fn get(self, config: &ModConfig) -> bool {
        match self {
            Self::Deglint => config.deglint,
            Self::Recolor => config.recolor,
            Self::CustomColors => config.custom_colors,
        }
    }

    fn slot(self, config: &mut ModConfig) -> &mut bool {
        match self {
            Self::Deglint => &mut config.deglint,
            Self::Recolor => &mut config.recolor,
            Self::CustomColors => &mut config.custom_colors,
        }
    }
}

/// The control that accepted the current press, if any.
///
/// Only this control hears the matching release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveControl {
    #[default]
    None,
    Toggle(ToggleId),
    Line(usize, LineRole),
    Picker { line: usize, part: PickerPart },
}

/// Controller for the whole panel.
pub struct PanelController {
    colorizer: SharedColorizer,
    store: Box<dyn ConfigStore>,
    localizer: Box<dyn Localizer>,
    metrics: Metrics,
    style: LineStyle,
    viewport: Bounds,
    toggles: Vec<(ToggleId, Checkbox)>,
    lines: Vec<ConfigLine>,
    active: ActiveControl,
    mouse: Point,
}

impl PanelController {
    pub fn new(
        colorizer: SharedColorizer,
        store: Box<dyn ConfigStore>,
        localizer: Box<dyn Localizer>,
        metrics: Metrics,
        style: LineStyle,
        viewport: Bounds,
    ) -> Self {
        Self {
            colorizer,
            store,
            localizer,
            metrics,
            style,
            viewport,
            toggles: Vec::new(),
            lines: Vec::new(),
            active: ActiveControl::None,
            mouse: Point::default(),
        }
    }

    pub fn title(&self) -> String {
        self.localizer
            .translate_with("config.panel.title", &[MOD_NAME])
    }

    /// Height of the laid-out content.
    pub fn content_height(&self) -> i32 {
        self.metrics.line_spacing * (TOGGLE_ROWS + self.lines.len() as i32)
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn viewport(&self) -> Bounds {
        self.viewport
    }

    /// Area pickers are kept inside. Takes effect for pickers opened later.
    pub fn set_viewport(&mut self, viewport: Bounds) {
        self.viewport = viewport;
    }

    pub fn lines(&self) -> &[ConfigLine] {
        &self.lines
    }

    pub fn line(&self, id: &str) -> Option<&ConfigLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn line_index(&self, id: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.id() == id)
    }

    pub fn toggle(&self, id: ToggleId) -> Option<&Checkbox> {
        self.toggles
            .iter()
            .find(|(toggle, _)| *toggle == id)
            .map(|(_, checkbox)| checkbox)
    }

    pub fn active(&self) -> ActiveControl {
        self.active
    }

    pub fn colorizer(&self) -> &SharedColorizer {
        &self.colorizer
    }

    /// Rebuild every widget from the current shared state.
    pub fn on_panel_shown(&mut self) {
        let colorizer = self.colorizer.borrow();
        let config = colorizer.config();
        let metrics = &self.metrics;

        self.toggles = ToggleId::ALL
            .iter()
            .enumerate()
            .map(|(row, &id)| {
                let at = Point::new(metrics.toggle_indent, metrics.line_spacing * row as i32);
                let label = self.localizer.translate(id.label_key());
                let mut checkbox = Checkbox::new(at, Some(label), metrics);
                checkbox.checked = id.get(config);
                (id, checkbox)
            })
            .collect();

        let entries = match colorizer.defaults() {
            Some(defaults) => defaults.entries(),
            None => {
                tracing::warn!("panel shown before default colors were captured");
                &[]
            }
        };
        self.lines = entries
            .iter()
            .enumerate()
            .map(|(row, entry)| {
                let at = Point::new(
                    metrics.line_indent,
                    metrics.line_spacing * (TOGGLE_ROWS + row as i32),
                );
                let spec = LineSpec {
                    id: entry.id.clone(),
                    name: self.localizer.translate(&entry.id),
                    color: config.override_for(&entry.id).unwrap_or(entry.default_color),
                    selected: config.has_override(&entry.id),
                };
                ConfigLine::new(at, spec, self.style, config.custom_colors, metrics)
            })
            .collect();

        self.active = ActiveControl::None;
        tracing::debug!(lines = self.lines.len(), "panel shown");
    }

    /// Commit every line and persist.
    ///
    /// An open picker is discarded first, so its color never reaches the
    /// line. Persistence failures are logged and returned.
    pub fn on_panel_hidden(&mut self) -> Result<(), ConfigError> {
        for line in &mut self.lines {
            line.close_picker();
        }
        self.active = ActiveControl::None;

        let mut colorizer = self.colorizer.borrow_mut();
        for line in &self.lines {
            line.commit(colorizer.config_mut());
        }
        let result = colorizer.write_config(self.store.as_mut());
        match &result {
            Ok(()) => tracing::info!(
                overrides = colorizer.config().overrides.len(),
                "panel closed, configuration saved"
            ),
            Err(e) => tracing::error!("failed to save configuration: {}", e),
        }
        result
    }

    pub fn has_open_picker(&self) -> bool {
        self.lines.iter().any(ConfigLine::has_open_picker)
    }

    /// Whether keyboard input is going into a text field.
    pub fn has_text_focus(&self) -> bool {
        self.lines.iter().any(ConfigLine::has_text_focus)
    }

    pub fn mouse_pressed(&mut self, at: Point) {
        self.mouse = at;

        // An open picker sees the press first; a miss cancels it and the
        // press carries on to the controls underneath, except the button
        // that opened it.
        if let Some(index) = self.lines.iter().position(ConfigLine::has_open_picker) {
            if let Some(part) = self.lines[index].picker_pressed(at) {
                self.active = ActiveControl::Picker { line: index, part };
                return;
            }
            if self.lines[index].widget_bounds().contains(at) {
                self.active = ActiveControl::None;
                return;
            }
        }

        if let Some(id) = self.press_toggle(at) {
            self.active = ActiveControl::Toggle(id);
            return;
        }

        let ctx = LineContext {
            viewport: self.viewport,
            metrics: &self.metrics,
            localizer: self.localizer.as_ref(),
        };
        let mut active = ActiveControl::None;
        for (index, line) in self.lines.iter_mut().enumerate() {
            if let Some(role) = line.mouse_pressed(at, ctx)
                && active == ActiveControl::None
            {
                active = ActiveControl::Line(index, role);
            }
        }
        self.active = active;
    }

    fn press_toggle(&mut self, at: Point) -> Option<ToggleId> {
        let (id, checkbox) = self
            .toggles
            .iter_mut()
            .find(|(_, checkbox)| checkbox.hit(at))?;
        checkbox.on_press(at);

        let mut colorizer = self.colorizer.borrow_mut();
        let slot = id.slot(colorizer.config_mut());
        *slot = !*slot;
        checkbox.checked = *slot;
        let value = *slot;
        tracing::debug!(toggle = ?id, value, "toggled");

        let id = *id;
        if id == ToggleId::CustomColors {
            for line in &mut self.lines {
                line.refresh(value);
            }
        }
        Some(id)
    }

    /// Cursor motion with no button held.
    pub fn mouse_moved(&mut self, at: Point) {
        self.mouse = at;
        self.route_drag(at);
    }

    /// Cursor motion with the button held.
    pub fn mouse_dragged(&mut self, at: Point) {
        self.mouse = at;
        self.route_drag(at);
    }

    fn route_drag(&mut self, at: Point) {
        if let ActiveControl::Picker { line, .. } = self.active
            && let Some(line) = self.lines.get_mut(line)
        {
            line.picker_dragged(at);
        }
    }

    /// Deliver the release to the control that took the press, then
    /// forget it.
    pub fn mouse_released(&mut self, at: Point) {
        self.mouse = at;
        match std::mem::take(&mut self.active) {
            ActiveControl::None => {}
            ActiveControl::Toggle(id) => {
                if let Some((_, checkbox)) = self.toggles.iter_mut().find(|(t, _)| *t == id) {
                    checkbox.on_release(at);
                }
            }
            ActiveControl::Line(_, _) => {}
            ActiveControl::Picker { line, .. } => {
                if let Some(line) = self.lines.get_mut(line) {
                    line.picker_released(at);
                }
            }
        }
    }

    /// Route a key. Returns whether anything used it.
    pub fn key_typed(&mut self, input: KeyInput) -> bool {
        if let Some(line) = self.lines.iter_mut().find(|line| line.has_open_picker()) {
            return line.key_typed(input);
        }
        if input.key == Key::Tab && self.style == LineStyle::HexField {
            self.cycle_text_focus(input.shift);
            return true;
        }
        self.lines.iter_mut().any(|line| line.key_typed(input))
    }

    /// Move focus along the enabled hex fields, passing through "none"
    /// after the last one.
    fn cycle_text_focus(&mut self, reverse: bool) {
        let focusable: Vec<usize> = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.can_take_text_focus())
            .map(|(index, _)| index)
            .collect();
        let current = focusable
            .iter()
            .position(|&index| self.lines[index].has_text_focus());
        let next = match (current, reverse) {
            (None, false) => focusable.first(),
            (None, true) => focusable.last(),
            (Some(pos), false) => focusable.get(pos + 1),
            (Some(pos), true) => pos.checked_sub(1).and_then(|pos| focusable.get(pos)),
        }
        .copied();

        for line in &mut self.lines {
            line.blur();
        }
        if let Some(index) = next {
            self.lines[index].focus_text();
        }
    }

    /// Draw toggles, then lines, then any open picker on top.
    pub fn draw(&self, ctx: &mut dyn RenderContext) {
        let mouse = self.mouse;
        for (_, checkbox) in &self.toggles {
            checkbox.draw(ctx, mouse);
        }
        for line in &self.lines {
            line.draw(ctx, mouse);
        }
        for line in &self.lines {
            line.draw_overlay(ctx, mouse);
        }
    }
}
