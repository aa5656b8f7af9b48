//! Application state shared by the configuration panel and the render hooks.
//!
//! The host constructs one [`Colorizer`] during its own setup and hands it to
//! whoever needs it; nothing here is global.

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use crate::catalog::{DefaultColorTable, EffectCatalog};
use crate::color::Color;
use crate::config::{ConfigError, ConfigStore, ModConfig};

/// Human-readable mod name.
pub const MOD_NAME: &str = "PotionColorizer";

/// Mod version string.
pub const MOD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Color of an item with no effects.
pub const WATER_COLOR: Color = Color::from_raw(0x38_5DC6);

/// Render pass whose color is replaced by the recolor hook.
pub const RECOLOR_PASS: u32 = 0;

/// Handle shared between the panel and the hook adapter.
pub type SharedColorizer = Rc<RefCell<Colorizer>>;

/// Failure while talking to the host's effect color storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The host has no effect with this identifier
    UnknownEffect(String),
    /// The host refused the write
    Rejected(String),
}

impl std::fmt::Display for AdapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEffect(id) => write!(f, "unknown effect: {}", id),
            Self::Rejected(reason) => write!(f, "color write rejected: {}", reason),
        }
    }
}

impl std::error::Error for AdapterError {}

/// Binding to the host's per-effect color storage.
pub trait EffectColorAdapter {
    fn color(&self, id: &str) -> Result<Color, AdapterError>;
    fn set_color(&mut self, id: &str, color: Color) -> Result<(), AdapterError>;
}

/// One effect applied to an item, for color blending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEffect {
    pub id: String,
    /// Zero-based amplifier; level II is `1`.
    pub amplifier: u32,
}

impl AppliedEffect {
    pub fn new(id: impl Into<String>, amplifier: u32) -> Self {
        Self {
            id: id.into(),
            amplifier,
        }
    }
}

/// The mod's application state.
pub struct Colorizer {
    config: ModConfig,
    defaults: OnceCell<DefaultColorTable>,
    adapter: Box<dyn EffectColorAdapter>,
}

impl Colorizer {
    pub fn new(config: ModConfig, adapter: Box<dyn EffectColorAdapter>) -> Self {
        Self {
            config,
            defaults: OnceCell::new(),
            adapter,
        }
    }

    /// Wrap in the shared handle used by the panel.
    pub fn into_shared(self) -> SharedColorizer {
        Rc::new(RefCell::new(self))
    }

    pub fn config(&self) -> &ModConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ModConfig {
        &mut self.config
    }

    /// Captured default colors, once the host has finished initializing.
    pub fn defaults(&self) -> Option<&DefaultColorTable> {
        self.defaults.get()
    }

    /// Called once the host's effect catalog is fully populated.
    ///
    /// Captures the default color table on the first call and applies the
    /// configured colors. A repeated call keeps the first snapshot.
    pub fn on_init_completed(&mut self, catalog: &dyn EffectCatalog) {
        if self.defaults.get().is_some() {
            tracing::error!("default effect colors were already captured; keeping the first snapshot");
        } else {
            let table = self
                .defaults
                .get_or_init(|| DefaultColorTable::capture(catalog));
            tracing::info!("saved {} default effect colors", table.len());
        }
        self.apply_colors();
    }

    /// The color currently in effect for an identifier.
    ///
    /// The override wins only while custom colors are enabled.
    pub fn active_color(&self, id: &str) -> Option<Color> {
        if self.config.custom_colors
            && let Some(color) = self.config.override_for(id)
        {
            return Some(color);
        }
        self.defaults().and_then(|d| d.get(id))
    }

    /// Hook: should a potion item render its glint?
    pub fn has_glint(&self, computed: bool) -> bool {
        if self.config.deglint { false } else { computed }
    }

    /// Hook: color of a potion item for one render pass.
    ///
    /// Only [`RECOLOR_PASS`] is replaced, and only while recoloring is on.
    pub fn item_color(&self, effects: &[AppliedEffect], pass: u32, computed: Color) -> Color {
        if self.config.recolor && pass == RECOLOR_PASS {
            self.liquid_color(effects)
        } else {
            computed
        }
    }

    /// Blend the active colors of an item's effects.
    ///
    /// Each effect counts `amplifier + 1` times. Unknown identifiers are
    /// skipped; an item with nothing left is water-colored.
    pub fn liquid_color(&self, effects: &[AppliedEffect]) -> Color {
        let weighted = effects.iter().filter_map(|effect| {
            let color = self.active_color(&effect.id)?;
            Some((color, effect.amplifier))
        });
        blend_colors(weighted)
    }

    /// Push every effect's active color into the host.
    ///
    /// Host failures are logged and the effect is left unchanged.
    pub fn apply_colors(&mut self) {
        let Some(defaults) = self.defaults.get() else {
            tracing::warn!("default colors not captured yet; skipping color application");
            return;
        };

        let mut applied = 0usize;
        for entry in defaults.entries() {
            let wanted = match self.config.override_for(&entry.id) {
                Some(color) if self.config.custom_colors => color,
                _ => entry.default_color,
            };

            let current = match self.adapter.color(&entry.id) {
                Ok(color) => color,
                Err(e) => {
                    tracing::error!(id = %entry.id, "failed to read effect color: {}", e);
                    continue;
                }
            };
            if current == wanted {
                continue;
            }

            match self.adapter.set_color(&entry.id, wanted) {
                Ok(()) => applied += 1,
                Err(e) => tracing::error!(id = %entry.id, "failed to set effect color: {}", e),
            }
        }
        tracing::debug!(applied, "applied effect colors");
    }

    /// Apply colors to the host, then persist the configuration.
    pub fn write_config(&mut self, store: &mut dyn ConfigStore) -> Result<(), ConfigError> {
        self.apply_colors();
        store.save(&self.config)
    }

    /// Adapter access for hosts that also render through it.
    pub fn adapter(&self) -> &dyn EffectColorAdapter {
        self.adapter.as_ref()
    }
}

/// Average colors in linear `[0, 1]` channel space with repeat weights.
pub fn blend_colors(colors: impl IntoIterator<Item = (Color, u32)>) -> Color {
    let mut red = 0.0f32;
    let mut green = 0.0f32;
    let mut blue = 0.0f32;
    let mut count = 0.0f32;

    for (color, amplifier) in colors {
        let weight = amplifier as f32 + 1.0;
        red += weight * f32::from(color.red()) / 255.0;
        green += weight * f32::from(color.green()) / 255.0;
        blue += weight * f32::from(color.blue()) / 255.0;
        count += weight;
    }

    if count == 0.0 {
        return WATER_COLOR;
    }

    let channel = |sum: f32| ((sum / count) * 255.0) as u8;
    Color::from_rgb(channel(red), channel(green), channel(blue))
}

/// In-memory color storage standing in for a host engine.
#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    colors: std::collections::HashMap<String, Color>,
}

impl ColorRegistry {
    /// Seed the registry with every effect's default color.
    pub fn from_catalog(catalog: &dyn EffectCatalog) -> Self {
        let colors = catalog
            .effects()
            .into_iter()
            .map(|entry| (entry.id, entry.default_color))
            .collect();
        Self { colors }
    }
}

impl EffectColorAdapter for ColorRegistry {
    fn color(&self, id: &str) -> Result<Color, AdapterError> {
        self.colors
            .get(id)
            .copied()
            .ok_or_else(|| AdapterError::UnknownEffect(id.to_string()))
    }

    fn set_color(&mut self, id: &str, color: Color) -> Result<(), AdapterError> {
        match self.colors.get_mut(id) {
            Some(slot) => {
                *slot = color;
                Ok(())
            }
            None => Err(AdapterError::UnknownEffect(id.to_string())),
        }
    }
}
