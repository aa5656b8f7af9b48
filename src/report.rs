//! Serializable summary of the effective colors.

use serde::Serialize;

use crate::colorizer::Colorizer;
use crate::i18n::Localizer;

/// One effect's colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectReport {
    pub id: String,
    pub name: String,
    pub default_color: String,
    pub active_color: String,
    /// An override is stored, whether or not it is currently applied
    pub overridden: bool,
}

/// Toggle state plus every captured effect, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub deglint_potions: bool,
    pub recolor_potions: bool,
    pub custom_colors_enabled: bool,
    pub effects: Vec<EffectReport>,
}

impl Report {
    pub fn build(colorizer: &Colorizer, localizer: &dyn Localizer) -> Self {
        let config = colorizer.config();
        let effects = colorizer
            .defaults()
            .map(|defaults| defaults.entries())
            .unwrap_or_default()
            .iter()
            .map(|entry| {
                let active = colorizer
                    .active_color(&entry.id)
                    .unwrap_or(entry.default_color);
                EffectReport {
                    id: entry.id.clone(),
                    name: localizer.translate(&entry.id),
                    default_color: entry.default_color.to_string(),
                    active_color: active.to_string(),
                    overridden: config.has_override(&entry.id),
                }
            })
            .collect();

        Self {
            deglint_potions: config.deglint,
            recolor_potions: config.recolor,
            custom_colors_enabled: config.custom_colors,
            effects,
        }
    }
}
