//! Effect catalog and the captured table of default colors.

use std::collections::HashMap;

use crate::color::Color;

/// One selectable effect as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectEntry {
    /// Stable identifier, doubling as the localization key.
    pub id: String,
    /// The host's color for this effect at capture time.
    pub default_color: Color,
}

impl EffectEntry {
    pub fn new(id: impl Into<String>, default_color: Color) -> Self {
        Self {
            id: id.into(),
            default_color,
        }
    }
}

/// Order-stable enumeration of the host's effects.
pub trait EffectCatalog {
    fn effects(&self) -> Vec<EffectEntry>;
}

/// Vanilla potion effects with their stock liquid colors.
///
/// Jump boost carries `2293580` instead of the stock value, which renders
/// almost identically to night vision.
const VANILLA_EFFECTS: &[(&str, u32)] = &[
    ("potion.moveSpeed", 8_171_462),
    ("potion.moveSlowdown", 5_926_017),
    ("potion.digSpeed", 14_270_531),
    ("potion.digSlowDown", 4_866_583),
    ("potion.damageBoost", 9_643_043),
    ("potion.heal", 16_262_179),
    ("potion.harm", 4_393_481),
    ("potion.jump", 2_293_580),
    ("potion.confusion", 5_578_058),
    ("potion.regeneration", 13_458_603),
    ("potion.resistance", 10_044_730),
    ("potion.fireResistance", 14_981_690),
    ("potion.waterBreathing", 3_035_801),
    ("potion.invisibility", 8_356_754),
    ("potion.blindness", 2_039_587),
    ("potion.nightVision", 2_039_713),
    ("potion.hunger", 5_797_459),
    ("potion.weakness", 4_738_376),
    ("potion.poison", 5_149_489),
    ("potion.wither", 3_484_199),
    ("potion.healthBoost", 16_284_963),
    ("potion.absorption", 2_445_989),
    ("potion.saturation", 16_262_179),
];

/// Built-in catalog of the vanilla potion effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct VanillaCatalog;

impl EffectCatalog for VanillaCatalog {
    fn effects(&self) -> Vec<EffectEntry> {
        VANILLA_EFFECTS
            .iter()
            .map(|&(id, color)| EffectEntry::new(id, Color::from_raw(color)))
            .collect()
    }
}

/// Catalog backed by a fixed list, for hosts that enumerate effects up front.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<EffectEntry>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<EffectEntry>) -> Self {
        Self { entries }
    }
}

impl EffectCatalog for StaticCatalog {
    fn effects(&self) -> Vec<EffectEntry> {
        self.entries.clone()
    }
}

/// Immutable snapshot of the host's original effect colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultColorTable {
    entries: Vec<EffectEntry>,
    index: HashMap<String, usize>,
}

impl DefaultColorTable {
    /// Snapshot every effect the catalog currently reports.
    ///
    /// Later duplicates of an identifier are ignored.
    pub fn capture(catalog: &dyn EffectCatalog) -> Self {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        for entry in catalog.effects() {
            if index.contains_key(&entry.id) {
                tracing::warn!(id = %entry.id, "duplicate effect identifier in catalog");
                continue;
            }
            index.insert(entry.id.clone(), entries.len());
            entries.push(entry);
        }
        Self { entries, index }
    }

    /// Default color for an identifier.
    pub fn get(&self, id: &str) -> Option<Color> {
        self.index.get(id).map(|&i| self.entries[i].default_color)
    }

    /// Effects in catalog order.
    pub fn entries(&self) -> &[EffectEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
