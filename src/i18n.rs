//! Localization lookup for panel text and effect names.

use std::collections::HashMap;

/// English strings shipped with the crate.
pub const EN_US: &str = include_str!("../assets/lang/en_US.lang");

/// Resolves stable keys to user-facing text.
pub trait Localizer {
    /// Translate `key`, substituting each `%s` with the next argument.
    ///
    /// Unknown keys are returned verbatim.
    fn translate_with(&self, key: &str, args: &[&str]) -> String;

    fn translate(&self, key: &str) -> String {
        self.translate_with(key, &[])
    }
}

/// Key/value table in `.lang` format (`key=value`, `#` comments).
#[derive(Debug, Clone, Default)]
pub struct LangTable {
    entries: HashMap<String, String>,
}

impl LangTable {
    /// The embedded English table.
    pub fn english() -> Self {
        Self::parse(EN_US)
    }

    /// Parse `.lang` text. Malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.to_string()))
            .collect();
        Self { entries }
    }

    /// Layer another table on top of this one.
    pub fn extend(&mut self, other: LangTable) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for LangTable {
    fn translate_with(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.entries.get(key) else {
            return key.to_string();
        };
        format_args_into(template, args)
    }
}

/// Replace `%s` placeholders in order. Surplus placeholders stay as-is.
fn format_args_into(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("%s") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("%s"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
