//! Potion color overrides with an interactive HSB picker panel.
//!
//! The library holds the color model, the persisted configuration, the
//! application state behind the render hooks, and a host-agnostic widget
//! engine for the settings panel. The binary adds a report mode and a
//! terminal host for the panel.

pub mod catalog;
pub mod cli;
pub mod color;
pub mod colorizer;
pub mod config;
pub mod gui;
pub mod i18n;
pub mod logging;
pub mod report;
pub mod tui;
