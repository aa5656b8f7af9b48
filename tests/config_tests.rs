use potioncolorizer::color::Color;
use potioncolorizer::config::{ConfigOverrides, ConfigStore, FileConfigStore, ModConfig};

#[test]
fn test_default_config() {
    let config = ModConfig::default();
    assert!(!config.deglint);
    assert!(config.recolor);
    assert!(!config.custom_colors);
    assert!(config.overrides.is_empty());
}

#[test]
fn test_parse_toml() {
    let toml_str = r#"
deglint_potions = true
recolor_potions = false
custom_colors_enabled = true

[custom_potion_colors]
"potion.poison" = 65280
"potion.moveSpeed" = 11259375
"#;

    let config: ModConfig = toml::from_str(toml_str).unwrap();
    assert!(config.deglint);
    assert!(!config.recolor);
    assert!(config.custom_colors);
    assert_eq!(config.override_for("potion.poison"), Some(Color::from_raw(0x00FF00)));
    assert_eq!(
        config.override_for("potion.moveSpeed"),
        Some(Color::from_raw(0xABCDEF))
    );
}

#[test]
fn test_parse_json() {
    let json = r#"{
        "deglint_potions": false,
        "custom_colors_enabled": true,
        "custom_potion_colors": { "potion.heal": 16711680 }
    }"#;

    let config: ModConfig = serde_json::from_str(json).unwrap();
    assert!(config.recolor, "missing keys fall back to defaults");
    assert!(config.custom_colors);
    assert_eq!(config.override_for("potion.heal"), Some(Color::from_raw(0xFF0000)));
}

#[test]
fn test_negative_colors_floor_to_black() {
    let config: ModConfig = toml::from_str(
        r#"
[custom_potion_colors]
"potion.harm" = -5
"#,
    )
    .unwrap();
    assert_eq!(config.override_for("potion.harm"), Some(Color::from_raw(0)));
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["colors.toml", "colors.json"] {
        let path = dir.path().join(name);
        let mut config = ModConfig {
            deglint: true,
            ..ModConfig::default()
        };
        config
            .overrides
            .insert("potion.poison".to_string(), Color::from_raw(0x00FF00));

        config.save(&path).unwrap();
        let loaded = ModConfig::load(&path).unwrap();
        assert_eq!(loaded, config, "{name}");
    }
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ModConfig::load(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_layered_load_without_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config =
        ModConfig::load_layered(&dir.path().join("absent.toml"), &ConfigOverrides::default())
            .unwrap();
    assert_eq!(config, ModConfig::default());
}

#[test]
fn test_layered_overrides_win_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colors.toml");
    std::fs::write(
        &path,
        r#"
deglint_potions = true
custom_colors_enabled = false

[custom_potion_colors]
"potion.poison" = 65280
"#,
    )
    .unwrap();

    let overrides = ConfigOverrides {
        custom_colors: Some(true),
        ..ConfigOverrides::default()
    };
    let config = ModConfig::load_layered(&path, &overrides).unwrap();
    assert!(config.deglint, "unset overrides keep the file value");
    assert!(config.custom_colors);
    assert_eq!(config.override_for("potion.poison"), Some(Color::from_raw(0x00FF00)));
}

#[test]
fn test_layered_load_reports_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colors.toml");
    std::fs::write(&path, "deglint_potions = \"sometimes\"\n").unwrap();
    assert!(ModConfig::load_layered(&path, &ConfigOverrides::default()).is_err());
}

#[test]
fn test_file_store_writes_full_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested.toml");
    let mut store = FileConfigStore::new(&path);
    assert_eq!(store.path(), path.as_path());

    let mut config = ModConfig::default();
    config
        .overrides
        .insert("potion.wither".to_string(), Color::from_raw(0x123456));
    store.save(&config).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("recolor_potions = true"));
    assert!(text.contains("[custom_potion_colors]"));
    assert_eq!(ModConfig::load(&path).unwrap(), config);
}
