use potioncolorizer::color::{Color, WHITE};
use potioncolorizer::config::ModConfig;
use potioncolorizer::gui::config_line::{LineContext, LineSpec};
use potioncolorizer::gui::{
    Bounds, ConfigLine, DrawList, Drawable, Key, KeyInput, LineRole, LineStyle, Metrics, Point,
};
use potioncolorizer::i18n::LangTable;

const POISON: Color = Color::from_raw(0x00FF00);

fn spec(selected: bool) -> LineSpec {
    LineSpec {
        id: "potion.poison".to_string(),
        name: "Poison".to_string(),
        color: POISON,
        selected,
    }
}

fn line(style: LineStyle, selected: bool, custom: bool) -> ConfigLine {
    ConfigLine::new(Point::new(20, 48), spec(selected), style, custom, &Metrics::gui())
}

fn press(line: &mut ConfigLine, at: Point) -> Option<LineRole> {
    let metrics = Metrics::gui();
    let localizer = LangTable::english();
    let ctx = LineContext {
        viewport: Bounds::new(0, 0, 400, 400),
        metrics: &metrics,
        localizer: &localizer,
    };
    line.mouse_pressed(at, ctx)
}

fn inside(bounds: Bounds) -> Point {
    Point::new(bounds.x + 1, bounds.y + 1)
}

#[test]
fn test_initial_state_follows_selection_and_toggle() {
    let l = line(LineStyle::ColorButton, true, true);
    assert!(l.is_checked());
    assert!(l.is_checkbox_enabled());
    assert!(l.is_widget_enabled());
    assert_eq!(l.color(), POISON);
    assert_eq!(l.label(), "Poison");

    let l = line(LineStyle::ColorButton, false, true);
    assert!(!l.is_checked());
    assert!(l.is_checkbox_enabled());
    assert!(!l.is_widget_enabled());

    let l = line(LineStyle::ColorButton, true, false);
    assert!(!l.is_checked());
    assert!(!l.is_checkbox_enabled());
    assert!(!l.is_widget_enabled());
    assert!(l.is_selected());
}

#[test]
fn test_refresh_off_then_on_restores_the_line() {
    for selected in [false, true] {
        let mut l = line(LineStyle::HexField, selected, true);
        let before = (l.is_checked(), l.is_checkbox_enabled(), l.is_widget_enabled());

        l.refresh(false);
        assert!(!l.is_checked());
        assert!(!l.is_widget_enabled());
        l.refresh(true);

        let after = (l.is_checked(), l.is_checkbox_enabled(), l.is_widget_enabled());
        assert_eq!(before, after);
        assert_eq!(l.color(), POISON);
    }
}

#[test]
fn test_checkbox_press_toggles_selection_and_widget() {
    let mut l = line(LineStyle::ColorButton, false, true);
    let at = inside(l.checkbox_bounds());

    assert_eq!(press(&mut l, at), Some(LineRole::Checkbox));
    assert!(l.is_selected());
    assert!(l.is_checked());
    assert!(l.is_widget_enabled());

    assert_eq!(press(&mut l, at), Some(LineRole::Checkbox));
    assert!(!l.is_selected());
    assert!(!l.is_widget_enabled());
}

#[test]
fn test_disabled_checkbox_ignores_presses() {
    let mut l = line(LineStyle::ColorButton, true, false);
    let at = inside(l.checkbox_bounds());
    assert_eq!(press(&mut l, at), None);
    assert!(l.is_selected());
}

#[test]
fn test_button_press_opens_picker_only_when_enabled() {
    let mut l = line(LineStyle::ColorButton, false, true);
    let at = inside(l.widget_bounds());
    assert_eq!(press(&mut l, at), None);
    assert!(!l.has_open_picker());

    let mut l = line(LineStyle::ColorButton, true, true);
    let at = inside(l.widget_bounds());
    assert_eq!(press(&mut l, at), Some(LineRole::ColorButton));
    assert!(l.has_open_picker());
    assert_eq!(l.picker().map(|p| p.color()), Some(POISON));
}

#[test]
fn test_unchecking_discards_the_open_picker() {
    let mut l = line(LineStyle::ColorButton, true, true);
    let at = inside(l.widget_bounds());
    press(&mut l, at);
    assert!(l.has_open_picker());

    l.refresh(false);
    assert!(!l.has_open_picker());
    assert_eq!(l.color(), POISON);
}

#[test]
fn test_commit_puts_or_removes_the_override() {
    let mut config = ModConfig::default();
    config.overrides.insert("potion.poison".into(), Color::from_raw(0x123456));

    line(LineStyle::ColorButton, true, true).commit(&mut config);
    assert_eq!(config.override_for("potion.poison"), Some(POISON));

    line(LineStyle::ColorButton, false, true).commit(&mut config);
    assert!(!config.has_override("potion.poison"));
}

#[test]
fn test_commit_removes_override_while_custom_colors_are_off() {
    let mut config = ModConfig::default();
    config.overrides.insert("potion.poison".into(), POISON);

    let l = line(LineStyle::HexField, true, false);
    assert!(l.is_selected());
    assert!(!l.is_checked());
    l.commit(&mut config);
    assert!(!config.has_override("potion.poison"));
}

#[test]
fn test_commit_after_toggle_off_and_on_keeps_override() {
    let mut config = ModConfig::default();
    let mut l = line(LineStyle::ColorButton, true, true);
    l.refresh(false);
    l.refresh(true);
    l.commit(&mut config);
    assert_eq!(config.override_for("potion.poison"), Some(POISON));
}

#[test]
fn test_hex_line_edits_color_and_tints_label() {
    let mut l = line(LineStyle::HexField, true, true);
    assert_eq!(l.hex_text(), Some("ff00"));
    let at = inside(l.widget_bounds());
    assert_eq!(press(&mut l, at), Some(LineRole::HexField));
    assert!(l.has_text_focus());

    l.key_typed(Key::End.into());
    for _ in 0..4 {
        l.key_typed(Key::Backspace.into());
    }
    for input in KeyInput::text("ff0000") {
        l.key_typed(input);
    }
    assert_eq!(l.color(), Color::from_raw(0xFF0000));

    let mut list = DrawList::new();
    l.draw(&mut list, Point::default());
    assert_eq!(list.text_color("Poison"), Some(0xFFFF_0000));
}

#[test]
fn test_unchecked_hex_label_is_white() {
    let l = line(LineStyle::HexField, false, true);
    let mut list = DrawList::new();
    l.draw(&mut list, Point::default());
    assert_eq!(list.text_color("Poison"), Some(WHITE.opaque()));
}

#[test]
fn test_press_elsewhere_blurs_hex_field() {
    let mut l = line(LineStyle::HexField, true, true);
    let at = inside(l.widget_bounds());
    press(&mut l, at);
    assert!(l.has_text_focus());
    assert_eq!(press(&mut l, Point::new(390, 390)), None);
    assert!(!l.has_text_focus());
}
