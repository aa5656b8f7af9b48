use potioncolorizer::color::{Color, WHITE};
use potioncolorizer::gui::channel_fields::{ChannelFields, parse_channel};
use potioncolorizer::gui::hex_field::HexColorField;
use potioncolorizer::gui::text_field::{InputFilter, TextField};
use potioncolorizer::gui::{Clickable, Focusable, Key, KeyInput, Metrics, Point};

fn type_text(field: &mut HexColorField, text: &str) {
    for input in KeyInput::text(text) {
        field.key_typed(input);
    }
}

fn channels(color: Color) -> ChannelFields {
    let metrics = Metrics::gui();
    let positions = [Point::new(0, 0), Point::new(0, 20), Point::new(0, 40)];
    ChannelFields::new(positions, metrics.picker.field, &metrics, color)
}

fn clear_focused(fields: &mut ChannelFields) {
    fields.key_typed(Key::End.into());
    for _ in 0..3 {
        fields.key_typed(Key::Backspace.into());
    }
}

#[test]
fn test_hex_field_drops_non_hex_characters() {
    let metrics = Metrics::gui();
    let mut field = HexColorField::new(Point::new(0, 0), Color::from_int(0), &metrics);
    field.set_focused(true);
    field.key_typed(Key::Backspace.into());

    type_text(&mut field, "x1g2-A!b");
    assert_eq!(field.text(), "12Ab");
    assert_eq!(field.color(), Color::from_int(0x12AB));
}

#[test]
fn test_hex_field_stops_at_six_digits() {
    let metrics = Metrics::gui();
    let mut field = HexColorField::new(Point::new(0, 0), Color::from_int(0), &metrics);
    field.set_focused(true);
    field.key_typed(Key::Backspace.into());

    type_text(&mut field, "abcdef12");
    assert_eq!(field.text(), "abcdef");
    assert_eq!(field.color(), Color::from_int(0xABCDEF));
}

#[test]
fn test_hex_field_starts_from_color_text() {
    let metrics = Metrics::gui();
    let field = HexColorField::new(Point::new(0, 0), Color::from_int(0x00FF00), &metrics);
    assert_eq!(field.text(), "ff00");
    assert_eq!(field.color(), Color::from_int(0x00FF00));
}

#[test]
fn test_hex_field_empty_text_is_black() {
    let metrics = Metrics::gui();
    let mut field = HexColorField::new(Point::new(0, 0), Color::from_int(0xF), &metrics);
    field.set_focused(true);
    field.key_typed(Key::Backspace.into());
    assert_eq!(field.text(), "");
    assert_eq!(field.color(), Color::from_int(0));
}

#[test]
fn test_disabled_hex_field_ignores_clicks_and_keys() {
    let metrics = Metrics::gui();
    let mut field = HexColorField::new(Point::new(10, 10), WHITE, &metrics);
    field.set_enabled(false);

    assert!(!field.on_press(Point::new(12, 12)));
    assert!(!field.is_focused());
    assert!(!field.key_typed(KeyInput::char('a')));
    assert_eq!(field.text(), "ffffff");
}

#[test]
fn test_click_focuses_and_click_elsewhere_blurs() {
    let metrics = Metrics::gui();
    let mut field = TextField::new(
        Point::new(10, 10),
        metrics.hex_field,
        &metrics,
        InputFilter::Hex,
        6,
    );
    assert!(field.on_press(Point::new(15, 12)));
    assert!(field.is_focused());
    assert!(!field.on_press(Point::new(100, 100)));
    assert!(!field.is_focused());
}

#[test]
fn test_cursor_editing_keys() {
    let metrics = Metrics::gui();
    let mut field = TextField::new(
        Point::new(0, 0),
        metrics.hex_field,
        &metrics,
        InputFilter::Decimal,
        3,
    );
    field.set_focused(true);
    field.set_text("123");

    field.key_typed(Key::Home.into());
    field.key_typed(Key::Delete.into());
    assert_eq!(field.text(), "23");
    field.key_typed(Key::End.into());
    field.key_typed(Key::Left.into());
    field.key_typed(Key::Backspace.into());
    assert_eq!(field.text(), "3");
    assert_eq!(field.cursor(), 0);
}

#[test]
fn test_parse_channel_fallbacks() {
    assert_eq!(parse_channel("", 77), 0);
    assert_eq!(parse_channel("12", 77), 12);
    assert_eq!(parse_channel("999", 77), 255);
    assert_eq!(parse_channel("abc", 77), 77);
    assert_eq!(parse_channel("-5", 77), 0);
}

#[test]
fn test_channel_fields_start_from_color() {
    let fields = channels(Color::from_rgb(1, 22, 255));
    assert_eq!(fields.text(0), "1");
    assert_eq!(fields.text(1), "22");
    assert_eq!(fields.text(2), "255");
}

#[test]
fn test_channel_edit_recomputes_color() {
    let mut fields = channels(Color::from_rgb(10, 20, 30));
    fields.focus(Some(1));
    clear_focused(&mut fields);
    assert_eq!(fields.color(), Color::from_rgb(10, 0, 30));
    assert_eq!(fields.text(1), "", "empty field stays empty while typing");

    for input in KeyInput::text("200") {
        fields.key_typed(input);
    }
    assert_eq!(fields.color(), Color::from_rgb(10, 200, 30));
    assert_eq!(fields.text(1), "200");
}

#[test]
fn test_channel_over_range_is_clamped_and_rewritten() {
    let mut fields = channels(Color::from_rgb(10, 20, 30));
    fields.focus(Some(0));
    clear_focused(&mut fields);
    for input in KeyInput::text("999") {
        fields.key_typed(input);
    }
    assert_eq!(fields.color(), Color::from_rgb(255, 20, 30));
    assert_eq!(fields.text(0), "255");
}

#[test]
fn test_tab_cycles_through_fields_and_none() {
    let mut fields = channels(WHITE);
    assert_eq!(fields.focused(), None);

    let tab = KeyInput::from(Key::Tab);
    let mut seen = Vec::new();
    for _ in 0..5 {
        fields.key_typed(tab);
        seen.push(fields.focused());
    }
    assert_eq!(seen, vec![Some(0), Some(1), Some(2), None, Some(0)]);

    fields.key_typed(KeyInput::shifted(Key::Tab));
    assert_eq!(fields.focused(), None);
    fields.key_typed(KeyInput::shifted(Key::Tab));
    assert_eq!(fields.focused(), Some(2));
}

#[test]
fn test_keys_without_focus_change_nothing() {
    let mut fields = channels(Color::from_rgb(1, 2, 3));
    assert!(!fields.key_typed(KeyInput::char('9')));
    assert_eq!(fields.color(), Color::from_rgb(1, 2, 3));
}
