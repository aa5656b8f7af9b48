use approx::assert_relative_eq;
use potioncolorizer::color::{Color, hsb_to_rgb};
use potioncolorizer::gui::{
    Bounds, ColorPicker, DialogResult, Key, KeyInput, Metrics, PickerPart, Point,
};
use potioncolorizer::i18n::LangTable;

const VIEWPORT: Bounds = Bounds::new(0, 0, 400, 300);

fn open(color: Color) -> ColorPicker {
    ColorPicker::open(
        Point::new(0, 0),
        VIEWPORT,
        color,
        &Metrics::gui(),
        &LangTable::english(),
    )
}

fn center(bounds: Bounds) -> Point {
    Point::new(bounds.x + bounds.width / 2, bounds.y + bounds.height / 2)
}

fn assert_channels_match(picker: &ColorPicker) {
    let hsb = picker.hsb();
    let (r, g, b) = hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness);
    assert_eq!(picker.channel_text(0), r.to_string());
    assert_eq!(picker.channel_text(1), g.to_string());
    assert_eq!(picker.channel_text(2), b.to_string());
    assert_eq!(picker.color(), Color::from_rgb(r, g, b));
}

#[test]
fn test_opens_with_color_and_no_result() {
    let picker = open(Color::from_rgb(0, 0, 200));
    assert_eq!(picker.result(), DialogResult::None);
    assert_eq!(picker.color(), Color::from_rgb(0, 0, 200));
    assert_eq!(picker.channel_text(2), "200");
    assert!(!picker.is_dragging());
}

#[test]
fn test_press_at_plane_top_left_picks_red_hue_full_saturation() {
    let mut picker = open(Color::from_rgb(0, 0, 200));
    let brightness = picker.hsb().brightness;
    let plane = picker.layout().plane;

    assert!(picker.mouse_pressed(plane.origin()));
    assert!(picker.is_dragging());
    let hsb = picker.hsb();
    assert_relative_eq!(hsb.hue, 0.0);
    assert_relative_eq!(hsb.saturation, 1.0);
    assert_relative_eq!(hsb.brightness, brightness);
    assert_channels_match(&picker);
    assert_eq!(picker.color(), Color::from_rgb(200, 0, 0));
}

#[test]
fn test_drag_outside_the_plane_is_clamped() {
    let mut picker = open(Color::from_rgb(30, 60, 90));
    let plane = picker.layout().plane;
    picker.mouse_pressed(center(plane));

    picker.mouse_dragged(Point::new(-50, 500));
    assert_relative_eq!(picker.hsb().hue, 0.0);
    assert_relative_eq!(picker.hsb().saturation, 0.0);

    picker.mouse_dragged(Point::new(1000, -40));
    assert_relative_eq!(picker.hsb().hue, 1.0);
    assert_relative_eq!(picker.hsb().saturation, 1.0);
    assert_channels_match(&picker);
}

#[test]
fn test_brightness_bar_maps_top_to_full() {
    let mut picker = open(Color::from_rgb(255, 0, 0));
    let bar = picker.layout().bar;

    picker.mouse_pressed(Point::new(bar.x + 1, bar.y));
    assert_relative_eq!(picker.hsb().brightness, 1.0);

    picker.mouse_dragged(Point::new(bar.x + 1, bar.bottom() + 20));
    assert_relative_eq!(picker.hsb().brightness, 0.0);
    assert_eq!(picker.color(), Color::from_rgb(0, 0, 0));
    assert_eq!(picker.channel_text(0), "0");
}

#[test]
fn test_release_ends_the_drag() {
    let mut picker = open(Color::from_rgb(10, 200, 10));
    let plane = picker.layout().plane;
    picker.mouse_pressed(plane.origin());
    picker.mouse_released(Point::new(900, 900));
    assert!(!picker.is_dragging());

    let before = picker.hsb();
    picker.mouse_dragged(center(plane));
    assert_eq!(picker.hsb(), before);
}

#[test]
fn test_press_outside_cancels() {
    let mut picker = open(Color::from_rgb(1, 2, 3));
    let outside = Point::new(picker.bounds().right() + 5, 5);
    assert!(!picker.mouse_pressed(outside));
    assert_eq!(picker.result(), DialogResult::Cancel);
    assert_eq!(picker.color(), Color::from_rgb(1, 2, 3));
}

#[test]
fn test_ok_and_cancel_buttons_report_results() {
    let mut picker = open(Color::from_rgb(1, 2, 3));
    let ok = center(picker.layout().ok);
    assert_eq!(picker.part_at(ok), Some(PickerPart::Ok));
    assert!(picker.mouse_pressed(ok));
    assert_eq!(picker.result(), DialogResult::Ok);

    let mut picker = open(Color::from_rgb(1, 2, 3));
    let cancel = center(picker.layout().cancel);
    assert_eq!(picker.part_at(cancel), Some(PickerPart::Cancel));
    picker.mouse_pressed(cancel);
    assert_eq!(picker.result(), DialogResult::Cancel);
}

#[test]
fn test_enter_confirms_and_escape_cancels() {
    let mut picker = open(Color::from_rgb(1, 2, 3));
    picker.key_typed(Key::Enter.into());
    assert_eq!(picker.result(), DialogResult::Ok);

    let mut picker = open(Color::from_rgb(1, 2, 3));
    picker.key_typed(Key::Escape.into());
    assert_eq!(picker.result(), DialogResult::Cancel);
}

#[test]
fn test_typing_in_a_channel_updates_color_and_hsb() {
    let mut picker = open(Color::from_rgb(0, 0, 0));
    let green = picker.layout().fields[1];
    assert_eq!(picker.part_at(green.offset(2, 2)), Some(PickerPart::Channel(1)));
    picker.mouse_pressed(green.offset(2, 2));
    assert!(picker.has_text_focus());

    picker.key_typed(Key::End.into());
    picker.key_typed(Key::Backspace.into());
    for input in KeyInput::text("255") {
        picker.key_typed(input);
    }
    assert_eq!(picker.color(), Color::from_rgb(0, 255, 0));
    assert_relative_eq!(picker.hsb().hue, 1.0 / 3.0, epsilon = 1e-4);
    assert_eq!(picker.result(), DialogResult::None);
}

#[test]
fn test_opens_clamped_inside_the_viewport() {
    let metrics = Metrics::gui();
    let localizer = LangTable::english();
    let picker = ColorPicker::open(
        Point::new(300, 250),
        VIEWPORT,
        Color::from_rgb(0, 0, 0),
        &metrics,
        &localizer,
    );
    let bounds = picker.bounds();
    assert_eq!(bounds.right(), VIEWPORT.right());
    assert_eq!(bounds.bottom(), VIEWPORT.bottom());
    assert_eq!(bounds.width, metrics.picker.width);
}

#[test]
fn test_oversized_picker_keeps_top_left_in_view() {
    let picker = ColorPicker::open(
        Point::new(50, 50),
        Bounds::new(0, 0, 100, 100),
        Color::from_rgb(0, 0, 0),
        &Metrics::gui(),
        &LangTable::english(),
    );
    assert_eq!(picker.bounds().origin(), Point::new(0, 0));
}
