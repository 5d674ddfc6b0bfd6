// Page layout knowledge: element ids, panel visibility and the strings written
// into style/transform attributes. Kept free of web-sys so host tests can
// include it directly.

use glam::Vec2;
use theremin_core::{Control, View};

pub const TARGET_ID: &str = "note";
pub const PUPILS_SELECTOR: &str = "#face svg #pupils";
pub const PROGRESS_ID: &str = "progress";
pub const WELCOME_ID: &str = "welcome";
pub const CALIBRATION_ID: &str = "calibration";
pub const PLAY_ID: &str = "play";
pub const PLAY_PAUSE_ID: &str = "playpause";
pub const MODE_SWITCH_ID: &str = "mousegaze";

// Optional override of the number of calibration clicks, on #calibration
pub const REQUIRED_CLICKS_ATTR: &str = "data-required-clicks";

#[inline]
pub fn control_id(control: Control) -> &'static str {
    match control {
        Control::PlayPause => PLAY_PAUSE_ID,
        Control::InputMode => MODE_SWITCH_ID,
    }
}

/// CSS `display` value for each panel while `view` is active.
pub fn view_display(view: View) -> [(&'static str, &'static str); 3] {
    match view {
        View::Welcome => [(WELCOME_ID, ""), (CALIBRATION_ID, "none"), (PLAY_ID, "none")],
        View::Calibrating => [
            (WELCOME_ID, "none"),
            (CALIBRATION_ID, "flex"),
            (PLAY_ID, "none"),
        ],
        View::Ready => [
            (WELCOME_ID, "none"),
            (CALIBRATION_ID, "none"),
            (PLAY_ID, "flex"),
        ],
    }
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

#[inline]
pub fn pupil_transform(offset: Vec2) -> String {
    format!("translate({},{})", offset.x, offset.y)
}

/// Width of the progress bar inside a container `container_width` wide.
#[inline]
pub fn progress_width(fraction: f32, container_width: f32) -> f32 {
    fraction.clamp(0.0, 1.0) * container_width
}

pub fn parse_required_clicks(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
