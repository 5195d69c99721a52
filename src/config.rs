use log::Level;

use crate::slider::controller::OscillationConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Idle oscillation of the before/after divider.
pub const SLIDER_OSCILLATION: OscillationConfig = OscillationConfig {
    center: 50.0,
    amplitude: 15.0,
    phase_step: 0.02,
};

pub const SLIDER_BEFORE_SRC: &str = "/assets/before.png";
pub const SLIDER_AFTER_SRC: &str = "/assets/after.png";

// Preloader timeline, seconds
pub const PRELOADER_COUNT_SECS: f64 = 2.0;
pub const PRELOADER_TEXT_START_SECS: f64 = 0.3;
pub const PRELOADER_TEXT_STAGGER_SECS: f64 = 0.08;
pub const PRELOADER_CHAR_RISE_SECS: f64 = 0.5;
pub const PRELOADER_REVEAL_START_SECS: f64 = 2.5;
pub const PRELOADER_REVEAL_SECS: f64 = 0.8;

/// Hero heading waits for the preloader to slide away.
pub const HERO_REVEAL_DELAY_SECS: f64 = 2.8;
pub const HERO_IMAGE_DELAY_SECS: f64 = 3.2;

pub const CONTACT_SUCCESS_MILLIS: u32 = 3_000;

/// Space kept above a section when the page transition scrolls to it (sticky header).
pub const TRANSITION_SCROLL_OFFSET: f64 = 80.0;
pub const TRANSITION_FOCUS_DELAY_MILLIS: u32 = 600;

pub const LUXURY_TOUCH_HOLD_MILLIS: u32 = 2_000;
