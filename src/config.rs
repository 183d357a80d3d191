use log::Level;

/// Counter duration used when `data-duration` is missing or not a positive number.
pub const COUNTER_DEFAULT_DURATION_MS: f64 = 5000.0;
/// Targets at or above this get at least `LARGE_TARGET_MIN_DURATION_MS`.
pub const LARGE_TARGET_THRESHOLD: f64 = 100_000.0;
pub const LARGE_TARGET_MIN_DURATION_MS: f64 = 5000.0;
/// `toFixed` style rounding caps out here.
pub const COUNTER_MAX_DECIMALS: u32 = 20;

pub const CAROUSEL_INTERVAL_MS: u32 = 4000;
pub const CAROUSEL_ITEMS_PER_ROW: f64 = 3.0;
/// Viewports at or below this width stack the carousel instead of sliding it.
pub const NARROW_VIEWPORT_MAX_WIDTH: f64 = 768.0;

pub const LEAD_MODAL_DELAY_MS: u32 = 5000;
pub const LEAD_MODAL_SHOWN_KEY: &str = "echove_lead_modal_shown";
/// FormSubmit relay the lead forms post to; it redirects to the `_next` field,
/// which points back at `#thank-you?type=...` on this page.
pub const LEAD_FORM_ENDPOINT: &str = "https://formsubmit.co/hello@echovemedia.com";

pub const FADE_UP_THRESHOLD: f64 = 0.12;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
