use log::Level;

/// How long the loading gate holds the main view back, in milliseconds.
pub const BOOT_DURATION_MS: u32 = 2_500;

/// Interval between cosmetic progress ticks on the loading screen.
pub const PROGRESS_TICK_MS: u32 = 100;

/// Upper bound (exclusive) of a single progress tick.
pub const PROGRESS_MAX_STEP: f64 = 15.0;

/// Scroll offset after which the nav bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const PARTICLE_COUNT: usize = 20;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
