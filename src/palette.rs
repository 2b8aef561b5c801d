//! Accent Palette

use crate::scheduler::Scheduler;

pub const COLORS: &[&str] = &["#3498db", "#e74c3c", "#27ae60", "#f39c12", "#9b59b6", "#1abc9c"];

/// Map a uniform sample in [0, 1) onto the palette.
pub fn pick(sample: f64) -> &'static str {
    let idx = (sample * COLORS.len() as f64).floor() as usize;
    COLORS[idx.min(COLORS.len() - 1)]
}

/// Random palette colour via `Math.random()`
pub fn random_color() -> &'static str {
    pick(js_sys::Math::random())
}

/// Flag the colour box as scaled up and clear the flag after `pulse_ms`.
pub fn pulse<S: Scheduler>(scheduler: &S, pulse_ms: u32, set_scaled: impl Fn(bool) + 'static) {
    set_scaled(true);
    scheduler.defer(pulse_ms, move || set_scaled(false));
}
