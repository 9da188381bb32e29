//! Calculation logic for the pricing engine.
//!
//! This module contains the reference calendar used to place a day of week
//! and clock time on concrete dates, the shared rate resolver, the booking
//! cost calculator, the budget playtime simulator and duration formatting.

mod calendar;
mod cost;
mod duration_format;
mod playtime;
mod rate_resolver;

pub use calendar::{anchor, format_clock, parse_clock_time, reference_sunday, weekday_from_index};
pub use cost::compute_cost;
pub use duration_format::format_duration;
pub use playtime::{MAX_SIMULATION_STEPS, compute_playtime};
pub use rate_resolver::{ActiveRate, RateResolver, classify_day};
