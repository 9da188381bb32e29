//! Budget playtime simulation.
//!
//! This module answers the inverse of the cost calculation: given a fixed
//! budget instead of an end time, how long can a table be played? Simulated
//! clock time moves forward one rate segment at a time, spending the budget
//! at each segment's rate until the money runs out or the hall closes.

use chrono::{Duration, NaiveDateTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::config::PricingConfig;
use crate::error::{PricingError, PricingResult};
use crate::models::{BudgetRequest, PlaytimeResult, round_money};

use super::calendar::{anchor, format_clock, parse_clock_time, weekday_from_index};
use super::duration_format::format_duration;
use super::rate_resolver::RateResolver;

/// Upper bound on simulation steps: one per minute of a seven-day week.
pub const MAX_SIMULATION_STEPS: u32 = 7 * 24 * 60;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Steps shorter than this many minutes end the simulation.
const MIN_STEP_MINUTES: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Where a simulation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    BudgetExhausted,
    Closed,
    StepLimit,
}

#[derive(Debug, Clone, Copy)]
struct Simulation {
    play_minutes: Decimal,
    remaining: Decimal,
    stop: StopReason,
}

/// Computes how long a budget lasts from a start time.
///
/// Play stops when the budget is spent or when the hall reaches a closed hour,
/// whichever comes first. Reaching closing time is not an error here: the
/// accrued time is returned.
///
/// Failures are returned in [`PlaytimeResult::error`]:
/// - `InvalidInput` for a non-positive budget, bad day index or time string
/// - `FacilityClosedAtStart` when the start lies outside operating hours
/// - `NoRateDefined` when the first instant is open but has no rate segment
///
/// # Examples
///
/// ```
/// use cue_rates::calculation::compute_playtime;
/// use cue_rates::config::PricingConfig;
/// use cue_rates::models::BudgetRequest;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::standard();
/// let request = BudgetRequest {
///     budget: Decimal::new(20, 0),
///     day_of_week: 0,
///     start_time: "10:00".to_string(),
///     is_member: false,
/// };
///
/// let result = compute_playtime(&config, &request);
/// assert!(result.error.is_none());
/// assert_eq!(result.formatted_duration, "1 hour(s) and 42 minute(s)");
/// ```
pub fn compute_playtime(config: &PricingConfig, request: &BudgetRequest) -> PlaytimeResult {
    let resolver = RateResolver::new(config);

    let start = match simulation_start(&resolver, request) {
        Ok(start) => start,
        Err(error) => {
            debug!(error = %error, "Budget rejected before simulation");
            return PlaytimeResult::failed(error);
        }
    };

    match simulate(&resolver, start, request.budget, request.is_member) {
        Ok(simulation) => build_result(simulation, start, request.budget),
        Err(error) => {
            debug!(error = %error, "Budget could not be simulated");
            PlaytimeResult::failed(error)
        }
    }
}

/// Validates the request and anchors its start on the reference calendar.
fn simulation_start(
    resolver: &RateResolver<'_>,
    request: &BudgetRequest,
) -> PricingResult<NaiveDateTime> {
    if request.budget <= Decimal::ZERO {
        return Err(PricingError::invalid_input(
            "budget",
            format!("must be greater than zero, got {}", request.budget),
        ));
    }

    let weekday = weekday_from_index(request.day_of_week)?;
    let start_time = parse_clock_time("start_time", &request.start_time)?;

    if !resolver.is_open_at(start_time.hour(), start_time.minute()) {
        return Err(PricingError::FacilityClosedAtStart {
            time: request.start_time.clone(),
            window: resolver.window().describe(),
        });
    }

    Ok(anchor(weekday, start_time))
}

fn simulate(
    resolver: &RateResolver<'_>,
    start: NaiveDateTime,
    budget: Decimal,
    is_member: bool,
) -> PricingResult<Simulation> {
    let mut current = start;
    let mut remaining = budget;
    let mut play_minutes = Decimal::ZERO;
    let mut steps = 0;

    let stop = loop {
        if steps == MAX_SIMULATION_STEPS {
            warn!(
                steps,
                play_minutes = %play_minutes,
                "Playtime simulation hit its step limit"
            );
            break StopReason::StepLimit;
        }
        steps += 1;

        let Some(active) = resolver.rate_at(current, is_member) else {
            if play_minutes > Decimal::ZERO {
                break StopReason::Closed;
            }
            return Err(first_instant_error(resolver, current));
        };

        let boundary_minutes = Decimal::from((active.ends_at - current).num_minutes());
        // Overflow means the budget dwarfs any single segment.
        let affordable = remaining
            .checked_mul(MINUTES_PER_HOUR)
            .and_then(|scaled| scaled.checked_div(active.rate))
            .unwrap_or(boundary_minutes);
        if boundary_minutes.min(affordable) < MIN_STEP_MINUTES {
            break StopReason::BudgetExhausted;
        }

        if affordable >= boundary_minutes {
            let cost = active.rate * boundary_minutes / MINUTES_PER_HOUR;
            remaining = (remaining - cost).max(Decimal::ZERO);
            play_minutes += boundary_minutes;
            debug!(
                at = %format_clock(current),
                rate = %active.rate,
                minutes = %boundary_minutes,
                remaining = %remaining,
                "Played full segment"
            );
            current = active.ends_at;
        } else {
            play_minutes += affordable;
            remaining = Decimal::ZERO;
            debug!(
                at = %format_clock(current),
                rate = %active.rate,
                minutes = %affordable,
                "Budget ran out mid-segment"
            );
            break StopReason::BudgetExhausted;
        }
    };

    Ok(Simulation {
        play_minutes,
        remaining,
        stop,
    })
}

/// The error for a simulation whose very first instant has no rate.
///
/// Starting exactly at closing time passes the open check but leaves nothing
/// to play, which is reported as a closed start.
fn first_instant_error(resolver: &RateResolver<'_>, moment: NaiveDateTime) -> PricingError {
    if resolver.window().is_bookable_hour(moment.hour()) {
        resolver.missing_rate_error(moment)
    } else {
        PricingError::FacilityClosedAtStart {
            time: format_clock(moment),
            window: resolver.window().describe(),
        }
    }
}

fn build_result(simulation: Simulation, start: NaiveDateTime, budget: Decimal) -> PlaytimeResult {
    let rounded = simulation
        .play_minutes
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let total_play_minutes = rounded.to_i64().unwrap_or(0);

    debug!(
        stop = ?simulation.stop,
        play_minutes = %simulation.play_minutes,
        "Playtime simulation finished"
    );

    PlaytimeResult {
        total_play_minutes,
        exact_play_minutes: simulation
            .play_minutes
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        formatted_duration: format_duration(total_play_minutes),
        budget_spent: round_money(budget - simulation.remaining),
        remaining_budget: round_money(simulation.remaining),
        ends_at: Some(format_clock(start + Duration::minutes(total_play_minutes))),
        error: None,
    }
}
