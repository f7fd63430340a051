use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::{CycleProgress, EpochBoundary, HalvingSchedule};
use crate::utils::{clamp_score, floor_days_between, fractional_days_between, start_of_day};

/// Locate `now` within the halving schedule.
///
/// The window is the pair of consecutive boundaries with `start <= now < end`.
/// Before the first boundary the first cycle is used (0%); at or after the
/// last boundary the final cycle is used and saturates at 100% while
/// `days_until_next` goes negative. A zero-length window reports 100%.
pub fn cycle_progress_at(schedule: &HalvingSchedule, now: DateTime<Utc>) -> CycleProgress {
    let (start, end) = select_window(schedule, now);
    let start_at = start_of_day(start.date);
    let end_at = start_of_day(end.date);

    let span_days = fractional_days_between(start_at, end_at);
    let percent_complete = if span_days <= 0.0 {
        warn!(
            "Degenerate cycle window #{} -> #{} ({}), reporting 100%",
            start.index, end.index, start.date
        );
        100
    } else {
        clamp_score(100.0 * fractional_days_between(start_at, now) / span_days)
    };

    let progress = CycleProgress {
        cycle_index: start.index,
        percent_complete,
        days_since_start: floor_days_between(start_at, now).max(0),
        days_until_next: floor_days_between(now, end_at),
        start_boundary: start,
        end_boundary: end,
    };

    debug!(
        cycle = progress.cycle_index,
        percent = progress.percent_complete,
        days_since_start = progress.days_since_start,
        days_until_next = progress.days_until_next,
        "cycle progress computed"
    );

    progress
}

fn select_window(schedule: &HalvingSchedule, now: DateTime<Utc>) -> (EpochBoundary, EpochBoundary) {
    let boundaries = &schedule.boundaries;

    match boundaries.len() {
        0 => {
            warn!("Empty halving schedule, falling back to built-in boundaries");
            return select_window(&HalvingSchedule::default(), now);
        }
        1 => return (boundaries[0], boundaries[0]),
        _ => {}
    }

    if now < start_of_day(boundaries[0].date) {
        return (boundaries[0], boundaries[1]);
    }

    if let Some(pair) = boundaries
        .windows(2)
        .find(|pair| start_of_day(pair[0].date) <= now && now < start_of_day(pair[1].date))
    {
        return (pair[0], pair[1]);
    }

    let last = boundaries.len() - 1;
    warn!(
        "Now ({}) is past the last known boundary #{} ({}), clamping to the final cycle",
        now, boundaries[last].index, boundaries[last].date
    );
    (boundaries[last - 1], boundaries[last])
}
