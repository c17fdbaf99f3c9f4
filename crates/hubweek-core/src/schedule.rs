//! Weekly run scheduling.
//!
//! The scheduled entry point posts every Monday at 09:00 local time. The
//! next-run computation is pure over naive local time so it stays testable.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

/// Hour of day (local) for the scheduled weekly run.
pub const RUN_HOUR: u32 = 9;

/// The next Monday 09:00 after `now`.
///
/// On a Monday before 09:00 that is today's 09:00; otherwise the following
/// Monday's.
pub fn next_weekly_run(now: NaiveDateTime) -> NaiveDateTime {
    let run_time = NaiveTime::from_hms_opt(RUN_HOUR, 0, 0).expect("valid time");
    let days_since_monday = i64::from(now.date().weekday().num_days_from_monday());

    if days_since_monday == 0 && now.time() < run_time {
        return now.date().and_time(run_time);
    }

    (now.date() + Duration::days(7 - days_since_monday)).and_time(run_time)
}

/// How long to sleep from `now` until `next`; zero when already past.
pub fn sleep_duration(now: NaiveDateTime, next: NaiveDateTime) -> std::time::Duration {
    (next - now).to_std().unwrap_or_default()
}
