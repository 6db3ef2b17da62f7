//! Reminder rules on stored due dates.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::{debug, warn};

/// How far a snooze pushes a due date.
pub fn snooze_interval() -> Duration {
    Duration::hours(1)
}

/// Push a due date back by [`snooze_interval`].
pub fn snooze<T: TimeZone>(due: DateTime<T>) -> DateTime<T> {
    match due.clone().checked_add_signed(snooze_interval()) {
        Some(snoozed) => snoozed,
        None => {
            warn!("snoozed due date out of range, keeping it");
            due
        }
    }
}

/// Whether `due` fell inside the notification window `[last_run, now]`.
pub fn is_due_between(due: &DateTime<Utc>, last_run: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    last_run <= due && due <= now
}

/// Items whose due date fell inside `[last_run, now]`, in their original order.
///
/// Items without a due date are never notified.
pub fn due_between<T, I>(items: I, last_run: &DateTime<Utc>, now: &DateTime<Utc>) -> Vec<T>
where
    I: IntoIterator<Item = (T, Option<DateTime<Utc>>)>,
{
    let due: Vec<T> = items
        .into_iter()
        .filter_map(|(item, due)| match due {
            Some(due) if is_due_between(&due, last_run, now) => Some(item),
            _ => None,
        })
        .collect();
    debug!(count = due.len(), %last_run, %now, "selected due items");
    due
}
