//! Pure edit operations over a [`ScheduleList`].
//!
//! Every operation takes the current snapshot by reference and returns a new
//! one; the input is never touched, including on error.

use crate::error::ScheduleError;
use crate::models::schedule::{EntryPatch, ScheduleEntry, ScheduleList};

use super::time::{format_clock, parse_clock};

fn check_index(list: &ScheduleList, index: usize) -> Result<(), ScheduleError> {
    if index >= list.len() {
        return Err(ScheduleError::IndexOutOfRange {
            index,
            len: list.len(),
        });
    }
    Ok(())
}

/// Insert a blank entry right after `index`, on the same day as `list[index]`.
pub fn add_place(list: &ScheduleList, index: usize) -> Result<ScheduleList, ScheduleError> {
    check_index(list, index)?;

    let day = list.entries()[index].day;
    let mut entries = list.entries().to_vec();
    entries.insert(index + 1, ScheduleEntry::blank(day));

    log::debug!("Added place to day {} at position {}", day, index + 1);
    Ok(ScheduleList::from_vec(entries))
}

/// Append a blank entry on a new day, one past the last entry's day.
pub fn add_schedule(list: &ScheduleList) -> ScheduleList {
    let day = list.last().day + 1;
    let mut entries = list.entries().to_vec();
    entries.push(ScheduleEntry::blank(day));

    log::debug!("Added day {}", day);
    ScheduleList::from_vec(entries)
}

/// Remove the entry at `index`.
///
/// If that was the last entry of its day, every later day moves down by one so
/// the days stay `1..=k`. Removing the only entry of the list is refused with
/// [`ScheduleError::LastEntry`].
pub fn remove_schedule(list: &ScheduleList, index: usize) -> Result<ScheduleList, ScheduleError> {
    if list.len() <= 1 {
        return Err(ScheduleError::LastEntry);
    }
    check_index(list, index)?;

    let mut entries = list.entries().to_vec();
    let removed = entries.remove(index);

    let day_vacated = !entries.iter().any(|entry| entry.day == removed.day);
    if day_vacated {
        entries
            .iter_mut()
            .filter(|entry| entry.day > removed.day)
            .for_each(|entry| entry.day -= 1);
        log::debug!("Day {} vacated, renumbered later days", removed.day);
    }

    Ok(ScheduleList::from_vec(entries))
}

/// Overwrite the text fields named in `patch` on the entry at `index`.
///
/// A non-empty `time` has to be a 24-hour `HH:MM:SS` value and is stored
/// zero-padded; an empty one clears the field.
pub fn update_entry(
    list: &ScheduleList,
    index: usize,
    patch: &EntryPatch,
) -> Result<ScheduleList, ScheduleError> {
    check_index(list, index)?;

    let time = match patch.time.as_deref().map(str::trim) {
        None => None,
        Some("") => Some(String::new()),
        Some(value) => {
            let parsed =
                parse_clock(value).map_err(|_| ScheduleError::InvalidTime(value.to_string()))?;
            Some(format_clock(parsed))
        }
    };

    let mut entries = list.entries().to_vec();
    let entry = &mut entries[index];
    if let Some(place) = &patch.place {
        entry.place = place.clone();
    }
    if let Some(time) = time {
        entry.time = time;
    }
    if let Some(details) = &patch.details {
        entry.details = details.clone();
    }

    Ok(ScheduleList::from_vec(entries))
}
