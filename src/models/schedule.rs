use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// One row of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: u32, // 1-based, shared by every entry of the same travel day
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub time: String, // HH:MM:SS, 24-hour
    #[serde(default)]
    pub details: String,
}

impl ScheduleEntry {
    pub fn blank(day: u32) -> Self {
        Self {
            day,
            place: String::new(),
            time: String::new(),
            details: String::new(),
        }
    }
}

/// Partial edit of a single entry. `day` is owned by the editor and can't be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPatch {
    pub place: Option<String>,
    pub time: Option<String>,
    pub details: Option<String>,
}

/// Ordered, never-empty list of schedule entries.
///
/// Insertion order is display order. Entries are grouped by ascending day and
/// the set of days is always `{1..k}`; the editor operations keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScheduleEntry>", into = "Vec<ScheduleEntry>")]
pub struct ScheduleList {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleList {
    /// The state of a brand new trip: one blank entry on day 1.
    pub fn seed() -> Self {
        Self {
            entries: vec![ScheduleEntry::blank(1)],
        }
    }

    pub fn try_from_entries(entries: Vec<ScheduleEntry>) -> Result<Self, ScheduleError> {
        if entries.is_empty() {
            return Err(ScheduleError::InvalidSchedule(
                "a schedule needs at least one entry".to_string(),
            ));
        }

        // Days must start at 1 and each entry either stays on the previous
        // entry's day or moves to the next one.
        let mut previous = 0u32;
        for (pos, entry) in entries.iter().enumerate() {
            let allowed = if pos == 0 {
                entry.day == 1
            } else {
                entry.day == previous || entry.day == previous + 1
            };
            if !allowed {
                return Err(ScheduleError::InvalidSchedule(format!(
                    "entry {} has day {}, expected {}",
                    pos,
                    entry.day,
                    if pos == 0 {
                        "1".to_string()
                    } else {
                        format!("{} or {}", previous, previous + 1)
                    }
                )));
            }
            previous = entry.day;
        }

        Ok(Self { entries })
    }

    // Callers inside the crate guarantee the list is non-empty.
    pub(crate) fn from_vec(entries: Vec<ScheduleEntry>) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScheduleEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ScheduleEntry> {
        self.entries
    }

    pub fn last(&self) -> &ScheduleEntry {
        // non-empty by construction
        &self.entries[self.entries.len() - 1]
    }

    pub fn max_day(&self) -> u32 {
        self.entries.iter().map(|entry| entry.day).max().unwrap_or(1)
    }

    /// Distinct days in ascending order.
    pub fn distinct_days(&self) -> Vec<u32> {
        let mut days: Vec<u32> = self.entries.iter().map(|entry| entry.day).collect();
        days.sort_unstable();
        days.dedup();
        days
    }

    /// True when the distinct days are exactly `1..=k`.
    pub fn is_contiguous(&self) -> bool {
        self.distinct_days()
            .iter()
            .enumerate()
            .all(|(i, day)| *day as usize == i + 1)
    }
}

impl Default for ScheduleList {
    fn default() -> Self {
        Self::seed()
    }
}

impl TryFrom<Vec<ScheduleEntry>> for ScheduleList {
    type Error = ScheduleError;

    fn try_from(entries: Vec<ScheduleEntry>) -> Result<Self, Self::Error> {
        Self::try_from_entries(entries)
    }
}

impl From<ScheduleList> for Vec<ScheduleEntry> {
    fn from(list: ScheduleList) -> Self {
        list.entries
    }
}

impl<'a> IntoIterator for &'a ScheduleList {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u32) -> ScheduleEntry {
        ScheduleEntry::blank(day)
    }

    #[test]
    fn test_seed_has_one_day_one_entry() {
        let list = ScheduleList::seed();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some(&ScheduleEntry::blank(1)));
        assert_eq!(list.get(0).map(|e| e.place.as_str()), Some(""));
    }

    #[test]
    fn test_try_from_entries_rejects_empty_and_day_zero() {
        assert!(matches!(
            ScheduleList::try_from_entries(vec![]),
            Err(ScheduleError::InvalidSchedule(_))
        ));
        assert!(matches!(
            ScheduleList::try_from_entries(vec![entry(1), entry(0)]),
            Err(ScheduleError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn test_contiguity_check() {
        let ok = ScheduleList::try_from_entries(vec![entry(1), entry(1), entry(2)]).unwrap();
        assert!(ok.is_contiguous());
        assert_eq!(ok.distinct_days(), vec![1, 2]);
        assert_eq!(ok.max_day(), 2);
    }

    #[test]
    fn test_try_from_entries_rejects_gaps_and_disorder() {
        for days in [vec![1, 3], vec![2, 1], vec![2], vec![1, 5, 2], vec![1, 2, 1]] {
            let entries = days.iter().map(|d| entry(*d)).collect();
            assert!(
                matches!(
                    ScheduleList::try_from_entries(entries),
                    Err(ScheduleError::InvalidSchedule(_))
                ),
                "days {:?} should be rejected",
                days
            );
        }
    }

    #[test]
    fn test_huge_day_is_rejected() {
        let result: Result<ScheduleList, _> =
            serde_json::from_str(r#"[{"day":4294967295}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_empty_array() {
        let result: Result<ScheduleList, _> = serde_json::from_str("[]");
        assert!(result.is_err());

        let list: ScheduleList =
            serde_json::from_str(r#"[{"day":1,"place":"Jeju","time":"09:00:00","details":""}]"#)
                .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.last().place, "Jeju");
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let list: ScheduleList = serde_json::from_str(r#"[{"day":1}]"#).unwrap();
        assert_eq!(list.last(), &ScheduleEntry::blank(1));
    }
}
