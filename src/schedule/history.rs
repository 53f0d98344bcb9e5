use std::collections::VecDeque;

use crate::error::ScheduleError;
use crate::models::schedule::ScheduleList;

pub const DEFAULT_CAPACITY: usize = 50;

/// Undo/redo over schedule snapshots.
///
/// The HTTP API is stateless and doesn't keep one of these; it is for callers
/// that embed the editor and hold the list themselves.
///
/// Edits are the pure functions from [`super::editor`]; each successful one
/// pushes the previous snapshot onto the undo stack and clears redo.
#[derive(Debug, Clone)]
pub struct ScheduleHistory {
    current: ScheduleList,
    undo: VecDeque<ScheduleList>,
    redo: Vec<ScheduleList>,
    capacity: usize,
}

impl ScheduleHistory {
    pub fn new(initial: ScheduleList) -> Self {
        Self::with_capacity(initial, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(initial: ScheduleList, capacity: usize) -> Self {
        Self {
            current: initial,
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn current(&self) -> &ScheduleList {
        &self.current
    }

    pub fn apply<F>(&mut self, edit: F) -> Result<&ScheduleList, ScheduleError>
    where
        F: FnOnce(&ScheduleList) -> Result<ScheduleList, ScheduleError>,
    {
        let next = edit(&self.current)?;
        let previous = std::mem::replace(&mut self.current, next);

        if self.undo.len() == self.capacity {
            self.undo.pop_front();
        }
        self.undo.push_back(previous);
        self.redo.clear();

        Ok(&self.current)
    }

    pub fn undo(&mut self) -> bool {
        match self.undo.pop_back() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.current, previous);
                self.redo.push(current);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.current, next);
                self.undo.push_back(current);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::editor::{add_place, add_schedule, remove_schedule};

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = ScheduleHistory::new(ScheduleList::seed());
        history.apply(|list| Ok(add_schedule(list))).unwrap();
        history.apply(|list| add_place(list, 0)).unwrap();
        assert_eq!(history.current().len(), 3);

        assert!(history.undo());
        assert_eq!(history.current().len(), 2);
        assert!(history.undo());
        assert_eq!(history.current(), &ScheduleList::seed());
        assert!(!history.undo());

        assert!(history.redo());
        assert_eq!(history.current().len(), 2);
        assert!(history.can_redo());
    }

    #[test]
    fn test_failed_edit_leaves_history_alone() {
        let mut history = ScheduleHistory::new(ScheduleList::seed());
        let err = history.apply(|list| remove_schedule(list, 0)).unwrap_err();
        assert_eq!(err, ScheduleError::LastEntry);
        assert!(!history.can_undo());
        assert_eq!(history.current(), &ScheduleList::seed());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut history = ScheduleHistory::new(ScheduleList::seed());
        history.apply(|list| Ok(add_schedule(list))).unwrap();
        history.undo();
        assert!(history.can_redo());

        history.apply(|list| add_place(list, 0)).unwrap();
        assert!(!history.can_redo());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = ScheduleHistory::with_capacity(ScheduleList::seed(), 2);
        for _ in 0..3 {
            history.apply(|list| Ok(add_schedule(list))).unwrap();
        }
        assert!(history.undo());
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(history.current().len(), 2);
    }
}
