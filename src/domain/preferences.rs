//! Per-student preference storage backed by the flat 25-slot layout.

use std::collections::BTreeMap;

use crate::domain::entities::{Crn, StudentId};
use crate::domain::position::{TreePosition, SLOT_COUNT};

/// Sparse mapping from tree position to requested course, per student.
///
/// A later insertion at an already-populated position silently overwrites;
/// students resubmit forms and the registrar export keeps the last row.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    slots: BTreeMap<StudentId, [Option<Crn>; SLOT_COUNT]>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request, creating the student's slot array on first use.
    pub fn add_request(&mut self, id: StudentId, crn: Crn, position: TreePosition) {
        let slots = self.slots.entry(id).or_insert([None; SLOT_COUNT]);
        slots[position.slot()] = Some(crn);
    }

    /// The course requested at a position. Absence is a normal condition,
    /// not an error: students rarely fill the whole tree.
    pub fn get(&self, id: StudentId, position: TreePosition) -> Option<Crn> {
        self.slots.get(&id).and_then(|slots| slots[position.slot()])
    }

    /// Number of populated slots for a student.
    pub fn requested_count(&self, id: StudentId) -> usize {
        self.slots
            .get(&id)
            .map(|slots| slots.iter().flatten().count())
            .unwrap_or(0)
    }

    /// Lowest slot index holding the given course for a student, if any.
    /// Used to attribute a grant back to the position that motivated it.
    pub fn first_slot_of(&self, id: StudentId, crn: Crn) -> Option<usize> {
        self.slots
            .get(&id)
            .and_then(|slots| slots.iter().position(|slot| *slot == Some(crn)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(tree: u8, branch: u8) -> TreePosition {
        TreePosition::new(tree, branch).unwrap()
    }

    #[test]
    fn given_duplicate_position_when_adding_request_then_last_value_wins() {
        let mut store = PreferenceStore::new();
        store.add_request(1, 100, pos(1, 1));
        store.add_request(1, 200, pos(1, 1));

        assert_eq!(store.get(1, pos(1, 1)), Some(200));
        assert_eq!(store.requested_count(1), 1);
    }

    #[test]
    fn given_unpopulated_position_when_querying_then_returns_none() {
        let mut store = PreferenceStore::new();
        store.add_request(1, 100, pos(1, 1));

        assert_eq!(store.get(1, pos(2, 3)), None);
        assert_eq!(store.get(42, pos(1, 1)), None);
        assert_eq!(store.requested_count(42), 0);
    }

    #[test]
    fn given_course_in_two_slots_when_locating_then_returns_lowest() {
        let mut store = PreferenceStore::new();
        store.add_request(1, 100, pos(2, 1));
        store.add_request(1, 100, pos(1, 3));

        assert_eq!(store.first_slot_of(1, 100), Some(pos(1, 3).slot()));
        assert_eq!(store.first_slot_of(1, 999), None);
    }
}
