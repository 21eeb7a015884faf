//! Remaining-seat tracking per course.

use std::collections::BTreeMap;

use crate::domain::entities::Crn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Seats {
    ceiling: u32,
    remaining: u32,
}

/// Mutable remaining-seats counter per course, initialized from ceilings.
///
/// Remaining never goes below zero: callers check `remaining` before calling
/// `decrement`, and `decrement` asserts the precondition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapacityLedger {
    seats: BTreeMap<Crn, Seats>,
}

impl CapacityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a course ceiling before allocation starts.
    ///
    /// The export repeats the ceiling on every row for a CRN; the last
    /// observed value wins, resetting the remaining count with it.
    pub fn set_ceiling(&mut self, crn: Crn, ceiling: u32) {
        self.seats.insert(
            crn,
            Seats {
                ceiling,
                remaining: ceiling,
            },
        );
    }

    /// Seats still available for a course. Unknown courses have none.
    pub fn remaining(&self, crn: Crn) -> u32 {
        self.seats.get(&crn).map(|s| s.remaining).unwrap_or(0)
    }

    /// The ceiling a course was registered with. Unknown courses have zero.
    pub fn ceiling(&self, crn: Crn) -> u32 {
        self.seats.get(&crn).map(|s| s.ceiling).unwrap_or(0)
    }

    /// Take one seat.
    ///
    /// # Panics
    ///
    /// Panics when the course has no remaining seats (or was never
    /// registered). The engine checks `remaining > 0` first; violating the
    /// precondition is a logic bug.
    pub fn decrement(&mut self, crn: Crn) {
        let seats = self
            .seats
            .get_mut(&crn)
            .unwrap_or_else(|| panic!("decrement on unregistered course {crn}"));
        assert!(seats.remaining > 0, "decrement on full course {crn}");
        seats.remaining -= 1;
    }

    /// Registered courses in ascending CRN order.
    pub fn courses(&self) -> impl Iterator<Item = Crn> + '_ {
        self.seats.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_repeated_ceiling_rows_when_registering_then_last_value_wins() {
        let mut ledger = CapacityLedger::new();
        ledger.set_ceiling(100, 30);
        ledger.set_ceiling(100, 25);

        assert_eq!(ledger.ceiling(100), 25);
        assert_eq!(ledger.remaining(100), 25);
    }

    #[test]
    fn given_seats_when_decrementing_then_remaining_drops() {
        let mut ledger = CapacityLedger::new();
        ledger.set_ceiling(100, 2);
        ledger.decrement(100);
        ledger.decrement(100);

        assert_eq!(ledger.remaining(100), 0);
        assert_eq!(ledger.ceiling(100), 2);
    }

    #[test]
    #[should_panic(expected = "decrement on full course")]
    fn given_full_course_when_decrementing_then_panics() {
        let mut ledger = CapacityLedger::new();
        ledger.set_ceiling(100, 0);
        ledger.decrement(100);
    }

    #[test]
    fn given_unknown_course_when_querying_then_reports_no_seats() {
        let ledger = CapacityLedger::new();
        assert_eq!(ledger.remaining(999), 0);
        assert_eq!(ledger.ceiling(999), 0);
    }
}
