//! Multi-pass randomized allocation engine
//!
//! Four priority-ordered rounds over the student body. Within each round,
//! tiers are processed in fixed order (seniors first, OTHER last); within a
//! tier, students are visited in a round-specific permutation drawn from an
//! injected random source.

use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::domain::{
    Assignment, CapacityLedger, Crn, Cursor, PreferenceStore, Student, StudentId, Tier,
};

/// Number of allocation rounds; also the per-student grant ceiling, since a
/// round grants at most one course per student.
pub const ROUNDS: usize = 4;

/// Priority-ordered greedy allocator driven by per-student cursors.
///
/// Sequential by design: fairness depends on the exact processing order
/// within a round, so students are never allocated concurrently. The random
/// source is injected so that a seeded run is fully reproducible.
pub struct AllocationEngine<R: Rng> {
    rng: R,
}

impl<R: Rng> AllocationEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Run the full 4-round allocation and return the assignment.
    pub fn run(
        &mut self,
        students: &[Student],
        store: &PreferenceStore,
        ledger: &mut CapacityLedger,
    ) -> Assignment {
        let orders = self.draw_tier_orders(students);
        let mut cursors: HashMap<StudentId, Cursor> = HashMap::new();
        let mut assignment = Assignment::for_students(students.iter().map(|s| s.id));

        for round in 0..ROUNDS {
            for (tier, round_orders) in &orders {
                debug!(round = round + 1, tier = %tier, students = round_orders[round].len(), "allocation pass");
                for &id in &round_orders[round] {
                    let cursor = cursors.entry(id).or_default();
                    if let Some(crn) = try_grant(cursor, id, store, ledger) {
                        trace!(student = id, crn, round = round + 1, "granted");
                        assignment.grant(id, crn);
                    }
                }
            }
        }

        assignment
    }

    /// Partition students by tier and draw the four visitation orders for
    /// each tier, in fixed tier order so a seeded run is deterministic.
    fn draw_tier_orders(&mut self, students: &[Student]) -> BTreeMap<Tier, [Vec<StudentId>; ROUNDS]> {
        let mut by_tier: HashMap<Tier, Vec<StudentId>> =
            students.iter().map(|s| (s.tier, s.id)).into_group_map();

        let mut orders = BTreeMap::new();
        for tier in Tier::ORDER {
            if let Some(mut ids) = by_tier.remove(&tier) {
                // Canonical starting order: input order must not leak into
                // the permutations.
                ids.sort_unstable();
                orders.insert(tier, self.draw_orders(&ids));
            }
        }
        orders
    }

    /// Four per-round orders over one tier. Only two are independently
    /// random: round 2 reverses round 1 and round 4 reverses round 3, so a
    /// student scheduled last in one pass goes first in the next.
    fn draw_orders(&mut self, ids: &[StudentId]) -> [Vec<StudentId>; ROUNDS] {
        let mut first = ids.to_vec();
        first.shuffle(&mut self.rng);
        let second: Vec<StudentId> = first.iter().rev().copied().collect();

        let mut third = ids.to_vec();
        third.shuffle(&mut self.rng);
        let fourth: Vec<StudentId> = third.iter().rev().copied().collect();

        [first, second, third, fourth]
    }
}

/// Attempt one grant for a student: walk the cursor until a requested course
/// with a free seat is found, or the WebTree runs out.
///
/// Grants at most one course. Cursor state persists into later rounds, so a
/// position is never reconsidered once passed over.
fn try_grant(
    cursor: &mut Cursor,
    id: StudentId,
    store: &PreferenceStore,
    ledger: &mut CapacityLedger,
) -> Option<Crn> {
    while let Some(position) = cursor.position() {
        if let Some(crn) = store.get(id, position) {
            if ledger.remaining(crn) > 0 {
                ledger.decrement(crn);
                cursor.advance(true);
                return Some(crn);
            }
        }
        // Nothing requested here, or the course is full.
        cursor.advance(false);
    }
    None
}
