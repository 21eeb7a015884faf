//! Post-hoc metrics over a finished allocation.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{Assignment, CapacityLedger, Crn, PreferenceStore, TreePosition, MAX_GRANTS};

/// Read-only metrics report for a finished allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    /// Students whose assignment holds exactly four courses.
    pub full_schedule_count: usize,
    /// Courses granted beyond their ceiling. Empty for any correct engine
    /// run; exposed as a correctness probe.
    pub capacity_violations: Vec<Crn>,
    /// Mean of granted/requested over students with at least one request.
    /// `None` when no student made a request (the ratio is undefined for
    /// zero-request students, so they are excluded, not counted as zero).
    pub average_fill_ratio: Option<f64>,
    /// Fraction of granted courses equal to the student's (1,1) request.
    /// `None` when nothing was granted.
    pub first_choice_rate: Option<f64>,
    /// Fraction of granted courses attributed to a tree-1 slot.
    /// `None` when nothing was granted.
    pub first_tree_rate: Option<f64>,
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "full schedules:      {}", self.full_schedule_count)?;
        match &self.capacity_violations[..] {
            [] => writeln!(f, "capacity violations: none")?,
            crns => writeln!(f, "capacity violations: {crns:?}")?,
        }
        writeln!(f, "average fill ratio:  {}", fmt_ratio(self.average_fill_ratio))?;
        writeln!(f, "first choice rate:   {}", fmt_ratio(self.first_choice_rate))?;
        write!(f, "first tree rate:     {}", fmt_ratio(self.first_tree_rate))
    }
}

fn fmt_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{r:.3}"),
        None => "n/a".to_string(),
    }
}

/// Compute metrics from an assignment, the preference sets, and the course
/// ceilings. Pure: nothing is mutated.
pub fn evaluate(
    assignment: &Assignment,
    store: &PreferenceStore,
    ledger: &CapacityLedger,
) -> MetricsReport {
    let mut full_schedule_count = 0;
    let mut granted_per_course: BTreeMap<Crn, u32> = BTreeMap::new();
    let mut fill_ratios: Vec<f64> = Vec::new();
    let mut total_grants = 0usize;
    let mut first_choice_grants = 0usize;
    let mut first_tree_grants = 0usize;

    for (id, courses) in assignment.iter() {
        if courses.len() == MAX_GRANTS {
            full_schedule_count += 1;
        }

        let requested = store.requested_count(id);
        if requested > 0 {
            fill_ratios.push(courses.len() as f64 / requested as f64);
        }

        let root_request = store.get(id, TreePosition::ROOT);
        for &crn in courses {
            *granted_per_course.entry(crn).or_default() += 1;
            total_grants += 1;
            if root_request == Some(crn) {
                first_choice_grants += 1;
            }
            // Attribute the grant to the lowest slot requesting this course;
            // the first 7 slots are tree 1.
            if store.first_slot_of(id, crn).is_some_and(|slot| slot < 7) {
                first_tree_grants += 1;
            }
        }
    }

    let capacity_violations = granted_per_course
        .iter()
        .filter(|(&crn, &granted)| granted > ledger.ceiling(crn))
        .map(|(&crn, _)| crn)
        .collect();

    MetricsReport {
        full_schedule_count,
        capacity_violations,
        average_fill_ratio: mean(&fill_ratios),
        first_choice_rate: rate(first_choice_grants, total_grants),
        first_tree_rate: rate(first_tree_grants, total_grants),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn rate(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}
