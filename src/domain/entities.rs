//! Domain entities: students, tiers, and the final assignment

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// Student identifier as it appears in the registrar export.
pub type StudentId = u32;

/// Course reference number, the course identifier.
pub type Crn = u32;

/// Each student receives at most one grant per round, so at most this many
/// courses in total.
pub const MAX_GRANTS: usize = 4;

/// Class-year priority group.
///
/// Variants are declared in processing order, so the derived `Ord` gives the
/// fixed tier sequence directly: seniors first, `Other` always last. The
/// registrar handles the `Other` group arbitrarily anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Senior,
    Junior,
    Sophomore,
    Freshman,
    Other,
}

impl Tier {
    /// Fixed processing order within every allocation round.
    pub const ORDER: [Tier; 5] = [
        Tier::Senior,
        Tier::Junior,
        Tier::Sophomore,
        Tier::Freshman,
        Tier::Other,
    ];

    /// Class-year code used in the registrar export.
    pub fn code(&self) -> &'static str {
        match self {
            Tier::Senior => "SENI",
            Tier::Junior => "JUNI",
            Tier::Sophomore => "SOPH",
            Tier::Freshman => "FRST",
            Tier::Other => "OTHER",
        }
    }

    /// Parse a class-year code from the registrar export.
    pub fn from_code(code: &str) -> DomainResult<Self> {
        match code {
            "SENI" => Ok(Tier::Senior),
            "JUNI" => Ok(Tier::Junior),
            "SOPH" => Ok(Tier::Sophomore),
            "FRST" => Ok(Tier::Freshman),
            "OTHER" => Ok(Tier::Other),
            other => Err(DomainError::UnknownTier(other.to_string())),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A student record: identifier plus class-year tier.
/// Immutable after construction; preferences live in the PreferenceStore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub tier: Tier,
}

impl Student {
    pub fn new(id: StudentId, tier: Tier) -> Self {
        Self { id, tier }
    }
}

/// Final allocation: student id mapped to granted CRNs in grant order.
///
/// Grant order is round order, not preference order. Every rostered student
/// appears, including those who received nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    granted: BTreeMap<StudentId, Vec<Crn>>,
}

impl Assignment {
    /// Start an empty assignment covering the given students.
    pub fn for_students<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = StudentId>,
    {
        Self {
            granted: ids.into_iter().map(|id| (id, Vec::new())).collect(),
        }
    }

    /// Record a granted course for a student.
    pub fn grant(&mut self, id: StudentId, crn: Crn) {
        let courses = self.granted.entry(id).or_default();
        debug_assert!(courses.len() < MAX_GRANTS, "student {id} already has {MAX_GRANTS} grants");
        courses.push(crn);
    }

    /// Courses granted to a student, in grant order.
    pub fn courses(&self, id: StudentId) -> &[Crn] {
        self.granted.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate students in ascending id order with their granted courses.
    pub fn iter(&self) -> impl Iterator<Item = (StudentId, &[Crn])> + '_ {
        self.granted.iter().map(|(id, crns)| (*id, crns.as_slice()))
    }

    /// Number of students covered by this assignment.
    pub fn student_count(&self) -> usize {
        self.granted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_unknown_class_code_when_parsing_then_errors() {
        assert_eq!(
            Tier::from_code("GRAD"),
            Err(DomainError::UnknownTier("GRAD".to_string()))
        );
    }

    #[test]
    fn given_tier_order_when_comparing_then_other_sorts_last() {
        for pair in Tier::ORDER.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn given_student_without_grants_when_querying_then_returns_empty_slice() {
        let assignment = Assignment::for_students([7]);
        assert_eq!(assignment.courses(7), &[] as &[Crn]);
        assert_eq!(assignment.courses(99), &[] as &[Crn]);
    }
}
