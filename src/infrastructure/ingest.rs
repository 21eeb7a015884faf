//! CSV ingestion of registrar WebTree exports.
//!
//! One row per (student, preference-slot) pair. Expected header:
//! `ID,CLASS,CRN,TREE,BRANCH,COURSE_CEILING,MAJOR,MAJOR2,SUBJ,NUMB,SEQ`.
//! The trailing advisory columns (MAJOR through SEQ) are carried by the
//! export but not used for allocation, so they are not deserialized.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{CapacityLedger, Crn, PreferenceStore, Student, StudentId, Tier, TreePosition};
use crate::infrastructure::error::{InfraError, InfraResult};

/// The columns of one export row that allocation needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
struct RawRecord {
    id: StudentId,
    class: String,
    crn: Crn,
    tree: u8,
    branch: u8,
    course_ceiling: u32,
}

/// Parsed allocation input: the student body, their preferences, and the
/// seat ledger.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Students in ascending id order.
    pub students: Vec<Student>,
    pub store: PreferenceStore,
    pub ledger: CapacityLedger,
}

/// Read a registrar export into a [`Roster`].
///
/// The first row seen for a student id fixes the tier; later rows repeat it.
/// The ceiling repeats on every row for a CRN and the last value wins.
pub fn load_roster(path: &Path) -> InfraResult<Roster> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| InfraError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tiers: BTreeMap<StudentId, Tier> = BTreeMap::new();
    let mut store = PreferenceStore::new();
    let mut ledger = CapacityLedger::new();

    // Line 1 is the header row.
    let mut line: u64 = 1;
    for result in reader.deserialize::<RawRecord>() {
        line += 1;
        let record = result.map_err(|source| InfraError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let tier = Tier::from_code(&record.class).map_err(|source| InfraError::Record {
            path: path.to_path_buf(),
            line,
            source,
        })?;
        let position =
            TreePosition::new(record.tree, record.branch).map_err(|source| InfraError::Record {
                path: path.to_path_buf(),
                line,
                source,
            })?;

        tiers.entry(record.id).or_insert(tier);
        store.add_request(record.id, record.crn, position);
        ledger.set_ceiling(record.crn, record.course_ceiling);
    }

    let students: Vec<Student> = tiers
        .into_iter()
        .map(|(id, tier)| Student::new(id, tier))
        .collect();
    debug!(
        students = students.len(),
        courses = ledger.courses().count(),
        "roster loaded"
    );

    Ok(Roster {
        students,
        store,
        ledger,
    })
}
