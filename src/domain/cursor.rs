//! WebTree traversal cursor: the per-student preference state machine.

use crate::domain::position::{TreePosition, FALLBACK_TREE};

/// Cursor state: a valid position, or the terminal sentinel.
///
/// `Exhausted` replaces the legacy `(0, 0)` coordinate sentinel; once
/// entered it is never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Active(TreePosition),
    Exhausted,
}

/// Per-student pointer into the WebTree.
///
/// State persists across allocation rounds rather than restarting, so a
/// cursor visits at most 25 distinct positions (7+7+7+4) over its whole
/// lifetime regardless of how many rounds run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    state: CursorState,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Every traversal starts at tree 1, branch 1.
    pub fn new() -> Self {
        Self {
            state: CursorState::Active(TreePosition::ROOT),
        }
    }

    /// Current position, `None` once exhausted.
    pub fn position(&self) -> Option<TreePosition> {
        match self.state {
            CursorState::Active(pos) => Some(pos),
            CursorState::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, CursorState::Exhausted)
    }

    /// Move to the next candidate position.
    ///
    /// `got_course` indicates whether the course at the current position was
    /// just granted. On a grant the cursor stays on the preferred path by
    /// descending to the *left* child regardless of which branch granted;
    /// the original heuristic does exactly this and the asymmetry is kept
    /// verbatim. Without a grant it moves rightwards in level order, jumping
    /// to the next tree's root when leaving a root, and into the fallback
    /// list once a tree's leaves run out.
    ///
    /// # Panics
    ///
    /// Panics when called on an exhausted cursor. The engine always checks
    /// `is_exhausted` first, so hitting this is a caller bug, not a
    /// recoverable condition.
    pub fn advance(&mut self, got_course: bool) {
        let pos = match self.state {
            CursorState::Active(pos) => pos,
            CursorState::Exhausted => panic!("cursor advanced past exhaustion"),
        };
        let (tree, branch) = (pos.tree(), pos.branch());

        self.state = if got_course {
            match (tree, branch) {
                (1..=3, 1..=3) => active(tree, branch * 2),
                (1..=3, _) => active(FALLBACK_TREE, 1),
                (_, 1..=3) => active(FALLBACK_TREE, branch + 1),
                _ => CursorState::Exhausted,
            }
        } else {
            match (tree, branch) {
                (1..=3, 1) => active(tree + 1, 1),
                (1..=3, 2..=6) => active(tree, branch + 1),
                (1..=3, _) => active(FALLBACK_TREE, 1),
                (_, 1..=3) => active(FALLBACK_TREE, branch + 1),
                _ => CursorState::Exhausted,
            }
        };
    }
}

fn active(tree: u8, branch: u8) -> CursorState {
    CursorState::Active(TreePosition::new_unchecked(tree, branch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(tree: u8, branch: u8) -> Cursor {
        let mut cursor = Cursor::new();
        cursor.state = active(tree, branch);
        cursor
    }

    #[rstest]
    // granted at an internal node: always the left child
    #[case(1, 1, Some((1, 2)))]
    #[case(1, 2, Some((1, 4)))]
    #[case(1, 3, Some((1, 6)))]
    #[case(2, 3, Some((2, 6)))]
    // granted at a leaf: drop into the fallback list
    #[case(1, 4, Some((4, 1)))]
    #[case(3, 7, Some((4, 1)))]
    // granted inside the fallback list
    #[case(4, 1, Some((4, 2)))]
    #[case(4, 3, Some((4, 4)))]
    #[case(4, 4, None)]
    fn given_grant_when_advancing_then_follows_preferred_path(
        #[case] tree: u8,
        #[case] branch: u8,
        #[case] expected: Option<(u8, u8)>,
    ) {
        let mut cursor = at(tree, branch);
        cursor.advance(true);
        let expected = expected.map(|(t, b)| TreePosition::new(t, b).unwrap());
        assert_eq!(cursor.position(), expected);
    }

    #[rstest]
    // no grant at a root: jump to the next tree's root
    #[case(1, 1, Some((2, 1)))]
    #[case(3, 1, Some((4, 1)))]
    // no grant mid-tree: rightwards in level order
    #[case(1, 2, Some((1, 3)))]
    #[case(1, 3, Some((1, 4)))]
    #[case(2, 6, Some((2, 7)))]
    // no grant at the last leaf: drop into the fallback list
    #[case(1, 7, Some((4, 1)))]
    #[case(3, 7, Some((4, 1)))]
    // no grant inside the fallback list
    #[case(4, 2, Some((4, 3)))]
    #[case(4, 4, None)]
    fn given_no_grant_when_advancing_then_moves_to_next_candidate(
        #[case] tree: u8,
        #[case] branch: u8,
        #[case] expected: Option<(u8, u8)>,
    ) {
        let mut cursor = at(tree, branch);
        cursor.advance(false);
        let expected = expected.map(|(t, b)| TreePosition::new(t, b).unwrap());
        assert_eq!(cursor.position(), expected);
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn given_any_history_when_advancing_then_exhausts_within_25_steps(#[case] got_course: bool) {
        let mut cursor = Cursor::new();
        let mut steps = 0;
        while !cursor.is_exhausted() {
            cursor.advance(got_course);
            steps += 1;
            assert!(steps <= 25, "cursor failed to exhaust within 25 advances");
        }
    }

    #[test]
    fn given_alternating_history_when_advancing_then_exhausts_within_25_steps() {
        let mut cursor = Cursor::new();
        let mut steps = 0;
        while !cursor.is_exhausted() {
            cursor.advance(steps % 2 == 0);
            steps += 1;
            assert!(steps <= 25);
        }
    }

    #[test]
    #[should_panic(expected = "cursor advanced past exhaustion")]
    fn given_exhausted_cursor_when_advancing_then_panics() {
        let mut cursor = at(4, 4);
        cursor.advance(false);
        assert!(cursor.is_exhausted());
        cursor.advance(false);
    }
}
