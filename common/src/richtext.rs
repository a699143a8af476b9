//! Styled-run construction for the item and fix cells
//!
//! Format-agnostic on purpose: this module returns run data and the
//! spreadsheet emitter maps runs onto its own formatting API, so the
//! slide and word generators can reuse the same runs.

use crate::segment::segment;

/// Styling class of one run in the fix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Corrective suggestion prose, default styling.
    Plain,
    /// Parenthetical legal citation, warning styling.
    Citation,
}

/// One styled run of the fix cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixRun {
    pub text: String,
    pub kind: RunKind,
}

/// Item-cell text: `"{seq}. {name}"`, or the name alone without a
/// sequence number.
pub fn item_label(seq: Option<u32>, name: &str) -> String {
    match seq {
        Some(n) => format!("{}. {}", n, name),
        None => name.to_string(),
    }
}

/// Build the fix-cell runs for a suggestion text.
///
/// Each top-level citation group becomes one `Citation` run followed by
/// a line break; the clean remainder is appended as a single `Plain`
/// run. No groups and no clean text means no runs (an empty cell).
pub fn fix_runs(suggestion: &str) -> Vec<FixRun> {
    let seg = segment(suggestion);
    let mut runs = Vec::with_capacity(seg.groups.len() + 1);

    for group in seg.groups {
        runs.push(FixRun {
            text: format!("{}\n", group),
            kind: RunKind::Citation,
        });
    }
    if !seg.clean.is_empty() {
        runs.push(FixRun {
            text: seg.clean,
            kind: RunKind::Plain,
        });
    }
    runs
}

/// Concatenated text of `runs`, used for row-height estimation.
pub fn runs_text(runs: &[FixRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}
