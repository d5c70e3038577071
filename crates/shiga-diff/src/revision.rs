use shiga_types::AnswerRevision;

use crate::engine::{diff_lines, DiffSegment};

/// A revision paired with the diff against its successor.
#[derive(Debug, Clone)]
pub struct RevisionDiff<'a> {
    pub revision: &'a AnswerRevision,
    pub segments: Vec<DiffSegment>,
}

/// Diff each revision of an answer against the version that replaced it.
///
/// `revisions` is ordered oldest-first; the newest revision is compared
/// against `live_text`, the answer's current text. The diff engine never
/// fetches anything itself; callers hand it the history they loaded.
pub fn diff_against_successors<'a>(
    revisions: &'a [AnswerRevision],
    live_text: &str,
) -> Vec<RevisionDiff<'a>> {
    revisions
        .iter()
        .enumerate()
        .map(|(idx, revision)| {
            let successor = revisions
                .get(idx + 1)
                .map(|next| next.text.as_str())
                .unwrap_or(live_text);
            RevisionDiff {
                revision,
                segments: diff_lines(&revision.text, successor),
            }
        })
        .collect()
}
