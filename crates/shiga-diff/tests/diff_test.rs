use shiga_diff::{diff_against_successors, diff_lines, DiffKind, DiffSegment};
use shiga_types::AnswerRevision;

fn texts(segments: &[DiffSegment], kinds: &[DiffKind]) -> Vec<String> {
    segments
        .iter()
        .filter(|s| kinds.contains(&s.kind))
        .map(|s| s.text.clone())
        .collect()
}

fn lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
        .collect()
}

#[test]
fn test_identical_inputs_are_all_same() {
    let text = "first\nsecond\nthird";
    let segments = diff_lines(text, text);

    assert!(segments.iter().all(|s| s.kind == DiffKind::Same));
    assert_eq!(texts(&segments, &[DiffKind::Same]), lines(text));
}

#[test]
fn test_old_and_new_reconstruct_from_segments() {
    let old = "apply at the city office\nbring your residence card\nopen 9-17";
    let new = "apply at the city office\nbring your residence card and photo\nopen 9-17\nclosed on holidays";
    let segments = diff_lines(old, new);

    assert_eq!(
        texts(&segments, &[DiffKind::Same, DiffKind::Removed]),
        lines(old)
    );
    assert_eq!(
        texts(&segments, &[DiffKind::Same, DiffKind::Added]),
        lines(new)
    );
}

#[test]
fn test_empty_old_is_pure_insertion() {
    let segments = diff_lines("", "x\ny");

    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| s.kind == DiffKind::Added));
    assert_eq!(segments[0].text, "x");
    assert_eq!(segments[1].text, "y");
}

#[test]
fn test_empty_new_is_pure_deletion() {
    let segments = diff_lines("x\ny", "");

    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| s.kind == DiffKind::Removed));
    assert_eq!(segments[0].text, "x");
    assert_eq!(segments[1].text, "y");
}

#[test]
fn test_both_empty_yields_nothing() {
    assert!(diff_lines("", "").is_empty());
}

#[test]
fn test_replacement_renders_delete_then_add() {
    let segments = diff_lines("L1\nL2\nL3", "L1\nX\nL3");

    let expected = [
        (DiffKind::Same, "L1"),
        (DiffKind::Removed, "L2"),
        (DiffKind::Added, "X"),
        (DiffKind::Same, "L3"),
    ];
    assert_eq!(segments.len(), expected.len());
    for (segment, (kind, text)) in segments.iter().zip(expected.iter()) {
        assert_eq!(segment.kind, *kind);
        assert_eq!(segment.text, *text);
    }
}

#[test]
fn test_crlf_and_lf_inputs_diff_identically() {
    let segments = diff_lines("a\r\nb\r\nc", "a\nb\nc");
    assert!(segments.iter().all(|s| s.kind == DiffKind::Same));
}

#[test]
fn test_trailing_separator_is_its_own_line() {
    // "a\n" has a trailing empty line, "a" does not.
    let segments = diff_lines("a\n", "a");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].kind, DiffKind::Same);
    assert_eq!(segments[1].kind, DiffKind::Removed);
    assert_eq!(segments[1].text, "");
}

#[test]
fn test_diff_is_deterministic() {
    let old = "one\ntwo\nthree\nfour";
    let new = "zero\ntwo\nthree point five\nfour";
    assert_eq!(diff_lines(old, new), diff_lines(old, new));
}

fn revision(text: &str, editor: &str) -> AnswerRevision {
    AnswerRevision {
        text: text.to_string(),
        edited_at: chrono::Utc::now(),
        editor_name: editor.to_string(),
    }
}

#[test]
fn test_revisions_diff_against_their_successors() {
    let history = vec![revision("v1", "ito"), revision("v1\nv2", "sato")];
    let diffs = diff_against_successors(&history, "v1\nv2\nv3");

    assert_eq!(diffs.len(), 2);

    // Oldest revision against the one that replaced it.
    assert_eq!(diffs[0].revision.editor_name, "ito");
    assert_eq!(
        diffs[0].segments,
        diff_lines("v1", "v1\nv2"),
    );

    // Newest revision against the live answer text.
    assert_eq!(
        diffs[1].segments,
        diff_lines("v1\nv2", "v1\nv2\nv3"),
    );
}

#[test]
fn test_empty_history_yields_no_diffs() {
    assert!(diff_against_successors(&[], "live").is_empty());
}
