use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Same,
    Added,
    Removed,
}

/// One line of a rendered diff.
///
/// Concatenating the `Same` + `Removed` segments (in order) reconstructs the
/// old document's lines; `Same` + `Added` reconstructs the new document's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffSegment {
    fn new(kind: DiffKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Compute a line-level diff between two text blobs.
///
/// Classic LCS alignment walked front-to-back. On a mismatch where both
/// choices preserve an equally long common subsequence, the old line is
/// removed first; adjacent replacements therefore always render as
/// delete-then-add. Callers depend on that ordering, so it is part of the
/// contract, not an implementation detail.
///
/// Splitting is separator-based and newline-agnostic: `\r\n` and `\n` are
/// equivalent, and a trailing separator produces a final empty line rather
/// than being dropped. Total over any two inputs, including empty strings.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffSegment> {
    let a = split_lines(old);
    let b = split_lines(new);
    let n = a.len();
    let m = b.len();

    // dp[i][j] = LCS length of a[i..] and b[j..], filled from the ends.
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if a[i] == b[j] {
                dp[i + 1][j + 1] + 1
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    let mut segments = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            segments.push(DiffSegment::new(DiffKind::Same, a[i]));
            i += 1;
            j += 1;
        } else if dp[i + 1][j] >= dp[i][j + 1] {
            segments.push(DiffSegment::new(DiffKind::Removed, a[i]));
            i += 1;
        } else {
            segments.push(DiffSegment::new(DiffKind::Added, b[j]));
            j += 1;
        }
    }
    while i < n {
        segments.push(DiffSegment::new(DiffKind::Removed, a[i]));
        i += 1;
    }
    while j < m {
        segments.push(DiffSegment::new(DiffKind::Added, b[j]));
        j += 1;
    }

    segments
}

fn split_lines(text: &str) -> Vec<&str> {
    // The empty document has no lines; "a\n" is the two lines ["a", ""].
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
