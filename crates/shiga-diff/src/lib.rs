pub mod engine;
pub mod revision;

pub use engine::{diff_lines, DiffKind, DiffSegment};
pub use revision::{diff_against_successors, RevisionDiff};
