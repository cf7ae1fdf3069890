//! The per-file inclusion decision.

use crate::patterns::PatternSet;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Directory names skipped entirely during traversal.
///
/// Process-wide constant; copy into per-run state before customizing.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    "node_modules",
    "bower_components",
    ".vscode",
    ".idea",
    ".project",
    ".settings",
    "build",
    "dist",
    "target",
    "out",
    "venv",
    ".venv",
    "env",
    ".env",
];

/// File extensions (lowercase, without the dot) treated as binary without
/// inspecting content. A heuristic, not a guarantee.
pub const DEFAULT_BINARY_EXTENSIONS: &[&str] = &[
    "exe", "dll", "so", "a", "o", "obj", "jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp",
    "mp3", "wav", "ogg", "flac", "mp4", "avi", "mov", "mkv", "webm", "pdf", "doc", "docx", "xls",
    "xlsx", "ppt", "pptx", "zip", "tar", "gz", "bz2", "rar", "7z", "iso", "img", "bin", "dat",
    "pyc", "pyo", "class", "jar", "sqlite", "db", "eot", "otf", "ttf", "woff", "woff2",
];

/// The outcome of filtering one candidate file, with its reason category.
///
/// Used for diagnostics only; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Passed every filter stage.
    Accepted,
    /// Classified binary but explicitly matched by an include pattern.
    AcceptedBinary,
    /// A path segment is an ignored directory name.
    IgnoredDir,
    /// Matched an exclude pattern.
    Excluded,
    /// Include patterns were given and none matched.
    NotIncluded,
    /// Classified binary and not explicitly included.
    Binary,
    /// Exceeded the configured size limit (raised by the orchestrator).
    TooLarge,
    /// Sampling or full read failed (raised by the orchestrator).
    ReadError,
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted | Decision::AcceptedBinary)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Decision::Accepted => "accepted",
            Decision::AcceptedBinary => "appears binary but matched an include pattern",
            Decision::IgnoredDir => "ignored directory component in path",
            Decision::Excluded => "excluded by pattern",
            Decision::NotIncluded => "not included by any pattern",
            Decision::Binary => "likely binary and not explicitly included",
            Decision::TooLarge => "file too large",
            Decision::ReadError => "error reading file",
        };
        f.write_str(reason)
    }
}

/// Heuristic binary check: known binary extension (case-insensitive) or more
/// than 10% null bytes in the content sample.
pub(crate) fn is_likely_binary(relative_path: &str, sample: &[u8]) -> bool {
    if let Some(ext) = Path::new(relative_path).extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        if DEFAULT_BINARY_EXTENSIONS.contains(&ext.as_str()) {
            return true;
        }
    }
    let nulls = sample.iter().filter(|&&b| b == 0).count();
    nulls * 10 > sample.len()
}

/// Decides whether a candidate file should be included.
///
/// Stages apply in strict order, first matching rule wins:
///
/// 1. any path segment in `ignored_dirs` rejects (redundant with
///    traversal-time pruning, but an invariant for any path reaching here);
/// 2. any exclude match rejects — exclude takes precedence over include;
/// 3. a non-empty include set with no match rejects; an empty set passes
///    everything;
/// 4. the binary heuristic rejects unless an include pattern explicitly
///    matched the path, in which case the file is accepted as
///    [`Decision::AcceptedBinary`].
///
/// `relative_path` must be relative to the scan root and `/`-separated.
pub fn decide(
    relative_path: &str,
    ignored_dirs: &HashSet<String>,
    include: &PatternSet,
    exclude: &PatternSet,
    sample: &[u8],
) -> Decision {
    if relative_path
        .split('/')
        .any(|segment| ignored_dirs.contains(segment))
    {
        return Decision::IgnoredDir;
    }
    if exclude.is_match(relative_path) {
        return Decision::Excluded;
    }
    let explicitly_included = include.is_match(relative_path);
    if !include.is_empty() && !explicitly_included {
        return Decision::NotIncluded;
    }
    if is_likely_binary(relative_path, sample) {
        if explicitly_included {
            return Decision::AcceptedBinary;
        }
        return Decision::Binary;
    }
    Decision::Accepted
}
