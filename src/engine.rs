use crate::error::DigestError;
use crate::filter::{Decision, decide};
use crate::options::DigestOptions;
use crate::patterns::PatternSet;
use crate::tree::render_tree;
use crate::types::{DigestResult, FileRecord};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

const SAMPLE_LEN: u64 = 1024;

fn build_walker(root: &Path, options: &DigestOptions) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(false);
    // Prune ignored directory names before descending; those subtrees are
    // never stat'd.
    let ignored = options.ignored_dirs.clone();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        match entry.file_type() {
            Some(ft) if ft.is_dir() => {
                !ignored.contains(entry.file_name().to_string_lossy().as_ref())
            }
            _ => true,
        }
    });
    builder.build()
}

/// Walks `options.root`, filters each file, and collects the survivors.
///
/// The returned tree header is sorted by the renderer; the file records keep
/// traversal-discovery order. That asymmetry is intentional.
///
/// # Errors
///
/// Fails before any traversal on an invalid root or an invalid glob pattern.
/// Per-file problems (oversized, unreadable) skip the file and continue.
pub fn digest(options: DigestOptions) -> Result<DigestResult, DigestError> {
    if !options.root.is_dir() {
        return Err(DigestError::InvalidRoot {
            path: options.root.clone(),
        });
    }
    let root = options
        .root
        .canonicalize()
        .map_err(|e| DigestError::io(&options.root, e))?;
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());
    #[cfg(feature = "logging")]
    tracing::debug!("starting digest with root: {}", root.display());

    let include = PatternSet::compile(&options.include_patterns)?;
    let exclude = PatternSet::compile(&options.exclude_patterns)?;
    if options.verbose {
        for glob in include.globs() {
            eprintln!("DEBUG: include glob '{}' -> regex '{}'", glob.glob(), glob.regex());
        }
        for glob in exclude.globs() {
            eprintln!("DEBUG: exclude glob '{}' -> regex '{}'", glob.glob(), glob.regex());
        }
    }

    if !options.no_git_check && !root.join(".git").is_dir() {
        eprintln!(
            "Warning: '{root_name}' does not appear to be a Git repository (no .git directory). Proceeding anyway."
        );
    }

    let max_bytes = options.max_file_size_bytes();
    let mut files: Vec<FileRecord> = Vec::new();
    let mut accepted_paths: Vec<String> = Vec::new();

    for result in build_walker(&root, &options) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                if options.verbose {
                    eprintln!("Skipping (walk error: {err})");
                }
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let relative = relative_string(entry.path(), &root);

        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                skip(&options, Decision::ReadError, &relative, &format!("{err}"));
                continue;
            }
        };
        if size > max_bytes {
            let detail = format!(
                "{:.2}MB > {}MB",
                size as f64 / (1024.0 * 1024.0),
                options.max_file_size_mb
            );
            skip(&options, Decision::TooLarge, &relative, &detail);
            continue;
        }

        let sample = match read_sample(entry.path()) {
            Ok(sample) => sample,
            Err(err) => {
                skip(&options, Decision::ReadError, &relative, &format!("{err}"));
                continue;
            }
        };

        let decision = decide(
            &relative,
            &options.ignored_dirs,
            &include,
            &exclude,
            &sample,
        );
        if !decision.is_accepted() {
            if options.verbose {
                eprintln!("Skipping ({decision}): {relative}");
            }
            continue;
        }
        if decision == Decision::AcceptedBinary && options.verbose {
            eprintln!(
                "Warning: including '{relative}' which appears binary but matched an include pattern"
            );
        }

        match read_lossy(entry.path()) {
            Ok(content) => {
                if options.verbose {
                    eprintln!("Including: {relative}");
                }
                accepted_paths.push(relative.clone());
                files.push(FileRecord {
                    path: relative,
                    content,
                });
            }
            Err(err) => {
                skip(&options, Decision::ReadError, &relative, &format!("{err}"));
            }
        }
    }

    #[cfg(feature = "logging")]
    tracing::debug!("digest accepted {} files", files.len());
    let tree = render_tree(&accepted_paths, &root_name);
    Ok(DigestResult { tree, files })
}

fn skip(options: &DigestOptions, decision: Decision, relative: &str, detail: &str) {
    if options.verbose {
        eprintln!("Skipping ({decision}: {detail}): {relative}");
    }
}

/// First 1024 bytes of the file, for the binary heuristic. The handle is
/// released before the decision is made.
fn read_sample(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut sample = Vec::with_capacity(SAMPLE_LEN as usize);
    file.take(SAMPLE_LEN).read_to_end(&mut sample)?;
    Ok(sample)
}

fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn relative_string(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
