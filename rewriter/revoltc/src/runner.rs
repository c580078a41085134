//! File discovery and write-back.
//!
//! The engine maps text to text; everything filesystem-shaped lives here.
//! Errors are reported per file and do not abort the remaining files.

use crate::options::Options;
use revolt_rewrite::rewrite;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Aggregate result of one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub calls_converted: usize,
    pub lossy_conversions: usize,
    pub failures: usize,
}

impl RunSummary {
    pub fn succeeded(&self) -> bool {
        self.failures == 0
    }
}

/// Process every path in the options.
pub fn run(options: &Options) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut files = Vec::new();
    for path in &options.paths {
        if let Err(err) = collect_source_files(path, &mut files) {
            eprintln!("error: {}: {err}", path.display());
            summary.failures += 1;
        }
    }
    files.sort();
    files.dedup();

    for file in &files {
        match process_file(file, options) {
            Ok(outcome) => {
                summary.files_scanned += 1;
                if outcome.changed {
                    summary.files_changed += 1;
                }
                summary.calls_converted += outcome.converted;
                summary.lossy_conversions += outcome.lossy;
                if options.verbose && outcome.changed {
                    println!(
                        "{}: {} conversion(s){}",
                        file.display(),
                        outcome.converted + outcome.imports,
                        if outcome.lossy > 0 {
                            " (dropped legacy messages)"
                        } else {
                            ""
                        }
                    );
                } else if options.dry_run && outcome.changed {
                    println!("would rewrite {}", file.display());
                }
            }
            Err(err) => {
                eprintln!("error: {}: {err}", file.display());
                summary.failures += 1;
            }
        }
    }
    summary
}

/// What happened to a single file.
#[derive(Debug)]
struct FileOutcome {
    changed: bool,
    converted: usize,
    lossy: usize,
    imports: usize,
}

fn process_file(path: &Path, options: &Options) -> Result<FileOutcome, String> {
    let source = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let outcome = rewrite(&source).map_err(|e| e.to_string())?;
    let changed = outcome.changed();

    if changed {
        if outcome.lossy > 0 {
            warn!(
                path = %path.display(),
                count = outcome.lossy,
                "conversion dropped legacy diagnostic messages"
            );
        }
        if !options.dry_run {
            if let Some(backup_dir) = &options.backup_dir {
                back_up(path, backup_dir).map_err(|e| e.to_string())?;
            }
            fs::write(path, &outcome.text).map_err(|e| e.to_string())?;
            info!(path = %path.display(), "rewrote file");
        }
    }

    Ok(FileOutcome {
        changed,
        converted: outcome.converted,
        lossy: outcome.lossy,
        imports: outcome.imports_rewritten,
    })
}

/// Copy `path` into `backup_dir`, creating the directory if needed.
fn back_up(path: &Path, backup_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(backup_dir)?;
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    fs::copy(path, backup_dir.join(name))?;
    Ok(())
}

/// Recursively collect `.swift` files. A file path is taken as-is
/// regardless of extension, so explicit single-file invocations always
/// work.
fn collect_source_files(path: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    let metadata = fs::metadata(path)?;
    if metadata.is_file() {
        files.push(path.to_path_buf());
        return Ok(());
    }
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_source_files(&entry_path, files)?;
        } else if entry_path.extension().is_some_and(|ext| ext == "swift") {
            files.push(entry_path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("revolt-test-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn rewrites_files_in_place() {
        let dir = scratch_dir("in-place");
        let file = dir.join("UserTests.swift");
        fs::write(&file, "assertTrue(x)\n").unwrap();

        let options = Options {
            paths: vec![dir.clone()],
            ..Options::default()
        };
        let summary = run(&options);
        assert!(summary.succeeded());
        assert_eq!(summary.files_changed, 1);
        assert_eq!(fs::read_to_string(&file).unwrap(), "expect(x)\n");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = scratch_dir("dry-run");
        let file = dir.join("T.swift");
        fs::write(&file, "assertNil(x)\n").unwrap();

        let options = Options {
            dry_run: true,
            paths: vec![dir.clone()],
            ..Options::default()
        };
        let summary = run(&options);
        assert_eq!(summary.files_changed, 1);
        assert_eq!(fs::read_to_string(&file).unwrap(), "assertNil(x)\n");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn backup_preserves_the_original() {
        let dir = scratch_dir("backup");
        let file = dir.join("T.swift");
        fs::write(&file, "fail(\"boom\")\n").unwrap();
        let backup = dir.join("orig");

        let options = Options {
            backup_dir: Some(backup.clone()),
            paths: vec![file.clone()],
            ..Options::default()
        };
        let summary = run(&options);
        assert!(summary.succeeded());
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "Issue.record(\"boom\")\n"
        );
        assert_eq!(
            fs::read_to_string(backup.join("T.swift")).unwrap(),
            "fail(\"boom\")\n"
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn non_swift_files_in_directories_are_skipped() {
        let dir = scratch_dir("skip");
        let file = dir.join("notes.txt");
        fs::write(&file, "assertTrue(x)\n").unwrap();

        let options = Options {
            paths: vec![dir.clone()],
            ..Options::default()
        };
        let summary = run(&options);
        assert_eq!(summary.files_scanned, 0);
        assert_eq!(fs::read_to_string(&file).unwrap(), "assertTrue(x)\n");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unreadable_paths_are_reported_not_fatal() {
        let dir = scratch_dir("missing");
        let good = dir.join("Ok.swift");
        fs::write(&good, "assertTrue(x)\n").unwrap();

        let options = Options {
            paths: vec![dir.join("does-not-exist"), good.clone()],
            ..Options::default()
        };
        let summary = run(&options);
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.files_changed, 1);

        fs::remove_dir_all(&dir).unwrap();
    }
}
