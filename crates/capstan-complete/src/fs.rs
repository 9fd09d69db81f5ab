//! Filesystem path predictors.
//!
//! These complete the token against directory entries on the local machine:
//! the directory portion of the token picks which directory to list, and the
//! basename portion is the prefix to match. Directory candidates carry a
//! trailing `/` so the shell can keep descending.

use std::fs;
use std::path::Path;

use crate::predictor::{Args, Predictor};

/// Completes file paths. Directories are offered too, since a directory must
/// be enterable to reach the files inside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesPredictor;

impl Predictor for FilesPredictor {
    fn predict(&self, args: &Args) -> Vec<String> {
        path_candidates(&args.last, false)
    }
}

/// Completes directory paths only.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirsPredictor;

impl Predictor for DirsPredictor {
    fn predict(&self, args: &Args) -> Vec<String> {
        path_candidates(&args.last, true)
    }
}

/// List the directory named by `last`'s directory portion and keep entries
/// matching its basename prefix. Unreadable directories yield no candidates.
fn path_candidates(last: &str, dirs_only: bool) -> Vec<String> {
    // "src/ma" splits into the listing target "src/" and the prefix "ma".
    // A token without a separator lists the current directory.
    let (dir_part, base_prefix) = match last.rfind('/') {
        Some(idx) => last.split_at(idx + 1),
        None => ("", last),
    };

    let dir = if dir_part.is_empty() { Path::new(".") } else { Path::new(dir_part) };
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    for entry in entries.flatten() {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !name.starts_with(base_prefix) {
            continue;
        }
        // Dotfiles stay hidden until the user types the dot.
        if name.starts_with('.') && !base_prefix.starts_with('.') {
            continue;
        }

        let is_dir = entry.path().is_dir();
        if dirs_only && !is_dir {
            continue;
        }

        let mut candidate = format!("{dir_part}{name}");
        if is_dir {
            candidate.push('/');
        }
        candidates.push(candidate);
    }

    // Directory listing order is platform-dependent; completion menus expect
    // a stable order.
    candidates.sort();
    candidates
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
