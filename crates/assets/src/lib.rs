//! Frame assets - animation frames loaded from disk
//!
//! Frames live in one directory per category under a common root:
//!
//! ```text
//! assets/
//!   rocket/     rocket_frame_1.txt, rocket_frame_2.txt
//!   garbage/    duck.txt, hubble.txt, lamp.txt, ...
//!   explosion/  explosion_1.txt ... explosion_4.txt
//!   game_over/  game_over.txt
//! ```
//!
//! Every `.txt` file is one frame; files are read in file-name order. Loading
//! happens once at startup and any failure is fatal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Frame categories the game needs.
pub const CATEGORIES: [&str; 4] = ["rocket", "garbage", "explosion", "game_over"];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset directory {} is missing or unreadable: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read frame {}: {source}", .path.display())]
    Frame {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("frame {} is empty", .path.display())]
    EmptyFrame { path: PathBuf },
    #[error("no frames found in {}", .path.display())]
    EmptyCategory { path: PathBuf },
}

/// All frames, by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLibrary {
    pub rocket: Vec<String>,
    pub garbage: Vec<String>,
    pub explosion: Vec<String>,
    pub game_over: Vec<String>,
}

impl FrameLibrary {
    /// Load every category under `root`.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, AssetError> {
        let root = root.as_ref();
        Ok(Self {
            rocket: load_category(&root.join("rocket"))?,
            garbage: load_category(&root.join("garbage"))?,
            explosion: load_category(&root.join("explosion"))?,
            game_over: load_category(&root.join("game_over"))?,
        })
    }
}

/// Load all `.txt` frames in `dir`, sorted by file name.
pub fn load_category(dir: &Path) -> Result<Vec<String>, AssetError> {
    let entries = fs::read_dir(dir).map_err(|source| AssetError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AssetError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(AssetError::EmptyCategory {
            path: dir.to_path_buf(),
        });
    }

    let mut frames = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|source| AssetError::Frame {
            path: path.clone(),
            source,
        })?;
        let frame = normalize(&text);
        if frame.trim().is_empty() {
            return Err(AssetError::EmptyFrame { path });
        }
        debug!(path = %path.display(), lines = frame.lines().count(), "frame loaded");
        frames.push(frame);
    }
    Ok(frames)
}

/// Strip `\r` and trailing blank lines; keep leading indentation intact.
fn normalize(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "space-garbage-assets-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write(dir: &Path, category: &str, file: &str, text: &str) {
        let d = dir.join(category);
        fs::create_dir_all(&d).unwrap();
        fs::write(d.join(file), text).unwrap();
    }

    #[test]
    fn test_normalize_drops_trailing_blank_lines() {
        assert_eq!(normalize("  ab\r\n c \r\n\r\n  \n"), "  ab\n c ");
        assert_eq!(normalize("\n\n"), "");
    }

    #[test]
    fn test_loads_sorted_txt_frames_only() {
        let dir = scratch("sorted");
        write(&dir, "garbage", "b.txt", "BBB\n");
        write(&dir, "garbage", "a.txt", "A\n");
        write(&dir, "garbage", "notes.md", "ignored");

        let frames = load_category(&dir.join("garbage")).unwrap();
        assert_eq!(frames, vec!["A".to_string(), "BBB".to_string()]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = scratch("missing");
        let err = FrameLibrary::load(&dir).unwrap_err();
        assert!(matches!(err, AssetError::Directory { .. }));
        assert!(err.to_string().contains("rocket"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_category_and_empty_frame_are_errors() {
        let dir = scratch("empty");
        fs::create_dir_all(dir.join("rocket")).unwrap();
        assert!(matches!(
            load_category(&dir.join("rocket")),
            Err(AssetError::EmptyCategory { .. })
        ));

        write(&dir, "rocket", "blank.txt", "   \n\n");
        assert!(matches!(
            load_category(&dir.join("rocket")),
            Err(AssetError::EmptyFrame { .. })
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_loads_full_library() {
        let dir = scratch("full");
        for category in CATEGORIES {
            write(&dir, category, "frame.txt", category);
        }
        let lib = FrameLibrary::load(&dir).unwrap();
        assert_eq!(lib.rocket, vec!["rocket".to_string()]);
        assert_eq!(lib.game_over, vec!["game_over".to_string()]);
        fs::remove_dir_all(&dir).unwrap();
    }
}
