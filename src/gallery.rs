//! Stage gallery images: numeric ordering and stage-id resolution.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::Result;

/// Asset subdirectories holding gallery shots, one per physical stage.
pub const STAGE_DIRS: &[&str] = &["stageone", "stagetwo", "stagethree"];

static EMBEDDED_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Map a show-instance id onto its stage's asset directory. All shows on
/// one physical stage share a gallery.
fn stage_dir_for(stage_id: &str) -> Option<&'static str> {
    if stage_id.starts_with("stage-one") {
        Some("stageone")
    } else if stage_id.starts_with("stage-two") {
        Some("stagetwo")
    } else if stage_id.starts_with("stage-three") {
        Some("stagethree")
    } else {
        None
    }
}

fn embedded_number(path: &str) -> u64 {
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    EMBEDDED_NUMBER
        .find(&name)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Order image paths by the first number embedded in the filename, so
/// "img9.webp" precedes "img10.webp". Stray editor duplicates (" copy"
/// files) are dropped.
pub fn sorted_image_paths(paths: Vec<String>) -> Vec<String> {
    let mut paths: Vec<String> = paths
        .into_iter()
        .filter(|p| !p.contains(" copy"))
        .collect();
    paths.sort_by_key(|p| embedded_number(p));
    paths
}

/// Ordered gallery images per stage directory.
#[derive(Debug, Default)]
pub struct Gallery {
    by_dir: HashMap<String, Vec<String>>,
}

impl Gallery {
    /// Build from in-memory listings; each listing is ordered on the way in.
    pub fn from_listings<I>(listings: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let by_dir = listings
            .into_iter()
            .map(|(dir, paths)| (dir, sorted_image_paths(paths)))
            .collect();
        Self { by_dir }
    }

    /// Scan the asset root for `.webp` gallery shots under each stage
    /// directory. A missing stage directory yields an empty gallery for
    /// that stage; read failures on an existing directory propagate.
    pub fn scan(root: &Path) -> Result<Self> {
        let mut listings = Vec::new();
        for dir in STAGE_DIRS {
            let stage_path = root.join(dir);
            if !stage_path.is_dir() {
                debug!(dir, "no gallery directory, skipping");
                continue;
            }
            let mut paths = Vec::new();
            for entry in fs::read_dir(&stage_path)? {
                let entry = entry?;
                let path = entry.path();
                let is_webp = path
                    .extension()
                    .map(|e| e.eq_ignore_ascii_case("webp"))
                    .unwrap_or(false);
                if path.is_file() && is_webp {
                    paths.push(path.to_string_lossy().into_owned());
                }
            }
            listings.push(((*dir).to_string(), paths));
        }
        Ok(Self::from_listings(listings))
    }

    /// Ordered image paths for a show instance; empty (with a warning)
    /// when the stage id maps to nothing.
    pub fn images(&self, stage_id: &str) -> &[String] {
        let Some(dir) = stage_dir_for(stage_id) else {
            warn!(stage_id, "no gallery images found for stage");
            return &[];
        };
        match self.by_dir.get(dir) {
            Some(paths) => paths,
            None => {
                warn!(stage_id, "no gallery images found for stage");
                &[]
            }
        }
    }

    /// An evenly-sampled selection across all stages, de-duplicated and
    /// capped at `max`. Used for the credits page mosaic.
    pub fn all_images(&self, max: usize) -> Vec<String> {
        let per_stage = max.div_ceil(STAGE_DIRS.len());
        let mut selected = Vec::new();

        for dir in STAGE_DIRS {
            let Some(paths) = self.by_dir.get(*dir) else {
                continue;
            };
            for path in sample_evenly(paths, per_stage) {
                if !selected.contains(path) {
                    selected.push(path.clone());
                }
            }
        }

        selected.truncate(max);
        selected
    }
}

/// Evenly-spaced sample of `count` items, preserving order.
fn sample_evenly<T>(items: &[T], count: usize) -> impl Iterator<Item = &T> {
    let len = items.len();
    let indices: Vec<usize> = if count >= len {
        (0..len).collect()
    } else {
        (0..count).map(move |i| i * len / count).collect()
    };
    indices.into_iter().map(move |i| &items[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| (*p).to_string()).collect()
    }

    #[test]
    fn test_numeric_ordering_beats_lexicographic() {
        let sorted = sorted_image_paths(listing(&[
            "stageone10.webp",
            "stageone2.webp",
            "stageone9.webp",
            "stageone1.webp",
        ]));
        assert_eq!(
            sorted,
            listing(&[
                "stageone1.webp",
                "stageone2.webp",
                "stageone9.webp",
                "stageone10.webp",
            ])
        );
    }

    #[test]
    fn test_copy_files_excluded() {
        let sorted = sorted_image_paths(listing(&[
            "stagetwo1.webp",
            "stagetwo1 copy.webp",
            "stagetwo2.webp",
        ]));
        assert_eq!(sorted, listing(&["stagetwo1.webp", "stagetwo2.webp"]));
    }

    #[test]
    fn test_numbers_extracted_from_filename_not_directory() {
        let sorted = sorted_image_paths(listing(&[
            "shoot2024/img3.webp",
            "shoot2024/img1.webp",
        ]));
        assert_eq!(sorted, listing(&["shoot2024/img1.webp", "shoot2024/img3.webp"]));
    }

    #[test]
    fn test_images_resolves_stage_prefix() {
        let gallery = Gallery::from_listings([
            ("stageone".to_string(), listing(&["stageone1.webp"])),
            ("stagetwo".to_string(), listing(&["stagetwo1.webp"])),
        ]);
        assert_eq!(gallery.images("stage-one-monday"), listing(&["stageone1.webp"]));
        // Every Thursday Stage Two show shares the stage-two gallery.
        assert_eq!(
            gallery.images("stage-two-thursday-pirated"),
            listing(&["stagetwo1.webp"])
        );
        assert!(gallery.images("stage-nine-someday").is_empty());
    }

    #[test]
    fn test_all_images_sampled_and_capped() {
        let many: Vec<String> = (1..=20).map(|i| format!("stageone{}.webp", i)).collect();
        let gallery = Gallery::from_listings([
            ("stageone".to_string(), many),
            ("stagetwo".to_string(), listing(&["stagetwo1.webp"])),
        ]);
        let all = gallery.all_images(6);
        assert_eq!(all.len(), 3);
        assert!(all.contains(&"stageone1.webp".to_string()));
        assert!(all.contains(&"stagetwo1.webp".to_string()));

        let capped = gallery.all_images(2);
        assert_eq!(capped.len(), 2);
    }
}
