//! Performer photo matching.
//!
//! Photo filenames come from many hands and rarely match display names
//! exactly, so both sides reduce to a shared key: lowercase, diacritics
//! stripped, nothing but ASCII letters and digits left. Unlike the record
//! id derivation this pass is Unicode-aware.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

/// Placeholder asset for performers without a usable photo.
pub const NO_PHOTO_PLACEHOLDER: &str = "nophoto.png";

/// Performers who opted out of (or never supplied) a photo.
pub const PERFORMERS_WITHOUT_PHOTOS: &[&str] =
    &["Charlie Flack", "Thomas McColl", "Leila Skan", "Olivia Ogeimi"];

static IMAGE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png|webp)$").unwrap());
static COPY_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([0-9]+\)").unwrap());

/// Reduce a performer display name to its photo lookup key.
pub fn photo_key(name: &str) -> String {
    name.to_lowercase()
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Reduce a photo filename to the same key space: drop the extension,
/// "(1)"-style copy suffixes and stray '@' characters, then strip.
pub fn normalize_photo_name(filename: &str) -> String {
    let stem = IMAGE_EXTENSION.replace(filename, "");
    let cleaned = COPY_SUFFIX.replace_all(&stem, "").replace('@', "");
    photo_key(cleaned.trim())
}

/// Lookup table from photo key to the best available asset filename.
/// When several assets share a key, a `.webp` beats jpg/jpeg/png.
#[derive(Debug, Default)]
pub struct PhotoLibrary {
    by_key: HashMap<String, String>,
}

impl PhotoLibrary {
    /// Build the library from any iterator of asset filenames.
    pub fn from_filenames<I, S>(filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut preferred: HashMap<String, String> = HashMap::new();
        let mut fallback: HashMap<String, String> = HashMap::new();

        for filename in filenames {
            let filename = filename.into();
            if !IMAGE_EXTENSION.is_match(&filename) {
                continue;
            }
            let key = normalize_photo_name(&filename);
            if key.is_empty() {
                continue;
            }
            let is_webp = filename.to_lowercase().ends_with(".webp");
            if is_webp {
                preferred.insert(key, filename);
            } else {
                fallback.insert(key, filename);
            }
        }

        let mut by_key = fallback;
        for (key, filename) in preferred {
            by_key.insert(key, filename);
        }

        debug!("photo library holds {} keys", by_key.len());
        Self { by_key }
    }

    /// Build the library from the files in a directory.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut filenames = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                filenames.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(Self::from_filenames(filenames))
    }

    /// The asset filename for a performer, the placeholder for skip-listed
    /// names, or None when nothing matches.
    pub fn photo_for(&self, name: &str) -> Option<&str> {
        if PERFORMERS_WITHOUT_PHOTOS.contains(&name) {
            return Some(NO_PHOTO_PLACEHOLDER);
        }
        self.by_key.get(&photo_key(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_key_strips_diacritics() {
        assert_eq!(photo_key("Anaïs Lyons"), "anaislyons");
        assert_eq!(photo_key("Amelia O'Rielly"), "ameliaorielly");
    }

    #[test]
    fn test_normalize_photo_name_drops_noise() {
        assert_eq!(normalize_photo_name("Jack Carter (2).jpg"), "jackcarter");
        assert_eq!(normalize_photo_name("eve@martin.PNG"), "evemartin");
        assert_eq!(normalize_photo_name("Neve Duthie.webp"), "neveduthie");
    }

    #[test]
    fn test_webp_preferred_over_jpg() {
        let library = PhotoLibrary::from_filenames([
            "Jack Carter.jpg",
            "Jack Carter.webp",
            "Eve Martin.png",
        ]);
        assert_eq!(library.photo_for("Jack Carter"), Some("Jack Carter.webp"));
        assert_eq!(library.photo_for("Eve Martin"), Some("Eve Martin.png"));
    }

    #[test]
    fn test_skip_list_uses_placeholder() {
        let library = PhotoLibrary::from_filenames(["Charlie Flack.webp"]);
        assert_eq!(library.photo_for("Charlie Flack"), Some(NO_PHOTO_PLACEHOLDER));
    }

    #[test]
    fn test_unmatched_name_is_none() {
        let library = PhotoLibrary::from_filenames(["Jack Carter.webp"]);
        assert_eq!(library.photo_for("Maggie Amarant"), None);
    }

    #[test]
    fn test_diacritic_name_matches_plain_filename() {
        let library = PhotoLibrary::from_filenames(["Anais Lyons.webp"]);
        assert_eq!(library.photo_for("Anaïs Lyons"), Some("Anais Lyons.webp"));
    }

    #[test]
    fn test_non_image_files_ignored() {
        let library = PhotoLibrary::from_filenames(["notes.txt", "Thumbs.db"]);
        assert!(library.is_empty());
    }
}
