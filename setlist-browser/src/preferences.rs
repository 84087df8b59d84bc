//! Durable UI preferences.
//!
//! The browser keeps two values between sessions, each under a string key:
//! the view mode and the list of collapsed sections. Stores are best-effort;
//! the browser logs and ignores every error they return.
use camino::{Utf8Path, Utf8PathBuf};
use setlist_core::error::{Result, SetlistError};
use setlist_core::filter::ViewMode;
use setlist_core::section::Section;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use tracing::{debug, warn};

pub const VIEW_MODE_KEY: &str = "setlist-view-mode";
pub const COLLAPSED_SECTIONS_KEY: &str = "setlist-collapsed-sections";

/// String key-value store behind the browser's persisted preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Process-local store, for tests and for runs without a preferences file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Preferences kept in a small `key: value` text file.
///
/// Every read goes to disk and skips lines it cannot parse. Writes rewrite
/// the whole file through a temporary file and a rename, dropping those
/// lines.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Utf8PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            debug!("Preferences file not found: {}", self.path);
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut values = BTreeMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once(':') {
                Some((key, value)) => {
                    values.insert(key.trim().to_owned(), value.trim().to_owned());
                }
                None => warn!("Skipping malformed line in {}: {:?}", self.path, line),
            }
        }

        Ok(values)
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let mut content = String::new();
        for (key, value) in values {
            content.push_str(&format!("{}: {}\n", key, value));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to file atomically (write to temp, then rename)
        let temp_path = format!("{}.tmp", self.path);
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        debug!("Preferences saved to {}", self.path);
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.contains(':') || key.contains('\n') || value.contains('\n') {
            return Err(SetlistError::Preferences(format!(
                "Cannot store {key:?}: keys may not contain ':' and values must be one line"
            )));
        }
        let mut values = self.load()?;
        values.insert(key.to_owned(), value.to_owned());
        self.save(&values)
    }
}

pub fn decode_view_mode(raw: &str) -> Result<ViewMode> {
    raw.trim().parse().map_err(SetlistError::Preferences)
}

/// Collapsed sections are stored as a JSON array of section names. Names
/// that are not sections are dropped.
pub fn decode_collapsed_sections(raw: &str) -> Result<BTreeSet<Section>> {
    let names: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| SetlistError::Preferences(format!("Invalid collapsed sections: {}", e)))?;

    Ok(names.iter().filter_map(|name| Section::from_name(name)).collect())
}

pub fn encode_collapsed_sections(sections: &BTreeSet<Section>) -> String {
    let names: Vec<&str> = sections.iter().map(Section::name).collect();
    // a Vec<&str> always serializes
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_roundtrip() {
        let sections: BTreeSet<Section> = [Section::Latin, Section::PartyTop40].into_iter().collect();
        let encoded = encode_collapsed_sections(&sections);
        assert_eq!(encoded, r#"["Party Music / Top 40","Latin"]"#);
        assert_eq!(decode_collapsed_sections(&encoded).unwrap(), sections);
    }

    #[test]
    fn test_unknown_section_names_are_dropped() {
        let decoded = decode_collapsed_sections(r#"["Latin","Polka"]"#).unwrap();
        assert_eq!(decoded.into_iter().collect::<Vec<_>>(), vec![Section::Latin]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(decode_collapsed_sections("[\"Latin\"").is_err());
        assert!(decode_collapsed_sections(r#"{"Latin": true}"#).is_err());
    }

    #[test]
    fn test_view_mode_decoding() {
        assert_eq!(decode_view_mode("grid").unwrap(), ViewMode::Grid);
        assert!(decode_view_mode("tiles").is_err());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new().with_value(VIEW_MODE_KEY, "grid");
        assert_eq!(store.get(VIEW_MODE_KEY).unwrap().as_deref(), Some("grid"));
        store.set(VIEW_MODE_KEY, "list").unwrap();
        assert_eq!(store.get(VIEW_MODE_KEY).unwrap().as_deref(), Some("list"));
        assert_eq!(store.get("other").unwrap(), None);
    }
}
