use crate::parser::CatalogParser;
use setlist_core::error::{Result, SetlistError};
use setlist_core::song::Song;
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable, shareable song collection with an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Arc<[Song]>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build from already-parsed songs. Later duplicates of an id are ignored
    /// by the index, so lookups always return the first occurrence.
    pub fn from_songs(songs: Vec<Song>) -> Self {
        let mut index = HashMap::with_capacity(songs.len());
        for (pos, song) in songs.iter().enumerate() {
            index.entry(song.id.clone()).or_insert(pos);
        }
        Self {
            songs: songs.into(),
            index,
        }
    }

    pub fn embedded() -> Self {
        Self::from_songs(CatalogParser::default().parse())
    }

    pub fn songs(&self) -> Arc<[Song]> {
        Arc::clone(&self.songs)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Song> {
        self.index.get(id).map(|&pos| &self.songs[pos])
    }

    /// Like `get`, for callers that treat an unknown id as an error.
    pub fn require(&self, id: &str) -> Result<&Song> {
        self.get(id)
            .ok_or_else(|| SetlistError::NotFound(format!("No song with id {id:?}")))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Songs whose ids appear in `ids`, in catalog order. Unknown ids are
    /// ignored.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Song> {
        let mut positions: Vec<usize> = ids
            .iter()
            .filter_map(|id| self.index.get(id.as_ref()).copied())
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions.into_iter().map(|pos| &self.songs[pos]).collect()
    }
}
