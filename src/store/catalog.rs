use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::song::SongRecord;
use crate::store::SongCatalog;

/// In-memory songs keyed by id, kept in id order.
#[derive(Debug, Default)]
pub struct SongStore {
    songs: BTreeMap<String, SongRecord>,
}

impl SongStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a CSV file whose first line is a header.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.load_with(path, true)
    }

    pub fn load_with(&mut self, path: impl AsRef<Path>, header: bool) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let count = self.load_reader(BufReader::new(file), header)?;
        info!("Loaded {} songs from {}", count, path.display());

        Ok(count)
    }

    /// Parses every line of `reader` and merges the result into the store.
    ///
    /// Nothing is committed unless the whole source parses: a malformed line or a
    /// read error leaves the current contents exactly as they were. Ids already
    /// present, or repeated within the source, are overwritten by the later row.
    /// Returns the number of data lines parsed.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, header: bool) -> Result<usize> {
        let mut lines = reader.lines();

        if header {
            if let Some(first) = lines.next() {
                debug!("Skipping header: {}", first?);
            }
        }

        let first_data_line = if header { 2 } else { 1 };
        let mut pending = BTreeMap::new();
        let mut parsed = 0;

        for (offset, line) in lines.enumerate() {
            let line_number = first_data_line + offset;
            let line = line?;

            let song = SongRecord::from_csv_line(&line).map_err(|source| {
                warn!("Rejecting load, line {} is malformed: {}", line_number, source);
                AppError::Format {
                    line: line_number,
                    source,
                }
            })?;

            if pending.insert(song.id.clone(), song).is_some() {
                debug!("Line {} repeats an id seen earlier in the source", line_number);
            }
            parsed += 1;
        }

        let replaced = pending
            .keys()
            .filter(|id| self.songs.contains_key(id.as_str()))
            .count();
        if replaced > 0 {
            debug!("Overwriting {} existing songs", replaced);
        }

        self.songs.extend(pending);

        Ok(parsed)
    }

    pub fn get(&self, id: &str) -> Option<&SongRecord> {
        self.songs.get(id)
    }

    /// All songs in ascending id order.
    pub fn all(&self) -> impl Iterator<Item = &SongRecord> {
        self.songs.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.songs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl SongCatalog for SongStore {
    fn get(&self, id: &str) -> Option<&SongRecord> {
        SongStore::get(self, id)
    }

    fn all(&self) -> Vec<&SongRecord> {
        SongStore::all(self).collect()
    }
}
