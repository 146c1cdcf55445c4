use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One song and its audio features, as read from a catalogue row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub year: i32,
    pub release_date: String,
    pub duration_ms: i64,
    pub explicit: i32,
    pub key: i32,
    pub mode: i32,
    pub popularity: i32,
    pub valence: f64,
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub loudness: f64,
    pub speechiness: f64,
    pub tempo: f64,
}

impl Default for SongRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: UNKNOWN_TITLE.to_string(),
            artists: vec![UNKNOWN_ARTIST.to_string()],
            year: 0,
            release_date: "0".to_string(),
            duration_ms: 0,
            explicit: 0,
            key: 0,
            mode: 0,
            popularity: 0,
            valence: 0.0,
            acousticness: 0.0,
            danceability: 0.0,
            energy: 0.0,
            instrumentalness: 0.0,
            liveness: 0.0,
            loudness: 0.0,
            speechiness: 0.0,
            tempo: 0.0,
        }
    }
}

impl SongRecord {
    pub fn is_explicit(&self) -> bool {
        self.explicit != 0
    }

    /// One-line form used by listings: `id  name - artists (year)`.
    pub fn summary(&self) -> String {
        format!(
            "{}  {} - {} ({})",
            self.id,
            self.name,
            self.artists.join(", "),
            self.year
        )
    }

    fn float_bits(&self) -> [u64; 9] {
        [
            self.valence.to_bits(),
            self.acousticness.to_bits(),
            self.danceability.to_bits(),
            self.energy.to_bits(),
            self.instrumentalness.to_bits(),
            self.liveness.to_bits(),
            self.loudness.to_bits(),
            self.speechiness.to_bits(),
            self.tempo.to_bits(),
        ]
    }
}

// Floats are compared by bit pattern so that Eq and Hash agree.
impl PartialEq for SongRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.artists == other.artists
            && self.year == other.year
            && self.release_date == other.release_date
            && self.duration_ms == other.duration_ms
            && self.explicit == other.explicit
            && self.key == other.key
            && self.mode == other.mode
            && self.popularity == other.popularity
            && self.float_bits() == other.float_bits()
    }
}

impl Eq for SongRecord {}

impl Hash for SongRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.artists.hash(state);
        self.year.hash(state);
        self.release_date.hash(state);
        self.duration_ms.hash(state);
        self.explicit.hash(state);
        self.key.hash(state);
        self.mode.hash(state);
        self.popularity.hash(state);
        self.float_bits().hash(state);
    }
}

impl fmt::Display for SongRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID:               {}", self.id)?;
        writeln!(f, "Title:            {}", self.name)?;
        writeln!(f, "Artists:          {}", self.artists.join(", "))?;
        writeln!(f, "Year:             {}", self.year)?;
        writeln!(f, "Release date:     {}", self.release_date)?;
        writeln!(f, "Duration (ms):    {}", self.duration_ms)?;
        writeln!(f, "Explicit:         {}", if self.is_explicit() { "yes" } else { "no" })?;
        writeln!(f, "Key:              {}", self.key)?;
        writeln!(f, "Mode:             {}", self.mode)?;
        writeln!(f, "Popularity:       {}", self.popularity)?;
        writeln!(f, "Valence:          {}", self.valence)?;
        writeln!(f, "Acousticness:     {}", self.acousticness)?;
        writeln!(f, "Danceability:     {}", self.danceability)?;
        writeln!(f, "Energy:           {}", self.energy)?;
        writeln!(f, "Instrumentalness: {}", self.instrumentalness)?;
        writeln!(f, "Liveness:         {}", self.liveness)?;
        writeln!(f, "Loudness:         {}", self.loudness)?;
        writeln!(f, "Speechiness:      {}", self.speechiness)?;
        write!(f, "Tempo:            {}", self.tempo)
    }
}

#[cfg(test)]
impl SongRecord {
    pub fn mock(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            artists: vec!["Mock Artist".to_string()],
            year: 2020,
            release_date: "2020-01-01".to_string(),
            duration_ms: 180000,
            popularity: 50,
            tempo: 120.0,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::DefaultHasher;

    fn hash_of(song: &SongRecord) -> u64 {
        let mut hasher = DefaultHasher::new();
        song.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_default_sentinels() {
        let song = SongRecord::default();
        assert_eq!(song.id, "");
        assert_eq!(song.name, "Unknown Title");
        assert_eq!(song.artists, vec!["Unknown Artist".to_string()]);
        assert_eq!(song.release_date, "0");
        assert_eq!(song.year, 0);
        assert_eq!(song.duration_ms, 0);
        assert_eq!(song.tempo, 0.0);
        assert!(!song.is_explicit());
    }

    #[test]
    fn test_equal_fields_give_equal_hashes() {
        let a = SongRecord::mock("abc123", "Knife Talk");
        let b = SongRecord::mock("abc123", "Knife Talk");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_release_date_compared_by_value() {
        let a = SongRecord::mock("abc123", "Knife Talk");
        let mut b = a.clone();
        // Distinct allocation, same content.
        b.release_date = String::from("2020-") + "01-01";
        assert_eq!(a, b);

        b.release_date = "2021-09-03".to_string();
        assert_ne!(a, b);
    }

    #[test]
    fn test_any_changed_field_breaks_equality() {
        let base = SongRecord::mock("abc123", "Knife Talk");
        let mutations: [fn(&mut SongRecord); 19] = [
            |s| s.id.push('x'),
            |s| s.name.push('x'),
            |s| s.artists.push("Other".to_string()),
            |s| s.year += 1,
            |s| s.release_date.push('x'),
            |s| s.duration_ms += 1,
            |s| s.explicit = 1,
            |s| s.key = 5,
            |s| s.mode = 1,
            |s| s.popularity += 1,
            |s| s.valence = 0.5,
            |s| s.acousticness = 0.5,
            |s| s.danceability = 0.5,
            |s| s.energy = 0.5,
            |s| s.instrumentalness = 0.5,
            |s| s.liveness = 0.5,
            |s| s.loudness = -5.0,
            |s| s.speechiness = 0.5,
            |s| s.tempo = 99.0,
        ];

        for (i, mutate) in mutations.iter().enumerate() {
            let mut changed = base.clone();
            mutate(&mut changed);
            assert_ne!(base, changed, "mutation {} should break equality", i);
        }
    }

    #[test]
    fn test_nan_fields_are_equal_to_themselves() {
        let mut a = SongRecord::mock("n", "NaN");
        a.tempo = f64::NAN;
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_summary_line() {
        let mut song = SongRecord::mock("abc123", "Knife Talk");
        song.artists = vec!["Drake".to_string(), "21 Savage".to_string()];
        assert_eq!(song.summary(), "abc123  Knife Talk - Drake, 21 Savage (2020)");
    }

    #[test]
    fn test_display_lists_every_field() {
        let text = SongRecord::mock("abc123", "Knife Talk").to_string();
        assert!(text.contains("ID:               abc123"));
        assert!(text.contains("Title:            Knife Talk"));
        assert!(text.contains("Tempo:            120"));
        assert_eq!(text.lines().count(), 19);
    }
}
