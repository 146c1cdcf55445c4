use std::str::FromStr;

use thiserror::Error;

use crate::song::models::SongRecord;

/// Number of comma-separated columns in a data row.
pub const FIELD_COUNT: usize = 19;

const COLUMNS: [&str; FIELD_COUNT] = [
    "valence",
    "year",
    "acousticness",
    "artists",
    "danceability",
    "duration_ms",
    "energy",
    "explicit",
    "id",
    "instrumentalness",
    "key",
    "liveness",
    "loudness",
    "mode",
    "name",
    "popularity",
    "release_date",
    "speechiness",
    "tempo",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("column {column} ({field}) is not a valid number: '{value}'")]
    InvalidNumber {
        field: &'static str,
        column: usize,
        value: String,
    },
}

impl SongRecord {
    /// Parses one data row in the fixed 19-column layout.
    ///
    /// The artists column is a bracketed, semicolon-separated list such as
    /// `['Drake';'21 Savage']`; brackets and single quotes are dropped and each
    /// name is trimmed. No range checks are applied to any column.
    pub fn from_csv_line(line: &str) -> Result<Self, FormatError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(FormatError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        Ok(Self {
            valence: parse_number(&fields, 0)?,
            year: parse_number(&fields, 1)?,
            acousticness: parse_number(&fields, 2)?,
            artists: parse_artists(fields[3]),
            danceability: parse_number(&fields, 4)?,
            duration_ms: parse_number(&fields, 5)?,
            energy: parse_number(&fields, 6)?,
            explicit: parse_number(&fields, 7)?,
            id: fields[8].to_string(),
            instrumentalness: parse_number(&fields, 9)?,
            key: parse_number(&fields, 10)?,
            liveness: parse_number(&fields, 11)?,
            loudness: parse_number(&fields, 12)?,
            mode: parse_number(&fields, 13)?,
            name: fields[14].to_string(),
            popularity: parse_number(&fields, 15)?,
            release_date: fields[16].to_string(),
            speechiness: parse_number(&fields, 17)?,
            tempo: parse_number(&fields, 18)?,
        })
    }

    /// Writes the record back out in the column order `from_csv_line` reads.
    pub fn to_csv_line(&self) -> String {
        [
            self.valence.to_string(),
            self.year.to_string(),
            self.acousticness.to_string(),
            format!("[{}]", self.artists.join(";")),
            self.danceability.to_string(),
            self.duration_ms.to_string(),
            self.energy.to_string(),
            self.explicit.to_string(),
            self.id.clone(),
            self.instrumentalness.to_string(),
            self.key.to_string(),
            self.liveness.to_string(),
            self.loudness.to_string(),
            self.mode.to_string(),
            self.name.clone(),
            self.popularity.to_string(),
            self.release_date.clone(),
            self.speechiness.to_string(),
            self.tempo.to_string(),
        ]
        .join(",")
    }
}

impl FromStr for SongRecord {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_csv_line(s)
    }
}

fn parse_number<T: FromStr>(fields: &[&str], column: usize) -> Result<T, FormatError> {
    let raw = fields[column];
    raw.trim().parse().map_err(|_| FormatError::InvalidNumber {
        field: COLUMNS[column],
        column,
        value: raw.to_string(),
    })
}

fn parse_artists(raw: &str) -> Vec<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\''))
        .collect();

    cleaned
        .split(';')
        .map(|artist| artist.trim().to_string())
        .collect()
}
