use std::io::{self, Write};

use colored::Colorize;

use crate::song::SongRecord;
use crate::store::SongCatalog;

/// Print every song on one line each, followed by a total.
pub fn render_listing<C, W>(catalog: &C, out: &mut W) -> io::Result<()>
where
    C: SongCatalog + ?Sized,
    W: Write,
{
    let songs = catalog.all();

    if songs.is_empty() {
        writeln!(out, "{}", "No songs loaded".yellow())?;
        return Ok(());
    }

    for song in &songs {
        writeln!(out, "{}", song.summary())?;
    }

    writeln!(out, "\n{}", format!("Total: {} songs", songs.len()).cyan())
}

/// Print the details for `id`, or a not-found message. Returns whether it was found.
pub fn render_lookup<C, W>(catalog: &C, id: &str, out: &mut W) -> io::Result<bool>
where
    C: SongCatalog + ?Sized,
    W: Write,
{
    match catalog.get(id) {
        Some(song) => {
            writeln!(out, "{}", "Song found:".green())?;
            writeln!(out, "{}", song)?;
            Ok(true)
        }
        None => {
            writeln!(out, "{}", format!("Song with ID {} not found.", id).red())?;
            Ok(false)
        }
    }
}

pub fn render_matches<W: Write>(matches: &[(&SongRecord, f64)], out: &mut W) -> io::Result<()> {
    for (song, score) in matches {
        writeln!(out, "  {} ({:.0}% match)", song.summary(), score * 100.0)?;
    }
    Ok(())
}
