use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::debug;

use crate::frontend::console::{render_lookup, render_matches};
use crate::matcher::find_similar;
use crate::store::SongCatalog;

const MAX_SUGGESTIONS: usize = 3;

/// Interactive lookup loop: read an id per line, answer it, repeat.
///
/// Stops at end of input, on a blank line, or on `quit` / `exit`.
/// Returns how many queries were answered.
pub fn run<C, R, W>(catalog: &C, input: R, output: &mut W) -> io::Result<usize>
where
    C: SongCatalog + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", "Song Lookup".cyan().bold())?;
    writeln!(output, "{}", "=".repeat(50))?;

    let mut answered = 0;
    let mut lines = input.lines();

    loop {
        write!(output, "Enter song ID: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let query = line?;
        let query = query.trim();

        if is_exit(query) {
            break;
        }

        debug!("Search query: {}", query);
        answered += 1;

        if !render_lookup(catalog, query, output)? {
            let suggestions = find_similar(catalog, query, MAX_SUGGESTIONS);
            if !suggestions.is_empty() {
                writeln!(output, "{}", "Did you mean:".yellow())?;
                render_matches(&suggestions, output)?;
            }
        }
        writeln!(output)?;
    }

    Ok(answered)
}

fn is_exit(query: &str) -> bool {
    query.is_empty() || query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::SongRecord;
    use crate::store::SongStore;
    use std::io::Cursor;

    fn store() -> SongStore {
        let lines = [
            SongRecord::mock("4BJqT0PrAfrxzMOxytFOIz", "Piano Concerto").to_csv_line(),
            SongRecord::mock("7xPhfUan2yNtyFG0cUWkt8", "Gati Bali").to_csv_line(),
        ];
        let mut store = SongStore::new();
        store
            .load_reader(Cursor::new(lines.join("\n")), false)
            .unwrap();
        store
    }

    fn session(input: &str) -> (usize, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let answered = run(&store(), Cursor::new(input.to_string()), &mut out).unwrap();
        (answered, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_found_song_shows_details() {
        let (answered, text) = session("4BJqT0PrAfrxzMOxytFOIz\n");
        assert_eq!(answered, 1);
        assert!(text.contains("Song found:"));
        assert!(text.contains("Title:            Piano Concerto"));
    }

    #[test]
    fn test_missing_song_reports_not_found() {
        let (_, text) = session("nothing-like-it\nquit\n");
        assert!(text.contains("Song with ID nothing-like-it not found."));
        assert!(!text.contains("Did you mean:"));
    }

    #[test]
    fn test_near_miss_offers_suggestions() {
        let (_, text) = session("4BJqT0PrAfrxzMOxytFOIx\n");
        assert!(text.contains("not found."));
        assert!(text.contains("Did you mean:"));
        assert!(text.contains("4BJqT0PrAfrxzMOxytFOIz  Piano Concerto"));
    }

    #[test]
    fn test_stops_on_blank_line_or_quit() {
        let (answered, _) = session("4BJqT0PrAfrxzMOxytFOIz\n\n7xPhfUan2yNtyFG0cUWkt8\n");
        assert_eq!(answered, 1);

        let (answered, _) = session("7xPhfUan2yNtyFG0cUWkt8\nEXIT\n4BJqT0PrAfrxzMOxytFOIz\n");
        assert_eq!(answered, 1);
    }

    #[test]
    fn test_empty_input_answers_nothing() {
        let (answered, text) = session("");
        assert_eq!(answered, 0);
        assert!(text.contains("Enter song ID:"));
    }
}
