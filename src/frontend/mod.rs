pub mod console;
pub mod search;

pub use console::{render_listing, render_lookup, render_matches};
pub use search::run as run_search;
