pub mod models;
pub mod parser;

pub use models::SongRecord;
pub use parser::{FIELD_COUNT, FormatError};
