pub mod config;
pub mod error;
pub mod export;
pub mod frontend;
pub mod matcher;
pub mod song;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
pub use song::{FormatError, SongRecord};
pub use store::{SongCatalog, SongStore};
