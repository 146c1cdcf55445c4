use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::store::SongCatalog;

const EXPORT_DIR: &str = "exports";

/// Write every song in the catalog as a pretty-printed JSON array.
///
/// Without an explicit `output`, a timestamped file is created under `exports/`.
/// Returns the path written.
pub fn write_json<C>(catalog: &C, output: Option<&Path>) -> Result<PathBuf>
where
    C: SongCatalog + ?Sized,
{
    let filename = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            Path::new(EXPORT_DIR).join(format!("songs_{}.json", timestamp))
        }
    };

    if let Some(parent) = filename.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let songs = catalog.all();
    let json = serde_json::to_string_pretty(&songs)?;
    fs::write(&filename, json)?;

    info!("Exported {} songs to: {}", songs.len(), filename.display());

    Ok(filename)
}
