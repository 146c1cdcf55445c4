pub mod catalog;

pub use catalog::SongStore;

use crate::song::SongRecord;

/// Read access shared by the console and search front ends.
pub trait SongCatalog {
    fn get(&self, id: &str) -> Option<&SongRecord>;

    fn all(&self) -> Vec<&SongRecord>;
}
