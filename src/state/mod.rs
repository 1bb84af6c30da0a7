//! Persistent state for the twilight clock, following XDG Base Directory standards.
//!
//! The only state kept between runs is the last location reported by the
//! phone. It lives in `XDG_STATE_HOME/twilight-clock/location.json`, separate
//! from the configuration, and is replaced atomically on every change.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, LOCATION_FILE_NAME};
use crate::geo::Location;
use crate::time_source;
pub use crate::geo::LocationProvider;

/// Version of the on-disk record. Anything else is ignored on load.
pub const LOCATION_RECORD_VERSION: u32 = 1;

/// Get the state directory: `XDG_STATE_HOME/twilight-clock`.
pub fn get_state_dir() -> PathBuf {
    let state_home = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".local/state")
        });

    state_home.join(APP_NAME)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LocationRecord {
    version: u32,
    location: Location,
    last_update: DateTime<Utc>,
}

/// The persisted location, loaded once and kept in memory.
#[derive(Debug)]
pub struct LocationStore {
    path: PathBuf,
    record: Option<LocationRecord>,
}

impl LocationStore {
    /// Open the store at its default path.
    pub fn open_default() -> Self {
        Self::open(get_state_dir().join(LOCATION_FILE_NAME))
    }

    /// Open the store at `path`.
    ///
    /// A missing, unreadable or foreign-version file is treated as "no
    /// location yet"; it is overwritten by the next [`set`](Self::set).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let record = match read_record(&path) {
            Ok(record) => record,
            Err(e) => {
                log_warning!("Ignoring stored location: {e:#}");
                None
            }
        };
        Self { path, record }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_available(&self) -> bool {
        self.record.is_some()
    }

    pub fn get(&self) -> Option<Location> {
        self.record.as_ref().map(|record| record.location)
    }

    /// When the stored location last changed.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.record.as_ref().map(|record| record.last_update)
    }

    /// Whether `location` differs from what is stored (or nothing is stored).
    pub fn is_different(&self, location: &Location) -> bool {
        match self.get() {
            Some(stored) => !stored.same_as(
                location.latitude,
                location.longitude,
                location.utc_offset_secs,
            ),
            None => true,
        }
    }

    /// Store `location`. Returns `false` without touching the file when the
    /// same location is already stored.
    pub fn set(&mut self, location: Location) -> Result<bool> {
        if !self.is_different(&location) {
            return Ok(false);
        }

        let record = LocationRecord {
            version: LOCATION_RECORD_VERSION,
            location,
            last_update: time_source::now_utc(),
        };
        write_record(&self.path, &record)?;
        self.record = Some(record);

        log_debug!("Stored location in {}", self.path.display());
        Ok(true)
    }

    /// Forget the stored location. Returns whether there was one.
    pub fn erase(&mut self) -> Result<bool> {
        let existed = self.record.take().is_some();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(existed),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove {}", self.path.display())),
        }
    }
}

impl LocationProvider for LocationStore {
    fn location(&self) -> Option<Location> {
        self.get()
    }
}

fn read_record(path: &Path) -> Result<Option<LocationRecord>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let record: LocationRecord = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if record.version != LOCATION_RECORD_VERSION {
        anyhow::bail!(
            "{} has record version {}, expected {}",
            path.display(),
            record.version,
            LOCATION_RECORD_VERSION
        );
    }

    // Hand-edited files go through the same range checks as fresh reports.
    let location = record.location;
    Location::new(location.latitude, location.longitude, location.utc_offset_secs)
        .with_context(|| format!("{} holds an invalid location", path.display()))?;

    Ok(Some(record))
}

fn write_record(path: &Path, record: &LocationRecord) -> Result<()> {
    let dir = path
        .parent()
        .context("Location file has no parent directory")?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create state directory {}", dir.display()))?;

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    serde_json::to_writer_pretty(&mut file, record).context("Failed to serialize location")?;
    file.write_all(b"\n")?;
    file.as_file().sync_all()?;

    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write location to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn nyc() -> Location {
        Location::new(40.7, -74.0, 4 * 3600).unwrap()
    }

    #[test]
    fn test_missing_file_means_no_location() {
        let dir = tempdir().unwrap();
        let store = LocationStore::open(dir.path().join("location.json"));
        assert!(!store.is_available());
        assert_eq!(store.get(), None);
        assert_eq!(store.location(), None);
        assert!(store.is_different(&nyc()));
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("location.json");

        let mut store = LocationStore::open(&path);
        assert!(store.set(nyc()).unwrap());
        assert!(path.exists());

        let reopened = LocationStore::open(&path);
        assert_eq!(reopened.get(), Some(nyc()));
        assert_eq!(reopened.last_update(), store.last_update());
    }

    #[test]
    fn test_identical_set_leaves_timestamp_untouched() {
        let dir = tempdir().unwrap();
        let mut store = LocationStore::open(dir.path().join("location.json"));
        store.set(nyc()).unwrap();
        let first = store.last_update();

        assert!(!store.is_different(&nyc()));
        assert!(!store.set(nyc()).unwrap());
        assert_eq!(store.last_update(), first);
    }

    #[test]
    fn test_changed_offset_counts_as_different() {
        let dir = tempdir().unwrap();
        let mut store = LocationStore::open(dir.path().join("location.json"));
        store.set(nyc()).unwrap();

        let winter = Location::new(40.7, -74.0, 5 * 3600).unwrap();
        assert!(store.is_different(&winter));
        assert!(store.set(winter).unwrap());
        assert_eq!(store.get(), Some(winter));
    }

    #[test]
    fn test_foreign_version_is_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("location.json");
        fs::write(
            &path,
            r#"{"version":2,"location":{"latitude":1.0,"longitude":2.0,"utc_offset_secs":0},"last_update":"2024-06-21T12:00:00Z"}"#,
        )
        .unwrap();

        assert!(!LocationStore::open(&path).is_available());
    }

    #[test]
    fn test_garbage_and_out_of_range_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("location.json");

        fs::write(&path, "not json").unwrap();
        assert!(!LocationStore::open(&path).is_available());

        fs::write(
            &path,
            r#"{"version":1,"location":{"latitude":91.0,"longitude":2.0,"utc_offset_secs":0},"last_update":"2024-06-21T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(!LocationStore::open(&path).is_available());
    }

    #[test]
    fn test_erase() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("location.json");
        let mut store = LocationStore::open(&path);

        assert!(!store.erase().unwrap());
        store.set(nyc()).unwrap();
        assert!(store.erase().unwrap());
        assert!(!path.exists());
        assert!(!store.is_available());
    }
}
