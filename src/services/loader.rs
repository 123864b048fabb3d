//! School document loading.
//!
//! [`load`] retrieves and parses the document synchronously. [`LoadState`]
//! runs the same work on a background thread and hands the result back to
//! the UI loop through a channel, so the terminal stays responsive while a
//! remote document is fetched.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use tracing::{debug, error, info};

use crate::error::{PaletteError, PaletteResult};
use crate::models::SchoolData;

/// Where the school document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Copy bundled into the binary
    #[default]
    Embedded,
    /// Local JSON file
    File(PathBuf),
    /// Remote JSON document over http(s)
    Url(String),
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("data source cannot be empty".to_string());
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else if lower == "embedded" || lower == "builtin" {
            Ok(Self::Embedded)
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Retrieves and parses the school document.
///
/// # Errors
///
/// - [`PaletteError::Fetch`] when the file can't be read or the request fails
///   (including non-success HTTP statuses)
/// - [`PaletteError::Parse`] when the content is not well-formed JSON of the
///   expected shape
pub fn load(source: &DataSource) -> PaletteResult<SchoolData> {
    info!("Loading school data from {source}");
    let text = fetch_text(source)?;
    debug!("Fetched {} bytes of school data", text.len());
    parse(&text)
}

/// Parses a school document from JSON text.
pub fn parse(text: &str) -> PaletteResult<SchoolData> {
    let data: SchoolData = serde_json::from_str(text)?;
    debug!(
        conferences = ?data.conference_keys(),
        "Parsed school data"
    );
    Ok(data)
}

fn fetch_text(source: &DataSource) -> PaletteResult<String> {
    match source {
        DataSource::Embedded => Ok(SchoolData::EMBEDDED_JSON.to_string()),
        DataSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| PaletteError::fetch(path.display().to_string(), e)),
        DataSource::Url(url) => {
            let response =
                reqwest::blocking::get(url).map_err(|e| PaletteError::fetch(url.as_str(), e))?;
            let response = response
                .error_for_status()
                .map_err(|e| PaletteError::fetch(url.as_str(), e))?;
            response
                .text()
                .map_err(|e| PaletteError::fetch(url.as_str(), e))
        }
    }
}

/// Progress of a background load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Waiting for the background thread
    Loading,
    /// Document loaded
    Loaded,
    /// Load failed; the application stays without data
    Failed,
}

/// Background load tracked by the UI loop.
pub struct LoadState {
    /// Current status
    pub status: LoadStatus,
    /// Source being loaded
    pub source: DataSource,
    receiver: Option<Receiver<PaletteResult<SchoolData>>>,
}

impl LoadState {
    /// Starts loading on a background thread.
    #[must_use]
    pub fn start(source: DataSource) -> Self {
        let (sender, receiver) = channel();
        let thread_source = source.clone();

        thread::spawn(move || {
            let result = load(&thread_source);
            // Receiver may be gone if the UI already exited
            let _ = sender.send(result);
        });

        Self {
            status: LoadStatus::Loading,
            source,
            receiver: Some(receiver),
        }
    }

    /// Whether the background thread is still working.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Checks the channel without blocking.
    ///
    /// Returns the load result exactly once, when it arrives.
    pub fn poll(&mut self) -> Option<PaletteResult<SchoolData>> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                self.status = if result.is_ok() {
                    LoadStatus::Loaded
                } else {
                    LoadStatus::Failed
                };
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                error!("School data loader stopped without reporting a result");
                self.receiver = None;
                self.status = LoadStatus::Failed;
                None
            }
        }
    }
}

impl fmt::Debug for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadState")
            .field("status", &self.status)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    #[test]
    fn test_data_source_from_str() {
        assert_eq!(
            "https://example.com/schools.json".parse::<DataSource>(),
            Ok(DataSource::Url("https://example.com/schools.json".to_string()))
        );
        assert_eq!("embedded".parse::<DataSource>(), Ok(DataSource::Embedded));
        assert_eq!(
            "data/schools.json".parse::<DataSource>(),
            Ok(DataSource::File(PathBuf::from("data/schools.json")))
        );
        assert!("  ".parse::<DataSource>().is_err());
    }

    #[test]
    fn test_load_embedded() {
        let data = load(&DataSource::Embedded).unwrap();
        assert!(data.conference("SEC").is_some());
    }

    #[test]
    fn test_load_missing_file_is_fetch_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.json");
        let err = load(&DataSource::File(missing)).unwrap_err();
        assert!(matches!(err, PaletteError::Fetch { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schools.json");
        fs::write(&path, "{ \"conferences\": ").unwrap();
        let err = load(&DataSource::File(path)).unwrap_err();
        assert!(matches!(err, PaletteError::Parse(_)));
    }

    #[test]
    fn test_background_load_reports_once() {
        let mut state = LoadState::start(DataSource::Embedded);
        let deadline = Instant::now() + Duration::from_secs(5);

        let result = loop {
            if let Some(result) = state.poll() {
                break result;
            }
            assert!(Instant::now() < deadline, "background load timed out");
            thread::sleep(Duration::from_millis(5));
        };

        assert!(result.is_ok());
        assert_eq!(state.status, LoadStatus::Loaded);
        assert!(state.poll().is_none());
    }
}
