//! Header groups and directory scanning.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Version-control directories never scanned for headers.
const IGNORED_DIRS: &[&str] = &[".git", ".svn"];

/// Extensions picked up by discovery.
const HEADER_EXTENSIONS: &[&str] = &["h", "hpp"];

/// A base directory and the headers to include from it, in order.
///
/// Header paths are relative to `directory`, which is also added to the
/// include search paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderGroup {
    pub directory: PathBuf,

    #[serde(default)]
    pub headers: Vec<String>,

    /// Append every header found under `directory` after the listed ones.
    #[serde(default)]
    pub discover: bool,
}

impl HeaderGroup {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>, headers: Vec<String>) -> Self {
        Self {
            directory: directory.into(),
            headers,
            discover: false,
        }
    }

    /// A single-header group for a path given on the command line.
    #[must_use]
    pub fn from_header_path(path: &Path) -> Self {
        let directory = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let header = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(directory, vec![header])
    }

    /// This group with discovery applied: listed headers first, then any
    /// discovered header not already listed.
    ///
    /// # Errors
    /// Returns [`ConfigError::Discovery`] if the directory walk fails.
    pub fn resolve(&self) -> Result<Self, ConfigError> {
        let mut headers = self.headers.clone();
        if self.discover {
            for header in discover_headers(&self.directory)? {
                if !headers.contains(&header) {
                    headers.push(header);
                }
            }
        }
        Ok(Self {
            directory: self.directory.clone(),
            headers,
            discover: false,
        })
    }
}

/// Every `.h`/`.hpp` file under `directory`, as `/`-separated paths relative to
/// it, sorted by path.
///
/// Hidden files and ignore files are not consulted; only `.git` and `.svn`
/// directories are pruned.
///
/// # Errors
/// Returns [`ConfigError::Discovery`] if the directory cannot be walked.
pub fn discover_headers(directory: &Path) -> Result<Vec<String>, ConfigError> {
    let walker = WalkBuilder::new(directory)
        .standard_filters(false)
        .filter_entry(|entry| {
            !IGNORED_DIRS
                .iter()
                .any(|ignored| entry.file_name() == *ignored)
        })
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut headers = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| ConfigError::Discovery {
            directory: directory.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let is_header = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| HEADER_EXTENSIONS.contains(&ext));
        if !is_header {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(directory) {
            let components: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            headers.push(components.join("/"));
        }
    }

    headers.sort();
    tracing::debug!(
        directory = %directory.display(),
        count = headers.len(),
        "discovered headers"
    );
    Ok(headers)
}
