//! The synthesized translation unit: one `#include` per configured header.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use cxxmeta_config::{CxxMetaConfig, HeaderGroup};

use crate::error::ParserError;

/// An in-memory source file plus the arguments the front end parses it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticUnit {
    pub file_name: String,
    pub contents: String,
    pub search_paths: Vec<PathBuf>,
    pub arguments: Vec<String>,
}

impl SyntheticUnit {
    /// Aggregate the configured header set into one unit.
    ///
    /// Returns `Ok(None)` when the header set is empty: there is nothing to
    /// parse.
    ///
    /// # Errors
    /// Returns [`ParserError::Config`] if header discovery fails.
    pub fn build(config: &CxxMetaConfig) -> Result<Option<Self>, ParserError> {
        let groups = config.resolved_headers()?;
        let includes: Vec<String> = groups
            .iter()
            .flat_map(|group| &group.headers)
            .map(|header| format!("#include \"{header}\""))
            .collect();
        if includes.is_empty() {
            return Ok(None);
        }

        let search_paths = search_paths(&config.include_dirs, &groups);
        let arguments = config
            .clang_args
            .iter()
            .cloned()
            .chain(search_paths.iter().map(|path| format!("-I{}", path.display())))
            .chain(
                config
                    .macro_definitions()
                    .into_iter()
                    .map(|definition| format!("-D{definition}")),
            )
            .collect();

        Ok(Some(Self {
            file_name: config.input_name.clone(),
            contents: includes.join("\n"),
            search_paths,
            arguments,
        }))
    }
}

/// Explicit paths first, in order, then the canonical group directories not
/// already listed. Group directories form a set, so repeats collapse and their
/// relative order is by path.
fn search_paths(explicit: &[PathBuf], groups: &[HeaderGroup]) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::with_capacity(explicit.len() + groups.len());
    for path in explicit {
        if !paths.contains(path) {
            paths.push(path.clone());
        }
    }
    let group_dirs: BTreeSet<PathBuf> = groups
        .iter()
        .map(|group| canonical(&group.directory))
        .collect();
    for dir in group_dirs {
        if !paths.contains(&dir) {
            paths.push(dir);
        }
    }
    paths
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
