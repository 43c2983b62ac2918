use std::path::{Path, PathBuf};

use clap::Parser;
use cxxmeta_config::{CxxMetaConfig, HeaderGroup};

/// Top-level CLI parser for the `cxxmeta` binary.
#[derive(Debug, Parser)]
#[command(
    name = "cxxmeta",
    version,
    about = "Print the declarations of a C++ header set"
)]
pub struct Cli {
    /// Headers to extract, in addition to the configured header groups
    pub headers: Vec<PathBuf>,

    /// Configuration file (defaults to ./cxxmeta.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Extra include search directory
    #[arg(short = 'I', long = "include", value_name = "DIR")]
    pub include_dirs: Vec<PathBuf>,

    /// Macro definition, NAME or NAME=VALUE
    #[arg(short = 'D', long = "define", value_name = "MACRO")]
    pub macros: Vec<String>,

    /// Populate the symbol index and log base-class resolution
    #[arg(long)]
    pub index_symbols: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer the command-line values on top of a loaded configuration.
    pub fn apply(&self, config: &mut CxxMetaConfig) {
        config
            .headers
            .extend(self.headers.iter().map(|path| HeaderGroup::from_header_path(path)));
        config.include_dirs.extend(self.include_dirs.iter().cloned());
        config.macros.extend(self.macros.iter().cloned());
        if self.index_symbols {
            config.index_symbols = true;
        }
    }

    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}
