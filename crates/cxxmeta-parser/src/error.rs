//! Parser error types for cxxmeta-parser.

/// Errors that abort an extraction run.
///
/// Everything recoverable (unknown cursor kinds, missing locations, absent
/// defaults) is handled inside the walk and never surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("libclang is unavailable: {0}")]
    FrontEndUnavailable(String),

    #[error("Parse failed for {file}: {source}")]
    ParseFailed {
        file: String,
        #[source]
        source: clang::SourceError,
    },

    #[error("Header configuration error: {0}")]
    Config(#[from] cxxmeta_config::ConfigError),
}
