use std::io;

use anyhow::Context;
use clap::Parser;
use cxxmeta_config::CxxMetaConfig;
use cxxmeta_core::{
    Declaration, Emitter, SymbolIndex, TextEmitter, TranslationUnit, TraversalContext,
};
use cxxmeta_parser::{SyntheticUnit, extract_unit};

mod cli;

fn main() {
    if let Err(error) = run() {
        eprintln!("cxxmeta error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = CxxMetaConfig::load_with_dotenv(cli.config_path())
        .context("failed to load cxxmeta configuration")?;
    cli.apply(&mut config);
    config
        .validate()
        .context("invalid command-line overrides")?;

    let Some(unit) = SyntheticUnit::build(&config).context("failed to assemble header set")?
    else {
        tracing::warn!("no headers configured, nothing to extract");
        return Ok(());
    };
    tracing::debug!(
        headers = unit.contents.lines().count(),
        search_paths = unit.search_paths.len(),
        "synthesized translation unit"
    );

    let mut ctx = if config.index_symbols {
        TraversalContext::with_symbol_index()
    } else {
        TraversalContext::new()
    };
    let extracted = extract_unit(&unit, &mut ctx)
        .with_context(|| format!("failed to extract declarations from {}", unit.file_name))?;

    let mut emitter = TextEmitter::new(io::stdout().lock());
    emitter
        .emit(&extracted)
        .context("failed to write declaration report")?;

    if !extracted.diagnostics.is_empty() {
        tracing::info!(
            count = extracted.diagnostics.len(),
            "declarations skipped as unrecognized"
        );
    }
    if let Some(symbols) = ctx.take_symbols() {
        log_symbol_index(&extracted, &symbols);
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CXXMETA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn log_symbol_index(unit: &TranslationUnit, symbols: &SymbolIndex) {
    tracing::info!(
        namespaces = symbols.namespace_count(),
        classes = symbols.class_count(),
        structs = symbols.struct_count(),
        enums = symbols.enum_count(),
        "symbol index populated"
    );
    for record in unit.iter().filter_map(Declaration::as_record) {
        for base in &record.bases {
            let resolved = symbols.resolve_base(unit, base).is_some();
            tracing::debug!(
                record = %record.type_spelling,
                base = %base.type_spelling,
                resolved,
                "base specifier"
            );
        }
    }
}
