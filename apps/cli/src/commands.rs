//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use munsort_classify::{Classifier, DocumentSource};
use munsort_clauses::{build_clause_tree, format_tree};
use munsort_docpatch::BodyPatcher;
use munsort_layout::{Body, DocNode, normalize};
use munsort_shared::{config_file_path, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// munsort — sort committee documents by what their layout says they are.
#[derive(Parser)]
#[command(
    name = "munsort",
    version,
    about = "Classify committee documents and rewrite their hyperlinks into citations.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Classify a document and print its classification record as JSON.
    ///
    /// The input is the document's extracted plain text: one paragraph per
    /// line, leading tabs encoding list indentation.
    Classify {
        /// Path to the extracted plain-text document.
        file: PathBuf,
    },

    /// Rebuild a resolution's clause tree and print it with drafting
    /// punctuation applied.
    Format {
        /// Path to the extracted plain-text document.
        file: PathBuf,
    },

    /// Rewrite every hyperlink in a packaged document into a citation,
    /// in place.
    Patch {
        /// Path to the packaged (.docx-style) document.
        file: PathBuf,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "munsort=info",
        1 => "munsort=debug",
        _ => "munsort=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Classify { file } => cmd_classify(&file).await,
        Command::Format { file } => cmd_format(&file).await,
        Command::Patch { file } => cmd_patch(&file).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

/// Read an extracted plain-text document into its raw text and body.
fn load_body(path: &Path) -> Result<(String, Body)> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| eyre!("cannot read {}: {e}", path.display()))?;
    let doc = DocNode::group(raw.lines().map(DocNode::line).collect());
    let body = normalize(&doc)?;
    Ok((raw, body))
}

async fn cmd_classify(file: &Path) -> Result<()> {
    let config = load_config()?;
    let classifier = Classifier::new(config)?;

    let (raw, body) = load_body(file)?;
    let title = file.file_stem().and_then(|s| s.to_str()).unwrap_or_default();

    // Plain-text input carries no per-run formatting, so the bold-run
    // committee lookup has nothing to work with here.
    let record = classifier.classify_document(&DocumentSource {
        title,
        body: &body,
        raw_text: &raw,
        runs: &[],
    });

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

async fn cmd_format(file: &Path) -> Result<()> {
    let (_raw, body) = load_body(file)?;

    let mut tree = build_clause_tree(&body);
    if tree.is_empty() {
        return Err(eyre!("no numbered clauses found in {}", file.display()));
    }

    format_tree(&mut tree);
    for line in tree.lines() {
        println!("{line}");
    }
    Ok(())
}

async fn cmd_patch(file: &Path) -> Result<()> {
    let config = load_config()?;
    let patcher = BodyPatcher::new(&config)?;

    let summary = patcher.patch_links(file).await?;
    info!(
        urls = summary.urls_resolved,
        replacements = summary.replacements,
        "patch complete"
    );
    println!(
        "{}: {} links resolved, {} occurrences rewritten",
        file.display(),
        summary.urls_resolved,
        summary.replacements
    );
    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("wrote default config to {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    println!("# {}", config_file_path()?.display());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
