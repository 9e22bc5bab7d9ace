use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use syntable::{ColorScheme, SyntaxDefaults, ThemeSyntax, syntax::build_syntax_with};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print the resolved syntax table for the built-in Tokyo Night scheme
#[derive(Parser)]
#[command(name = "syntable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with per-category syntax overrides
    #[arg(short, long)]
    overrides: Option<PathBuf>,

    /// JSON file with default-table settings
    #[arg(short, long)]
    defaults: Option<PathBuf>,

    /// Reject override keys that name no known category
    #[arg(long)]
    strict: bool,

    /// Only list categories that have no color assigned
    #[arg(long)]
    unassigned: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "syntable=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let defaults = match &cli.defaults {
        Some(path) => SyntaxDefaults::from_path(path)?,
        None => SyntaxDefaults::default(),
    };

    let mut scheme = ColorScheme::tokyo_night();
    if let Some(path) = &cli.overrides {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read overrides from {:?}", path))?;
        let overrides = ThemeSyntax::from_json(&contents)
            .with_context(|| format!("Failed to parse overrides in {:?}", path))?;
        if cli.strict {
            overrides.validate()?;
        }
        scheme = scheme.with_syntax(overrides);
    }

    let syntax = build_syntax_with(&scheme, &defaults);

    if cli.unassigned {
        for category in syntax.unassigned() {
            println!("{category}");
        }
    } else {
        let json = serde_json::to_string_pretty(&syntax).context("Failed to serialize syntax")?;
        println!("{json}");
    }

    Ok(())
}
