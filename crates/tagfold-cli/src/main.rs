//! CLI entry point for tagfold.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and
//! exit codes. All business logic lives in the `tagfold-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use tagfold_app::{
    render_markdown, render_registry, run_check, run_explain, serialize_report,
    verdict_exit_code, write_report, CheckInput, ExplainOutput,
};
use tagfold_settings::Overrides;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tagfold",
    version,
    about = "Fold tagged JSON records through configured matchers"
)]
struct Cli {
    /// Path to tagfold config TOML. A missing file means an empty config.
    #[arg(long, default_value = "tagfold.toml")]
    config: Utf8PathBuf,

    /// Log filter used when RUST_LOG is unset (e.g. "debug" or "tagfold_domain=trace").
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fold every record through every matcher and report the outcomes.
    Check {
        /// JSON file holding an array of records (or a single record).
        #[arg(long)]
        input: Utf8PathBuf,

        /// Only run this matcher.
        #[arg(long)]
        matcher: Option<String>,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Print a Markdown summary instead of the JSON report.
        #[arg(long)]
        markdown: bool,
    },

    /// Explain a failure code with remediation guidance.
    Explain {
        /// The code to explain (e.g. "incomplete_handler").
        code: String,
    },

    /// List the unions declared in the config.
    Registry,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let result = match &cli.cmd {
        Commands::Check {
            input,
            matcher,
            report_out,
            markdown,
        } => cmd_check(
            &cli.config,
            input,
            Overrides {
                matcher: matcher.clone(),
                ..Overrides::default()
            },
            report_out.as_deref(),
            *markdown,
        ),
        Commands::Explain { code } => cmd_explain(code),
        Commands::Registry => cmd_registry(&cli.config),
    };

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("tagfold error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .with_context(|| format!("invalid log filter: {log_level}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("install tracing subscriber: {err}"))
}

fn read_config(path: &Utf8Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(path = %path, error = %err, "config not read; using defaults");
            String::new()
        }
    }
}

fn cmd_check(
    config: &Utf8Path,
    input: &Utf8Path,
    overrides: Overrides,
    report_out: Option<&Utf8Path>,
    markdown: bool,
) -> anyhow::Result<i32> {
    let config_text = read_config(config);
    let records_text =
        std::fs::read_to_string(input).with_context(|| format!("read records: {input}"))?;

    let output = run_check(CheckInput {
        config_text: &config_text,
        records_text: &records_text,
        overrides,
    })?;

    if let Some(path) = report_out {
        write_report(path, &output.report).context("write report json")?;
    }
    if markdown {
        print!("{}", render_markdown(&output.report));
    } else if report_out.is_none() {
        let data = serialize_report(&output.report)?;
        println!("{}", String::from_utf8_lossy(&data));
    }

    Ok(verdict_exit_code(output.report.verdict))
}

fn cmd_explain(code: &str) -> anyhow::Result<i32> {
    match run_explain(code) {
        ExplainOutput::Found(exp) => {
            print!("{}", tagfold_app::format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            code,
            available_codes,
        } => {
            eprint!("{}", tagfold_app::format_not_found(&code, available_codes));
            Ok(1)
        }
    }
}

fn cmd_registry(config: &Utf8Path) -> anyhow::Result<i32> {
    let config_text = read_config(config);
    let cfg = tagfold_settings::parse_config_toml(&config_text).context("parse config")?;
    let resolved =
        tagfold_settings::resolve_config(cfg, Overrides::default()).context("resolve config")?;
    print!("{}", render_registry(&resolved));
    Ok(0)
}
