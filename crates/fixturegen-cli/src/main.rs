mod commands;
mod logging;
mod workspace;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use fixturegen_core::{Error as CoreError, GenerationRequest, get_type};
use fixturegen_generate::{
    EngineOptions, GenerationEngine, GenerationError, OutputFormat, render_output,
};
use serde_json::Value;
use thiserror::Error;
use workspace::{WorkspaceError, load_settings, write_bytes_atomic};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("config error: {0}")]
    Config(#[from] WorkspaceError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Parser, Debug)]
#[command(name = "fixturegen", version, about = "Generate realistic fake values for test fixtures")]
struct Cli {
    /// Settings file (defaults to ./fixturegen.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log filter such as `info` or `fixturegen_generate=debug`.
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every generatable type.
    Types(TypesArgs),
    /// Show the option schema of one type.
    Options(OptionsArgs),
    /// Generate values.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct TypesArgs {
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct OptionsArgs {
    #[arg(value_name = "TYPE")]
    type_id: String,
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(value_name = "TYPE")]
    type_id: String,
    /// Number of values (1-1000).
    #[arg(short = 'n', long)]
    count: Option<i64>,
    /// Type option as KEY=VALUE; VALUE is parsed as JSON when possible.
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_option_pair)]
    options: Vec<(String, Value)>,
    #[arg(long)]
    prefix: Option<String>,
    #[arg(long)]
    suffix: Option<String>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// lines, csv or json.
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Write to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().or(settings.log.level.as_deref());
    logging::init_logging(level, cli.log_json || settings.log.json).map_err(CliError::Logging)?;

    match cli.command {
        Command::Types(args) => commands::print_types(args.json),
        Command::Options(args) => commands::print_options(&args.type_id, args.json),
        Command::Generate(args) => run_generate(args, &settings),
    }
}

fn run_generate(args: GenerateArgs, settings: &workspace::CliSettings) -> Result<(), CliError> {
    let GenerateArgs {
        type_id,
        count,
        options,
        prefix,
        suffix,
        seed,
        format,
        out,
    } = args;

    let descriptor = get_type(&type_id)?;
    if (prefix.is_some() || suffix.is_some()) && !descriptor.supports_affix {
        return Err(CliError::InvalidArgument(format!(
            "type '{type_id}' does not support --prefix/--suffix"
        )));
    }

    let mut merged = settings.type_defaults(&type_id);
    merged.extend(options);

    let request = GenerationRequest {
        type_id,
        count: count.or(settings.default_count).unwrap_or(1),
        options: merged,
        prefix,
        suffix,
    };
    let engine = GenerationEngine::new(EngineOptions {
        seed: seed.or(settings.seed),
    });
    let format = format.or(settings.format).unwrap_or_default();

    let timer = Instant::now();
    tracing::info!(
        event = "generate_started",
        type_id = %request.type_id,
        count = request.count,
        format = %format
    );

    let result = engine.generate(&request)?;
    let bytes = render_output(format, &request, &result)?;

    match out {
        Some(path) => {
            write_bytes_atomic(&path, &bytes)?;
            tracing::info!(event = "output_written", path = %path.display(), bytes = bytes.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    tracing::info!(
        event = "generate_finished",
        values = result.values.len(),
        message = %result.message,
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

/// Split `KEY=VALUE`; VALUE becomes JSON when it parses, a string otherwise.
fn parse_option_pair(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing option key in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_pairs_prefer_json() {
        assert_eq!(
            parse_option_pair("length=24"),
            Ok(("length".to_string(), json!(24)))
        );
        assert_eq!(
            parse_option_pair("valid=false"),
            Ok(("valid".to_string(), json!(false)))
        );
        assert_eq!(
            parse_option_pair("card_type=American Express"),
            Ok(("card_type".to_string(), json!("American Express")))
        );
        assert_eq!(
            parse_option_pair("separator=:"),
            Ok(("separator".to_string(), json!(":")))
        );
        assert!(parse_option_pair("novalue").is_err());
        assert!(parse_option_pair("=3").is_err());
    }

    #[test]
    fn generate_args_parse() {
        let cli = Cli::try_parse_from([
            "fixturegen",
            "--log-level",
            "debug",
            "generate",
            "mac_address",
            "-n",
            "3",
            "-o",
            "separator=-",
            "-o",
            "uppercase=true",
            "--prefix",
            "AA",
            "--format",
            "json",
        ])
        .expect("parse cli");

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.type_id, "mac_address");
        assert_eq!(args.count, Some(3));
        assert_eq!(
            args.options,
            vec![
                ("separator".to_string(), json!("-")),
                ("uppercase".to_string(), json!(true)),
            ]
        );
        assert_eq!(args.prefix.as_deref(), Some("AA"));
        assert_eq!(args.format, Some(OutputFormat::Json));
    }
}
