use brace_balance::{Delimiter, Report, ScanResponse, scan_with};
use clap::Parser;
use std::fs;
use tracing::{error, info};

/// File checked when `--file` is not given
const DEFAULT_TARGET: &str = "app/src/main/java/com/facelapse/app/ui/project/ProjectViewModel.kt";

/// Count matching braces in a source file and report any imbalance
#[derive(Parser, Debug)]
#[command(name = "brace-balance")]
#[command(version = "0.1.0")]
#[command(about = "Detect unbalanced braces in a text file", long_about = None)]
struct Args {
    /// File to scan
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    file: String,

    /// Delimiter pair to balance
    #[arg(short, long, value_enum, default_value = "curly")]
    pair: Delimiter,

    /// Output structured JSON instead of human-readable
    #[arg(short, long)]
    json: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    init_logging();

    let args = Args::parse();
    info!(file = %args.file, pair = %args.pair, "scanning");

    let scanned = match scan_with(&args.file, args.pair.pair()) {
        Ok(scanned) => scanned,
        Err(e) => {
            error!(file = %args.file, error = %e, "cannot read file");
            let output = if args.json {
                let response =
                    ScanResponse::failure(args.file.clone(), args.pair.to_string(), e.to_string());
                to_json(&response)
            } else {
                format!("Error: {}", e)
            };
            write_output(&output, args.output.as_ref());
            std::process::exit(1);
        }
    };

    let output = if args.json {
        let response = ScanResponse::success(
            scanned.path,
            scanned.checksum,
            args.pair.to_string(),
            &scanned.report,
        );
        to_json(&response)
    } else {
        render_text(&scanned.report)
    };

    write_output(&output, args.output.as_ref());
}

/// Structured logs go to stderr so stdout carries only the report
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brace_balance=warn"));

    if std::env::var("BRACE_BALANCE_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn to_json(response: &ScanResponse) -> String {
    serde_json::to_string_pretty(response)
        .unwrap_or_else(|_| r#"{"success": false, "error": "Failed to serialize response"}"#.to_string())
}

/// One line per diagnostic, each newline-terminated
fn render_text(report: &Report) -> String {
    report
        .lines()
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}

/// Write to file or stdout
fn write_output(output: &str, output_path: Option<&String>) {
    let output = if output.is_empty() || output.ends_with('\n') {
        output.to_string()
    } else {
        format!("{}\n", output)
    };

    if let Some(path) = output_path {
        if let Err(e) = fs::write(path, &output) {
            error!(path = %path, error = %e, "cannot write output");
            eprintln!("Failed to write output to '{}': {}", path, e);
            std::process::exit(1);
        }
    } else {
        print!("{}", output);
    }
}
