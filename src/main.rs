//! graph-viewer CLI entry point.
//!
//! A thin shell over the library: read a document, load it, render one frame.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use graph_viewer::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use graph_viewer::{OutputFormat, RenderConfig, render_document};

/// Render a grouped graph document as SVG, text primitives or DOT.
#[derive(Parser, Debug)]
#[command(
    name = "graph-viewer",
    version = env!("GRAPH_VIEWER_VERSION"),
    about = "Render a grouped graph document as SVG, text primitives or DOT"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Viewport width in pixels
    #[arg(short = 'W', long = "width", default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    width: i32,

    /// Viewport height in pixels
    #[arg(short = 'H', long = "height", default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    height: i32,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let config = RenderConfig::default().with_viewport(cli.width, cli.height);
    let (summary, rendered) = match render_document(&text, &config, cli.format) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    eprintln!("{}", summary);
    if let Some(warning) = &summary.warning {
        eprintln!("warning: {}", warning);
    }

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
