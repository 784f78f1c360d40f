use anyhow::{Context, Result};
use bedrock_edge_proxy::{EdgeEvent, EdgeRewriter, RewriterOptions};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "edge-rewrite")]
#[command(about = "Run one origin-request event through the regional rewriter", long_about = None)]
struct Cli {
    /// Policy file (JSON, camelCase keys). Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Indent the output.
    #[arg(short, long)]
    pretty: bool,

    /// Event file. Reads stdin when omitted.
    event: Option<PathBuf>,
}

fn load_options(path: Option<&PathBuf>) -> Result<RewriterOptions> {
    let Some(path) = path else {
        return Ok(RewriterOptions::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    RewriterOptions::from_json_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

fn read_event(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read event {}", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read event from stdin")?;
            Ok(raw)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rewriter = EdgeRewriter::new(load_options(cli.config.as_ref())?)
        .context("invalid rewriter configuration")?;

    let event = EdgeEvent::from_json(&read_event(cli.event.as_ref())?)?;
    let outcome = rewriter.handle(event)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{}", output);

    Ok(())
}
