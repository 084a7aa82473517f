//! chroma - render 256-color log lines from the command line
//!
//! Usage:
//!   chroma dye <TEXT> --fg slate          Dye text with a role or index
//!   chroma request --status 404 ...       Render an access log line
//!   chroma memory [--rss N --delta D]     Render or sample a memory line
//!   chroma severity --level 2 <MESSAGE>   Render a severity line
//!   chroma resolve 5f00ff                 Look up a 256-color index
//!   chroma palette                        Show roles and the color table

mod cli;

use chroma_log::config::Config;
use chroma_log::palette::{self, hex, BackgroundRole, ColorIndex, Role};
use chroma_log::{format, logging, probe, status, Result, Sign};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error};

/// Table entries printed per palette row
const PALETTE_COLUMNS: usize = 6;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(fmt) = &cli.timestamp_format {
        config.format.timestamp_format = fmt.clone();
    }

    logging::init_tracing(cli.verbose, &config.format);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let output = match &cli.command {
        Command::Dye { text, fg, bg } => {
            let bg = bg.unwrap_or(config.format.background);
            let mut line = chroma_log::dye(text, *fg, bg);
            line.push('\n');
            line
        }
        Command::Request {
            status: raw_status,
            method,
            path,
            elapsed_ms,
        } => {
            format::request_line(
                &format::timestamp(&chrono::Local::now(), &config.format.timestamp_format),
                status::status_code(raw_status),
                method,
                path,
                &format::elapsed_ms(*elapsed_ms),
            )
        }
        Command::Memory {
            rss,
            delta,
            alloc_kb,
        } => {
            let mut line = match (rss, delta) {
                (Some(rss), Some(delta)) => {
                    let sign = if *delta >= 0 { Sign::Plus } else { Sign::Minus };
                    format::memory_line(sign, delta.unsigned_abs(), *rss)
                }
                _ => sample_memory(*alloc_kb)?,
            };
            line.push('\n');
            line
        }
        Command::Severity {
            level,
            module,
            message,
        } => format::severity_line(
            *level,
            &format::timestamp(&chrono::Local::now(), &config.format.timestamp_format),
            module,
            message,
        ),
        Command::Resolve { hex: triplet } => {
            let index = hex::resolve(triplet)?;
            format!("{} {}\n", index, chroma_log::paint("██", index))
        }
        Command::Palette => render_palette(),
    };

    let output = if cli.plain {
        chroma_log::strip(&output)
    } else {
        output
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Memory line for allocating and touching `alloc_kb` kilobytes
fn sample_memory(alloc_kb: usize) -> Result<String> {
    let (touched, delta) = probe::measure(|| {
        let buf = vec![1u8; alloc_kb.saturating_mul(1024)];
        buf.iter().map(|&b| usize::from(b)).sum::<usize>()
    })?;
    debug!(touched, "allocation measured");
    Ok(delta.line())
}

fn render_palette() -> String {
    let mut out = String::new();

    out.push_str("Roles\n");
    for role in Role::ALL {
        let index = palette::foreground(role);
        out.push_str(&format!(
            "  {:<16} {:>3}  {}\n",
            role.name(),
            index,
            chroma_log::paint(role.name(), role)
        ));
    }

    out.push_str("\nBackgrounds\n");
    for bg in BackgroundRole::ALL {
        out.push_str(&format!(
            "  {:<16} {:>3}  {}\n",
            bg.name(),
            palette::background(bg),
            chroma_log::dye(bg.name(), Role::White, bg)
        ));
    }

    out.push_str("\nTable\n");
    for row in hex::HEX_TABLE.chunks(PALETTE_COLUMNS) {
        let cells: Vec<String> = row
            .iter()
            .map(|&(h, i)| {
                let swatch = chroma_log::paint(h, ColorIndex(i));
                format!("{:>3} {}", i, swatch)
            })
            .collect();
        out.push_str("  ");
        out.push_str(&cells.join("  "));
        out.push('\n');
    }

    out
}
