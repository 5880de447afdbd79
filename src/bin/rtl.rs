//! Rewrites an HTML page for right-to-left reading.

use arabic_core::charts::attach_chart_configs;
use arabic_core::dom::{apply_rtl_layout, HtmlDocument};
use arabic_core::logging::init_tracing;
use arabic_core::ArabicError;
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "arabic_rtl",
    version,
    about = "Apply Arabic RTL layout to an HTML document"
)]
struct Cli {
    /// Input HTML file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave chart canvases without a data-chart-config attribute
    #[arg(long)]
    no_charts: bool,
}

fn read_input(input: Option<&PathBuf>) -> Result<String, ArabicError> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut html = String::new();
            io::stdin().read_to_string(&mut html)?;
            Ok(html)
        }
    }
}

fn main() -> Result<(), ArabicError> {
    init_tracing();
    let cli = Cli::parse();

    let html = read_input(cli.input.as_ref())?;
    let document = HtmlDocument::parse(&html)?;

    let report = apply_rtl_layout(&document);
    tracing::info!(
        dropdowns = report.dropdowns,
        modals = report.modals,
        aligned_inputs = report.aligned_inputs,
        "layout applied"
    );
    if !cli.no_charts {
        let charts = attach_chart_configs(&document);
        tracing::info!("configured {} charts", charts);
    }

    let rewritten = document.to_html()?;
    match &cli.output {
        Some(path) => fs::write(path, rewritten)?,
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(rewritten.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
