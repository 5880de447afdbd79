//! Line protocol over stdin/stdout.
//!
//! Each request is `COMMAND argument`; `SEARCH` and `HIGHLIGHT` take the
//! term and the text separated by a tab. Every request gets exactly one
//! reply line, `ERROR <message>` on failure.

use arabic_core::keyboard::KeyboardLayout;
use arabic_core::locale::DateStyle;
use arabic_core::logging::init_tracing;
use arabic_core::{ArabicEngine, ArabicError, EngineConfig};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "arabic_engine", about = "Arabic text engine speaking a line protocol")]
struct Args {
    /// JSON engine configuration, used when there is no saved state
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// State file restored on start and saved on EXIT
    #[arg(short, long)]
    state: Option<PathBuf>,
}

fn main() -> Result<(), ArabicError> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    let mut engine = match &args.state {
        Some(path) => ArabicEngine::from_file_or(path, config)?,
        None => ArabicEngine::new(config)?,
    };
    tracing::info!("arabic engine started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        tracing::debug!("<- {:?}", input);
        let (command, argument) = input.split_once(' ').unwrap_or((input.as_str(), ""));

        if command == "EXIT" {
            tracing::info!("received EXIT, saving state");
            if let Err(e) = engine.save_state() {
                tracing::error!("error saving state: {}", e);
            }
            break;
        }

        let reply = match respond(&mut engine, command, argument) {
            Ok(reply) => reply,
            Err(message) => format!("ERROR {message}"),
        };
        tracing::debug!("-> {:?}", reply);
        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;
    }
    tracing::info!("shutting down");
    Ok(())
}

fn respond(engine: &mut ArabicEngine, command: &str, argument: &str) -> Result<String, String> {
    let reply = match command {
        "ANALYZE" => {
            let analysis = engine.analyze(argument);
            format!("ANALYSIS {}", to_json(&analysis)?)
        }
        "NORMALIZE" => format!("NORMALIZED {}", engine.normalize(argument)),
        "CLEAN" => format!("CLEANED {}", engine.clean_text(argument)),
        "DIRECTION" => {
            let direction = engine
                .text_direction(argument)
                .map(|d| d.as_str())
                .unwrap_or("none");
            format!("DIRECTION {direction}")
        }
        "QUESTION" => format!("QUESTION {}", engine.is_question(argument)),
        "KEYWORDS" => format!("KEYWORDS {}", to_json(&engine.extract_keywords(argument))?),
        "CORRECT" => format!("CORRECTED {}", engine.correct_spelling(argument)),
        "SUGGEST" => format!("SUGGESTED {}", engine.suggest_alternatives(argument)),
        "SEARCH" => {
            let (term, text) = split_term(argument)?;
            format!("FOUND {}", engine.search(text, term))
        }
        "HIGHLIGHT" => {
            let (term, text) = split_term(argument)?;
            format!("HIGHLIGHTED {}", engine.highlight(text, term))
        }
        "FORMAT_NUMBER" => format!("FORMATTED {}", engine.format_number(parse_value(engine, argument)?)),
        "FORMAT_PERCENT" => format!("FORMATTED {}", engine.format_percent(parse_value(engine, argument)?)),
        "FORMAT_CURRENCY" => {
            let (amount, code) = match argument.trim().split_once(' ') {
                Some((amount, code)) => (amount, Some(code.trim())),
                None => (argument, None),
            };
            let amount = parse_value(engine, amount)?;
            let formatted = engine.format_currency(amount, code).map_err(|e| e.to_string())?;
            format!("FORMATTED {formatted}")
        }
        "FORMAT_DATE" => {
            let (date, style) = match argument.trim().rsplit_once(' ') {
                Some((date, "short")) => (date, DateStyle::Short),
                Some((date, "long")) => (date, DateStyle::Long),
                _ => (argument, DateStyle::Long),
            };
            let formatted = engine.format_date(date, style).map_err(|e| e.to_string())?;
            format!("FORMATTED {formatted}")
        }
        "FORMAT_TIME" => {
            let formatted = engine.format_time(argument).map_err(|e| e.to_string())?;
            format!("FORMATTED {formatted}")
        }
        "TOGGLE_KEYBOARD" => keyboard_reply(&engine.toggle_keyboard()),
        "" => return Err("empty command".to_string()),
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(reply)
}

fn keyboard_reply(layout: &KeyboardLayout) -> String {
    format!("KEYBOARD {} {}", layout.lang, layout.direction.as_str())
}

fn split_term(argument: &str) -> Result<(&str, &str), String> {
    argument
        .split_once('\t')
        .ok_or_else(|| "expected <term>\\t<text>".to_string())
}

/// Accepts ASCII or Arabic-Indic digits.
fn parse_value(engine: &ArabicEngine, argument: &str) -> Result<f64, String> {
    let western = engine.to_western_digits(argument.trim());
    western
        .parse::<f64>()
        .map_err(|_| format!("not a number: {}", argument.trim()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}
