use arabic_core::dom::forms::assess_title_length;
use arabic_core::logging::init_tracing;
use arabic_core::ArabicEngine;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, stdin, stdout, Write};
use std::path::Path;

const STATE_PATH: &str = "arabic_engine_state.bin";

fn main() -> io::Result<()> {
    init_tracing();
    let mut engine = match ArabicEngine::from_file_or_new(Path::new(STATE_PATH)) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[ERROR] Could not start engine: {}", e);
            return Ok(());
        }
    };
    let mut title = String::new();
    let mut term = String::new();

    loop {
        print_ui(&engine, &title, &term)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(['\r', '\n']);

        match cmd {
            "exit" | ":q" => break,
            ":k" => {
                engine.toggle_keyboard();
            }
            ":c" => {
                title.clear();
                term.clear();
            }
            s if s.starts_with(":s ") => term = s[3..].trim().to_string(),
            s => title = s.to_string(),
        }
    }

    println!("\nSaving state...");
    if let Err(e) = engine.save_state() {
        eprintln!("[ERROR] Could not save state: {}", e);
    } else {
        println!("State saved to '{}'", STATE_PATH);
    }
    Ok(())
}

fn heading(out: &mut io::Stdout, text: &str) -> io::Result<()> {
    execute!(
        out,
        SetForegroundColor(Color::Cyan),
        Print(format!("{text}\n")),
        ResetColor
    )
}

fn print_ui(engine: &ArabicEngine, title: &str, term: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    heading(&mut out, "Arabic Title Analyzer Simulator")?;
    println!("---------------------------------------------------------------");
    println!("Type a title and press [Enter]. ':s <term>' sets a search term,");
    println!("':k' toggles the keyboard, ':c' clears, 'exit' saves and quits.\n");

    let layout = engine.keyboard_mode().layout();
    println!(
        "Keyboard: [{}] {} ({})",
        layout.indicator_text,
        layout.lang,
        layout.direction.as_str()
    );

    if title.is_empty() {
        print!("\n> ");
        return out.flush();
    }

    println!("\nTitle: {}", title);
    let direction = engine
        .text_direction(title)
        .map(|d| d.as_str())
        .unwrap_or("unchanged");
    println!("Direction -> {}", direction);

    let analysis = engine.analyze(title);
    println!("Normalized -> {}", analysis.normalized);
    println!("Arabic words: {}", analysis.word_count);
    println!("Keywords: {}", analysis.keywords.join("، "));
    println!("Question: {}", if analysis.is_question { "yes" } else { "no" });

    let assessment = assess_title_length(title);
    let color = match assessment.badge_class {
        "bg-success" => Color::Green,
        "bg-warning" => Color::Yellow,
        _ => Color::Red,
    };
    execute!(
        out,
        Print("Length: "),
        SetForegroundColor(color),
        Print(format!("{} ({})\n", assessment.length, assessment.indicator_text)),
        ResetColor
    )?;

    heading(&mut out, "\nRewrites")?;
    println!("  Spelling    -> {}", engine.correct_spelling(title));
    println!("  Suggestions -> {}", engine.suggest_alternatives(title));

    if !term.is_empty() {
        heading(&mut out, "\nSearch")?;
        println!("  '{}' found: {}", term, engine.search(title, term));
        println!("  {}", engine.highlight(title, term));
    }
    print!("\n> ");
    out.flush()
}
