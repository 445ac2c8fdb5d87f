use std::io::{self, BufRead, Write};

use colored::Colorize;

use ll_story::{GameSession, Phase, StoryConfig};

use crate::RecapFormat;

pub fn run(recap: Option<RecapFormat>) -> Result<(), String> {
    let mut session = GameSession::new(StoryConfig::default());
    for line in session.run() {
        println!("{line}");
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_closed() {
        println!("{}", session.prompt());
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                println!();
                break; // EOF
            }
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match session.process(&line) {
            Ok(output) => print_output(&session, &output),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }

    if let Some(format) = recap {
        let journal = session.journal();
        let text = match format {
            RecapFormat::Text => journal.export_text(),
            RecapFormat::Json => journal
                .export_json()
                .map_err(|e| format!("failed to export journal: {e}"))?,
        };
        println!("{text}");
    }

    Ok(())
}

/// Print the lines of one turn, highlighting an ending if one was reached.
fn print_output(session: &GameSession, output: &[String]) {
    let ending = match session.phase() {
        Phase::ConfirmRestart(ending) => Some(ending),
        _ => None,
    };
    for line in output {
        match ending {
            Some(ending) if ending.narration().iter().any(|n| line == n) => {
                if ending.is_win() {
                    println!("{}", line.green().bold());
                } else {
                    println!("{}", line.red().bold());
                }
            }
            _ => println!("{line}"),
        }
    }
}
