use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Utc;

use flashdeck_lib::flashcards::SessionState;

use crate::app::App;
use crate::render::terminal::{paint, Color};

const QUIT: &str = ":q";

/// Interactive study loop over the due cards
pub fn run(app: &mut App, use_color: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut reviewed = 0usize;
    let mut correct = 0usize;

    loop {
        let now = Utc::now();
        let (card_id, front, due_count) = match app.deck.state(now) {
            SessionState::Idle => {
                println!("No cards due for review.");
                break;
            }
            SessionState::Presenting { card, due_count, .. } => {
                (card.id.clone(), card.front.clone(), due_count)
            }
        };

        println!();
        println!("{}", paint(&format!("Study Deck ({} cards due)", due_count), Color::DIM, use_color));
        println!("{}", paint(&front, Color::BOLD, use_color));

        // Blank lines re-prompt instead of counting as an answer
        let answer = loop {
            print!("> ");
            io::stdout().flush()?;
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break Some(line);
                    }
                }
                None => break None,
            }
        };

        let Some(answer) = answer else {
            println!();
            break;
        };
        if answer.trim() == QUIT {
            break;
        }

        // Graded at the instant the card was shown
        let Some(outcome) = app.answer(&card_id, &answer, now)? else {
            continue;
        };

        reviewed += 1;
        if outcome.was_correct {
            correct += 1;
            println!("{}", paint(&outcome.feedback(), Color::GREEN, use_color));
        } else {
            println!("{}", paint(&outcome.feedback(), Color::RED, use_color));
        }
    }

    if reviewed > 0 {
        println!("Reviewed {} cards, {} correct.", reviewed, correct);
    }

    Ok(())
}
