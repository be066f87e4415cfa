//! Terminal checkers
//!
//! Plays Teal (you) against the greedy engine (Purple). Input is coordinate
//! text: a single square selects one of your pieces, a second square plays
//! the move, and "b3 a4" does both at once. Illegal input just changes or
//! clears the selection, exactly as a stray click would.

mod session;

use checkers_core::{coord_to_sq, is_dark_square, sq_to_coord, Engine, PieceKind, Side, Status};
use greedy_engine::{Difficulty, GreedyEngine};
use session::{Input, Session, HUMAN_SIDE};
use std::io::{self, BufRead, Write};

fn print_board(session: &Session) {
    let pos = &session.position;
    println!();
    for row in (0..8).rev() {
        print!("{} ", row + 1);
        for col in 0..8 {
            let square = (row * 8 + col) as u8;
            let glyph = match pos.piece_at(square) {
                Some(p) => match (p.side, p.kind) {
                    (Side::Teal, PieceKind::Man) => 't',
                    (Side::Teal, PieceKind::King) => 'T',
                    (Side::Purple, PieceKind::Man) => 'p',
                    (Side::Purple, PieceKind::King) => 'P',
                },
                None if session.legal_moves_from_selected.contains(&square) => '*',
                None if is_dark_square(row, col) => '.',
                None => ' ',
            };
            if session.selected_square == Some(square) {
                print!("[{}]", glyph);
            } else {
                print!(" {} ", glyph);
            }
        }
        println!();
    }
    println!("   a  b  c  d  e  f  g  h");

    let (teal, purple) = pos.count_pieces();
    println!("Teal (you): {}   Purple: {}", teal, purple);
}

fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    if line.is_empty() {
        return None; // EOF
    }
    Some(line.trim().to_string())
}

fn ask_difficulty() -> Difficulty {
    loop {
        let answer = match prompt("Difficulty (easy/medium/hard) [medium]: ") {
            Some(a) => a,
            None => return Difficulty::Medium,
        };
        if answer.is_empty() {
            return Difficulty::Medium;
        }
        match answer.parse() {
            Ok(d) => return d,
            Err(e) => println!("{}", e),
        }
    }
}

fn announce(applied: checkers_core::Applied, by_engine: bool) {
    let who = if by_engine { "Purple" } else { "You" };
    if applied.capture {
        println!("{} captured a piece!", who);
    }
    if applied.promoted {
        println!("{} crowned a king.", who);
    }
}

/// Returns false when the player declines another game.
fn play_one_game(engine: &mut GreedyEngine) -> bool {
    let mut session = Session::new();
    engine.new_game();

    loop {
        print_board(&session);

        match session.status() {
            Status::TealWin => {
                println!("\nYou win!");
                break;
            }
            Status::PurpleWin => {
                println!("\nPurple wins. Better luck next time.");
                break;
            }
            Status::Ongoing => {}
        }

        let line = match prompt("> ") {
            Some(line) => line,
            None => return false,
        };
        match line.as_str() {
            "quit" | "exit" | "q" => return false,
            "new" => return true,
            "" => continue,
            _ => {}
        }

        let mut moved = None;
        for token in line.split_whitespace() {
            let square = match coord_to_sq(token) {
                Some(s) => s,
                None => {
                    // Resolves to no square; ignore it
                    println!("'{}' is not a square", token);
                    continue;
                }
            };
            if let Input::Moved(applied) = session.touch_square(square) {
                moved = Some(applied);
                break;
            }
        }

        let applied = match moved {
            Some(a) => a,
            None => continue, // still selecting
        };
        announce(applied, false);

        if session.status() != Status::Ongoing {
            continue; // loop once more to show the final board and banner
        }

        // Engine replies for Purple
        let reply = engine.choose_move(&session.position, HUMAN_SIDE.other());
        match reply.and_then(|mv| session.apply_engine_move(mv).map(|a| (mv, a))) {
            Some((mv, applied)) => {
                println!(
                    "Purple plays {} {} {}",
                    sq_to_coord(mv.from),
                    if applied.capture { "x" } else { "-" },
                    sq_to_coord(mv.to)
                );
                announce(applied, true);
            }
            // status() said ongoing, so Purple had a move; reaching here
            // means the terminal check above is wrong
            None => {
                println!("Purple has no move.");
            }
        }
    }

    matches!(
        prompt("Play again? (y/n): ").as_deref(),
        Some("y") | Some("Y") | Some("yes")
    )
}

fn main() {
    println!("=== Checkers: Teal vs Purple ===");
    println!("You are Teal, moving up the board. Type 'b3 a4' to move, 'quit' to leave.");

    let difficulty = ask_difficulty();
    let mut engine = GreedyEngine::new(difficulty);
    println!("Opponent: {}", engine.name());

    while play_one_game(&mut engine) {
        println!("\nStarting a new game.");
    }
}
