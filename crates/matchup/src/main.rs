//! Matchup CLI
//!
//! Run game series between difficulty levels and track Elo ratings.

use greedy_engine::Difficulty;
use matchup::{EloTracker, MatchConfig, MatchRunner, MatchupResults};
use std::env;
use std::path::Path;

const ELO_FILE: &str = "matchup_elo.json";
const RESULTS_FILE: &str = "matchup_results.json";

fn print_usage() {
    println!("Checkers Matchup Runner");
    println!();
    println!("Usage:");
    println!("  matchup match <level1> <level2> [--games N] [--max-moves M] [--seed S] [--config FILE]");
    println!("  matchup leaderboard");
    println!();
    println!("Levels:");
    println!("  easy          - plays the best move 30% of the time");
    println!("  medium        - plays the best move 60% of the time");
    println!("  hard          - always plays the best (material-greedy) move");
    println!();
    println!("Examples:");
    println!("  matchup match easy hard --games 100");
    println!("  matchup match medium medium --games 50 --seed 7");
}

fn parse_difficulty(spec: &str) -> Difficulty {
    match spec.parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}; defaulting to medium", e);
            Difficulty::Medium
        }
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two difficulty levels");
        print_usage();
        return;
    }

    let d1 = parse_difficulty(&args[0]);
    let d2 = parse_difficulty(&args[1]);

    // Start from defaults or a config file, then apply flags on top
    let mut config = MatchConfig::default();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match MatchConfig::from_toml(Path::new(&args[i + 1])) {
                        Ok(loaded) => config = loaded,
                        Err(e) => eprintln!("Warning: {}", e),
                    }
                    i += 1;
                }
            }
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--max-moves" | "-m" => {
                if i + 1 < args.len() {
                    config.max_moves = args[i + 1].parse().unwrap_or(config.max_moves);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", d1, d2);
    println!("Games: {}, max moves: {}", config.num_games, config.max_moves);
    println!();

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(d1, d2);

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        d1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    // Record the series alongside previously saved ones
    let mut results = MatchupResults::load(Path::new(RESULTS_FILE))
        .unwrap_or_else(|_| MatchupResults::new(config));
    results.add_match(d1, d2, result.clone());
    results.print_report();
    if let Err(e) = results.save(Path::new(RESULTS_FILE)) {
        eprintln!("Warning: Failed to save results: {}", e);
    }

    // Update Elo tracker
    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(d1, d2, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => println!("No matches recorded yet ({} not found)", ELO_FILE),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "leaderboard" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
        }
    }
}
