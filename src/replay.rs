// Replay module for analyzing historical game states and debugging decision-making
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Re-run move selection on historical states
// 3. Compare logged vs replayed moves
// 4. Generate analysis reports
//
// Move selection is a pure function of the logged board, so a replay of an
// unchanged build always reproduces the logged move.

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::types::{Battlesnake, Board, Direction};
use crate::wall::{self, Phase};

/// Represents a single log entry from the debug JSONL file
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogEntry {
    pub turn: i32,
    #[serde(default)]
    pub game_id: String,
    pub chosen_move: String,
    #[serde(default)]
    pub phase: Option<Phase>,
    pub board: Board,
    /// Missing in hand-written logs; the first snake on the board is used then
    #[serde(default)]
    pub you: Option<Battlesnake>,
    #[serde(default)]
    pub timestamp: String,
}

impl LogEntry {
    /// The snake that made the logged move
    pub fn our_snake(&self) -> Result<&Battlesnake, String> {
        match &self.you {
            Some(you) => Ok(you),
            None => self
                .board
                .snakes
                .first()
                .ok_or_else(|| "No snakes found in board state".to_string()),
        }
    }
}

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: i32,
    pub original_move: Direction,
    pub replayed_move: Direction,
    pub phase: Phase,
    pub matches: bool,
    pub computation_time_us: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
    pub toward_wall_turns: usize,
    pub hug_wall_turns: usize,
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    verbose: bool,
}

impl ReplayEngine {
    pub fn new(verbose: bool) -> Self {
        ReplayEngine { verbose }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<LogEntry>, String> {
        let file =
            File::open(log_path.as_ref()).map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: LogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Re-runs move selection on a single board state
    pub fn replay_turn(
        &self,
        board: &Board,
        you: &Battlesnake,
    ) -> Result<(Direction, Phase, u128), String> {
        board.check_snake(you)?;

        let start_time = Instant::now();
        let (direction, phase) = wall::decide(board, you);

        Ok((direction, phase, start_time.elapsed().as_micros()))
    }

    /// Replays a single log entry and compares the result
    pub fn replay_entry(&self, entry: &LogEntry) -> Result<ReplayResult, String> {
        let our_snake = entry.our_snake()?;
        let original_move: Direction = entry.chosen_move.parse()?;

        let (replayed_move, phase, computation_time) = self.replay_turn(&entry.board, our_snake)?;
        let matches = original_move == replayed_move;

        if self.verbose {
            if matches {
                info!(
                    "Turn {}: ✓ MATCH - {} ({}, {}us)",
                    entry.turn,
                    replayed_move,
                    phase.as_str(),
                    computation_time
                );
            } else {
                warn!(
                    "Turn {}: ✗ MISMATCH - Original: {}, Replayed: {} ({}, {}us)",
                    entry.turn,
                    original_move,
                    replayed_move,
                    phase.as_str(),
                    computation_time
                );
            }
        }

        Ok(ReplayResult {
            turn: entry.turn,
            original_move,
            replayed_move,
            phase,
            matches,
            computation_time_us: computation_time,
        })
    }

    /// Replays all entries in a log file, in parallel; results keep log order
    pub fn replay_all(&self, entries: &[LogEntry]) -> Vec<ReplayResult> {
        entries
            .par_iter()
            .filter_map(|entry| match self.replay_entry(entry) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", entry.turn, e);
                    None
                }
            })
            .collect()
    }

    /// Keeps only the entries of one game. A debug log is truncated at
    /// server startup only, so it usually holds several games.
    pub fn entries_for_game(entries: &[LogEntry], game_id: &str) -> Vec<LogEntry> {
        entries
            .iter()
            .filter(|e| e.game_id == game_id)
            .cloned()
            .collect()
    }

    /// Finds the entry for `turn`, refusing to guess when several games
    /// logged that turn
    fn find_turn(entries: &[LogEntry], turn: i32) -> Result<&LogEntry, String> {
        let mut matching = entries.iter().filter(|e| e.turn == turn);
        let entry = matching
            .next()
            .ok_or_else(|| format!("Turn {} not found in log file", turn))?;

        if let Some(other) = matching.find(|e| e.game_id != entry.game_id) {
            return Err(format!(
                "Turn {} appears in games '{}' and '{}'; select one game first",
                turn, entry.game_id, other.game_id
            ));
        }

        Ok(entry)
    }

    /// Replays specific turns from a log file
    pub fn replay_turns(
        &self,
        entries: &[LogEntry],
        turn_numbers: &[i32],
    ) -> Result<Vec<ReplayResult>, String> {
        let mut results = Vec::new();

        for turn_num in turn_numbers {
            let entry = Self::find_turn(entries, *turn_num)?;

            match self.replay_entry(entry) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", turn_num, e);
                }
            }
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let match_rate = if total_turns > 0 {
            (matches as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };
        let toward_wall_turns = results
            .iter()
            .filter(|r| r.phase == Phase::TowardWall)
            .count();

        ReplayStats {
            total_turns,
            matches,
            mismatches: total_turns - matches,
            match_rate,
            toward_wall_turns,
            hug_wall_turns: total_turns - toward_wall_turns,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Total Turns:    {}", stats.total_turns);
        println!("Matches:        {} ({:.1}%)", stats.matches, stats.match_rate);
        println!("Mismatches:     {}", stats.mismatches);
        println!("Toward wall:    {}", stats.toward_wall_turns);
        println!("Hugging wall:   {}", stats.hug_wall_turns);
        println!("═══════════════════════════════════════════════════════════\n");

        let mismatches: Vec<_> = results.iter().filter(|r| !r.matches).collect();
        if !mismatches.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                  DETAILED MISMATCHES");
            println!("═══════════════════════════════════════════════════════════");

            for result in mismatches {
                println!(
                    "Turn {}: {} → {} ({})",
                    result.turn,
                    result.original_move,
                    result.replayed_move,
                    result.phase.as_str()
                );
            }
            println!();
        }
    }

    /// Validates that specific expected moves were made
    pub fn validate_expected_moves(
        &self,
        entries: &[LogEntry],
        expected_moves: &[(i32, Vec<Direction>)], // (turn, acceptable_moves)
    ) -> Result<(), String> {
        for (turn, acceptable) in expected_moves {
            let entry = Self::find_turn(entries, *turn)?;

            let actual_move: Direction = entry.chosen_move.parse()?;

            if !acceptable.contains(&actual_move) {
                return Err(format!(
                    "Turn {}: Expected one of {:?}, but got {}",
                    turn,
                    acceptable.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
                    actual_move
                ));
            }
        }

        Ok(())
    }
}
