// Debug logging module for asynchronous decision logging
//
// This module provides fire-and-forget async logging to avoid blocking
// the main request/response cycle. Each turn's decision is written to a JSONL
// file that the replay engine can read back.

use log::error;
use serde::Serialize;
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::types::{Battlesnake, Board, Direction};
use crate::wall::Phase;

/// Represents a single debug log entry
/// Field names match `replay::LogEntry`
#[derive(Debug, Serialize)]
struct DebugLogEntry {
    turn: i32,
    game_id: String,
    chosen_move: String,
    phase: Phase,
    board: Board,
    you: Battlesnake,
    timestamp: String,
}

/// One decision to be written
#[derive(Debug)]
pub struct MoveRecord {
    pub turn: i32,
    pub game_id: String,
    pub chosen_move: Direction,
    pub phase: Phase,
    pub board: Board,
    pub you: Battlesnake,
}

/// Shared debug logger state
/// Uses Arc<Mutex<File>> to allow concurrent async writes from multiple tasks
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub async fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .await
        {
            Ok(file) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Logs a move decision asynchronously (fire-and-forget)
    /// Must be called from within a tokio runtime when enabled
    pub fn log_move(&self, record: MoveRecord) {
        if !self.enabled {
            return;
        }

        let file_handle = self.file.clone();

        tokio::spawn(async move {
            Self::log_move_internal(file_handle, record).await;
        });
    }

    /// Waits for the writer lock and flushes the file.
    /// Entries spawned before this call may still be queued behind it.
    pub async fn flush(&self) {
        let mut file_guard = self.file.lock().await;
        if let Some(file) = file_guard.as_mut() {
            if let Err(e) = file.flush().await {
                error!("Failed to flush debug log: {}", e);
            }
        }
    }

    /// Internal async function that performs the actual file write
    async fn log_move_internal(file_handle: Arc<Mutex<Option<File>>>, record: MoveRecord) {
        let mut file_guard = file_handle.lock().await;

        if let Some(file) = file_guard.as_mut() {
            let entry = DebugLogEntry {
                turn: record.turn,
                game_id: record.game_id,
                chosen_move: record.chosen_move.as_str().to_string(),
                phase: record.phase,
                board: record.board,
                you: record.you,
                timestamp: chrono::Utc::now().to_rfc3339(),
            };

            match serde_json::to_string(&entry) {
                Ok(json_line) => {
                    let line_with_newline = format!("{}\n", json_line);
                    if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                        error!("Failed to write debug log entry: {}", e);
                    } else if let Err(e) = file.flush().await {
                        error!("Failed to flush debug log: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to serialize debug log entry: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::ReplayEngine;
    use crate::types::Coord;
    use std::time::Duration;

    fn record(turn: i32, head: Coord, chosen_move: Direction, phase: Phase) -> MoveRecord {
        let you = Battlesnake {
            id: "me".to_string(),
            name: "Sawtooth".to_string(),
            health: 100,
            body: vec![head],
            head: Some(head),
            length: 1,
            latency: String::new(),
            shout: None,
        };
        MoveRecord {
            turn,
            game_id: "debug-test".to_string(),
            chosen_move,
            phase,
            board: Board {
                height: 5,
                width: 5,
                food: vec![],
                snakes: vec![you.clone()],
                hazards: vec![],
            },
            you,
        }
    }

    #[tokio::test]
    async fn test_disabled_logger_writes_nothing() {
        let logger = DebugLogger::disabled();
        assert!(!logger.is_enabled());
        logger.log_move(record(0, Coord::new(0, 0), Direction::Right, Phase::HugWall));
        logger.flush().await;
    }

    #[tokio::test]
    async fn test_entries_round_trip_through_replay_loader() {
        let path = std::env::temp_dir().join(format!(
            "sawtooth_debug_{}.jsonl",
            std::process::id()
        ));
        let path_str = path.to_string_lossy().to_string();

        let logger = DebugLogger::new(true, &path_str).await;
        assert!(logger.is_enabled());

        logger.log_move(record(0, Coord::new(0, 0), Direction::Right, Phase::HugWall));

        // Writes are detached; give the task a moment before reading back
        let mut entries = Vec::new();
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            logger.flush().await;
            entries = ReplayEngine::new(false)
                .load_log_file(&path)
                .expect("debug log should be readable");
            if !entries.is_empty() {
                break;
            }
        }

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].turn, 0);
        assert_eq!(entries[0].game_id, "debug-test");
        assert_eq!(entries[0].chosen_move, "right");
        assert_eq!(entries[0].phase, Some(Phase::HugWall));

        let _ = std::fs::remove_file(&path);
    }
}
