// Sawtooth: a Battlesnake that runs for the nearest wall and then circles the
// board clockwise along it. It ignores food, hazards and other snakes.
// For more info see docs.battlesnake.com

use log::info;
use serde_json::{json, Value};

use crate::config::Config;
use crate::debug_logger::{DebugLogger, MoveRecord};
use crate::types::{Battlesnake, Board, Direction, Game};
use crate::wall::{self, Phase};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with debug logging switched off
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        Self::with_debug_logger(config, DebugLogger::disabled())
    }

    /// Creates a Bot that records every decision through `debug_logger`
    pub fn with_debug_logger(config: Config, debug_logger: DebugLogger) -> Self {
        Bot {
            config,
            debug_logger,
        }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": appearance.apiversion,
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
            "version": appearance.version,
        })
    }

    /// Called when a game starts, returns the legacy appearance fields
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) -> Value {
        info!("GAME START {}", game.id);

        let appearance = &self.config.appearance;
        json!({
            "color": appearance.color,
            "headType": appearance.head,
            "tailType": appearance.tail,
        })
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME OVER {} after {} turns", game.id, turn);
    }

    /// Picks a move and the phase that produced it. Pure; no logging.
    pub fn choose_move(board: &Board, you: &Battlesnake) -> (Direction, Phase) {
        wall::decide(board, you)
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// # Arguments
    /// * `game` - Current game metadata
    /// * `turn` - Current turn number
    /// * `board` - Current board state
    /// * `you` - Your snake's current state
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move direction
    pub fn get_move(&self, game: &Game, turn: &i32, board: &Board, you: &Battlesnake) -> Value {
        let (chosen_move, phase) = Self::choose_move(board, you);
        let head = you.head_cell();

        info!(
            "Turn {}: head ({}, {}) on {}x{}, {} -> {}",
            turn,
            head.x,
            head.y,
            board.width,
            board.height,
            phase.as_str(),
            chosen_move
        );

        if self.debug_logger.is_enabled() {
            self.debug_logger.log_move(MoveRecord {
                turn: *turn,
                game_id: game.id.clone(),
                chosen_move,
                phase,
                board: board.clone(),
                you: you.clone(),
            });
        }

        match &self.config.moves.shout {
            Some(shout) => json!({ "move": chosen_move.as_str(), "shout": shout }),
            None => json!({ "move": chosen_move.as_str() }),
        }
    }
}
