// Library exports for the Sawtooth Battlesnake
// The server binary, the replay tool and the integration tests all build on these

#[macro_use]
extern crate rocket;

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod handler;
pub mod replay;
pub mod types;
pub mod wall;
