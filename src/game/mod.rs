//! Game orchestration: set up one game, play it to the end, report the result.
//!
//! ```
//! use monopoly_sim::core::GameConfig;
//! use monopoly_sim::game::Game;
//! use monopoly_sim::strategy::StrategyConfig;
//!
//! let config = GameConfig::new(vec![StrategyConfig::aggressive(), StrategyConfig::conservative()])
//!     .with_max_turns(100);
//! let record = Game::new(&config, 42).unwrap().play();
//!
//! assert!(record.rounds <= 100);
//! assert_eq!(record.players.len(), 2);
//! ```

pub mod orchestrator;
pub mod record;

pub use orchestrator::Game;
pub use record::{EndReason, GameRecord, PlayerRecord};
