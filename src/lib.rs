//! Tick-Tack-Toe library - terminal front end for the tic-tac-toe engine
//!
//! The game rules live in [`tictactoe_engine`]. This crate adds the parts a
//! person at a terminal needs around them.
//!
//! # Architecture
//!
//! - **Cli**: command-line parsing (`play`, `classify`)
//! - **Settings**: optional TOML file with presentation and input options
//! - **Driver**: the read-validate-apply loop over any `BufRead`/`Write` pair
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tick_tack_toe::{Driver, Settings};
//! use tictactoe_engine::GameState;
//!
//! let moves = "1 1\n2 2\n1 2\n2 1\n1 3\n";
//! let mut driver = Driver::new(Cursor::new(moves), Vec::new(), Settings::default());
//! assert_eq!(driver.run().unwrap(), GameState::XWins);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod driver;
mod settings;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Terminal driver
pub use driver::{Driver, DriverError, PROMPT};

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};
