//! Checkers in the terminal
//!
//! Interactive front end for [`checkers_core`].
//!
//! # Architecture
//!
//! - **Settings**: optional TOML file and flags fixing choices up front
//! - **Prompt**: question and answer with re-prompting on bad input
//! - **Session**: player setup, turn loop and play-again loop
//!
//! # Example
//!
//! ```
//! use checkers::{GameSettings, Prompter, Session};
//! use std::io::Cursor;
//!
//! let input = Cursor::new(b"x\no\nf\n8\n2 2\nSE\n".to_vec());
//! let mut session = Session::new(Prompter::new(input, Vec::new()), GameSettings::default());
//! session.run().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod prompt;
mod session;
mod settings;

// Crate-level exports - Settings
pub use settings::{ConfigError, GameSettings};

// Crate-level exports - Interaction
pub use prompt::Prompter;
pub use session::Session;
