//! Configuration module for Steam-Achievements
//!
//! The command line is turned into a [`Config`] once in `main` and passed
//! into the pipeline; nothing reads arguments from global state.
//!
//! # Example
//!
//! ```no_run
//! use steam_achievements::config::{validate, Config};
//!
//! let config = Config::new(631570, Some(1845001352), false);
//! validate(&config).unwrap();
//! println!("Writing {}", config.output_path().display());
//! ```

mod types;
mod validation;

// Re-export types
pub use types::Config;

// Re-export validation
pub use validation::validate;
