//! Output module for Steam-Achievements
//!
//! Serializes the assembled record sets into the ini format read by the
//! engine's achievements table generator.

mod ini;

pub use ini::{format_ini, write_ini};
