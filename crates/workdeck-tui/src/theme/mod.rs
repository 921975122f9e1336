//! Centralized theme for the workdeck TUI.
//!
//! This module provides:
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `icons`: Icon glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
