//! Centralized theme system.
//!
//! This module provides:
//! - `palette` - Light and dark colour sets
//! - `styles` - Semantic style builder functions over a palette
//! - `icons` - Unicode glyphs with Nerd Font alternatives

pub mod icons;
pub mod palette;
pub mod styles;
