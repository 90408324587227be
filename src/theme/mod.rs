//! Theme module orchestrator.
//!
//! A [`ThemePalette`] is a declarative table binding faces to per-depth
//! style records; a [`Theme`] is that palette resolved eagerly for one fixed
//! color depth, ready for placeholder expansion.

mod core;

pub use core::{FaceStyle, TAB_WIDTH, Theme, ThemePalette};
