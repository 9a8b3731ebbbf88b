//! branch-stamp - stamp pull request titles and bodies from branch names
//!
//! The crate is a small pure pipeline - match branch names against
//! configured patterns, render the captures into templates, decide whether
//! the title/body actually need rewriting - followed by exactly one
//! effectful pull request update behind the [`platform::PlatformService`]
//! seam.

pub mod actions;
pub mod config;
pub mod error;
pub mod matcher;
pub mod platform;
pub mod template;
pub mod types;
pub mod update;
