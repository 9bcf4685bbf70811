//! Local product catalog editor.
//!
//! The product list is fetched once from a remote source, then created,
//! edited and deleted purely in memory.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod editor;
pub mod form;
pub mod loader;
pub mod logging;
pub mod notifier;
pub mod repl;
