//! Input/output plumbing shared by the library and the command-line tool

/// Command-line interface and subcommand execution
pub mod cli;
/// Dataset layout constants and runtime defaults
pub mod configuration;
/// Error types for all crate operations
pub mod error;
/// Texture decoding, pixel buffer conversion and PNG export
pub mod image;
/// Logger installation for the command-line tool
pub mod logging;
/// Progress display for batch overlay rendering
pub mod progress;
