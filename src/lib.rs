/*!
 * # fixsrt - cleanup for auto-generated subtitles
 *
 * Rolling-caption generators repeat the last line of one cue as the first line
 * of the next. This library reads SRT files, strips those overlap lines, drops
 * cues left without text and writes the file back renumbered.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: SRT parsing and serialization
 * - `overlap`: overlap line removal and empty block compaction
 * - `app_controller`: per-file and per-directory cleaning with backups
 * - `file_utils`: File system operations
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod overlap;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FixReport, RunSummary};
pub use errors::{AppError, FileOperation, SubtitleError};
pub use overlap::{remove_overlaps, DedupStats};
pub use subtitle_processor::{CaptionBlock, CaptionFile};
