use log::{info, warn, debug, LevelFilter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::app_config::Config;
use crate::errors::{AppError, SubtitleError};
use crate::file_utils::FileManager;
use crate::overlap::{self, DedupStats};
use crate::subtitle_processor::CaptionFile;

// @module: Application controller for subtitle cleaning

/// Outcome of cleaning one subtitle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    // @field: Rewritten file
    pub path: PathBuf,
    // @field: Where the original was moved
    pub backup_path: PathBuf,
    // @field: Blocks read from the original
    pub blocks_before: usize,
    // @field: Blocks written back
    pub blocks_after: usize,
    // @field: Overlap lines stripped
    pub lines_removed: usize,
}

/// Outcome of cleaning a whole directory
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub reports: Vec<FixReport>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn files_processed(&self) -> usize {
        self.reports.len()
    }

    pub fn total_lines_removed(&self) -> usize {
        self.reports.iter().map(|r| r.lines_removed).sum()
    }

    pub fn total_blocks_removed(&self) -> usize {
        self.reports.iter().map(|r| r.blocks_before - r.blocks_after).sum()
    }
}

/// Cleaned subtitle text together with what was removed from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    pub text: String,
    pub blocks_before: usize,
    pub blocks_after: usize,
    pub stats: DedupStats,
}

/// Main application controller for subtitle cleaning
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Draw the folder progress bar on stderr
    show_progress: bool,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;

        Ok(Self {
            config,
            show_progress: false,
        })
    }

    /// Enable or disable the folder progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse, clean and re-serialize subtitle text without touching the disk
    pub fn clean_text(&self, content: &str) -> Result<CleanedText, SubtitleError> {
        let parsed = CaptionFile::parse_srt_string(content)?;
        let blocks_before = parsed.len();

        let (cleaned, stats) = overlap::remove_overlaps(parsed);

        Ok(CleanedText {
            text: cleaned.to_srt_string(self.config.first_index),
            blocks_before,
            blocks_after: cleaned.len(),
            stats,
        })
    }

    /// Clean one subtitle file in place, keeping the original as a backup.
    ///
    /// The file is fully parsed before anything on disk changes, so a malformed
    /// file is left untouched and no backup is created for it.
    pub async fn fix_file<P: AsRef<Path>>(&self, path: P) -> Result<FixReport, AppError> {
        let report = self.apply_fix(path.as_ref()).await?;
        Self::log_report(&report);
        Ok(report)
    }

    async fn apply_fix(&self, path: &Path) -> Result<FixReport, AppError> {
        let content = FileManager::read_to_string(path).await?;
        let cleaned = self.clean_text(&content).map_err(|source| AppError::Subtitle {
            path: path.to_path_buf(),
            source,
        })?;

        let backup_path = FileManager::backup_file(path, &self.config.backup_suffix).await?;
        FileManager::write_to_file(path, &cleaned.text).await?;

        Ok(FixReport {
            path: path.to_path_buf(),
            backup_path,
            blocks_before: cleaned.blocks_before,
            blocks_after: cleaned.blocks_after,
            lines_removed: cleaned.stats.lines_removed,
        })
    }

    fn log_report(report: &FixReport) {
        info!(
            "Saved {:?}: {} -> {} blocks, {} overlap lines removed",
            report.path, report.blocks_before, report.blocks_after, report.lines_removed
        );
    }

    /// Clean every matching subtitle file directly inside `input_dir`.
    ///
    /// Files are handled one after another. The first failure stops the run;
    /// files rewritten before it stay rewritten.
    pub async fn run_folder<P: AsRef<Path>>(&self, input_dir: P) -> Result<RunSummary, AppError> {
        let input_dir = input_dir.as_ref();
        let start_time = Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(AppError::DirectoryRead {
                path: input_dir.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not an existing directory"),
            });
        }

        let files = FileManager::find_files(input_dir, &self.config.file_suffix)?;
        if files.is_empty() {
            warn!("No files ending in {:?} found in {:?}", self.config.file_suffix, input_dir);
            return Ok(RunSummary::default());
        }
        debug!("Found {} subtitle file(s) in {:?}", files.len(), input_dir);

        let folder_pb = self.create_progress_bar(files.len() as u64);
        let mut summary = RunSummary::default();

        for file in &files {
            let file_name = file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Cleaning: {}", file_name));

            let report = match self.apply_fix(file).await {
                Ok(report) => report,
                Err(e) => {
                    folder_pb.abandon_with_message(format!("Failed on {}", file_name));
                    return Err(e);
                }
            };
            // Log lines must not be drawn over by the bar
            folder_pb.suspend(|| Self::log_report(&report));
            summary.reports.push(report);

            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();
        summary.elapsed = start_time.elapsed();

        info!(
            "Cleaned {} file(s) in {}: {} overlap lines and {} empty blocks removed",
            summary.files_processed(),
            Self::format_duration(summary.elapsed),
            summary.total_lines_removed(),
            summary.total_blocks_removed()
        );

        Ok(summary)
    }

    fn create_progress_bar(&self, len: u64) -> ProgressBar {
        let progress_bar = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::hidden());
        if Self::progress_visible(self.show_progress, log::max_level()) {
            progress_bar.set_draw_target(ProgressDrawTarget::stderr());
        }

        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar
    }

    /// The bar is only drawn when no debug or trace lines can land between redraws
    fn progress_visible(show_progress: bool, max_level: LevelFilter) -> bool {
        show_progress && max_level <= LevelFilter::Info
    }

    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
