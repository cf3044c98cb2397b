//! Gallery synchronizer - orchestrates a single synchronization run
//!
//! A run scans the image directory, renders the declaration, splices it into
//! the target file and writes the file back only when its content changed.

use crate::error::{Result, SyncError};
use crate::render::render_declaration;
use crate::scan::{scan_images, ImageEntry};
use crate::splice::{declaration_pattern, splice_declaration};
use crate::Config;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// How a synchronization run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The target file content changed (and was written unless dry run)
    Updated,
    /// The declaration already matched the directory contents
    Unchanged,
    /// No declaration was found in the target file
    PatternNotFound,
    /// The image directory does not exist; the target file was not touched
    DirectoryMissing,
}

/// Results from a complete synchronization run
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub image_dir: PathBuf,
    pub target_file: PathBuf,
    pub images: Vec<ImageEntry>,
    pub outcome: SyncOutcome,
    /// Number of declaration spans replaced
    pub replaced: usize,
    pub dry_run: bool,
}

impl SyncReport {
    /// Whether the target file was actually rewritten
    pub fn written(&self) -> bool {
        self.outcome == SyncOutcome::Updated && !self.dry_run
    }
}

/// Synchronizes the image list declaration of one target file
#[derive(Debug, Clone)]
pub struct Synchronizer {
    config: Config,
    dry_run: bool,
}

impl Synchronizer {
    /// Create a new synchronizer with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// Compute the outcome without writing the target file
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scan the configured image directory
    pub fn scan(&self) -> Result<Vec<ImageEntry>> {
        scan_images(
            &self.config.image_dir_path(),
            &self.config.normalized_extensions(),
            &self.config.path_prefix,
        )
    }

    /// Run a complete synchronization
    pub fn run(&self) -> Result<SyncReport> {
        let image_dir = self.config.image_dir_path();
        let target_file = self.config.target_file_path();

        info!("Scanning directory: {}", image_dir.display());

        let mut report = SyncReport {
            image_dir: image_dir.clone(),
            target_file: target_file.clone(),
            images: Vec::new(),
            outcome: SyncOutcome::DirectoryMissing,
            replaced: 0,
            dry_run: self.dry_run,
        };

        report.images = match self.scan() {
            Ok(images) => images,
            Err(SyncError::DirectoryNotFound(path)) => {
                warn!("Image directory not found: {}", path.display());
                return Ok(report);
            }
            Err(e) => return Err(e),
        };

        info!("Found {} images", report.images.len());

        let original =
            std::fs::read_to_string(&target_file).map_err(|source| SyncError::MissingFile {
                path: target_file.clone(),
                source,
            })?;

        let declaration = &self.config.declaration;
        let pattern = declaration_pattern(&declaration.variable)?;
        let images = &report.images;
        let splice = splice_declaration(
            &original,
            &pattern,
            declaration.replace_all,
            |base, newline| {
                render_declaration(
                    &declaration.variable,
                    images,
                    base,
                    &declaration.indent,
                    newline,
                )
            },
        );
        report.replaced = splice.replaced;

        if splice.replaced == 0 {
            warn!(
                "No `const {} = [...];` declaration found in {}",
                declaration.variable,
                target_file.display()
            );
            report.outcome = SyncOutcome::PatternNotFound;
            return Ok(report);
        }

        if splice.content == original {
            debug!("Declaration already up to date");
            report.outcome = SyncOutcome::Unchanged;
            return Ok(report);
        }

        report.outcome = SyncOutcome::Updated;

        if self.dry_run {
            info!("Dry run: {} would be updated", target_file.display());
        } else {
            std::fs::write(&target_file, &splice.content).map_err(|source| {
                SyncError::WriteFile {
                    path: target_file.clone(),
                    source,
                }
            })?;
            info!("Updated {}", target_file.display());
        }

        Ok(report)
    }
}
