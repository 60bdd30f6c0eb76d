//! Batch converter from a light icon directory to a dark one.

use std::ffi::OsStr;
use std::fs;
use std::io::{self, Stdout, Write};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::image;

/// Suffix a directory entry must end with to be converted.
pub const ICON_SUFFIX: &str = ".png";

/// What to do when a single file fails to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnError {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Record the failure in the [`Report`] and move on to the next file.
    Continue,
}

/// Configuration for the icon converter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the light-theme icons.
    pub source_dir: PathBuf,

    /// Directory receiving the dark-theme icons. Must already exist.
    pub dest_dir: PathBuf,

    /// Failure policy for individual files.
    pub on_error: OnError,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("light"),
            dest_dir: PathBuf::from("dark"),
            on_error: OnError::Abort,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either directory is empty or both name the same path,
    /// ignoring `.` components.
    pub fn validate(&self) -> Result<()> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(Error::InvalidParameter {
                name: "source_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.dest_dir.as_os_str().is_empty() {
            return Err(Error::InvalidParameter {
                name: "dest_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if same_dir(&self.source_dir, &self.dest_dir) {
            return Err(Error::InvalidParameter {
                name: "dest_dir".to_string(),
                reason: "must differ from source_dir".to_string(),
            });
        }

        Ok(())
    }
}

/// A file that could not be converted.
#[derive(Debug)]
pub struct Failure {
    /// Source file that failed.
    pub file: PathBuf,
    /// Why it failed; [`Error::stage`] tells where.
    pub error: Error,
}

/// Outcome of a conversion run.
#[derive(Debug, Default)]
pub struct Report {
    /// Output files written, in visiting order.
    pub converted: Vec<PathBuf>,
    /// Files skipped under [`OnError::Continue`].
    pub failures: Vec<Failure>,
}

impl Report {
    /// Whether every matched file was converted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Converts every `.png` in the source directory into an inverted copy in the
/// destination directory, writing progress lines to `W`.
pub struct Converter<W = Stdout> {
    config: Config,
    output: W,
}

impl Converter<Stdout> {
    /// Create a converter that prints progress to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> Converter<W> {
    /// Create a converter that writes progress lines to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_output(config: Config, output: W) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Converter configured: {config:?}");

        Ok(Self { config, output })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the progress sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Convert every matching file of the source directory.
    ///
    /// Files are visited in directory-listing order. `Done` is written once the
    /// listing is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the source directory cannot be listed, or, under
    /// [`OnError::Abort`], the first per-file failure.
    pub fn run(&mut self) -> Result<Report> {
        let source_dir = &self.config.source_dir;
        let list_error = |source: io::Error| Error::ListDir {
            path: source_dir.clone(),
            source,
        };

        let entries = fs::read_dir(source_dir).map_err(list_error)?;
        let mut names = Vec::new();
        for entry in entries {
            names.push(entry.map_err(list_error)?.file_name());
        }

        let mut report = Report::default();
        for name in names {
            if !is_icon_name(&name) {
                tracing::trace!("Ignoring {}", name.to_string_lossy());
                continue;
            }

            match self.convert_file(&name) {
                Ok(written) => report.converted.push(written),
                Err(error) => match self.config.on_error {
                    OnError::Abort => return Err(error),
                    OnError::Continue => {
                        let file = self.config.source_dir.join(&name);
                        tracing::warn!(
                            "Skipping {} after {:?} failure: {error}",
                            file.display(),
                            error.stage()
                        );
                        report.failures.push(Failure { file, error });
                    }
                },
            }
        }

        writeln!(self.output, "Done")?;

        tracing::debug!(
            "Converted {} file(s), {} failure(s)",
            report.converted.len(),
            report.failures.len()
        );

        Ok(report)
    }

    /// Convert a single file of the source directory by name.
    ///
    /// Returns the path of the written output.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded, transformed or saved, or
    /// if a progress line cannot be written.
    pub fn convert_file<N: AsRef<Path>>(&mut self, name: N) -> Result<PathBuf> {
        let name = name.as_ref();
        let input_path = self.config.source_dir.join(name);
        let output_path = self.config.dest_dir.join(name);

        writeln!(self.output, "[ LOG ] Loading file {}", input_path.display())?;
        let light = image::load_rgba(&input_path)?;

        tracing::debug!(
            "Inverting {} ({}x{})",
            input_path.display(),
            light.width(),
            light.height()
        );
        let dark = image::invert_color(&light)?;

        writeln!(self.output, "[ LOG ] Saving file to {}", output_path.display())?;
        image::save_png(&dark, &output_path)?;

        Ok(output_path)
    }
}

/// Lexical path equality that skips `.` components.
fn same_dir(a: &Path, b: &Path) -> bool {
    fn significant(path: &Path) -> Vec<Component<'_>> {
        path.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect::<Vec<_>>()
    }
    significant(a) == significant(b)
}

/// Case-sensitive suffix match on the raw file name.
fn is_icon_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(ICON_SUFFIX.as_bytes())
}
