//! # `icon-invert`
//!
//! Generates dark-theme icons from light-theme transparent PNGs.
//!
//! Every `.png` in the source directory is decoded as RGBA, its red, green and
//! blue planes are inverted (`v -> 255 - v`), and the result is written under
//! the same name to the destination directory with the original alpha plane.
//!
//! ## Example
//!
//! ```no_run
//! use icon_invert::{Config, Converter};
//!
//! # fn main() -> icon_invert::Result<()> {
//! let mut converter = Converter::new(Config::default())?;
//!
//! let report = converter.run()?;
//! assert!(report.is_clean());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result, Stage};
pub use pipeline::{Config, Converter, Failure, OnError, Report};
