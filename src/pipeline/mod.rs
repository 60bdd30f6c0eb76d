//! Directory-wide light-to-dark icon conversion.

mod converter;

pub use converter::{Config, Converter, Failure, OnError, Report};
