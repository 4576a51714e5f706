//! Configuration module for finreport
//!
//! - XDG-compliant resolution of the settings file location
//! - Presentation settings loaded from JSON

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::Settings;
