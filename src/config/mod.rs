//! Configuration loading for the calculator site.
//!
//! Site metadata, formatting locale, analytics settings and calculator
//! defaults are read from YAML files in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use payroll_calc::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded site: {}", config.config().site().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnalyticsConfig, CalculatorsFile, FormattingConfig, SiteConfig, SiteFile, SiteMetadata,
};
