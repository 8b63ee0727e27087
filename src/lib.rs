//! Machine translation of Android string resources
//!
//! Takes the baseline `values/strings.xml` of an Android project and writes a
//! translated `values-<lang>/strings.xml` for each requested language.
//! Translations already present in a target file are carried over instead of
//! being requested again, entries marked `translatable="false"` are left out,
//! and markup inside an entry is preserved while its text runs are
//! translated.
//!
//! # Example
//!
//! ```ignore
//! use res_translate::{Config, Pipeline};
//! use res_translate::mt::GoogleWebTranslator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::new(Config::default(), Box::new(GoogleWebTranslator::new()?));
//!     let summary = pipeline.run(&["vi".to_string(), "pt-BR".to_string()]).await?;
//!     for report in &summary.reports {
//!         println!("{}: {} translated", report.language, report.counts.translated);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod locale;
pub mod mt;
pub mod pipeline;
pub mod resource;

pub use config::Config;
pub use error::{Error, Result};
pub use locale::{LanguageCode, service_code, values_folder};
pub use pipeline::{BatchSummary, Counts, LanguageReport, Pipeline, parse_language_list};
pub use resource::{Document, Element, Node};
