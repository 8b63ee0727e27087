//! The merge-and-translate pipeline
//!
//! For each target language: load the translations of the previous run,
//! parse the baseline again, drop untranslatable entries, resolve every
//! remaining entry (reuse, skip or translate) and write the result to the
//! language's `values-*` folder.

pub mod batch;
pub mod existing;
pub mod filter;
pub mod resolver;
pub mod writer;


pub use batch::{BatchSummary, LanguageFailure, LanguageReport, Pipeline, parse_language_list};
pub use existing::{ExistingTranslations, existing_translations, load_existing_translations};
pub use filter::{is_untranslatable, remove_untranslatable};
pub use resolver::{Counts, Outcome, Resolver, escape_apostrophe};
pub use writer::{backup_if_exists, write_document};
