use crate::config::Config;
use crate::error::{Error, Result};
use crate::locale::LanguageCode;
use crate::mt::MachineTranslator;
use crate::pipeline::existing::load_existing_translations;
use crate::pipeline::filter::remove_untranslatable;
use crate::pipeline::resolver::{Counts, Resolver};
use crate::pipeline::writer::{backup_if_exists, write_document};
use crate::resource::Document;
use std::path::PathBuf;
use tracing::{error, info};

/// Result of one target language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageReport {
    pub language: LanguageCode,
    pub output: PathBuf,
    /// Entries in the output after untranslatable ones were dropped
    pub total: usize,
    /// Names of the entries dropped as untranslatable
    pub removed: Vec<String>,
    pub counts: Counts,
}

#[derive(Debug)]
pub struct LanguageFailure {
    pub language: String,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<LanguageReport>,
    pub failures: Vec<LanguageFailure>,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Split a comma-separated list of language codes, dropping blanks
///
/// Order and duplicates are kept.
pub fn parse_language_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct Pipeline {
    config: Config,
    translator: Box<dyn MachineTranslator>,
}

impl Pipeline {
    pub fn new(config: Config, translator: Box<dyn MachineTranslator>) -> Self {
        Pipeline { config, translator }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Conditions that must hold before any file is touched
    pub fn check_preconditions(&self, languages: &[String]) -> Result<()> {
        if !self.config.input_path.is_file() {
            return Err(Error::MissingInput(self.config.input_path.clone()));
        }
        if languages.is_empty() {
            return Err(Error::NoTargetLanguages);
        }
        Ok(())
    }

    /// Translate the baseline into every language, in the order given
    ///
    /// Fails only when a precondition does not hold; a language that fails
    /// midway is recorded in the summary and the next language still runs.
    pub async fn run(&self, languages: &[String]) -> Result<BatchSummary> {
        self.check_preconditions(languages)?;
        info!(
            "Translating {} with {}",
            self.config.input_path.display(),
            self.translator.provider_name()
        );

        let mut summary = BatchSummary::default();
        for code in languages {
            match self.translate_language(code).await {
                Ok(report) => summary.reports.push(report),
                Err(err) => {
                    error!("❌ {}: {}", code, err);
                    summary.failures.push(LanguageFailure {
                        language: code.clone(),
                        error: err,
                    });
                }
            }
        }
        Ok(summary)
    }

    /// Run the whole pipeline for one platform language code
    pub async fn translate_language(&self, code: &str) -> Result<LanguageReport> {
        let language = LanguageCode::new(code, &self.config.override_table);
        let output = self.config.target_path(&language.folder);

        let existing = load_existing_translations(&output);

        // Parsed again for every language so nothing leaks between them
        let mut doc = Document::load(&self.config.input_path)?;
        let removed = remove_untranslatable(&mut doc);
        let total = doc.entries().count();

        info!(
            "Translating to: {} (service: {}) - {} entries",
            language.platform, language.service, total
        );

        let resolver = Resolver::new(
            &*self.translator,
            &existing,
            &self.config.source_lang,
            &language.service,
        );
        let counts = resolver.resolve_document(&mut doc).await;

        if self.config.backup {
            if let Some(backup) = backup_if_exists(&output)? {
                info!("Backed up previous file to {}", backup.display());
            }
        }
        write_document(&doc, &output)?;

        info!("✅ Saved: {}", output.display());
        info!(
            "📊 New: {} | Reused: {} | Skipped: {} | Total: {}",
            counts.translated, counts.reused, counts.skipped, total
        );

        Ok(LanguageReport {
            language,
            output,
            total,
            removed,
            counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_list() {
        assert_eq!(parse_language_list("vi, ja ,ko"), vec!["vi", "ja", "ko"]);
        assert_eq!(parse_language_list("vi,,vi, "), vec!["vi", "vi"]);
        assert!(parse_language_list(" , ,").is_empty());
        assert!(parse_language_list("").is_empty());
    }
}
