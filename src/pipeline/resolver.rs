//! Per-entry translation decisions
//!
//! For every `<string>` entry the resolver picks one of: reuse the text of an
//! earlier run, leave an empty entry alone, translate its plain text, or
//! translate each text run of its markup. Translation results arrive as
//! `MtResult` values and a failure only ever affects the entry or run it
//! belongs to.

use crate::mt::{MachineTranslator, MtError, MtResult};
use crate::pipeline::existing::ExistingTranslations;
use crate::resource::{Content, Document, Element};
use tracing::{debug, error, info};

/// Android requires apostrophes in string resources to be backslash-escaped
pub fn escape_apostrophe(text: &str) -> String {
    text.replace('\'', "\\'")
}

/// Per-language counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub translated: usize,
    pub reused: usize,
    /// Reported for completeness; empty entries are left alone without
    /// being counted here.
    pub skipped: usize,
}

/// What happened to one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Content replaced by the text of an earlier run
    Reused(Element),
    /// Plain text translated
    Translated(Element),
    /// Markup entry processed run by run; `failed` runs kept their source text
    TranslatedMarkup { element: Element, failed: usize },
    /// Nothing to translate
    Unchanged,
    /// The translator rejected the plain text; the entry stays as it was
    Failed(MtError),
}

pub struct Resolver<'a> {
    translator: &'a dyn MachineTranslator,
    existing: &'a ExistingTranslations,
    source_lang: &'a str,
    target_lang: &'a str,
}

impl<'a> Resolver<'a> {
    /// `target_lang` is the service code, not the platform code
    pub fn new(
        translator: &'a dyn MachineTranslator,
        existing: &'a ExistingTranslations,
        source_lang: &'a str,
        target_lang: &'a str,
    ) -> Self {
        Resolver {
            translator,
            existing,
            source_lang,
            target_lang,
        }
    }

    /// Translate one text and apply apostrophe escaping to the result
    async fn translate_text(&self, text: &str) -> MtResult<String> {
        self.translator
            .translate(text, self.source_lang, self.target_lang)
            .await
            .map(|translated| escape_apostrophe(&translated))
    }

    /// Decide the fate of one entry without touching it
    pub async fn resolve_entry(&self, entry: &Element) -> Outcome {
        if let Some(previous) = entry
            .attribute("name")
            .and_then(|name| self.existing.get(name))
        {
            let mut element = entry.clone();
            element.set_text(previous.as_str());
            return Outcome::Reused(element);
        }

        match entry.content() {
            Content::Empty => Outcome::Unchanged,
            Content::Plain(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Outcome::Unchanged;
                }
                match self.translate_text(text).await {
                    Ok(translated) => {
                        let mut element = entry.clone();
                        element.set_text(translated);
                        Outcome::Translated(element)
                    }
                    Err(err) => Outcome::Failed(err),
                }
            }
            Content::Mixed => self.resolve_markup(entry).await,
        }
    }

    /// Translate every text run of a markup entry on its own, then rebuild
    /// the entry with the translated runs in place.
    async fn resolve_markup(&self, entry: &Element) -> Outcome {
        let runs = entry.text_runs();
        if runs.is_empty() {
            return Outcome::Unchanged;
        }

        let mut replacements = Vec::with_capacity(runs.len());
        let mut failed = 0;
        for run in runs {
            let core = run.trim();
            match self.translate_text(core).await {
                Ok(translated) => replacements.push(Some(keep_padding(run, &translated))),
                Err(err) => {
                    error!("❌ Failed to translate '{}': {}", core, err);
                    failed += 1;
                    replacements.push(None);
                }
            }
        }

        let element = entry.with_runs_replaced(&mut replacements.into_iter());
        Outcome::TranslatedMarkup { element, failed }
    }

    /// Resolve every entry of the document in order, replacing entries in
    /// place, and return the counters.
    pub async fn resolve_document(&self, doc: &mut Document) -> Counts {
        let total = doc.entries().count();
        let mut counts = Counts::default();

        for entry in doc.entries_mut() {
            let name = entry.attribute("name").unwrap_or_default().to_string();
            match self.resolve_entry(entry).await {
                Outcome::Reused(element) => {
                    counts.reused += 1;
                    info!(
                        "♻️ Reused translation: name='{}' -> '{}'",
                        name,
                        element.text_content()
                    );
                    *entry = element;
                }
                Outcome::Translated(element) => {
                    counts.translated += 1;
                    info!(
                        "[{}/{}] ✓ {} -> {}",
                        counts.translated,
                        total,
                        entry.text_content().trim(),
                        element.text_content()
                    );
                    *entry = element;
                }
                Outcome::TranslatedMarkup { element, failed } => {
                    counts.translated += 1;
                    info!(
                        "[{}/{}] ✓ (markup) {}",
                        counts.translated,
                        total,
                        element.text_content()
                    );
                    if failed > 0 {
                        debug!("{} run(s) of '{}' left untranslated", failed, name);
                    }
                    *entry = element;
                }
                Outcome::Unchanged => {
                    debug!("Nothing to translate in '{}'", name);
                }
                Outcome::Failed(err) => {
                    error!(
                        "❌ Failed to translate '{}' ({}): {}",
                        entry.text_content().trim(),
                        name,
                        err
                    );
                }
            }
        }

        counts
    }
}

/// Put the whitespace around `original` back around `translated`
fn keep_padding(original: &str, translated: &str) -> String {
    let start = original.len() - original.trim_start().len();
    let end = original.trim_end().len();
    if start >= end {
        return translated.to_string();
    }
    format!("{}{}{}", &original[..start], translated, &original[end..])
}
