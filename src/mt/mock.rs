//! Mock Machine Translator for testing
//!
//! A deterministic, network-free translator. It records every call so tests
//! can assert which texts reached the "service" and which did not.
//!
//! # Example
//!
//! ```ignore
//! use res_translate::mt::{MachineTranslator, MockMode, MockTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", "auto", "fr").await.unwrap();
//!     assert_eq!(result, "hello_fr");
//!     assert_eq!(mock.call_count(), 1);
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append locale suffix: "hello" → "hello_fr"
    Suffix,

    /// Use predefined mappings for realistic translations
    /// (text, target_locale) → translation; unknown pairs fall back to Suffix
    Mappings(HashMap<(String, String), String>),

    /// Fail every call with the given message
    Error(String),

    /// Fail only for the listed texts, Suffix for everything else
    FailOn(HashSet<String>),

    /// No-op: return input unchanged
    NoOp,
}

/// One recorded call: (text, source_locale, target_locale)
pub type MockCall = (String, String, String);

#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Convenience constructor for [`MockMode::Mappings`]
    pub fn with_mappings<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        let map = pairs
            .into_iter()
            .map(|(text, target, translated)| {
                ((text.to_string(), target.to_string()), translated.to_string())
            })
            .collect();
        Self::new(MockMode::Mappings(map))
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Whether `text` was ever sent for translation
    pub fn was_asked(&self, text: &str) -> bool {
        self.calls().iter().any(|(t, _, _)| t == text)
    }

    fn record(&self, text: &str, source: &str, target: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((text.to_string(), source.to_string(), target.to_string()));
        }
    }

    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::FailOn(texts) if texts.contains(text) => Err(MtError::TranslationError(
                format!("mock failure for '{}'", text),
            )),
            MockMode::FailOn(_) => Ok(format!("{}_{}", text, target)),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        self.record(text, source_locale, target_locale);
        self.apply_translation(text, target_locale)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suffix_single_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("hello", "auto", "fr").await.unwrap();
        assert_eq!(result, "hello_fr");
    }

    #[tokio::test]
    async fn test_mappings_with_fallback() {
        let mock = MockTranslator::with_mappings([("Hello", "vi", "Xin chào")]);
        assert_eq!(mock.translate("Hello", "auto", "vi").await.unwrap(), "Xin chào");
        assert_eq!(mock.translate("Bye", "auto", "vi").await.unwrap(), "Bye_vi");
    }

    #[tokio::test]
    async fn test_error_mode() {
        let mock = MockTranslator::new(MockMode::Error("API unavailable".to_string()));
        match mock.translate("hello", "auto", "fr").await {
            Err(MtError::TranslationError(msg)) => assert_eq!(msg, "API unavailable"),
            _ => panic!("Expected TranslationError"),
        }
    }

    #[tokio::test]
    async fn test_fail_on_selected_texts() {
        let mock = MockTranslator::new(MockMode::FailOn(HashSet::from(["bad".to_string()])));
        assert!(mock.translate("bad", "auto", "fr").await.is_err());
        assert_eq!(mock.translate("good", "auto", "fr").await.unwrap(), "good_fr");
    }

    #[tokio::test]
    async fn test_noop_mode() {
        let mock = MockTranslator::new(MockMode::NoOp);
        assert_eq!(mock.translate("hello", "auto", "fr").await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_calls_are_recorded_and_shared_between_clones() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let handle = mock.clone();
        mock.translate("one", "auto", "ja").await.unwrap();
        mock.translate("two", "en", "ko").await.unwrap();

        assert_eq!(handle.call_count(), 2);
        assert!(handle.was_asked("two"));
        assert!(!handle.was_asked("three"));
        assert_eq!(
            handle.calls()[1],
            ("two".to_string(), "en".to_string(), "ko".to_string())
        );
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::NoOp);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
