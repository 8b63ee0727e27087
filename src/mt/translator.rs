//! Machine Translation trait and utilities
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the resource pipeline can run against Google Translate, the Cloud
//! Translation API or the offline mock without knowing which one it got.
//!
//! # Example
//!
//! ```ignore
//! use res_translate::mt::{GoogleWebTranslator, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleWebTranslator::new()?;
//!     let result = provider.translate("Hello, world!", "auto", "fr").await?;
//!     println!("{}", result); // "Bonjour, le monde!"
//!     Ok(())
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use async_trait::async_trait;

/// Source language value that asks the service to detect the language itself
pub const AUTO_DETECT: &str = "auto";

/// Generic trait for machine translation providers
///
/// Implementations handle the actual translation work, whether through an
/// API (Google Translate) or deterministic logic (Mock). A call translates
/// exactly one text; callers that need several texts issue one call each.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text string from source to target locale
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_locale` - Source language code, or [`AUTO_DETECT`]
    /// * `target_locale` - Target service language code (e.g., "fr", "zh-TW")
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(MtError)` - If translation fails
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String>;

    /// Get the name of this translation provider
    ///
    /// Used for logging to identify which provider handled a translation.
    fn provider_name(&self) -> &str;
}

/// Validate that a locale code is in acceptable format
///
/// Checks that the locale code contains only alphanumeric characters,
/// hyphens, and underscores.
///
/// # Example
///
/// ```ignore
/// validate_locale("en")?; // OK
/// validate_locale("zh-TW")?; // OK
/// validate_locale("invalid@code").unwrap_err(); // Error
/// ```
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(MtError::InvalidLocale("Locale code is empty".to_string()));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}

/// Whether the source locale requests language auto-detection
pub fn is_auto_detect(locale: &str) -> bool {
    locale.trim().eq_ignore_ascii_case(AUTO_DETECT)
}
