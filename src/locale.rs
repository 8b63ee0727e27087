//! Android platform language codes
//!
//! A target language is typed by the user in Android form (`in`, `pt-BR`,
//! `zh_TW`). Two things are derived from it: the code sent to the
//! translation service, and the `values-*` resource folder the output is
//! written to. Both derivations are pure.

use std::collections::BTreeMap;

/// A platform language code with its two derived forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode {
    /// The code as the user typed it, trimmed
    pub platform: String,
    /// Code understood by the translation service
    pub service: String,
    /// Resource folder name, e.g. `values-pt-rBR`
    pub folder: String,
}

impl LanguageCode {
    pub fn new(platform: &str, overrides: &BTreeMap<String, String>) -> Self {
        LanguageCode {
            platform: platform.trim().to_string(),
            service: service_code(platform, overrides),
            folder: values_folder(platform),
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.platform)
    }
}

/// The platform-to-service overrides used when none are configured
pub fn default_overrides() -> BTreeMap<String, String> {
    // Android kept the deprecated ISO 639 code for Indonesian
    BTreeMap::from([("in".to_string(), "id".to_string())])
}

/// Separators become hyphens, surrounding whitespace goes
fn normalize(code: &str) -> String {
    code.replace('_', "-").trim().to_string()
}

/// Chinese variants whose region is part of the language for both sides
fn chinese_variant(code: &str) -> Option<(&'static str, &'static str)> {
    match code.to_ascii_lowercase().as_str() {
        "zh-cn" => Some(("zh-CN", "values-zh-rCN")),
        "zh-tw" => Some(("zh-TW", "values-zh-rTW")),
        _ => None,
    }
}

/// Map a platform code to the code sent to the translation service
///
/// The region is dropped (`pt-BR` → `pt`) except for `zh-CN` and `zh-TW`,
/// and the language segment goes through the override table (`in` → `id`).
pub fn service_code(code: &str, overrides: &BTreeMap<String, String>) -> String {
    let code = normalize(code);
    if let Some((service, _)) = chinese_variant(&code) {
        return service.to_string();
    }
    let language = code.split('-').next().unwrap_or_default();
    overrides
        .get(language)
        .cloned()
        .unwrap_or_else(|| language.to_string())
}

/// Map a platform code to its Android resource folder name
///
/// `vi` → `values-vi`, `pt-BR` → `values-pt-rBR`, empty → `values`.
pub fn values_folder(code: &str) -> String {
    let code = normalize(code);
    if code.is_empty() {
        return "values".to_string();
    }
    if let Some((_, folder)) = chinese_variant(&code) {
        return folder.to_string();
    }
    let mut parts = code.split('-');
    let language = parts.next().unwrap_or_default();
    match parts.next() {
        Some(region) => format!("values-{}-r{}", language, region.to_uppercase()),
        None => format!("values-{}", language),
    }
}
