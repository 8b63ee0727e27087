use crate::error::{Error, Result};
use crate::locale::default_overrides;
use crate::mt::AUTO_DETECT;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Pipeline configuration
///
/// All keys are optional in the JSON form; missing ones take the defaults of
/// a standard Android project layout:
///
/// ```json
/// {
///     "sourceLang": "auto",
///     "inputPath": "app/src/main/res/values/strings.xml",
///     "resDir": "app/src/main/res",
///     "fileName": "strings.xml",
///     "overrideTable": { "in": "id" },
///     "backup": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Source language passed to the translator, `auto` to detect
    pub source_lang: String,
    /// Baseline resource file
    pub input_path: PathBuf,
    /// Directory holding the `values-*` folders
    pub res_dir: PathBuf,
    /// File name written inside each `values-*` folder
    pub file_name: String,
    /// Platform language segment → service code
    pub override_table: BTreeMap<String, String>,
    /// Rename an existing output file before overwriting it
    pub backup: bool,
    /// Languages used when none are given on the command line
    pub target_langs: Vec<String>,
    /// Cloud Translation API key; the keyless endpoint is used without it
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let res_dir = Path::new("app").join("src").join("main").join("res");
        Config {
            source_lang: AUTO_DETECT.to_string(),
            input_path: res_dir.join("values").join("strings.xml"),
            res_dir,
            file_name: "strings.xml".to_string(),
            override_table: default_overrides(),
            backup: false,
            target_langs: Vec::new(),
            api_key: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Output path for a resource folder, e.g. `<res_dir>/values-vi/strings.xml`
    pub fn target_path(&self, folder: &str) -> PathBuf {
        self.res_dir.join(folder).join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source_lang, "auto");
        assert_eq!(
            config.input_path,
            PathBuf::from("app/src/main/res/values/strings.xml")
        );
        assert_eq!(config.override_table.get("in"), Some(&"id".to_string()));
        assert!(!config.backup);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"sourceLang": "en", "backup": true}"#).unwrap();
        assert_eq!(config.source_lang, "en");
        assert!(config.backup);
        assert_eq!(config.file_name, "strings.xml");
        assert_eq!(config.override_table, default_overrides());
    }

    #[test]
    fn test_override_table_replaces_default() {
        let config = Config::from_json(r#"{"overrideTable": {"iw": "he"}}"#).unwrap();
        assert_eq!(config.override_table.len(), 1);
        assert_eq!(config.override_table.get("iw"), Some(&"he".to_string()));
    }

    #[test]
    fn test_target_path() {
        let config = Config::from_json(r#"{"resDir": "res"}"#).unwrap();
        assert_eq!(
            config.target_path("values-vi"),
            PathBuf::from("res/values-vi/strings.xml")
        );
    }

    #[test]
    fn test_from_file_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        match Config::from_file(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains("config.json")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
