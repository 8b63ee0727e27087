use crate::resource::{Content, Document};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Entry name → text already present in a previously generated target file
pub type ExistingTranslations = HashMap<String, String>;

/// Load the translations of an earlier run for one language
///
/// A missing file is the normal first-run case and yields an empty map. An
/// unreadable or malformed file is logged and also yields an empty map, so a
/// broken target file never stops the language from being processed.
pub fn load_existing_translations(path: &Path) -> ExistingTranslations {
    if !path.exists() {
        return ExistingTranslations::new();
    }

    match Document::load(path) {
        Ok(doc) => {
            let existing = existing_translations(&doc);
            info!(
                "📖 Loaded {} existing translations from {}",
                existing.len(),
                path.display()
            );
            existing
        }
        Err(err) => {
            warn!(
                "⚠️ Could not read existing target file {}: {}",
                path.display(),
                err
            );
            ExistingTranslations::new()
        }
    }
}

/// Named entries with non-blank plain text; the text is stored trimmed
pub fn existing_translations(doc: &Document) -> ExistingTranslations {
    doc.entries()
        .filter_map(|entry| {
            let name = entry.attribute("name").filter(|n| !n.is_empty())?;
            match entry.content() {
                Content::Plain(text) if !text.trim().is_empty() => {
                    Some((name.to_string(), text.trim().to_string()))
                }
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let existing = load_existing_translations(&dir.path().join("strings.xml"));
        assert!(existing.is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.xml");
        std::fs::write(&path, "<resources><string name=\"a\">A</resources>").unwrap();
        assert!(load_existing_translations(&path).is_empty());
    }

    #[test]
    fn test_collects_named_plain_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.xml");
        std::fs::write(
            &path,
            r#"<resources>
    <string name="greeting">  Xin chào </string>
    <string name="quote">Đừng\'đi</string>
    <string name="">orphan</string>
    <string>no name</string>
    <string name="blank">   </string>
    <string name="empty"/>
    <string name="markup"><b>Nhấp</b> vào đây</string>
</resources>"#,
        )
        .unwrap();

        let existing = load_existing_translations(&path);
        assert_eq!(existing.len(), 2);
        assert_eq!(existing["greeting"], "Xin chào");
        assert_eq!(existing["quote"], "Đừng\\'đi");
    }
}
