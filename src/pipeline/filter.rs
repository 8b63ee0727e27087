use crate::resource::{Document, Element, Node, STRING_TAG};
use tracing::info;

/// `translatable="false"`, compared case-insensitively
pub fn is_untranslatable(entry: &Element) -> bool {
    entry
        .attribute("translatable")
        .is_some_and(|value| value.eq_ignore_ascii_case("false"))
}

/// Drop untranslatable entries from the document, returning their names
///
/// Must run on a freshly parsed copy of the baseline: the removal is
/// permanent for that copy.
pub fn remove_untranslatable(doc: &mut Document) -> Vec<String> {
    let Some(root) = doc.root_mut() else {
        return Vec::new();
    };

    let mut removed = Vec::new();
    root.children.retain(|node| match node {
        Node::Element(entry) if entry.name == STRING_TAG && is_untranslatable(entry) => {
            let name = entry.attribute("name").unwrap_or_default().to_string();
            info!("🗑️ Dropped from output (translatable=false): name='{}'", name);
            removed.push(name);
            false
        }
        _ => true,
    });
    removed
}
