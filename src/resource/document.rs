use crate::error::{Error, Result};
use crate::resource::node::{Element, Node};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use std::path::Path;

/// Tag of a translatable entry
pub const STRING_TAG: &str = "string";

/// An Android resource file (`<resources>` with `<string>` entries)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Top-level nodes: declaration, comments, whitespace and the root element
    pub nodes: Vec<Node>,
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn element_from_start(start: &BytesStart<'_>, self_closing: bool) -> Result<Element> {
    let mut element = Element::new(lossy(start.name().as_ref()));
    element.self_closing = self_closing;
    for attr in start.attributes() {
        let attr = attr?;
        element
            .attributes
            .push((lossy(attr.key.as_ref()), attr.unescape_value()?.into_owned()));
    }
    Ok(element)
}

impl Document {
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut open: Vec<Element> = Vec::new();
        let mut nodes = Vec::new();

        loop {
            let node = match reader.read_event()? {
                Event::Start(e) => {
                    open.push(element_from_start(&e, false)?);
                    continue;
                }
                Event::End(_) => {
                    let element = open
                        .pop()
                        .ok_or_else(|| Error::Xml("closing tag without opening tag".to_string()))?;
                    Node::Element(element)
                }
                Event::Empty(e) => Node::Element(element_from_start(&e, true)?),
                Event::Text(e) => Node::Text(e.unescape()?.into_owned()),
                Event::CData(e) => Node::CData(lossy(&e)),
                Event::Comment(e) => Node::Comment(lossy(&e)),
                Event::Decl(e) => Node::Declaration(lossy(&e)),
                Event::PI(e) => Node::ProcessingInstruction(lossy(&e)),
                Event::DocType(e) => Node::DocType(lossy(&e)),
                Event::Eof => break,
            };
            match open.last_mut() {
                Some(parent) => parent.children.push(node),
                None => nodes.push(node),
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(Error::Xml(format!("unclosed element <{}>", unclosed.name)));
        }
        if !nodes.iter().any(|n| matches!(n, Node::Element(_))) {
            return Err(Error::Xml("document has no root element".to_string()));
        }

        Ok(Document { nodes })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content).map_err(|e| match e {
            Error::Xml(msg) => Error::Xml(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn root(&self) -> Option<&Element> {
        self.nodes.iter().find_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn root_mut(&mut self) -> Option<&mut Element> {
        self.nodes.iter_mut().find_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// `<string>` entries directly under the root, in document order
    pub fn entries(&self) -> impl Iterator<Item = &Element> {
        self.root()
            .into_iter()
            .flat_map(|root| root.children.iter())
            .filter_map(|node| match node {
                Node::Element(element) if element.name == STRING_TAG => Some(element),
                _ => None,
            })
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.root_mut()
            .into_iter()
            .flat_map(|root| root.children.iter_mut())
            .filter_map(|node| match node {
                Node::Element(element) if element.name == STRING_TAG => Some(element),
                _ => None,
            })
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        for node in &self.nodes {
            write_node(&mut writer, node)?;
        }
        String::from_utf8(writer.into_inner())
            .map_err(|e| Error::Xml(format!("serialized document is not UTF-8: {}", e)))
    }
}

fn xml_err(err: impl std::fmt::Display) -> Error {
    Error::Xml(err.to_string())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<()> {
    match node {
        Node::Element(element) => {
            let mut start = BytesStart::new(element.name.as_str());
            for (key, value) in &element.attributes {
                start.push_attribute((key.as_str(), value.as_str()));
            }
            if element.self_closing && element.children.is_empty() {
                return writer.write_event(Event::Empty(start)).map_err(xml_err);
            }
            writer.write_event(Event::Start(start)).map_err(xml_err)?;
            for child in &element.children {
                write_node(writer, child)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(element.name.as_str())))
                .map_err(xml_err)
        }
        // Only markup-significant characters are escaped so Android escapes
        // like \' and \n are written back byte for byte.
        Node::Text(text) => writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(
                text.as_str(),
            ))))
            .map_err(xml_err),
        Node::CData(text) => writer
            .write_event(Event::CData(BytesCData::new(text.as_str())))
            .map_err(xml_err),
        Node::Comment(raw) => writer
            .write_event(Event::Comment(BytesText::from_escaped(raw.as_str())))
            .map_err(xml_err),
        Node::DocType(raw) => writer
            .write_event(Event::DocType(BytesText::from_escaped(raw.as_str())))
            .map_err(xml_err),
        Node::Declaration(raw) | Node::ProcessingInstruction(raw) => {
            writer
                .get_mut()
                .extend_from_slice(format!("<?{}?>", raw).as_bytes());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::node::Content;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources xmlns:tools="http://schemas.android.com/tools">
    <!-- Main screen -->
    <string name="app_name" translatable="false">Sample</string>
    <string name="greeting">Hello</string>
    <string name="apostrophe">Don\'t stop &amp; go</string>
    <string name="cta"><b>Click</b> here</string>
    <string name="empty"/>
    <plurals name="items"><item quantity="one">1 item</item></plurals>
</resources>
"#;

    #[test]
    fn test_parse_entries() {
        let doc = Document::parse(SAMPLE).unwrap();
        let names: Vec<_> = doc.entries().filter_map(|e| e.attribute("name")).collect();
        assert_eq!(names, vec!["app_name", "greeting", "apostrophe", "cta", "empty"]);

        let greeting = doc.entries().nth(1).unwrap();
        assert_eq!(greeting.content(), Content::Plain("Hello"));
        let apostrophe = doc.entries().nth(2).unwrap();
        assert_eq!(apostrophe.content(), Content::Plain("Don\\'t stop & go"));
        let cta = doc.entries().nth(3).unwrap();
        assert_eq!(cta.content(), Content::Mixed);
        let empty = doc.entries().nth(4).unwrap();
        assert!(empty.self_closing);
        assert_eq!(empty.content(), Content::Empty);
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let doc = Document::parse(SAMPLE).unwrap();
        assert_eq!(doc.to_xml().unwrap(), SAMPLE);
    }

    #[test]
    fn test_apostrophe_escape_survives_serialization() {
        let mut doc = Document::parse(SAMPLE).unwrap();
        let greeting = doc.entries_mut().nth(1).unwrap();
        greeting.set_text("L\\'ami <3");
        let xml = doc.to_xml().unwrap();
        assert!(xml.contains(r#"<string name="greeting">L\'ami &lt;3</string>"#));
    }

    #[test]
    fn test_filled_self_closing_entry_gets_end_tag() {
        let mut doc = Document::parse(SAMPLE).unwrap();
        let empty = doc.entries_mut().nth(4).unwrap();
        empty.set_text("Trống");
        let xml = doc.to_xml().unwrap();
        assert!(xml.contains(r#"<string name="empty">Trống</string>"#));
    }

    #[test]
    fn test_cdata_is_kept() {
        let xml = r#"<resources><string name="html"><![CDATA[<b>Hi</b>]]></string></resources>"#;
        let doc = Document::parse(xml).unwrap();
        let entry = doc.entries().next().unwrap();
        assert_eq!(entry.content(), Content::Plain("<b>Hi</b>"));
        assert_eq!(doc.to_xml().unwrap(), xml);
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            Document::parse("<resources><string name=\"a\">x</resources>"),
            Err(Error::Xml(_))
        ));
        assert!(matches!(
            Document::parse("<resources><string>"),
            Err(Error::Xml(_))
        ));
        assert!(matches!(Document::parse("   "), Err(Error::Xml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Document::load(&dir.path().join("nope.xml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
