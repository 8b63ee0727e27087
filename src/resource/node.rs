/// One node of a resource document
///
/// Text and attribute values are kept unescaped; comments, declarations and
/// doctypes are kept raw so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    /// Content between `<?` and `?>` of the XML declaration
    Declaration(String),
    ProcessingInstruction(String),
    DocType(String),
}

impl Node {
    /// Text carried directly by this node, for text and CDATA nodes
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) | Node::CData(text) => Some(text),
            _ => None,
        }
    }

    /// Same kind of text node, new content
    fn with_text(&self, text: String) -> Node {
        match self {
            Node::CData(_) => Node::CData(text),
            _ => Node::Text(text),
        }
    }
}

/// What a `<string>` entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// No children at all
    Empty,
    /// A single text or CDATA node
    Plain(&'a str),
    /// Markup interleaved with text
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    /// Written as `<name/>` while it has no children
    pub self_closing: bool,
}

/// A text run worth sending to the translator
pub fn is_translatable_run(text: &str) -> bool {
    !text.trim().is_empty()
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn content(&self) -> Content<'_> {
        match self.children.as_slice() {
            [] => Content::Empty,
            [only] => match only.as_text() {
                Some(text) => Content::Plain(text),
                None => Content::Mixed,
            },
            _ => Content::Mixed,
        }
    }

    /// Replace all children with a single text node
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
        self.self_closing = false;
    }

    /// Concatenated text of all descendants, markup stripped
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(out),
                other => {
                    if let Some(text) = other.as_text() {
                        out.push_str(text);
                    }
                }
            }
        }
    }

    /// Non-blank text runs of all descendants, in document order
    pub fn text_runs(&self) -> Vec<&str> {
        let mut runs = Vec::new();
        self.collect_runs(&mut runs);
        runs
    }

    fn collect_runs<'a>(&'a self, runs: &mut Vec<&'a str>) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_runs(runs),
                other => {
                    if let Some(text) = other.as_text().filter(|t| is_translatable_run(t)) {
                        runs.push(text);
                    }
                }
            }
        }
    }

    /// Build a copy of this element where the runs listed by
    /// [`Element::text_runs`] are replaced, in the same order, by the values
    /// yielded from `replacements`. `None` keeps the original run.
    pub fn with_runs_replaced<I>(&self, replacements: &mut I) -> Element
    where
        I: Iterator<Item = Option<String>>,
    {
        let children = self
            .children
            .iter()
            .map(|child| match child {
                Node::Element(element) => Node::Element(element.with_runs_replaced(replacements)),
                other => match other.as_text() {
                    Some(text) if is_translatable_run(text) => match replacements.next().flatten() {
                        Some(replacement) => other.with_text(replacement),
                        None => other.clone(),
                    },
                    _ => other.clone(),
                },
            })
            .collect();

        Element {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            children,
            self_closing: self.self_closing,
        }
    }
}
