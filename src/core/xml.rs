//! Minimal owned element tree over `quick-xml` events, with the navigation
//! primitives the service responses call for.
//!
//! Response envelopes are small and hand-walked, so the tree keeps only what
//! navigation needs: local element names, direct text, and children in
//! document order. Namespace prefixes are stripped on read.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::core::error::IfxError;

/// One element of a parsed response document.
#[derive(Debug, Default)]
pub(crate) struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn children(&self) -> &[Element] {
        &self.children
    }

    /// Concatenated text of this element and all of its descendants, in
    /// document order.
    pub(crate) fn inner_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Walks the first-child chain starting at `self`, returning the
    /// outermost element named `name` on that single descending path.
    ///
    /// The search never widens to siblings: if the chain ends without a
    /// match, there is no result even when a matching element exists
    /// elsewhere in the document.
    pub(crate) fn descend_to(&self, name: &str) -> Option<&Element> {
        let mut node = self;
        loop {
            if node.name == name {
                return Some(node);
            }
            node = node.children.first()?;
        }
    }

    /// Depth-first search over all descendants; first match in document
    /// order.
    pub(crate) fn find_descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// Scans direct children in order and returns the first one named
    /// `name`.
    pub(crate) fn first_child_named(&self, name: &str) -> Option<&Element> {
        debug_assert!(!name.is_empty(), "element name must be non-empty");
        self.children.iter().find(|c| c.name == name)
    }
}

/// Parse a response body into its document element.
pub(crate) fn parse(body: &str) -> Result<Element, IfxError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                stack.push(Element {
                    name: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                    ..Element::default()
                });
            }
            Ok(Event::Empty(e)) => {
                let element = Element {
                    name: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                    ..Element::default()
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&t.unescape().unwrap_or_default());
                }
            }
            Ok(Event::CData(t)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                if let Some(element) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
            }
            Ok(Event::Eof) => {
                return Err(IfxError::Data("response document has no root element".into()));
            }
            Ok(_) => {}
            Err(e) => return Err(IfxError::Xml(e)),
        }
        buf.clear();
    }
}
