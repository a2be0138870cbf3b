//! Markup ingestion
//!
//! Server-rendered HTML comes in as text; we walk the parsed tree and keep
//! only the element structure the controllers care about (tags, ids,
//! classes, attributes, inline display). Text content is not retained.

use scraper::{ElementRef, Html};

use crate::document::{Display, Document, Element, NodeId};

impl Document {
    /// Build a document from an HTML string.
    ///
    /// HTML parsing is error-tolerant; malformed markup yields whatever
    /// tree the parser recovers, never a failure. Fragments are wrapped in
    /// the usual `html`/`body` scaffolding by the parser.
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        let mut doc = Document::new();
        build_subtree(&mut doc, None, parsed.root_element());

        tracing::debug!(nodes = doc.node_count(), "parsed markup");

        doc
    }
}

fn build_subtree(doc: &mut Document, parent: Option<NodeId>, el: ElementRef<'_>) -> NodeId {
    let value = el.value();

    let mut attrs = std::collections::BTreeMap::new();
    let mut display = Display::Unset;
    for (name, val) in value.attrs() {
        match name {
            "class" | "id" => {}
            "style" => {
                display = display_from_style(val);
                attrs.insert(name.to_string(), val.to_string());
            }
            _ => {
                attrs.insert(name.to_string(), val.to_string());
            }
        }
    }

    let element = Element {
        tag: value.name().to_string(),
        id: value.id().map(str::to_string),
        classes: value.classes().map(str::to_string).collect(),
        attrs,
        display,
    };

    let node = doc.push(element, parent);
    for child in el.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            build_subtree(doc, Some(node), child_el);
        }
    }
    node
}

/// Extract an inline `display` declaration, if any.
fn display_from_style(style: &str) -> Display {
    for decl in style.split(';') {
        let mut parts = decl.splitn(2, ':');
        let name = parts.next().unwrap_or("").trim();
        let value = parts.next().unwrap_or("").trim();
        if name.eq_ignore_ascii_case("display") {
            return match value {
                "none" => Display::None,
                "block" => Display::Block,
                _ => Display::Unset,
            };
        }
    }
    Display::Unset
}
