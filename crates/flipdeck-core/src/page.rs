//! Page orchestration
//!
//! `Page` is the central state container: it owns the document and one
//! `WidgetInstance` per discovered root. All work happens on two signals,
//! the one-shot document-ready initialization and synchronous click
//! dispatch. There is no re-initialization; a reloaded subtree means a new
//! `Page`.

use std::collections::HashMap;

use flipdeck_dom::{Document, NodeId, Scope};
use flipdeck_flip::FlipController;
use flipdeck_tabs::TabController;

use crate::config::Config;
use crate::discover::discover;
use crate::error::CoreError;
use crate::snapshot::PageSnapshot;
use crate::Result;

/// What a dispatched click ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A flip trigger consumed the click.
    Flip,
    /// A tab trigger consumed the click (it may still have been inert if
    /// its target never resolved).
    Tab,
    /// The click landed on no bound trigger; default behavior stands.
    Unhandled,
}

/// One discovered widget root with its bound controllers.
pub struct WidgetInstance {
    scope: Scope,
    flip: FlipController,
    tabs: Option<TabController>,
}

impl WidgetInstance {
    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn flip(&self) -> &FlipController {
        &self.flip
    }

    pub fn tabs(&self) -> Option<&TabController> {
        self.tabs.as_ref()
    }
}

pub struct Page {
    doc: Document,
    config: Config,
    instances: Vec<WidgetInstance>,
}

impl Page {
    /// Document-ready entry point: discover roots and bind controllers
    /// for each, independently.
    pub fn ready(mut doc: Document, config: Config) -> Self {
        let scopes = discover(&doc, &config);

        let mut instances = Vec::with_capacity(scopes.len());
        for scope in scopes {
            let flip = FlipController::bind(&doc, scope, config.flip.clone());
            let tabs = TabController::bind(&mut doc, scope, config.tabs.clone());
            instances.push(WidgetInstance { scope, flip, tabs });
        }

        warn_on_shared_panels(&instances);

        tracing::info!(instances = instances.len(), "page ready");

        Self {
            doc,
            config,
            instances,
        }
    }

    /// Dispatch a click on `node` to the owning instance.
    ///
    /// Handled synchronously to completion; triggers are checked flip
    /// first, then tabs, in instance document order. A handle that does
    /// not belong to this document is a driver bug, not markup
    /// degradation, and is surfaced as an error.
    pub fn click(&mut self, node: NodeId) -> Result<ClickOutcome> {
        if !self.doc.contains(node) {
            return Err(CoreError::UnknownNode(node));
        }

        for instance in &mut self.instances {
            if instance.flip.click(&mut self.doc, node) {
                return Ok(ClickOutcome::Flip);
            }
            if let Some(tabs) = instance.tabs.as_mut() {
                if tabs.click(&mut self.doc, node) {
                    return Ok(ClickOutcome::Tab);
                }
            }
        }

        Ok(ClickOutcome::Unhandled)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn instances(&self) -> &[WidgetInstance] {
        &self.instances
    }

    /// Serializable view of all instance state, read from the controllers.
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot::capture(&self.instances)
    }
}

/// Two instances resolving the same panel node means their triggers fight
/// over it, last click wins. Legal, but almost certainly a markup mistake
/// worth surfacing.
fn warn_on_shared_panels(instances: &[WidgetInstance]) {
    let mut owners: HashMap<NodeId, usize> = HashMap::new();
    for instance in instances {
        if let Some(tabs) = instance.tabs() {
            for (_, node) in tabs.panels() {
                *owners.entry(node).or_insert(0) += 1;
            }
        }
    }
    for (node, count) in owners {
        if count > 1 {
            tracing::warn!(
                panel = ?node,
                instances = count,
                "panel resolved by multiple widget instances; last click wins"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipdeck_dom::Document;

    fn two_card_page() -> Page {
        let doc = Document::parse(
            r#"
            <div class="flipBox" id="card-a">
              <button id="a-flip" class="flipToggle">Flip</button>
              <button id="a-t1" data-target="x1">X1</button>
              <button id="a-t2" data-target="x1b">X1b</button>
              <pre id="x1"></pre>
              <pre id="x1b"></pre>
            </div>
            <div class="flipBox" id="card-b">
              <button id="b-flip" class="flipToggle">Flip</button>
              <button id="b-t1" data-target="x2">X2</button>
              <pre id="x2"></pre>
            </div>
            "#,
        );
        Page::ready(doc, Config::default())
    }

    #[test]
    fn test_instances_operate_independently() {
        let mut page = two_card_page();
        assert_eq!(page.instances().len(), 2);

        let a_t2 = page.document().element_by_id("a-t2").unwrap();
        let x1 = page.document().element_by_id("x1").unwrap();
        let x1b = page.document().element_by_id("x1b").unwrap();
        let x2 = page.document().element_by_id("x2").unwrap();

        // Both defaults are up.
        assert!(page.document().is_visible(x1));
        assert!(page.document().is_visible(x2));

        // Switching a panel in card A never touches card B.
        assert_eq!(page.click(a_t2).unwrap(), ClickOutcome::Tab);
        assert!(!page.document().is_visible(x1));
        assert!(page.document().is_visible(x1b));
        assert!(page.document().is_visible(x2));

        // Flipping card B never touches card A.
        let b_flip = page.document().element_by_id("b-flip").unwrap();
        assert_eq!(page.click(b_flip).unwrap(), ClickOutcome::Flip);
        let card_a = page.document().element_by_id("card-a").unwrap();
        let card_b = page.document().element_by_id("card-b").unwrap();
        assert!(page.document().has_class(card_b, "flipped"));
        assert!(!page.document().has_class(card_a, "flipped"));
        assert!(page.document().is_visible(x1b));
    }

    #[test]
    fn test_flip_and_tabs_are_uncoupled_within_an_instance() {
        let mut page = two_card_page();
        let a_flip = page.document().element_by_id("a-flip").unwrap();
        let a_t2 = page.document().element_by_id("a-t2").unwrap();

        page.click(a_t2).unwrap();
        page.click(a_flip).unwrap();

        let x1b = page.document().element_by_id("x1b").unwrap();
        let card_a = page.document().element_by_id("card-a").unwrap();
        assert!(page.document().has_class(card_a, "flipped"));
        assert!(page.document().is_visible(x1b));
        assert_eq!(page.instances()[0].tabs().unwrap().active_id(), Some("x1b"));
    }

    #[test]
    fn test_panel_outside_any_root_is_controlled() {
        let doc = Document::parse(
            r#"
            <div class="flipBox">
              <button id="t-in" data-target="global-panel">Show</button>
              <button id="t-other" data-target="local"></button>
              <pre id="local"></pre>
            </div>
            <aside><pre id="global-panel"></pre></aside>
            "#,
        );
        let mut page = Page::ready(doc, Config::default());
        let global = page.document().element_by_id("global-panel").unwrap();
        let local = page.document().element_by_id("local").unwrap();

        // Default selection resolved through the document-wide fallback.
        assert!(page.document().is_visible(global));
        assert!(!page.document().is_visible(local));

        let t_other = page.document().element_by_id("t-other").unwrap();
        page.click(t_other).unwrap();
        assert!(!page.document().is_visible(global));
        assert!(page.document().is_visible(local));
    }

    #[test]
    fn test_shared_global_panel_is_last_click_wins() {
        // Both cards erroneously target the same document-wide panel.
        let doc = Document::parse(
            r#"
            <div class="flipBox">
              <button id="a-t" data-target="shared">A</button>
              <button id="a-u" data-target="a-only">A only</button>
              <pre id="a-only"></pre>
            </div>
            <div class="flipBox">
              <button id="b-t" data-target="shared">B</button>
            </div>
            <pre id="shared"></pre>
            "#,
        );
        let mut page = Page::ready(doc, Config::default());
        let shared = page.document().element_by_id("shared").unwrap();

        // Initialization order: card B's default activation ran last.
        assert!(page.document().is_visible(shared));

        // Card A switches away; its reset hides the shared panel even
        // though card B still considers it active.
        let a_u = page.document().element_by_id("a-u").unwrap();
        page.click(a_u).unwrap();
        assert!(!page.document().is_visible(shared));
        assert_eq!(
            page.instances()[1].tabs().unwrap().active_id(),
            Some("shared")
        );

        // And card B can claim it back.
        let b_t = page.document().element_by_id("b-t").unwrap();
        page.click(b_t).unwrap();
        assert!(page.document().is_visible(shared));
    }

    #[test]
    fn test_clicks_outside_any_trigger_are_unhandled() {
        let mut page = two_card_page();
        let x1 = page.document().element_by_id("x1").unwrap();

        assert_eq!(page.click(x1).unwrap(), ClickOutcome::Unhandled);
        assert!(page.document().is_visible(x1));
    }

    #[test]
    fn test_foreign_node_handle_is_an_error() {
        let mut page = Page::ready(
            Document::parse(r#"<div class="flipBox"></div>"#),
            Config::default(),
        );

        // A handle minted by a different, larger document.
        let other = Document::parse(
            "<div><div><div><div><div><div><div><div><div id='deep'></div></div></div></div></div></div></div></div></div>",
        );
        let foreign = other.element_by_id("deep").unwrap();

        assert!(matches!(
            page.click(foreign),
            Err(CoreError::UnknownNode(_))
        ));
    }

    #[test]
    fn test_card_without_tab_group_still_flips() {
        let doc = Document::parse(
            r#"
            <div class="flipBox" id="card">
              <button id="flip" class="flipToggle">Flip</button>
            </div>
            "#,
        );
        let mut page = Page::ready(doc, Config::default());

        assert!(page.instances()[0].tabs().is_none());

        let flip = page.document().element_by_id("flip").unwrap();
        assert_eq!(page.click(flip).unwrap(), ClickOutcome::Flip);
        let card = page.document().element_by_id("card").unwrap();
        assert!(page.document().has_class(card, "flipped"));
    }
}
