//! Entity cross-linking engine.
//!
//! Detail pages keep their prose plain; at render time every whole-word,
//! case-sensitive occurrence of a catalogued entity name is rewritten into
//! an anchor pointing at that entity's page. One combined scanner handles
//! the whole catalogue in a single pass, so overlapping names resolve to
//! the longest match and substituted anchors are never rescanned.

use std::collections::HashMap;

use codex_data::{Catalog, Collection};
use regex::Regex;

pub struct EntityLinker {
    /// Alternation of every catalogued name, longest first. `None` when the
    /// catalogue is empty.
    names: Option<Regex>,
    /// Spans of pre-existing anchors, which the scan must not touch.
    anchors: Regex,
    /// Name -> href for every linkable entity.
    targets: HashMap<String, String>,
}

impl EntityLinker {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut targets: HashMap<String, String> = HashMap::new();
        for collection in Collection::LINKABLE {
            for name in catalog.names(collection) {
                // First collection in the fixed order claims a duplicated name.
                targets
                    .entry(name.to_string())
                    .or_insert_with(|| link_target(collection, name));
            }
        }

        let mut alternatives: Vec<&String> = targets.keys().collect();
        // Longest first, so a name containing another name claims the span.
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let names = if alternatives.is_empty() {
            None
        } else {
            let pattern = alternatives
                .iter()
                .map(|name| regex::escape(name))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                Regex::new(&format!(r"\b(?:{pattern})\b"))
                    .expect("escaped literal alternation is a valid pattern"),
            )
        };

        let anchors = Regex::new(r"(?s)<a\b[^>]*>.*?</a>")
            .expect("anchor pattern is valid");

        Self {
            names,
            anchors,
            targets,
        }
    }

    /// Rewrite every recognized name in `content` into an anchor. Pure text
    /// transformation; text already inside an anchor is left alone, so the
    /// operation is idempotent.
    pub fn link(&self, content: &str) -> String {
        let Some(names) = &self.names else {
            return content.to_string();
        };

        let mut out = String::with_capacity(content.len() + content.len() / 4);
        let mut tail = 0;
        for span in self.anchors.find_iter(content) {
            self.link_segment(names, &content[tail..span.start()], &mut out);
            out.push_str(span.as_str());
            tail = span.end();
        }
        self.link_segment(names, &content[tail..], &mut out);
        out
    }

    fn link_segment(&self, names: &Regex, text: &str, out: &mut String) {
        let mut tail = 0;
        for m in names.find_iter(text) {
            out.push_str(&text[tail..m.start()]);
            out.push_str("<a href=\"");
            out.push_str(&self.targets[m.as_str()]);
            out.push_str("\">");
            out.push_str(m.as_str());
            out.push_str("</a>");
            tail = m.end();
        }
        out.push_str(&text[tail..]);
    }
}

/// In-text link targets use the original wiki's bare whitespace-to-dash
/// substitution, not [`slugify`](crate::slugify). The dash- and
/// case-insensitive key lookup resolves both forms, so the shape is kept
/// as documented behavior rather than unified.
fn link_target(collection: Collection, name: &str) -> String {
    let dashed = name.split_whitespace().collect::<Vec<_>>().join("-");
    format!("/{}/{}", collection.path_segment(), dashed)
}
