//! Entry data model for table-of-contents manifests
//!
//! An entry is one node of the document tree. It is either a direct
//! (content-bearing) node or a mountpoint (a reference to another manifest
//! that gets spliced in during resolution), never both. The discrimination
//! happens at validation time, not in the serialized form: the wire format
//! is a flat record with four optional fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One node of the (resolved or unresolved) table-of-contents tree.
///
/// A field that is present but equal to the empty string counts as absent
/// for shape decisions; the wire format does not distinguish the two.
/// Unknown fields in the input are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display title; a usable title marks the entry as direct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Opaque display link; never interpreted by the resolver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Ordered child entries; order is preserved through resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Entry>>,

    /// Manifest reference to splice in; a usable href marks a mountpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Shape of an entry, as decided by its usable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    /// Content-bearing node with the given title.
    Direct(&'a str),
    /// Reference node whose content lives at the given manifest reference.
    Mountpoint(&'a str),
    /// Neither title nor href; carried through untouched.
    Empty,
}

/// Returns the string when it is present and non-empty.
pub(crate) fn usable(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl Entry {
    /// Classify the entry by its usable fields. A usable title wins over
    /// a usable href; the href conflict is rejected during validation.
    pub fn shape(&self) -> Shape<'_> {
        if let Some(title) = usable(&self.title) {
            Shape::Direct(title)
        } else if let Some(href) = usable(&self.href) {
            Shape::Mountpoint(href)
        } else {
            Shape::Empty
        }
    }

    /// Whether the entry carries at least one child.
    pub fn has_children(&self) -> bool {
        self.entries.as_ref().map(|e| !e.is_empty()).unwrap_or(false)
    }

    /// Render the tree as an indented outline, one node per line.
    pub fn to_outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(&mut out, 0);
        out
    }

    fn outline_into(&self, out: &mut String, indent: usize) {
        for _ in 0..indent {
            out.push_str("  ");
        }
        match usable(&self.title) {
            Some(title) => out.push_str(title),
            None => out.push_str("(untitled)"),
        }
        if let Some(link) = usable(&self.link) {
            out.push_str(" -> ");
            out.push_str(link);
        }
        out.push('\n');
        if let Some(children) = &self.entries {
            for child in children {
                child.outline_into(out, indent + 1);
            }
        }
    }
}

impl fmt::Display for Entry {
    /// Pretty-printed JSON dump of the entry and its subtree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}
