// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Namespace-tolerant element lookups for WPML documents.
//!
//! DJI's own app and third-party planners (Litchi Hub and friends) export
//! the same elements under different WPML namespace URIs. Lookups walk an
//! ordered list of candidates: each known namespace in turn, then any
//! element with a matching local name. The first candidate with a hit wins.

use roxmltree::Node;

/// WPML namespaces seen in the wild, most common first.
pub(crate) const WPML_NAMESPACES: &[&str] = &[
    "http://www.dji.com/wpmz/1.0.6",
    "http://www.uav.com/wpmz/1.0.2",
];

/// The OGC KML 2.2 namespace.
pub(crate) const KML_NS: &str = "http://www.opengis.net/kml/2.2";

#[derive(Debug, Clone, Copy)]
enum Lookup {
    Namespaced(&'static str),
    AnyNamespace,
}

impl Lookup {
    fn matches(self, node: &Node<'_, '_>, local_name: &str) -> bool {
        if !node.is_element() || node.tag_name().name() != local_name {
            return false;
        }
        match self {
            Lookup::Namespaced(ns) => node.tag_name().namespace() == Some(ns),
            Lookup::AnyNamespace => true,
        }
    }
}

fn known_namespaces() -> impl Iterator<Item = Lookup> {
    WPML_NAMESPACES.iter().copied().map(Lookup::Namespaced)
}

/// First element named `local_name`, trying known namespaces before any.
pub(crate) fn find_first<'a, 'input>(
    root: Node<'a, 'input>,
    local_name: &str,
) -> Option<Node<'a, 'input>> {
    known_namespaces()
        .chain(std::iter::once(Lookup::AnyNamespace))
        .find_map(|lookup| {
            root.descendants()
                .find(|node| lookup.matches(node, local_name))
        })
}

/// Trimmed text of the first element named `local_name`.
///
/// The first matching element decides: if it has no text the result is
/// `None` even when a later candidate would have had some.
pub(crate) fn first_text(root: Node<'_, '_>, local_name: &str) -> Option<String> {
    find_first(root, local_name)
        .and_then(|node| node.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Number of elements named `local_name` across all known namespaces.
///
/// Falls back to counting by local name alone only when no known
/// namespace produced a match.
pub(crate) fn count_all(root: Node<'_, '_>, local_name: &str) -> usize {
    let known: usize = known_namespaces()
        .map(|lookup| {
            root.descendants()
                .filter(|node| lookup.matches(node, local_name))
                .count()
        })
        .sum();
    if known > 0 {
        return known;
    }
    root.descendants()
        .filter(|node| Lookup::AnyNamespace.matches(node, local_name))
        .count()
}

/// Number of elements named `local_name` in exactly the namespace `ns`.
pub(crate) fn count_in(root: Node<'_, '_>, ns: &'static str, local_name: &str) -> usize {
    root.descendants()
        .filter(|node| Lookup::Namespaced(ns).matches(node, local_name))
        .count()
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
