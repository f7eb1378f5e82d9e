//! HTML writer for view-node trees.
//!
//! For hosts whose rendering substrate is markup, and for readable test
//! assertions. Text and attribute values are escaped; the tree itself is
//! trusted (tags and class tokens come from this workspace, not the wire).

use crate::node::{Element, Node};

/// Render a node tree as an HTML string.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());

    if !element.classes().is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape(&element.classes().join(" ")));
        out.push('"');
    }

    for (name, value) in element.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }

    out.push('>');
    for child in element.children() {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
