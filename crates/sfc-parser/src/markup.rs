//! A small markup tree for template content.
//!
//! Templates are parsed into an element tree that can be inspected, rewritten,
//! and serialized back to text. The parser is tolerant: it never fails, and
//! unclosed elements simply end where their parent (or the input) ends.
//!
//! No tag is treated as void; an element is childless only when written
//! self-closing. Text and comments are preserved verbatim, so serializing an
//! unmodified tree reproduces well-formed input exactly (modulo quote style
//! on attribute values).

use smol_str::SmolStr;

use crate::descriptor::{AttributeValue, Attributes};
use crate::lexer::parse_attributes;

/// A parsed template fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkupTree {
    /// The top-level nodes of the fragment.
    pub nodes: Vec<MarkupNode>,
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    /// An element with attributes and children.
    Element(MarkupElement),
    /// Literal text, verbatim.
    Text(String),
    /// A comment (`<!-- ... -->`), inner text only.
    Comment(String),
}

/// An element node.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupElement {
    /// The tag name as written.
    pub name: SmolStr,
    /// Attributes in source order.
    pub attributes: Attributes,
    /// Child nodes. Always empty for self-closing elements.
    pub children: Vec<MarkupNode>,
    /// Whether the element was written `<tag/>`.
    pub self_closing: bool,
}

impl MarkupTree {
    /// Parses a markup fragment. Never fails; malformed input degrades to
    /// text nodes or early-closed elements.
    pub fn parse(source: &str) -> MarkupTree {
        let mut cursor = Cursor { source, pos: 0 };
        MarkupTree {
            nodes: parse_nodes(&mut cursor, None),
        }
    }

    /// Serializes the fragment back to markup text.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            write_node(&mut out, node);
        }
        out
    }
}

struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Parses sibling nodes until EOF or the closing tag of `parent`.
fn parse_nodes(cursor: &mut Cursor<'_>, parent: Option<&str>) -> Vec<MarkupNode> {
    let mut nodes = Vec::new();

    while !cursor.at_end() {
        let rest = cursor.rest();

        if rest.starts_with("<!--") {
            let (comment, consumed) = match rest[4..].find("-->") {
                Some(end) => (rest[4..4 + end].to_string(), 4 + end + 3),
                None => (rest[4..].to_string(), rest.len()),
            };
            cursor.pos += consumed;
            nodes.push(MarkupNode::Comment(comment));
        } else if let Some(after) = rest.strip_prefix("</") {
            let name = read_name(after);
            let consumed = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
            match parent {
                Some(parent_name) if parent_name == name => {
                    cursor.pos += consumed;
                    return nodes;
                }
                _ => {
                    // Stray closing tag; drop it and keep going.
                    cursor.pos += consumed;
                }
            }
        } else if rest.starts_with('<')
            && rest[1..].starts_with(|c: char| c.is_ascii_alphabetic())
        {
            nodes.push(parse_element(cursor));
        } else {
            nodes.push(MarkupNode::Text(take_text(cursor)));
        }
    }

    nodes
}

/// Parses one element starting at `<`.
fn parse_element(cursor: &mut Cursor<'_>) -> MarkupNode {
    let rest = cursor.rest();
    let name = read_name(&rest[1..]).to_string();
    let header_start = 1 + name.len();

    let Some((header_len, self_closing)) = header_end(&rest[header_start..]) else {
        // No closing `>` anywhere; the rest of the input is text.
        let text = rest.to_string();
        cursor.pos = cursor.source.len();
        return MarkupNode::Text(text);
    };

    let attributes = parse_attributes(&rest[header_start..header_start + header_len]);
    cursor.pos += header_start + header_len + if self_closing { 2 } else { 1 };

    let children = if self_closing {
        Vec::new()
    } else {
        parse_nodes(cursor, Some(&name))
    };

    MarkupNode::Element(MarkupElement {
        name: SmolStr::new(&name),
        attributes,
        children,
        self_closing,
    })
}

/// Takes literal text up to the next `<` (or EOF).
fn take_text(cursor: &mut Cursor<'_>) -> String {
    let rest = cursor.rest();
    // The first char may itself be a `<` that failed to open anything; skip
    // past it by its UTF-8 width before scanning.
    let skip = rest.chars().next().map_or(1, char::len_utf8);
    let end = rest[skip..].find('<').map(|i| i + skip).unwrap_or(rest.len());
    cursor.pos += end;
    rest[..end].to_string()
}

fn read_name(input: &str) -> &str {
    let end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':'))
        .unwrap_or(input.len());
    &input[..end]
}

/// Finds the end of an element header, respecting quotes. Returns the byte
/// length of the attribute text and whether the element is self-closing.
fn header_end(input: &str) -> Option<(usize, bool)> {
    let bytes = input.as_bytes();
    let mut quote: Option<u8> = None;

    for (i, &b) in bytes.iter().enumerate() {
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => {
                    if i > 0 && bytes[i - 1] == b'/' {
                        return Some((i - 1, true));
                    }
                    return Some((i, false));
                }
                _ => {}
            },
        }
    }

    None
}

fn write_node(out: &mut String, node: &MarkupNode) {
    match node {
        MarkupNode::Text(text) => out.push_str(text),
        MarkupNode::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        MarkupNode::Element(element) => {
            out.push('<');
            out.push_str(&element.name);
            write_attributes(out, &element.attributes);
            if element.self_closing {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in &element.children {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(&element.name);
            out.push('>');
        }
    }
}

fn write_attributes(out: &mut String, attributes: &Attributes) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        match value {
            AttributeValue::Flag => {}
            AttributeValue::Str(text) => {
                // Values are stored raw; pick the quote style that does not
                // collide with the content.
                if text.contains('"') {
                    out.push_str("='");
                    out.push_str(text);
                    out.push('\'');
                } else {
                    out.push_str("=\"");
                    out.push_str(text);
                    out.push('"');
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn round_trips_simple_markup() {
        let source = "\n  <div class=\"box\">\n    <Child value=\"1\"/>\n    text\n  </div>\n";
        let tree = MarkupTree::parse(source);
        assert_eq!(tree.to_html(), source);
    }

    #[test]
    fn preserves_comments() {
        let source = "<!-- note --><p>x</p>";
        let tree = MarkupTree::parse(source);
        assert_eq!(tree.to_html(), source);
    }

    #[test]
    fn flag_attributes_stay_bare() {
        let source = "<input disabled>";
        let tree = MarkupTree::parse(source);
        // No tag is void, so the unclosed element ends at EOF.
        let MarkupNode::Element(element) = &tree.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(element.attributes.get("disabled"), Some(&AttributeValue::Flag));
        assert_eq!(tree.to_html(), "<input disabled></input>");
    }

    #[test]
    fn nested_same_name_elements() {
        let source = "<div><div>inner</div></div>";
        let tree = MarkupTree::parse(source);
        assert_eq!(tree.to_html(), source);
        let MarkupNode::Element(outer) = &tree.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(outer.children.len(), 1);
    }

    #[test]
    fn interpolation_is_plain_text() {
        let source = "<span>{{ count }}</span>";
        let tree = MarkupTree::parse(source);
        assert_eq!(tree.to_html(), source);
    }

    #[test]
    fn stray_closing_tag_is_dropped() {
        let tree = MarkupTree::parse("</div><p>x</p>");
        assert_eq!(tree.to_html(), "<p>x</p>");
    }

    #[test]
    fn text_starting_with_a_multibyte_char_round_trips() {
        let source = "<p>étoile</p>";
        let tree = MarkupTree::parse(source);
        assert_eq!(tree.to_html(), source);
    }

    #[test]
    fn bare_multibyte_text_round_trips() {
        // Text nodes both starting with a multibyte char and containing a
        // stray `<` that opens nothing.
        let source = "état < fin";
        let tree = MarkupTree::parse(source);
        assert_eq!(tree.to_html(), source);
    }

    #[test]
    fn directive_attributes_survive() {
        let source = "<Child :value=\"n\" @click=\"go\" v-if=\"ok\"/>";
        let tree = MarkupTree::parse(source);
        assert_eq!(tree.to_html(), source);
    }
}
