//! The section serializer.

use sfc_parser::{AttributeValue, Attributes};

use crate::section::Section;

/// Renders an attribute map as the text that follows a tag name.
///
/// Attributes render in stored order; a flag renders as the bare name, a
/// valued attribute as `name="value"` (single quotes when the value itself
/// contains `"`). A non-empty group is prefixed with a single space; an
/// empty map renders as nothing.
pub fn attributes_to_string(attributes: &Attributes) -> String {
    let parts: Vec<String> = attributes
        .iter()
        .map(|(name, value)| match value {
            AttributeValue::Flag => name.to_string(),
            // Values are stored raw; pick the quote style that does not
            // collide with the content.
            AttributeValue::Str(text) if text.contains('"') => {
                format!("{}='{}'", name, text)
            }
            AttributeValue::Str(text) => format!("{}=\"{}\"", name, text),
        })
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}

/// Renders a section to literal text.
///
/// A section with no attributes, or a text section with no code, renders as
/// the empty string — "nothing to emit", not an error. A script-setup
/// section renders under its own `scriptSetup` tag so the setup/non-setup
/// distinction survives the round trip.
pub fn serialize_section(section: &Section) -> String {
    match section {
        Section::Template { attributes, tree } => match attributes {
            Some(attributes) => wrap("template", attributes, &tree.to_html()),
            None => String::new(),
        },
        Section::Script { attributes, source } => match attributes {
            Some(attributes) => wrap("script", attributes, source.text()),
            None => String::new(),
        },
        Section::ScriptSetup { attributes, source } => match attributes {
            Some(attributes) => wrap("scriptSetup", attributes, source.text()),
            None => String::new(),
        },
        Section::Text {
            name,
            attributes,
            code,
        } => match (attributes, code) {
            (Some(attributes), Some(code)) => wrap(name, attributes, code),
            _ => String::new(),
        },
    }
}

fn wrap(tag: &str, attributes: &Attributes, content: &str) -> String {
    format!(
        "<{tag}{attrs}>{content}</{tag}>",
        tag = tag,
        attrs = attributes_to_string(attributes),
        content = content
    )
}
