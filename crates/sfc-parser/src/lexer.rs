//! Attribute-list lexer using logos.
//!
//! Tokenizes the text between a tag name and the closing `>` of an opening
//! tag, e.g. ` setup lang="ts"` or ` scoped`.

use logos::Logos;
use smol_str::SmolStr;

use crate::descriptor::{AttributeValue, Attributes};

/// Token kinds inside an attribute list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Logos)]
#[logos(skip r"[ \t\r\n]+")]
pub enum AttrToken {
    /// `=`
    #[token("=")]
    Eq,

    /// `/` (trailing self-closing marker, consumed by the caller)
    #[token("/")]
    Slash,

    /// `"value"`
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    /// `'value'`
    #[regex(r"'[^']*'")]
    SingleQuoted,

    /// An attribute name or unquoted value.
    #[regex(r#"[^ \t\r\n=/>"']+"#)]
    Ident,
}

/// Strips the surrounding quote characters from a quoted token slice.
fn unquote(slice: &str) -> &str {
    &slice[1..slice.len() - 1]
}

/// Parses an attribute list into an ordered map.
///
/// Unlexable fragments are skipped rather than reported; the block parser
/// only hands over text it has already delimited as a tag header.
pub(crate) fn parse_attributes(input: &str) -> Attributes {
    let mut attributes = Attributes::new();
    let mut tokens = AttrToken::lexer(input).spanned().peekable();

    while let Some((token, span)) = tokens.next() {
        let Ok(AttrToken::Ident) = token else {
            continue;
        };
        let name = SmolStr::new(&input[span]);

        let value = if matches!(tokens.peek(), Some((Ok(AttrToken::Eq), _))) {
            tokens.next();
            match tokens.next() {
                Some((Ok(AttrToken::DoubleQuoted), span))
                | Some((Ok(AttrToken::SingleQuoted), span)) => {
                    AttributeValue::Str(unquote(&input[span]).to_string())
                }
                Some((Ok(AttrToken::Ident), span)) => {
                    AttributeValue::Str(input[span].to_string())
                }
                // `name=` with nothing usable after it; keep the bare name.
                _ => AttributeValue::Flag,
            }
        } else {
            AttributeValue::Flag
        };

        attributes.insert(name, value);
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_flags_and_values() {
        let attrs = parse_attributes(r#" setup lang="ts""#);
        assert_eq!(attrs.get("setup"), Some(&AttributeValue::Flag));
        assert_eq!(
            attrs.get("lang"),
            Some(&AttributeValue::Str("ts".to_string()))
        );
    }

    #[test]
    fn preserves_order() {
        let attrs = parse_attributes(r#" b="2" a c="3""#);
        let names: Vec<&str> = attrs.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn single_quotes_and_unquoted_values() {
        let attrs = parse_attributes(" lang='ts' tabindex=0");
        assert_eq!(
            attrs.get("lang"),
            Some(&AttributeValue::Str("ts".to_string()))
        );
        assert_eq!(
            attrs.get("tabindex"),
            Some(&AttributeValue::Str("0".to_string()))
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let attrs = parse_attributes(" scoped /");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("scoped"), Some(&AttributeValue::Flag));
    }
}
