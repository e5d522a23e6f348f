//! Top-level block parser.
//!
//! Scans a component file for its top-level tags and slices out each block's
//! raw content. Content is kept verbatim so well-formed input round-trips
//! through serialization unchanged.
//!
//! Script and style blocks are raw text: their content ends at the first
//! matching closing tag. Template and custom blocks track nesting of their
//! own tag name, so `<template #slot>` inside `<template>` does not end the
//! outer block.

use smol_str::SmolStr;

use crate::descriptor::{SfcBlock, SfcDescriptor};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::parse_attributes;
use crate::ParseResult;

pub(crate) struct Parser<'a> {
    source: &'a str,
    filename: &'a str,
    pos: usize,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str, filename: &'a str) -> Self {
        Self {
            source,
            filename,
            pos: 0,
            errors: Vec::new(),
        }
    }

    pub(crate) fn parse(mut self) -> ParseResult {
        let mut descriptor = SfcDescriptor {
            filename: self.filename.to_string(),
            ..Default::default()
        };

        while self.pos < self.source.len() {
            let Some(lt) = self.source[self.pos..].find('<') else {
                break;
            };
            self.pos += lt;
            let rest = &self.source[self.pos..];

            if rest.starts_with("<!--") {
                match rest.find("-->") {
                    Some(end) => self.pos += end + 3,
                    None => break,
                }
            } else if let Some(after) = rest.strip_prefix("</") {
                let name = read_tag_name(after);
                self.errors.push(ParseError::new(
                    ParseErrorKind::StrayClosingTag {
                        tag_name: name.to_string(),
                    },
                    self.pos,
                ));
                self.pos += rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
            } else if rest[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                self.parse_block(&mut descriptor);
            } else {
                self.pos += 1;
            }
        }

        ParseResult {
            descriptor,
            errors: self.errors,
        }
    }

    /// Parses one top-level block starting at `self.pos` (which points at `<`).
    fn parse_block(&mut self, descriptor: &mut SfcDescriptor) {
        let block_start = self.pos;
        let rest = &self.source[block_start..];
        let name = read_tag_name(&rest[1..]).to_string();
        let header_start = 1 + name.len();

        let Some((header_len, self_closing)) = find_header_end(&rest[header_start..]) else {
            self.errors.push(ParseError::new(
                ParseErrorKind::MalformedTag {
                    message: format!("opening tag <{} has no closing `>`", name),
                },
                block_start,
            ));
            self.pos = self.source.len();
            return;
        };

        let attributes = parse_attributes(&rest[header_start..header_start + header_len]);
        let content_end_of_header = header_start + header_len + if self_closing { 2 } else { 1 };
        self.pos = block_start + content_end_of_header;

        let content = if self_closing {
            String::new()
        } else {
            self.take_content(&name, block_start)
        };

        let block = SfcBlock {
            name: SmolStr::new(&name),
            content,
            attributes,
        };
        self.register(descriptor, block, block_start);
    }

    /// Consumes content up to (and including) the block's closing tag.
    fn take_content(&mut self, name: &str, block_start: usize) -> String {
        let content_start = self.pos;
        // Script and style content is raw text; the first closing tag wins.
        let raw_text = name == "script" || name == "style";
        let mut depth = 1usize;
        let mut search = self.pos;

        while search < self.source.len() {
            let Some(lt) = self.source[search..].find('<') else {
                break;
            };
            let at = search + lt;
            let rest = &self.source[at..];

            if let Some(after) = rest.strip_prefix("</") {
                if after.starts_with(name) && close_boundary(&after[name.len()..]) {
                    depth -= 1;
                    if depth == 0 {
                        let content = self.source[content_start..at].to_string();
                        self.pos = at + rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
                        return content;
                    }
                    search = at + 2 + name.len();
                    continue;
                }
            } else if !raw_text && rest[1..].starts_with(name) {
                let after_name = &rest[1 + name.len()..];
                if open_boundary(after_name) {
                    // A nested self-closing tag never needs a close.
                    match find_header_end(after_name) {
                        Some((len, true)) => {
                            search = at + 1 + name.len() + len + 2;
                        }
                        Some((len, false)) => {
                            depth += 1;
                            search = at + 1 + name.len() + len + 1;
                        }
                        None => break,
                    }
                    continue;
                }
            }
            search = at + 1;
        }

        self.errors.push(ParseError::new(
            ParseErrorKind::UnclosedBlock {
                tag_name: name.to_string(),
            },
            block_start,
        ));
        let content = self.source[content_start..].to_string();
        self.pos = self.source.len();
        content
    }

    fn register(&mut self, descriptor: &mut SfcDescriptor, block: SfcBlock, offset: usize) {
        let tag = block.name.clone();
        let slot = match tag.as_str() {
            "template" => &mut descriptor.template,
            "script" if block.attributes.contains_key("setup") => &mut descriptor.script_setup,
            "script" => &mut descriptor.script,
            // `scriptSetup` is the tag the serializer emits for setup scripts;
            // accepting it keeps parse -> serialize -> parse idempotent.
            "scriptSetup" => &mut descriptor.script_setup,
            "style" => {
                descriptor.styles.push(block);
                return;
            }
            _ => {
                descriptor.custom_blocks.push(block);
                return;
            }
        };

        if slot.is_some() {
            self.errors.push(ParseError::new(
                ParseErrorKind::DuplicateBlock {
                    tag_name: tag.to_string(),
                },
                offset,
            ));
        } else {
            *slot = Some(block);
        }
    }
}

/// Reads a tag name (letters, digits, `-`, `_`) from the start of `input`.
fn read_tag_name(input: &str) -> &str {
    let end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(input.len());
    &input[..end]
}

/// Finds the end of an opening tag's header, respecting quoted attribute
/// values. Returns the byte length of the attribute text and whether the tag
/// is self-closing.
fn find_header_end(input: &str) -> Option<(usize, bool)> {
    let bytes = input.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
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
        i += 1;
    }

    None
}

/// A closing tag name must be followed by whitespace or `>`.
fn close_boundary(input: &str) -> bool {
    matches!(input.bytes().next(), None | Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n'))
}

/// An opening tag name must be followed by whitespace, `/`, or `>`.
fn open_boundary(input: &str) -> bool {
    matches!(
        input.bytes().next(),
        None | Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n')
    )
}
