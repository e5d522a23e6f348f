//! Single-file-component parser for sfc-rewrite.
//!
//! This crate splits a component file into its top-level blocks and exposes
//! them as a typed [`SfcDescriptor`]:
//! - `<template>` (at most one)
//! - `<script>` / `<script setup>` (at most one of each)
//! - `<style>` blocks (any number, source order)
//! - custom blocks (any number, source order, tag name preserved)
//!
//! Template content can additionally be parsed into a [`MarkupTree`] that
//! round-trips back to markup text.
//!
//! # Example
//!
//! ```
//! use sfc_parser::parse;
//!
//! let source = r#"<template><div>hi</div></template>
//!
//! <script setup lang="ts">const x = 1</script>
//! "#;
//!
//! let result = parse(source, "App.vue");
//! assert!(result.errors.is_empty());
//! assert!(result.descriptor.template.is_some());
//! assert!(result.descriptor.script_setup.is_some());
//! ```
//!
//! The parser holds no global state: every call to [`parse`] builds a fresh
//! parsing context, so concurrent callers never observe each other's input.

mod descriptor;
mod error;
mod lexer;
mod markup;
mod parser;

pub use descriptor::{AttributeValue, Attributes, SfcBlock, SfcDescriptor};
pub use error::{ParseError, ParseErrorKind};
pub use markup::{MarkupElement, MarkupNode, MarkupTree};

/// The result of parsing a component file.
///
/// Errors do not abort parsing; the descriptor is always the best-effort
/// reading of the input. Callers that need all-or-nothing semantics should
/// check `errors.is_empty()` before using the descriptor.
#[derive(Debug)]
pub struct ParseResult {
    /// The parsed block descriptor.
    pub descriptor: SfcDescriptor,
    /// Any errors encountered during parsing.
    pub errors: Vec<ParseError>,
}

/// Parses component source text into its block descriptor.
///
/// The filename is recorded on the descriptor so downstream script parsing
/// can tag its syntax trees for diagnostics and re-parsing.
pub fn parse(source: &str, filename: &str) -> ParseResult {
    parser::Parser::new(source, filename).parse()
}
