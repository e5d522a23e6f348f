//! Block descriptor types for a parsed component file.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// The value of a block or element attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// The attribute is present without a value (`setup`, `scoped`).
    Flag,
    /// The attribute carries an explicit value (`lang="ts"`).
    Str(String),
}

impl AttributeValue {
    /// Returns the string value, or `None` for a bare flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Flag => None,
            AttributeValue::Str(value) => Some(value.as_str()),
        }
    }
}

/// An insertion-ordered attribute map.
///
/// Order matters: serialization must reproduce attributes in the order they
/// appeared in the source.
pub type Attributes = IndexMap<SmolStr, AttributeValue>;

/// One top-level block of a component file.
#[derive(Debug, Clone)]
pub struct SfcBlock {
    /// The tag name as written in the source.
    pub name: SmolStr,
    /// The raw content between the opening and closing tags, verbatim.
    pub content: String,
    /// The attributes on the opening tag, in source order.
    pub attributes: Attributes,
}

/// A parsed component file, split into its top-level blocks.
#[derive(Debug, Clone, Default)]
pub struct SfcDescriptor {
    /// The filename the source was parsed from.
    pub filename: String,
    /// The `<template>` block.
    pub template: Option<SfcBlock>,
    /// The plain `<script>` block.
    pub script: Option<SfcBlock>,
    /// The `<script setup>` block.
    pub script_setup: Option<SfcBlock>,
    /// All `<style>` blocks, in source order.
    pub styles: Vec<SfcBlock>,
    /// All custom blocks (any other tag), in source order.
    pub custom_blocks: Vec<SfcBlock>,
}
