//! The section model.
//!
//! A section is one named, attributed block of a component file. Content is
//! typed by variant, so a script section can never carry raw text and a
//! template can never carry a script tree; the mismatch is unrepresentable
//! rather than checked at runtime.

use smol_str::SmolStr;
use thiserror::Error;

use sfc_parser::{AttributeValue, Attributes, MarkupTree};
use sfc_script::{ScriptError, ScriptSource};

/// An error raised by section utilities.
#[derive(Debug, Error)]
pub enum SectionError {
    /// An edit was applied to a section that does not hold a script.
    #[error("cannot append code to a {found} section")]
    NotAScript {
        /// The name of the section that was passed.
        found: String,
    },

    /// Re-parsing edited script content failed.
    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// One block of a component file.
///
/// `attributes` is `None` when the section has nothing to emit (the
/// serializer renders it as the empty string); `Some` with an empty map is a
/// present-but-attributeless tag.
#[derive(Debug, Clone)]
pub enum Section {
    /// The `<template>` block, holding a parsed markup tree.
    Template {
        /// Attributes on the template tag.
        attributes: Option<Attributes>,
        /// The parsed template fragment.
        tree: MarkupTree,
    },
    /// A plain `<script>` block.
    Script {
        /// Attributes on the script tag.
        attributes: Option<Attributes>,
        /// The parsed script.
        source: ScriptSource,
    },
    /// A `<script setup>` block.
    ScriptSetup {
        /// Attributes on the script tag (including the `setup` flag).
        attributes: Option<Attributes>,
        /// The parsed script.
        source: ScriptSource,
    },
    /// A style or custom block, holding raw text.
    Text {
        /// The tag name (`style`, or the custom block's tag).
        name: SmolStr,
        /// Attributes on the tag.
        attributes: Option<Attributes>,
        /// The raw content; `None` means nothing to emit.
        code: Option<String>,
    },
}

impl Section {
    /// The tag name this section renders under.
    pub fn name(&self) -> &str {
        match self {
            Section::Template { .. } => "template",
            Section::Script { .. } => "script",
            Section::ScriptSetup { .. } => "scriptSetup",
            Section::Text { name, .. } => name,
        }
    }

    /// The section's attributes, if any.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Section::Template { attributes, .. }
            | Section::Script { attributes, .. }
            | Section::ScriptSetup { attributes, .. }
            | Section::Text { attributes, .. } => attributes.as_ref(),
        }
    }

    /// Mutable access to the section's attributes.
    pub fn attributes_mut(&mut self) -> &mut Option<Attributes> {
        match self {
            Section::Template { attributes, .. }
            | Section::Script { attributes, .. }
            | Section::ScriptSetup { attributes, .. }
            | Section::Text { attributes, .. } => attributes,
        }
    }

    /// The script handle, for script and script-setup sections.
    pub fn script(&self) -> Option<&ScriptSource> {
        match self {
            Section::Script { source, .. } | Section::ScriptSetup { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Finds the first section with the given tag name.
pub fn find_section_of_type<'a>(name: &str, sections: &'a [Section]) -> Option<&'a Section> {
    sections.iter().find(|section| section.name() == name)
}

/// Finds all sections with the given tag name.
pub fn find_sections_of_type<'a>(name: &str, sections: &'a [Section]) -> Vec<&'a Section> {
    sections
        .iter()
        .filter(|section| section.name() == name)
        .collect()
}

/// Creates a `scriptSetup` section from raw code.
///
/// The section carries the bare `setup` flag, matching what the collector
/// produces for a `<script setup>` block.
pub fn create_script_setup_section(filename: &str, code: &str) -> Result<Section, ScriptError> {
    let mut attributes = Attributes::new();
    attributes.insert(SmolStr::new("setup"), AttributeValue::Flag);
    Ok(Section::ScriptSetup {
        attributes: Some(attributes),
        source: ScriptSource::parse(filename, code)?,
    })
}

/// Appends code to a script or script-setup section by re-parsing the
/// concatenated source text.
pub fn append_to_script_section(section: &mut Section, code: &str) -> Result<(), SectionError> {
    match section {
        Section::Script { source, .. } | Section::ScriptSetup { source, .. } => {
            let combined = format!("{}{}", source.text(), code);
            *source = ScriptSource::parse(source.filename(), &combined)?;
            Ok(())
        }
        other => Err(SectionError::NotAScript {
            found: other.name().to_string(),
        }),
    }
}
