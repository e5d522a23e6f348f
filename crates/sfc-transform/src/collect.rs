//! The section collector.

use sfc_parser::{MarkupTree, SfcBlock, SfcDescriptor};
use sfc_script::{ScriptError, ScriptSource};

use crate::section::Section;

/// Collects the ordered section sequence from a parsed descriptor.
///
/// Order is fixed: template, script, scriptSetup, styles (source order),
/// custom blocks (source order). Absent blocks contribute nothing — no empty
/// sections are fabricated. Script content is parsed with the descriptor's
/// filename so downstream diagnostics and re-parses stay attributable.
///
/// Fails only when a script block's content does not parse; the caller's
/// documented policy for that is passthrough of the original file.
pub fn collect_sections(descriptor: &SfcDescriptor) -> Result<Vec<Section>, ScriptError> {
    let mut sections = Vec::new();

    if let Some(template) = &descriptor.template {
        sections.push(Section::Template {
            attributes: Some(template.attributes.clone()),
            tree: MarkupTree::parse(&template.content),
        });
    }

    if let Some(script) = &descriptor.script {
        sections.push(Section::Script {
            attributes: Some(script.attributes.clone()),
            source: parse_script(&descriptor.filename, script)?,
        });
    }

    if let Some(script_setup) = &descriptor.script_setup {
        sections.push(Section::ScriptSetup {
            attributes: Some(script_setup.attributes.clone()),
            source: parse_script(&descriptor.filename, script_setup)?,
        });
    }

    for style in &descriptor.styles {
        sections.push(Section::Text {
            name: style.name.clone(),
            attributes: Some(style.attributes.clone()),
            code: Some(style.content.clone()),
        });
    }

    for block in &descriptor.custom_blocks {
        sections.push(Section::Text {
            name: block.name.clone(),
            attributes: Some(block.attributes.clone()),
            code: Some(block.content.clone()),
        });
    }

    Ok(sections)
}

fn parse_script(filename: &str, block: &SfcBlock) -> Result<ScriptSource, ScriptError> {
    ScriptSource::parse(filename, &block.content)
}
