//! Round-trip behavior of parse -> collect -> serialize.

use camino::Utf8Path;
use pretty_assertions::assert_eq;
use sfc_transform::{rewrite_source, serialize_section, RewriteOutcome, Section};

fn rewrite_identity(source: &str) -> String {
    let outcome = rewrite_source(source, "src/App.vue", Utf8Path::new("."), |_, s, _| s);
    match outcome {
        RewriteOutcome::Transformed(text) => text,
        RewriteOutcome::Passthrough(reason) => panic!("unexpected passthrough: {:?}", reason),
    }
}

#[test]
fn well_formed_input_round_trips() {
    let source = "\
<template>\n  <div class=\"box\">\n    <Child value=\"1\"/>\n  </div>\n</template>\n\n\
<script lang=\"ts\">export default {}\n</script>\n\n\
<style scoped>\n.box { color: red }\n</style>\n\n\
<docs lang=\"md\"># App</docs>";

    assert_eq!(rewrite_identity(source), source);
}

#[test]
fn non_ascii_template_text_round_trips() {
    let source = "<template><p>étoile</p></template>";
    assert_eq!(rewrite_identity(source), source);
}

#[test]
fn quote_heavy_attribute_values_round_trip() {
    // A single-quoted value holding a double quote must come back
    // single-quoted, or the output would not reparse.
    let source = "<style data-x='a\"b'>.a {}</style>";
    assert_eq!(rewrite_identity(source), source);
}

#[test]
fn style_blocks_keep_source_order() {
    let source = "<style>.a {}</style>\n\n<style scoped>.b {}</style>";
    assert_eq!(rewrite_identity(source), source);
}

#[test]
fn script_setup_round_trip_is_idempotent() {
    // A `<script setup>` block reserializes under the `scriptSetup` tag; from
    // then on the output is a fixed point of the rewrite.
    let source = "<script setup lang=\"ts\">const n = 1\n</script>";
    let first = rewrite_identity(source);
    assert_eq!(
        first,
        "<scriptSetup setup lang=\"ts\">const n = 1\n</scriptSetup>"
    );
    let second = rewrite_identity(&first);
    assert_eq!(second, first);
}

#[test]
fn dropping_sections_via_transform() {
    let source = "<template><p>x</p></template>\n\n<style>.a {}</style>";
    let outcome = rewrite_source(source, "src/App.vue", Utf8Path::new("."), |_, sections, _| {
        sections
            .into_iter()
            .filter(|section| section.name() != "style")
            .collect()
    });
    let RewriteOutcome::Transformed(text) = outcome else {
        panic!("expected transform");
    };
    assert_eq!(text, "<template><p>x</p></template>");
}

#[test]
fn transform_can_blank_a_section_to_drop_it() {
    // Setting attributes to None makes a section serialize to the empty
    // string, which the pipeline then drops before joining.
    let source = "<template><p>x</p></template>\n\n<style>.a {}</style>";
    let outcome = rewrite_source(source, "src/App.vue", Utf8Path::new("."), |_, mut sections, _| {
        for section in &mut sections {
            if let Section::Text { attributes, .. } = section {
                *attributes = None;
            }
        }
        sections
    });
    let RewriteOutcome::Transformed(text) = outcome else {
        panic!("expected transform");
    };
    assert_eq!(text, "<template><p>x</p></template>");
}

#[test]
fn sections_serialize_independently() {
    let source = "<template><p>x</p></template>\n\n<style>.a {}</style>";
    let outcome = rewrite_source(source, "src/App.vue", Utf8Path::new("."), |_, sections, _| {
        let rendered: Vec<String> = sections.iter().map(serialize_section).collect();
        assert_eq!(rendered[0], "<template><p>x</p></template>");
        assert_eq!(rendered[1], "<style>.a {}</style>");
        sections
    });
    assert!(matches!(outcome, RewriteOutcome::Transformed(_)));
}
