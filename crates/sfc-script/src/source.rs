//! The parsed-script handle.

use std::sync::Arc;

use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};
use thiserror::Error;

/// A script-parsing error.
#[derive(Debug, Clone, Error)]
pub enum ScriptError {
    /// The script content could not be parsed.
    #[error("failed to parse script in {filename}: {message}")]
    Parse {
        /// The file the script came from.
        filename: String,
        /// The parser's message.
        message: String,
    },
}

/// A parsed script block.
///
/// The handle keeps the source text it was parsed from; printing a script is
/// therefore exact, and edits are made by re-parsing replacement text (see
/// `append` semantics in the section utilities). The filename travels with
/// the handle so re-parses stay attributable to the originating file.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    filename: String,
    source: String,
    module: Module,
}

impl ScriptSource {
    /// Parses TypeScript source into a script handle.
    pub fn parse(filename: &str, source: &str) -> Result<ScriptSource, ScriptError> {
        let cm: Arc<SourceMap> = Default::default();
        let fm = cm.new_source_file(
            FileName::Custom(filename.to_string()).into(),
            source.to_string(),
        );
        let syntax = Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        });
        let mut parser = Parser::new(syntax, StringInput::from(&*fm), None);
        let module = parser.parse_module().map_err(|e| ScriptError::Parse {
            filename: filename.to_string(),
            message: format!("{:?}", e),
        })?;

        // The parser recovers from some syntax errors; treat those as
        // failures too so callers never operate on a half-read script.
        if let Some(error) = parser.take_errors().into_iter().next() {
            return Err(ScriptError::Parse {
                filename: filename.to_string(),
                message: format!("{:?}", error),
            });
        }

        Ok(ScriptSource {
            filename: filename.to_string(),
            source: source.to_string(),
            module,
        })
    }

    /// The filename this script was parsed from.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Prints the script back to source text.
    pub fn text(&self) -> &str {
        &self.source
    }

    /// The parsed module.
    pub fn module(&self) -> &Module {
        &self.module
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_text() {
        let source = "const a: number = 1\nexport default { a }\n";
        let parsed = ScriptSource::parse("App.vue", source).unwrap();
        assert_eq!(parsed.text(), source);
        assert_eq!(parsed.filename(), "App.vue");
    }

    #[test]
    fn parse_error_carries_filename() {
        let err = ScriptSource::parse("Broken.vue", "const = ;").unwrap_err();
        let ScriptError::Parse { filename, .. } = err;
        assert_eq!(filename, "Broken.vue");
    }

    #[test]
    fn typescript_syntax_is_accepted() {
        let source = "interface Props { name: string }\nconst p: Props = { name: 'x' }";
        assert!(ScriptSource::parse("App.vue", source).is_ok());
    }
}
