//! HTML export rendering.
//!
//! Wraps the engine's per-line highlighting in a custom skeleton: a two
//! column table with a numbered, anchored cell per line instead of the
//! default `<pre>` wrapping, so viewers can link to individual lines.

use crate::error::HighlightError;
use log::trace;
use std::fmt::Write;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Fixed color theme for all exports, chosen from the engine's bundled set.
const THEME: &str = "base16-eighties.dark";

/// Canonical names whose engine syntax name can't be derived mechanically:
/// dropping punctuation from "C#" leaves just `c`, and "Plain Text" shares
/// no token with `text`.
const IRREGULAR_NAMES: &[(&str, &str)] = &[("csharp", "C#"), ("text", "Plain Text")];

/// Renders source code as highlighted HTML.
///
/// Holds the loaded syntax definitions and the fixed theme; both are
/// immutable after construction, so a single renderer can serve concurrent
/// callers.
pub struct HtmlRenderer {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme: ThemeSet::load_defaults().themes[THEME].clone(),
        }
    }

    /// The loaded syntax catalog, shared with the language registry.
    pub fn syntax_set(&self) -> &SyntaxSet {
        &self.syntax_set
    }

    /// Pretty HTML export of `code` using syntax highlighting.
    ///
    /// Produces a `<table>` with one row per source line: a `line-number`
    /// cell anchored as `L<n>` carrying the 1-based number in its `value`
    /// attribute, and a `line-content` cell with the highlighted markup.
    /// One trailing blank row always follows the content rows, mirroring
    /// the engine's trailing-newline handling.
    ///
    /// Fails with [`HighlightError::LanguageNotFound`] if `language` does
    /// not resolve to a syntax; no registry pre-validation happens here.
    pub fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        let syntax = self
            .find_syntax(language)
            .ok_or_else(|| HighlightError::LanguageNotFound(language.to_string()))?;
        trace!("highlighting {} bytes as {}", code.len(), syntax.name);

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(code) {
            let regions = highlighter.highlight_line(line, &self.syntax_set)?;
            lines.push(styled_line_to_highlighted_html(
                &regions,
                IncludeBackground::No,
            )?);
        }
        // The engine's token stream always ends in a blank line after the
        // trailing newline; callers depend on the final empty row.
        lines.push(String::new());

        let mut html = String::from("<table class=\"highlight\"><tbody>");
        for (i, line) in lines.iter().enumerate() {
            let n = i + 1;
            let _ = writeln!(
                html,
                "<tr><td class=\"line-number\" id=\"L{n}\" value=\"{n}\"></td>\
                 <td class=\"line-content\">{line}</td></tr>"
            );
        }
        html.push_str("</tbody></table>");
        Ok(html)
    }

    /// Resolve a language identifier to a syntax definition.
    ///
    /// Tries the syntax name (case-insensitive), then the extension list,
    /// then the name with non-alphanumerics dropped so canonical names like
    /// `objectivec` find "Objective-C", then the irregular-alias table for
    /// the few names that defeat all of the above.
    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        let syntaxes = self.syntax_set.syntaxes();
        syntaxes
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(language))
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
            .or_else(|| {
                let wanted = squash(language);
                syntaxes.iter().find(|s| squash(&s.name) == wanted)
            })
            .or_else(|| {
                IRREGULAR_NAMES
                    .iter()
                    .find(|&&(alias, _)| alias == language)
                    .and_then(|&(_, name)| self.syntax_set.find_syntax_by_name(name))
            })
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn squash(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase()
}
