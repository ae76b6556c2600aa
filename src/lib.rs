//! HTML highlighted code export and language tools.
//!
//! Two pieces:
//! - [`LanguageMap`]: extension <-> canonical language name lookups, seeded
//!   from a curated table and filled in from the engine's syntax catalog.
//! - [`HtmlRenderer`]: renders source code as an HTML table with per-line
//!   anchors and syntax highlighting.
//!
//! The crate-level functions operate on a shared registry and renderer that
//! are built once, on first use, and live for the rest of the process. Both
//! are immutable after construction, so calls are safe from any thread.

pub mod error;
pub mod language;
pub mod render;

pub use error::HighlightError;
pub use language::LanguageMap;
pub use render::HtmlRenderer;

use lazy_static::lazy_static;

lazy_static! {
    static ref RENDERER: HtmlRenderer = HtmlRenderer::new();
    static ref LANGUAGES: LanguageMap = LanguageMap::new(RENDERER.syntax_set());
}

/// Validate a language extension, returning it (or the extension a language
/// name maps to), or `None` if unrecognized.
pub fn validate_extension(ext: &str) -> Option<&'static str> {
    LANGUAGES.validate_extension(ext)
}

/// Resolve a language name to its extension. Accepts an extension as-is.
pub fn parse_language(lang: &str) -> Option<&'static str> {
    LANGUAGES.parse_language(lang)
}

/// Resolve an extension to its canonical language name. Accepts a language
/// name as-is.
pub fn parse_extension(ext: &str) -> Option<&'static str> {
    LANGUAGES.parse_extension(ext)
}

/// Pretty HTML export of `code` using syntax highlighting.
///
/// `language` must be resolvable by the highlighting engine; pre-validate
/// with [`parse_extension`] / [`parse_language`] for a soft failure mode.
pub fn highlight(code: &str, language: &str) -> Result<String, HighlightError> {
    RENDERER.highlight(code, language)
}
