use thiserror::Error;

/// Errors surfaced by [`crate::render::HtmlRenderer::highlight`].
///
/// Registry lookups never error; an unrecognized key there is a plain
/// `None`. Rendering is the only fallible path.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("no syntax found for language: {0}")]
    LanguageNotFound(String),
    #[error("highlighting engine error: {0}")]
    Engine(#[from] syntect::Error),
}
