//! Language identification.
//!
//! Maps file extensions to canonical language names and back. The mapping is
//! seeded from a curated table (which settles ambiguous cases like `h` ->
//! `objectivec`) and then filled in from the highlighting engine's syntax
//! catalog, so every bundled syntax is addressable by name or extension.

use log::debug;
use std::collections::HashMap;
use syntect::parsing::SyntaxSet;

/// Curated `(extension, canonical name)` pairs. These take priority over
/// anything discovered in the syntax catalog.
const SEED_LANGUAGES: &[(&str, &str)] = &[
    ("c", "c"),
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("css", "css"),
    ("dart", "dart"),
    ("diff", "diff"),
    ("erl", "erlang"),
    ("ex", "elixir"),
    ("go", "go"),
    ("h", "objectivec"),
    ("hs", "haskell"),
    ("html", "html"),
    ("ini", "ini"),
    ("java", "java"),
    ("js", "javascript"),
    ("json", "json"),
    ("julia", "jl"),
    ("kt", "kotlin"),
    ("less", "less"),
    ("lisp", "lisp"),
    ("lua", "lua"),
    ("md", "markdown"),
    ("php", "php"),
    ("pl", "perl"),
    ("py", "python"),
    ("rb", "ruby"),
    ("rs", "rust"),
    ("sass", "sass"),
    ("scala", "scala"),
    ("scss", "scss"),
    ("sh", "bash"),
    ("sql", "sql"),
    ("swift", "swift"),
    ("toml", "toml"),
    ("ts", "typescript"),
    ("txt", "text"),
    ("xml", "xml"),
    ("yml", "yaml"),
];

/// Bidirectional extension <-> language name registry.
///
/// Built once at startup and read-only afterwards; lookups return `None` for
/// unrecognized keys rather than erroring.
#[derive(Debug)]
pub struct LanguageMap {
    ext_to_lang: HashMap<String, String>,
    lang_to_ext: HashMap<String, String>,
}

impl LanguageMap {
    /// Build the registry from the seed table plus `syntax_set`'s catalog.
    ///
    /// Seed entries win over discovered ones, and among discovered entries
    /// the first one encountered for a key wins. The catalog is walked in
    /// name order so the result does not depend on syntax load order.
    pub fn new(syntax_set: &SyntaxSet) -> Self {
        let mut ext_to_lang = HashMap::new();
        let mut lang_to_ext = HashMap::new();

        for &(ext, lang) in SEED_LANGUAGES {
            ext_to_lang.insert(ext.to_string(), lang.to_string());
            lang_to_ext.insert(lang.to_string(), ext.to_string());
        }
        let seeded = ext_to_lang.len();

        let mut syntaxes: Vec<_> = syntax_set.syntaxes().iter().collect();
        syntaxes.sort_by(|a, b| a.name.cmp(&b.name));

        for syntax in syntaxes {
            // Syntaxes without a name or extensions can't be addressed by
            // either key, same as catalog entries without aliases/filenames.
            if syntax.name.is_empty() || syntax.file_extensions.is_empty() {
                continue;
            }
            let name = syntax.name.to_lowercase();
            let ext = syntax.file_extensions[0].clone();

            if !lang_to_ext.contains_key(&name) {
                lang_to_ext.insert(name.clone(), ext.clone());
            }
            if !ext_to_lang.contains_key(&ext) {
                ext_to_lang.insert(ext, name);
            }
        }

        debug!(
            "language map built: {} extensions ({} seeded), {} names",
            ext_to_lang.len(),
            seeded,
            lang_to_ext.len()
        );

        Self {
            ext_to_lang,
            lang_to_ext,
        }
    }

    /// Validate a language extension, returning it unchanged if known.
    /// A known language name resolves to its extension instead.
    pub fn validate_extension(&self, ext: &str) -> Option<&str> {
        if let Some((known, _)) = self.ext_to_lang.get_key_value(ext) {
            return Some(known.as_str());
        }
        self.lang_to_ext.get(ext).map(String::as_str)
    }

    /// Resolve a language name to its extension. If `lang` is already a
    /// known extension it is returned unchanged.
    pub fn parse_language(&self, lang: &str) -> Option<&str> {
        if let Some(ext) = self.lang_to_ext.get(lang) {
            return Some(ext.as_str());
        }
        self.ext_to_lang.get_key_value(lang).map(|(known, _)| known.as_str())
    }

    /// Resolve an extension to its canonical language name. If `ext` is
    /// already a known language name it is returned unchanged.
    pub fn parse_extension(&self, ext: &str) -> Option<&str> {
        if let Some(lang) = self.ext_to_lang.get(ext) {
            return Some(lang.as_str());
        }
        self.lang_to_ext.get_key_value(ext).map(|(known, _)| known.as_str())
    }

    /// Iterate over all known `(extension, language)` pairs.
    pub fn extensions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ext_to_lang
            .iter()
            .map(|(ext, lang)| (ext.as_str(), lang.as_str()))
    }

    /// Iterate over all known `(language, extension)` pairs.
    pub fn languages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lang_to_ext
            .iter()
            .map(|(lang, ext)| (lang.as_str(), ext.as_str()))
    }
}
