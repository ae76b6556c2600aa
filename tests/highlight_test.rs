// tests/highlight_test.rs - End-to-end tests through the crate-level API

use hilite::{HighlightError, highlight, parse_extension, parse_language, validate_extension};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_lookup_and_render_flow() {
    init_logging();

    // A viewer hands us an extension; normalize it, then render.
    let lang = parse_extension("py").unwrap();
    assert_eq!(lang, "python");

    let html = highlight("def f():\n    return 1", lang).unwrap();
    assert!(html.starts_with("<table class=\"highlight\"><tbody>"));
    assert!(html.ends_with("</tbody></table>"));

    // Two content lines plus the trailing blank row.
    assert_eq!(html.matches("<tr>").count(), 3);
    assert!(html.contains("id=\"L1\" value=\"1\""));
    assert!(html.contains("id=\"L3\" value=\"3\""));
}

#[test]
fn test_normalization_functions_agree() {
    init_logging();

    assert_eq!(validate_extension("rs"), Some("rs"));
    assert_eq!(validate_extension("rust"), Some("rs"));
    assert_eq!(parse_language("rust"), Some("rs"));
    assert_eq!(parse_language("rs"), Some("rs"));
    assert_eq!(parse_extension("rs"), Some("rust"));
    assert_eq!(parse_extension("rust"), Some("rust"));
}

#[test]
fn test_irregular_seed_entries() {
    assert_eq!(parse_extension("h"), Some("objectivec"));
    assert_eq!(parse_extension("sh"), Some("bash"));
    assert_eq!(parse_language("perl"), Some("pl"));
    assert_eq!(parse_extension("txt"), Some("text"));
}

#[test]
fn test_unrecognized_keys_are_none_not_errors() {
    assert_eq!(validate_extension("not-a-real-ext-or-lang"), None);
    assert_eq!(parse_language("not-a-real-ext-or-lang"), None);
    assert_eq!(parse_extension("not-a-real-ext-or-lang"), None);
    assert_eq!(validate_extension(""), None);
}

#[test]
fn test_highlight_empty_input() {
    // Empty input still renders the forced trailing blank row.
    let html = highlight("", "python").unwrap();
    assert_eq!(html.matches("<tr>").count(), 1);
}

#[test]
fn test_highlight_unknown_language_fails() {
    // The renderer does not pre-validate; the engine miss propagates.
    match highlight("print(1)", "not-a-language") {
        Err(HighlightError::LanguageNotFound(lang)) => {
            assert_eq!(lang, "not-a-language");
        }
        other => panic!("expected LanguageNotFound, got {other:?}"),
    }
}

#[test]
fn test_seed_languages_render_via_canonical_name() {
    init_logging();

    // Every extension in the curated seed table, in table order.
    let seed_exts = [
        "c", "cpp", "cs", "css", "dart", "diff", "erl", "ex", "go", "h", "hs", "html", "ini",
        "java", "js", "json", "julia", "kt", "less", "lisp", "lua", "md", "php", "pl", "py", "rb",
        "rs", "sass", "scala", "scss", "sh", "sql", "swift", "toml", "ts", "txt", "xml", "yml",
    ];
    // Seed languages the engine's bundled catalog has no syntax for; these
    // are the only ones allowed to miss.
    let not_bundled = [
        "dart", "elixir", "ini", "jl", "kotlin", "less", "sass", "scss", "swift", "toml",
        "typescript",
    ];

    for ext in seed_exts {
        let lang = parse_extension(ext).unwrap();
        match highlight("x", lang) {
            Ok(html) => {
                assert!(!not_bundled.contains(&lang), "unexpected syntax for {lang:?}");
                assert!(html.contains("id=\"L1\""));
            }
            Err(HighlightError::LanguageNotFound(_)) => {
                assert!(
                    not_bundled.contains(&lang),
                    "seed language {lang:?} (ext {ext:?}) did not resolve"
                );
            }
            Err(other) => panic!("unexpected error for {lang:?}: {other}"),
        }
    }
}

#[test]
fn test_highlighted_markup_present() {
    let html = highlight("fn main() {}", "rust").unwrap();
    // Styled output, not just escaped text.
    assert!(html.contains("<span style="));
    assert!(html.contains("main"));
}
