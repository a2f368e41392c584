//! Parser behavior over the dictionary format: comments, blanks, short and
//! over-long lines, duplicate keys, and preservation of declaration order.

use std::path::Path;

use klang_keywords::{KeywordTable, load_dict, parse_dict};

fn parsed(src: &str) -> KeywordTable {
    parse_dict(src.as_bytes()).expect("in-memory parse cannot fail")
}

fn as_tuples(table: &KeywordTable) -> Vec<(&str, &str)> {
    table
        .iter()
        .map(|p| (p.k_keyword.as_str(), p.c_keyword.as_str()))
        .collect()
}

#[test]
fn preserves_declaration_order() {
    let t = parsed("chugh if\ntaH while\nvay' for\n");
    assert_eq!(
        as_tuples(&t),
        vec![("chugh", "if"), ("taH", "while"), ("vay'", "for")]
    );
}

#[test]
fn skips_comments_and_blanks() {
    let src = "# header comment\n\nchugh if\n   \n   # indented comment\ntaH while\n";
    let t = parsed(src);
    assert_eq!(as_tuples(&t), vec![("chugh", "if"), ("taH", "while")]);
}

#[test]
fn skips_single_field_lines() {
    let t = parsed("orphan\nchugh if\nlonely\n");
    assert_eq!(as_tuples(&t), vec![("chugh", "if")], "short lines must be dropped, not errors");
}

#[test]
fn ignores_trailing_notes() {
    let t = parsed("wa'DIch main every klang program starts here\n");
    assert_eq!(as_tuples(&t), vec![("wa'DIch", "main")]);
}

#[test]
fn splits_on_whitespace_runs() {
    let t = parsed("mI'\t\t int\nQIch    \t char\n");
    assert_eq!(as_tuples(&t), vec![("mI'", "int"), ("QIch", "char")]);
}

#[test]
fn keeps_duplicate_keys_in_order() {
    // No uniqueness contract: the downstream scan decides which entry wins.
    let t = parsed("mev break\nmev exit\n");
    assert_eq!(as_tuples(&t), vec![("mev", "break"), ("mev", "exit")]);
}

#[test]
fn empty_input_yields_empty_table() {
    let t = parsed("");
    assert!(t.is_empty());
    assert_eq!(t.len(), 0);
}

#[test]
fn missing_file_is_an_error() {
    let err = load_dict(Path::new("/nonexistent/keywords.dict"));
    assert!(err.is_err(), "unreadable dictionary must surface an io error");
}

#[test]
fn shipped_dictionary_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("keywords.dict");
    let t = load_dict(&path).expect("keywords.dict should load");
    assert!(t.len() >= 90, "expected the full klang keyword set, got {}", t.len());
    let first = &t.pairs()[0];
    assert_eq!((first.k_keyword.as_str(), first.c_keyword.as_str()), ("mI'", "int"));
    let last = t.pairs().last().unwrap();
    assert_eq!((last.k_keyword.as_str(), last.c_keyword.as_str()), ("wa'DIch", "main"));
}
