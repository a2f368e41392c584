// src/dict/parse.rs
// Line-oriented parser for keywords.dict. Comments, blanks, and lines with
// fewer than two fields are skipped, never rejected.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use super::{KeywordPair, KeywordTable};

/// Parse a dictionary from any buffered source.
///
/// Format, one mapping per line: `<k-keyword> <c-keyword> [free text, ignored]`,
/// fields separated by runs of whitespace. Lines that are blank after trimming
/// or whose first non-whitespace character is `#` produce no pair. A line with
/// a single field is skipped silently; only the read itself can fail.
pub fn parse_dict<R: BufRead>(reader: R) -> io::Result<KeywordTable> {
    let mut pairs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(k), Some(c)) => pairs.push(KeywordPair {
                k_keyword: k.to_string(),
                c_keyword: c.to_string(),
            }),
            _ => {
                // fewer than two fields: tolerated, not an error
                log::debug!("keywords.dict line {}: single field, skipped", idx + 1);
            }
        }
    }
    Ok(KeywordTable::from_pairs(pairs))
}

/// Open and parse a dictionary file.
pub fn load_dict(path: &Path) -> io::Result<KeywordTable> {
    let f = File::open(path)?;
    parse_dict(BufReader::new(f))
}
