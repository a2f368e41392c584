// src/tables/headers.rs
// The two concrete header emitters. Framing text is byte-fixed; only the
// record block between preamble and postamble depends on the dictionary.

use std::{
    cmp::Ordering,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use super::render::write_records;
use crate::dict::{KeywordPair, KeywordTable};

// -------------------- keywords.h (K -> C, klang) --------------------

const KLANG_PREAMBLE: &str = "\
/* Auto-generated from keywords.dict - DO NOT EDIT MANUALLY */
/* K to C keyword mappings for klang */

#ifndef KEYWORDS_H
#define KEYWORDS_H

/* Keyword mapping structure */
typedef struct {
    const char *k_keyword;
    const char *c_keyword;
} KeywordMap;

/* Keyword mappings from K to C */
static const KeywordMap keywords[] = {
";

const KLANG_POSTAMBLE: &str = "\
};

#endif /* KEYWORDS_H */
";

/// Emit the klang header: records in dictionary order, K token first.
pub fn write_klang_header<W: Write>(w: &mut W, table: &KeywordTable) -> io::Result<()> {
    w.write_all(KLANG_PREAMBLE.as_bytes())?;
    write_records(
        w,
        table.pairs(),
        |p| (p.k_keyword.as_str(), p.c_keyword.as_str()),
        None,
    )?;
    w.write_all(KLANG_POSTAMBLE.as_bytes())
}

// -------------------- keywords.nac (C -> K, c2k) --------------------

const C2K_PREAMBLE: &str = "\
/* Auto-generated from keywords.dict - DO NOT EDIT MANUALLY */
/* C to K keyword mappings for c2k */
/* nac = nach (Klingon for \"header\") */
/* This file uses C syntax so it works in both c2k.k and c2k.c */

/* Keyword mapping structure */
typedef struct {
    const char *c_keyword;
    const char *k_keyword;
} KeywordMap;

/* Keyword mappings from C to K (reverse of klang) */
/* Ordered by length (longest first) for proper matching */
static const KeywordMap keywords[] = {
";

const C2K_POSTAMBLE: &str = "\
};
";

// Longest C token first; equal lengths fall through to the stable sort's
// dictionary order. Length is counted in characters, not bytes.
fn by_c_len_desc(a: &KeywordPair, b: &KeywordPair) -> Ordering {
    b.c_keyword.chars().count().cmp(&a.c_keyword.chars().count())
}

/// Emit the c2k header: records inverted (C token first) and ordered longest
/// C token first so the downstream scanner never matches a short keyword
/// that prefixes a longer one.
pub fn write_c2k_header<W: Write>(w: &mut W, table: &KeywordTable) -> io::Result<()> {
    w.write_all(C2K_PREAMBLE.as_bytes())?;
    write_records(
        w,
        table.pairs(),
        |p| (p.c_keyword.as_str(), p.k_keyword.as_str()),
        Some(by_c_len_desc),
    )?;
    w.write_all(C2K_POSTAMBLE.as_bytes())
}

// -------------------- path-based save --------------------

/// Write keywords.h, replacing any previous file.
pub fn save_klang_header(path: &Path, table: &KeywordTable) -> io::Result<()> {
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    write_klang_header(&mut w, table)?;
    w.flush()
}

/// Write keywords.nac, replacing any previous file.
pub fn save_c2k_header(path: &Path, table: &KeywordTable) -> io::Result<()> {
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    write_c2k_header(&mut w, table)?;
    w.flush()
}
