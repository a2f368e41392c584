// src/tables/render.rs
// Shared record renderer behind both generated headers. An emitter is a
// projection (which token lands in which field) plus an optional ordering;
// the serialization itself is identical for both.

use std::{
    cmp::Ordering,
    io::{self, Write},
};

use crate::dict::KeywordPair;

/// Maps a pair onto the (first, second) fields of one emitted record.
pub type Project = fn(&KeywordPair) -> (&str, &str);

/// Record ordering. The sort is `slice::sort_by`, which is stable, so pairs
/// that compare equal keep their dictionary order. keywords.nac relies on
/// that for its tie-break.
pub type Compare = fn(&KeywordPair, &KeywordPair) -> Ordering;

/// Write every record plus the terminating `{NULL, NULL}` sentinel.
pub fn write_records<W: Write>(
    w: &mut W,
    pairs: &[KeywordPair],
    project: Project,
    compare: Option<Compare>,
) -> io::Result<()> {
    let mut ordered: Vec<&KeywordPair> = pairs.iter().collect();
    if let Some(cmp) = compare {
        ordered.sort_by(|a, b| cmp(a, b));
    }
    for pair in ordered {
        let (first, second) = project(pair);
        writeln!(w, "    {{\"{first}\", \"{second}\"}},")?;
    }
    writeln!(w, "    {{NULL, NULL}}")?;
    Ok(())
}
