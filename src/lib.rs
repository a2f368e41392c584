// src/lib.rs
pub mod dict;
pub mod tables;

pub use dict::{KeywordPair, KeywordTable, load_dict, parse_dict};
pub use tables::{save_c2k_header, save_klang_header, write_c2k_header, write_klang_header};
