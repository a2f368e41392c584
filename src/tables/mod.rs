// src/tables/mod.rs
pub mod headers;
pub mod render;

// Re-exports to keep the external API unchanged.
pub use headers::{save_c2k_header, save_klang_header, write_c2k_header, write_klang_header};
