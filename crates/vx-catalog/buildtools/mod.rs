// Build-time catalog generation module
//
// This module is used ONLY during compilation to:
// 1. Parse the SQL language seed
// 2. Generate Rust code with embedded static data
//
// The runtime crate never touches the seed file or the parsing logic.

pub mod codegen;
pub mod seed;

pub use codegen::generate_catalog_code;
pub use seed::parse_seed;
