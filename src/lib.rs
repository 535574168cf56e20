//! fastint: integer scanning for fixed-column numeric text
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`scanner`]: the allocation-free field scanner (`scan`, `scan_strict`)
//! - [`parser`]: whitespace-separated and fixed-column record readers
//! - [`lexer`]: field tokenization used by the record reader
//! - [`ast`]: spans, source maps and the record error type

pub use fastint_ast as ast;
pub use fastint_lexer as lexer;
pub use fastint_parser as parser;
pub use fastint_scanner as scanner;

pub use fastint_ast::FastIntError;
pub use fastint_parser::{FixedLayout, RecordReader, ScanMode};
pub use fastint_scanner::{ScanError, ScanInt, Scanned, scan, scan_as, scan_strict};
