//! Pattern tables and the phrase scanner.
//!
//! Both the type inferencer and the pattern compiler consume the same
//! first-fit scan:
//!
//! ```
//! use snipgen_core::pattern::{scan, PatternTable};
//!
//! let table = PatternTable::primary();
//! let result = scan("I have 3 apples", &table);
//! let values: Vec<_> = result.placeholders().map(|m| m.text).collect();
//! assert_eq!(values, vec!["3"]);
//! ```

mod scanner;
mod table;
mod types;

pub use scanner::{scan, ScanMatch, ScanResult};
pub use table::{PatternEntry, PatternSpec, PatternTable, PatternTables};
pub use types::SemanticType;
