//! Name tables from C/C++ enum declarations.
//!
//! Reads an enum body such as
//!
//! ```text
//! enum Flags {
//!     FLAG_A = 1,
//!     FLAG_B = 2,
//!     // reserved
//! }
//! ```
//!
//! and produces initializer lines for a string lookup table:
//!
//! ```text
//! //enum Flags {
//! { "FLAG_A", FLAG_A },
//! { "FLAG_B", FLAG_B },
//! ```
//!
//! Matching is surface-level: each line is cut at its first `=` and the
//! trimmed remainder is classified by prefix. This is not a C parser.

mod error;
mod line;
mod table;

pub use error::FlagmapError;
pub use line::{LineKind, classify, token};
pub use table::{Table, TableStats, generate_table, split_lines, write_table};

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "enum.raw";

/// Read all of `reader` and generate its table.
///
/// `origin` is only used to label errors.
pub fn map_reader<R: Read>(mut reader: R, origin: &Path) -> Result<Table, FlagmapError> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(|source| FlagmapError::ReadFailed {
            path: origin.to_path_buf(),
            source,
        })?;

    Ok(generate_table(&source)?)
}

/// Open `path`, read it fully, then generate its table.
///
/// The whole input is read before anything is rendered, so a failure never
/// yields a partial table.
pub fn map_file(path: impl AsRef<Path>) -> Result<Table, FlagmapError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening input");

    let file = File::open(path).map_err(|source| FlagmapError::InputUnavailable {
        path: PathBuf::from(path),
        source,
    })?;

    map_reader(file, path)
}
