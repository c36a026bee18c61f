#![warn(clippy::all, clippy::cargo)]

mod batch;
mod codegen;
mod grid;
mod pattern;
mod utils;

pub use batch::{Batch, PatternSource, SkippedSource};
pub use codegen::{assemble, is_identifier, module_name, GeneratedModule, ModuleDescriptor};
pub use grid::{Grid, Padding};
pub use pattern::{PatternDescriptor, RunToken, SourceFormat};
pub use utils::{parse_plaintext, parse_rle, Config, ConvertError};

/// Side length of the square field every generated module addresses.
pub const FIELD: usize = 50;
/// Width of each coordinate input, enough to address `0..FIELD`.
pub const COORD_BITS: u32 = 6;
