//! Parser and terminal renderer for SimpleIcon files, a tiny text format for
//! monochrome images.
//!
//! An icon file packs four `;;` separated fields into a single record:
//!
//! ```text
//! <name>;;<version>;;<width>x<height>;;<pixels...>
//! ```
//!
//! The pixel body is a flat character run, `'1'` for a set pixel and anything
//! else for an unset one. Version 1 stores the run row by row; version 2
//! stores vertical bands of up to 8 columns, each band written row by row.
//!
//! ```rust
//! use icon_parser::parser::icon::IconDocument;
//!
//! let icon = IconDocument::parse("arrow;;1;;3x2;;010111").unwrap();
//!
//! assert_eq!(icon.render(), vec![" x ", "xxx"]);
//! ```

#[cfg(test)]
#[macro_use]
extern crate test_case;

#[macro_use]
extern crate log;

pub mod parser;
pub mod render;
