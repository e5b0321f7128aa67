#![forbid(unsafe_code)]

//! Annotate SVG fill colors with computed dark-mode counterparts.
//!
//! The core is a pure text rewrite: [`annotate`] takes raw SVG source and
//! returns it with every `fill="…"` attribute followed by a `fill-dark="…"`
//! companion carrying the inverted color, and with dark-mode-incompatible
//! `<style>` blocks stripped. It is a best-effort textual transformation, not
//! an SVG parser; malformed markup passes through untouched.
//!
//! File and directory plumbing lives in [`batch`], kept apart so the rewrite
//! itself never touches the file system.

pub mod annotate;
pub mod batch;
pub mod color;
pub mod error;

pub use annotate::{Annotator, annotate};
pub use color::{NamedColorMap, invert_color};
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
