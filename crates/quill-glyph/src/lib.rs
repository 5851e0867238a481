//! Quill Glyph - block-letter stroke paths
//!
//! This crate provides:
//! - A static catalog of single-stroke block letters (`A`-`Z` and space)
//! - Per-glyph metrics at an arbitrary text height
//! - Text filtering and total text width measurement
//!
//! # Example
//!
//! ```
//! use quill_glyph::{Glyph, text_width};
//!
//! let l = Glyph::new('l').unwrap();
//! assert_eq!(l.width_at(50.0), 37.5);
//!
//! // "L" + spacing + "L", spacing defaults to 0.3 * height
//! assert_eq!(text_width("LL", 50.0, None), 37.5 * 2.0 + 15.0);
//! ```

mod catalog;
mod glyph;
mod metrics;

pub use catalog::*;
pub use glyph::*;
pub use metrics::*;
