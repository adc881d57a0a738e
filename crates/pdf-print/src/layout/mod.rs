//! Layout calculation modules
//!
//! This module handles the geometric side of print output:
//! - Page descriptors for single sheets and poster tiles
//! - The layout-only poster preview grid

mod grid;
mod tiling;
mod types;

pub use grid::*;
pub use tiling::*;
pub use types::*;
