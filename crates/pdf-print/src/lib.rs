pub mod compose;
pub mod constants;
pub mod layout;
pub mod marks;
mod options;
pub mod raster;
pub mod render;
mod specs;
mod stats;
mod types;

pub use compose::{
    compose_poster, compose_single_sheet, generate_poster_pdf, generate_single_sheet_pdf,
    load_image, save_pdf,
};
pub use layout::{
    PosterDimensions, SeamMarkers, SheetPosition, calculate_poster_dimensions, format_feet_inches,
    format_poster_size, generate_sheet_positions,
};
pub use marks::{Axis, LineSegment, crop_mark_segments};
pub use options::*;
pub use raster::{ImageFormat, detect_image_format};
pub use specs::{PrintSpecs, compute_print_specs};
pub use stats::calculate_poster_statistics;
pub use types::*;
