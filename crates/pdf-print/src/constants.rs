//! Shared constants for print-ready PDF generation
//!
//! This module centralizes the unit conversions and default prepress
//! measurements used throughout the crate. The defaults here feed
//! [`PrintConstants`](crate::PrintConstants); nothing reads them as
//! global configuration at render time.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch (PDF user space unit)
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Convert points to inches
#[inline]
pub fn pt_to_in(pt: f32) -> f32 {
    pt / POINTS_PER_INCH
}

// =============================================================================
// Prepress Margins
// =============================================================================

/// Bleed beyond the trim edge (inches)
pub const DEFAULT_BLEED_INCHES: f32 = 0.125;

/// Safe-zone inset from the trim edge (inches)
pub const DEFAULT_SAFE_ZONE_INCHES: f32 = 0.25;

// =============================================================================
// Printer's Marks
// =============================================================================

/// Gap left between a crop mark and the trim line (points)
pub const DEFAULT_CROP_MARK_GAP_PT: f32 = 9.0;

/// Line width for crop marks (points)
pub const DEFAULT_CROP_MARK_WIDTH_PT: f32 = 0.5;

// =============================================================================
// Poster Tile Labels
// =============================================================================

/// Font size for the row-col label on poster tiles (points)
pub const TILE_LABEL_FONT_SIZE: f32 = 8.0;

/// Distance of the label baseline start from the right page edge (points)
pub const TILE_LABEL_INSET_X: f32 = 30.0;

/// Distance of the label baseline from the bottom page edge (points)
pub const TILE_LABEL_INSET_Y: f32 = 15.0;

/// Gray level for tile labels (0 = black, 1 = white)
pub const TILE_LABEL_GRAY: f32 = 0.6;

// =============================================================================
// Poster Assembly
// =============================================================================

/// Overlap between neighbouring poster sheets when glued together (inches)
pub const DEFAULT_OVERLAP_INCHES: f32 = 0.5;

/// Inches per foot, for assembled-size display
pub const INCHES_PER_FOOT: f32 = 12.0;

// =============================================================================
// Document Metadata
// =============================================================================

/// Default PDF Producer entry
pub const DEFAULT_PRODUCER: &str = "pdf-print";

/// PDF version written for generated documents
pub const PDF_VERSION: &str = "1.7";
