//! Poster preview grid
//!
//! Layout-only geometry for showing a poster grid on screen. Positions are
//! normalized to the unit square and ignore overlap; the assembled size
//! accounts for the overlap customers glue under each seam. None of this
//! feeds the PDF tiling in [`super::tiling`].

use crate::constants::INCHES_PER_FOOT;
use crate::types::PosterConfig;

// =============================================================================
// Assembled Dimensions
// =============================================================================

/// Physical size of an assembled poster
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PosterDimensions {
    pub total_width_inches: f32,
    pub total_height_inches: f32,
    /// Size of one sheet, unmodified
    pub sheet_width_inches: f32,
    pub sheet_height_inches: f32,
    pub overlap_inches: f32,
}

/// Calculate the assembled size of a poster.
///
/// Each sheet loses `overlap` to its neighbour; one overlap is added back
/// for the outer edge.
pub fn calculate_poster_dimensions(
    config: &PosterConfig,
    sheet_width_inches: f32,
    sheet_height_inches: f32,
    overlap_inches: f32,
) -> PosterDimensions {
    let effective_width = sheet_width_inches - overlap_inches;
    let effective_height = sheet_height_inches - overlap_inches;

    PosterDimensions {
        total_width_inches: effective_width * config.cols as f32 + overlap_inches,
        total_height_inches: effective_height * config.rows as f32 + overlap_inches,
        sheet_width_inches,
        sheet_height_inches,
        overlap_inches,
    }
}

// =============================================================================
// Sheet Positions
// =============================================================================

/// Which edges of a sheet are interior seams needing an alignment marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeamMarkers {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl SeamMarkers {
    pub fn count(&self) -> usize {
        [self.top, self.bottom, self.left, self.right]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// A sheet's place in the preview grid, normalized to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetPosition {
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub markers: SeamMarkers,
}

/// Generate preview positions for every sheet, row-major
pub fn generate_sheet_positions(config: &PosterConfig) -> Vec<SheetPosition> {
    let rows = config.rows;
    let cols = config.cols;
    let width = 1.0 / cols as f32;
    let height = 1.0 / rows as f32;

    let mut positions = Vec::with_capacity(config.sheet_count());
    for row in 0..rows {
        for col in 0..cols {
            positions.push(SheetPosition {
                row,
                col,
                x: col as f32 * width,
                y: row as f32 * height,
                width,
                height,
                markers: SeamMarkers {
                    top: row > 0,
                    bottom: row < rows - 1,
                    left: col > 0,
                    right: col < cols - 1,
                },
            });
        }
    }
    positions
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Format a length in inches as feet and inches, e.g. `3'1"`.
///
/// The feet part is dropped when zero.
pub fn format_feet_inches(total_inches: f32) -> String {
    // Round before splitting so 23.998 carries into the feet
    let total = round_hundredths(total_inches);
    let feet = (total / INCHES_PER_FOOT).floor();
    let inches = round_hundredths(total - feet * INCHES_PER_FOOT);

    if feet > 0.0 {
        format!("{}'{}\"", feet, inches)
    } else {
        format!("{}\"", inches)
    }
}

/// Format an assembled poster size, width first
pub fn format_poster_size(width_inches: f32, height_inches: f32) -> String {
    format!(
        "{} x {}",
        format_feet_inches(width_inches),
        format_feet_inches(height_inches)
    )
}

fn round_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_hundredths_trims_float_noise() {
        assert_eq!(round_hundredths(4.499_999), 4.5);
        assert_eq!(format!("{}", round_hundredths(1.0)), "1");
    }

    #[test]
    fn test_rounding_carries_into_feet() {
        assert_eq!(format_feet_inches(23.998), "2'0\"");
        assert_eq!(format_feet_inches(11.996), "1'0\"");
        assert_eq!(format_feet_inches(11.994), "11.99\"");
    }

    #[test]
    fn test_single_column_has_no_side_seams() {
        let config = PosterConfig::find("2x1").unwrap();
        let positions = generate_sheet_positions(&config);

        assert!(positions.iter().all(|p| !p.markers.left && !p.markers.right));
        assert!(positions[0].markers.bottom);
        assert!(positions[1].markers.top);
    }
}
