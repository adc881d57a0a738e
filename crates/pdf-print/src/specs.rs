//! Print spec calculation
//!
//! Derives the point dimensions of a full-bleed page from a physical
//! print size.

use crate::layout::Rect;
use crate::options::PrintConstants;
use crate::types::PrintSize;

/// Page geometry for one physical sheet, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintSpecs {
    pub bleed_pts: f32,
    pub safe_zone_pts: f32,
    /// Finished size after cutting
    pub trim_width: f32,
    pub trim_height: f32,
    /// Page size including bleed on all four sides
    pub total_width: f32,
    pub total_height: f32,
}

impl PrintSpecs {
    /// The trim rectangle in page coordinates
    pub fn trim_box(&self) -> Rect {
        Rect::new(
            self.bleed_pts,
            self.bleed_pts,
            self.trim_width,
            self.trim_height,
        )
    }

    /// The whole page, bleed included
    pub fn bleed_box(&self) -> Rect {
        Rect::new(0.0, 0.0, self.total_width, self.total_height)
    }

    /// Area inside the trim where important content is safe from cutting drift
    pub fn safe_area(&self) -> Rect {
        let inset = self.bleed_pts + self.safe_zone_pts;
        Rect::new(
            inset,
            inset,
            (self.trim_width - 2.0 * self.safe_zone_pts).max(0.0),
            (self.trim_height - 2.0 * self.safe_zone_pts).max(0.0),
        )
    }
}

/// Compute page geometry for a print size.
///
/// The size must have positive dimensions; callers resolve it before
/// calling.
pub fn compute_print_specs(size: &PrintSize, constants: &PrintConstants) -> PrintSpecs {
    let bleed_pts = constants.bleed_pts();
    let trim_width = constants.to_points(size.width_inches);
    let trim_height = constants.to_points(size.height_inches);

    PrintSpecs {
        bleed_pts,
        safe_zone_pts: constants.safe_zone_pts(),
        trim_width,
        trim_height,
        total_width: trim_width + 2.0 * bleed_pts,
        total_height: trim_height + 2.0 * bleed_pts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_area_inside_trim() {
        let specs = compute_print_specs(
            &PrintSize::new("5x7", 5.0, 7.0),
            &PrintConstants::default(),
        );
        let trim = specs.trim_box();
        let safe = specs.safe_area();

        assert_eq!(safe.x, 27.0);
        assert_eq!(safe.y, 27.0);
        assert_eq!(safe.width, 360.0 - 36.0);
        assert_eq!(safe.height, 504.0 - 36.0);
        assert!(safe.right() <= trim.right());
        assert!(safe.top() <= trim.top());
    }

    #[test]
    fn test_trim_box_centered_in_page() {
        let specs = compute_print_specs(
            &PrintSize::new("4x6", 4.0, 6.0),
            &PrintConstants::default(),
        );
        let trim = specs.trim_box();

        assert_eq!(trim.x, specs.total_width - trim.right());
        assert_eq!(trim.y, specs.total_height - trim.top());
    }
}
