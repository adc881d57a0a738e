//! Crop mark rendering for print-ready pages
//!
//! Crop marks sit in the bleed band at each corner, on the extension of
//! the trim lines, and stop short of the trim by a fixed gap so the cut
//! line itself stays unmarked.

use crate::options::PrintConstants;
use crate::specs::PrintSpecs;

/// Direction of an axis-aligned line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// An axis-aligned line in page coordinates (points, origin bottom-left)
///
/// The axis is stored rather than derived, since marks may be zero length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub axis: Axis,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    pub fn horizontal(x1: f32, x2: f32, y: f32) -> Self {
        Self {
            axis: Axis::Horizontal,
            x1,
            y1: y,
            x2,
            y2: y,
        }
    }

    pub fn vertical(x: f32, y1: f32, y2: f32) -> Self {
        Self {
            axis: Axis::Vertical,
            x1: x,
            y1,
            x2: x,
            y2,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.axis == Axis::Horizontal
    }

    pub fn is_vertical(&self) -> bool {
        self.axis == Axis::Vertical
    }

    /// (min, max) of the x coordinates
    pub fn x_range(&self) -> (f32, f32) {
        (self.x1.min(self.x2), self.x1.max(self.x2))
    }

    /// (min, max) of the y coordinates
    pub fn y_range(&self) -> (f32, f32) {
        (self.y1.min(self.y2), self.y1.max(self.y2))
    }
}

/// Compute the eight crop mark segments for a page.
///
/// Order: top-left, top-right, bottom-left, bottom-right; each corner
/// gives its horizontal mark then its vertical mark.
///
/// The ranges are asymmetric. Near-side marks (left, bottom) start at the
/// page edge and stop `gap` short of the trim line. Far-side marks (right,
/// top) start on the trim line and run `mark_len` outward, so once the
/// bleed is wider than the gap they touch the cut line.
pub fn crop_mark_segments(specs: &PrintSpecs, constants: &PrintConstants) -> [LineSegment; 8] {
    let bleed = specs.bleed_pts;
    let mark_len = (bleed - constants.crop_mark_gap_pt).max(0.0);

    // Trim lines
    let left = bleed;
    let bottom = bleed;
    let right = specs.total_width - bleed;
    let top = specs.total_height - bleed;

    [
        // Top-left
        LineSegment::horizontal(0.0, mark_len, top),
        LineSegment::vertical(left, top, top + mark_len),
        // Top-right
        LineSegment::horizontal(right, right + mark_len, top),
        LineSegment::vertical(right, top, top + mark_len),
        // Bottom-left
        LineSegment::horizontal(0.0, mark_len, bottom),
        LineSegment::vertical(left, 0.0, mark_len),
        // Bottom-right
        LineSegment::horizontal(right, right + mark_len, bottom),
        LineSegment::vertical(right, 0.0, mark_len),
    ]
}

/// Render line segments as crop marks in PDF content stream operators
pub fn generate_crop_marks(segments: &[LineSegment], constants: &PrintConstants) -> String {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str("0 0 0 RG\n");
    ops.push_str(&format!("{} w\n", constants.crop_mark_width_pt));
    ops.push_str("[] 0 d\n");

    for seg in segments {
        ops.push_str(&format!(
            "{} {} m {} {} l S\n",
            seg.x1, seg.y1, seg.x2, seg.y2
        ));
    }

    ops.push_str("Q\n");

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::compute_print_specs;
    use crate::types::PrintSize;

    #[test]
    fn test_marks_have_length_with_wider_bleed() {
        let constants = PrintConstants {
            bleed_inches: 0.25,
            ..Default::default()
        };
        let specs = compute_print_specs(&PrintSize::new("4x6", 4.0, 6.0), &constants);
        let segments = crop_mark_segments(&specs, &constants);

        // 18pt bleed, 9pt gap
        assert_eq!(segments[0], LineSegment::horizontal(0.0, 9.0, 450.0));
        assert_eq!(segments[5], LineSegment::vertical(18.0, 0.0, 9.0));
    }

    #[test]
    fn test_far_side_marks_start_on_trim_line() {
        let constants = PrintConstants {
            bleed_inches: 0.25,
            ..Default::default()
        };
        let specs = compute_print_specs(&PrintSize::new("4x6", 4.0, 6.0), &constants);
        let segments = crop_mark_segments(&specs, &constants);
        let right = specs.total_width - 18.0;
        let top = specs.total_height - 18.0;

        // Top-right pair touches the trim corner; bottom-left stops 9pt short
        assert_eq!(segments[2], LineSegment::horizontal(right, right + 9.0, top));
        assert_eq!(segments[3], LineSegment::vertical(right, top, top + 9.0));
        assert_eq!(segments[4].x_range(), (0.0, 9.0));
        assert!(segments[4].x_range().1 < specs.bleed_pts);
    }

    #[test]
    fn test_ops_wrapped_in_graphics_state() {
        let constants = PrintConstants::default();
        let specs = compute_print_specs(&PrintSize::new("4x6", 4.0, 6.0), &constants);
        let ops = generate_crop_marks(&crop_mark_segments(&specs, &constants), &constants);

        assert!(ops.starts_with("q\n"));
        assert!(ops.ends_with("Q\n"));
        assert!(ops.contains("0.5 w\n"));
        assert_eq!(ops.matches(" l S\n").count(), 8);
    }
}
