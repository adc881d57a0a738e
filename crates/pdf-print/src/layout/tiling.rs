//! Page geometry for single sheets and poster tiles
//!
//! A poster is drawn as if on one canvas of `cols × rows` trimmed sheets.
//! Every tile page draws the whole image, shifted so that only its own
//! window of the canvas falls inside the page box.

use crate::constants::{
    TILE_LABEL_FONT_SIZE, TILE_LABEL_GRAY, TILE_LABEL_INSET_X, TILE_LABEL_INSET_Y,
};
use crate::marks::crop_mark_segments;
use crate::options::PrintConstants;
use crate::specs::PrintSpecs;
use crate::types::GridShape;

use super::{GridPosition, PageDescriptor, PageLabel, Rect};

// =============================================================================
// Single Sheet
// =============================================================================

/// Describe a single full-bleed page: the image stretched over the whole
/// page, bleed included.
pub fn single_sheet_page(specs: &PrintSpecs, constants: &PrintConstants) -> PageDescriptor {
    PageDescriptor {
        cell: GridPosition::new(0, 0),
        width: specs.total_width,
        height: specs.total_height,
        bleed: specs.bleed_pts,
        image_rect: specs.bleed_box(),
        crop_marks: crop_mark_segments(specs, constants).to_vec(),
        label: None,
    }
}

// =============================================================================
// Poster Tiles
// =============================================================================

/// Size of the poster canvas (all trimmed sheets side by side), in points
pub fn poster_canvas_size(specs: &PrintSpecs, grid: GridShape) -> (f32, f32) {
    (
        specs.trim_width * grid.cols as f32,
        specs.trim_height * grid.rows as f32,
    )
}

/// The part of the poster canvas a cell prints, canvas coordinates with
/// the origin at the bottom-left.
///
/// Row 0 is the visual top row, so it maps to the highest y.
pub fn tile_window(cell: GridPosition, specs: &PrintSpecs, grid: GridShape) -> Rect {
    let section_width = specs.trim_width;
    let section_height = specs.trim_height;
    let (_, canvas_height) = poster_canvas_size(specs, grid);

    Rect::new(
        cell.col as f32 * section_width,
        canvas_height - (cell.row + 1) as f32 * section_height,
        section_width,
        section_height,
    )
}

/// Build the page for one poster cell.
pub fn build_page(
    cell: GridPosition,
    specs: &PrintSpecs,
    grid: GridShape,
    constants: &PrintConstants,
) -> PageDescriptor {
    let bleed = specs.bleed_pts;
    let (canvas_width, canvas_height) = poster_canvas_size(specs, grid);
    let window = tile_window(cell, specs, grid);

    let offset_x = -window.x + bleed;
    let offset_y = -window.y + bleed;

    PageDescriptor {
        cell,
        width: specs.total_width,
        height: specs.total_height,
        bleed,
        image_rect: Rect::new(
            offset_x,
            offset_y,
            canvas_width + 2.0 * bleed,
            canvas_height + 2.0 * bleed,
        ),
        crop_marks: crop_mark_segments(specs, constants).to_vec(),
        label: Some(tile_label(cell, specs)),
    }
}

/// Build every page of a poster, row-major.
pub fn poster_pages(
    specs: &PrintSpecs,
    grid: GridShape,
    constants: &PrintConstants,
) -> Vec<PageDescriptor> {
    debug_assert!(grid.rows >= 1 && grid.cols >= 1, "empty poster grid");

    (0..grid.rows)
        .flat_map(|row| (0..grid.cols).map(move |col| GridPosition::new(row, col)))
        .map(|cell| build_page(cell, specs, grid, constants))
        .collect()
}

/// "row-col" label, 1-based, near the bottom-right corner
fn tile_label(cell: GridPosition, specs: &PrintSpecs) -> PageLabel {
    PageLabel {
        text: format!("{}-{}", cell.row + 1, cell.col + 1),
        x: specs.total_width - TILE_LABEL_INSET_X,
        y: TILE_LABEL_INSET_Y,
        font_size: TILE_LABEL_FONT_SIZE,
        gray: TILE_LABEL_GRAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::compute_print_specs;
    use crate::types::PrintSize;

    fn letter_specs() -> PrintSpecs {
        compute_print_specs(
            &PrintSize::new("8.5x11", 8.5, 11.0),
            &PrintConstants::default(),
        )
    }

    #[test]
    fn test_top_row_shows_top_of_canvas() {
        let specs = letter_specs();
        let grid = GridShape::new(2, 1);

        let top = tile_window(GridPosition::new(0, 0), &specs, grid);
        let bottom = tile_window(GridPosition::new(1, 0), &specs, grid);

        assert_eq!(top.y, specs.trim_height);
        assert_eq!(bottom.y, 0.0);
    }

    #[test]
    fn test_label_is_one_based() {
        let specs = letter_specs();
        let page = build_page(
            GridPosition::new(1, 2),
            &specs,
            GridShape::new(2, 3),
            &PrintConstants::default(),
        );
        let label = page.label.expect("poster pages carry a label");

        assert_eq!(label.text, "2-3");
        assert!(label.x > specs.total_width / 2.0);
        assert!(label.y < specs.total_height / 2.0);
    }
}
