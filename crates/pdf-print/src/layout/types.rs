//! Layout data types
//!
//! These types sit between the geometry calculations and PDF rendering:
//! a [`PageDescriptor`] holds everything needed to draw one sheet.

use crate::marks::LineSegment;

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether the two rectangles share interior area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

/// Small text printed on a page for assembly guidance
#[derive(Debug, Clone, PartialEq)]
pub struct PageLabel {
    pub text: String,
    /// Baseline start, page coordinates
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    /// Fill gray level (0 = black)
    pub gray: f32,
}

/// Everything needed to render one output page
#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    /// Grid cell this page prints (0,0 for single sheets)
    pub cell: GridPosition,
    /// Page size in points (bleed included)
    pub width: f32,
    pub height: f32,
    /// Bleed width in points, for the TrimBox
    pub bleed: f32,
    /// Where the source image is drawn, page coordinates.
    /// May extend past the page; the page box clips it.
    pub image_rect: Rect,
    pub crop_marks: Vec<LineSegment>,
    pub label: Option<PageLabel>,
}
