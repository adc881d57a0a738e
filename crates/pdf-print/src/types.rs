use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("Unsupported image format: use JPEG or PNG")]
    UnsupportedImageFormat,
    #[error("Order {0} has no print size")]
    MissingPrintSize(String),
    #[error("Unknown print size: {0}")]
    UnknownPrintSize(String),
    #[error("Unknown poster configuration: {0}")]
    UnknownPosterConfig(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PrintError>;

/// Standard print sizes offered by the storefront: (name, width", height")
const STANDARD_PRINT_SIZES: &[(&str, f32, f32)] = &[
    ("4x6", 4.0, 6.0),
    ("5x7", 5.0, 7.0),
    ("8x10", 8.0, 10.0),
    ("8.5x11", 8.5, 11.0),
    ("11x14", 11.0, 14.0),
    ("11x17", 11.0, 17.0),
    ("12x18", 12.0, 18.0),
    ("16x20", 16.0, 20.0),
    ("18x24", 18.0, 24.0),
    ("20x30", 20.0, 30.0),
    ("24x36", 24.0, 36.0),
];

/// A named physical sheet size
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintSize {
    /// Identifier such as "4x6"
    pub name: String,
    pub width_inches: f32,
    pub height_inches: f32,
}

impl PrintSize {
    pub fn new(name: impl Into<String>, width_inches: f32, height_inches: f32) -> Self {
        Self {
            name: name.into(),
            width_inches,
            height_inches,
        }
    }

    /// Look up a size from the standard catalog
    pub fn standard(name: &str) -> Option<Self> {
        STANDARD_PRINT_SIZES
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|&(n, w, h)| Self::new(n, w, h))
    }

    /// All sizes in the standard catalog, smallest first
    pub fn catalog() -> Vec<Self> {
        STANDARD_PRINT_SIZES
            .iter()
            .map(|&(n, w, h)| Self::new(n, w, h))
            .collect()
    }
}

impl FromStr for PrintSize {
    type Err = PrintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::standard(s).ok_or_else(|| PrintError::UnknownPrintSize(s.to_string()))
    }
}

impl fmt::Display for PrintSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}\" x {}\")",
            self.name, self.width_inches, self.height_inches
        )
    }
}

/// The slice of an order the composers need.
///
/// The print size is resolved by whoever looked the order up; it may be
/// absent when the order data is inconsistent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Order code, used as the PDF title
    pub code: String,
    pub print_size: Option<PrintSize>,
}

impl Order {
    pub fn new(code: impl Into<String>, print_size: Option<PrintSize>) -> Self {
        Self {
            code: code.into(),
            print_size,
        }
    }

    /// The resolved print size, or `MissingPrintSize`
    pub fn require_print_size(&self) -> Result<&PrintSize> {
        self.print_size
            .as_ref()
            .ok_or_else(|| PrintError::MissingPrintSize(self.code.clone()))
    }
}

/// Rows and columns of a sheet grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells in the grid
    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }
}

/// A poster layout from the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosterConfig {
    /// Catalog id, read as "{rows}x{cols}"
    pub id: &'static str,
    pub rows: usize,
    pub cols: usize,
}

/// Every poster layout customers can order
pub const POSTER_CONFIGS: [PosterConfig; 8] = [
    PosterConfig::new("2x1", 2, 1),
    PosterConfig::new("1x2", 1, 2),
    PosterConfig::new("2x2", 2, 2),
    PosterConfig::new("3x2", 3, 2),
    PosterConfig::new("2x3", 2, 3),
    PosterConfig::new("3x3", 3, 3),
    PosterConfig::new("4x3", 4, 3),
    PosterConfig::new("3x4", 3, 4),
];

impl PosterConfig {
    const fn new(id: &'static str, rows: usize, cols: usize) -> Self {
        Self { id, rows, cols }
    }

    /// Find a layout in the catalog by id
    pub fn find(id: &str) -> Option<Self> {
        POSTER_CONFIGS.iter().copied().find(|c| c.id == id)
    }

    pub fn sheet_count(self) -> usize {
        self.rows * self.cols
    }

    pub fn grid(self) -> GridShape {
        GridShape::new(self.rows, self.cols)
    }
}

impl FromStr for PosterConfig {
    type Err = PrintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::find(s).ok_or_else(|| PrintError::UnknownPosterConfig(s.to_string()))
    }
}

impl fmt::Display for PosterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} rows x {} cols, {} sheets)",
            self.id,
            self.rows,
            self.cols,
            self.sheet_count()
        )
    }
}

/// Statistics about a poster order
#[derive(Debug, Clone, PartialEq)]
pub struct PosterStatistics {
    pub rows: usize,
    pub cols: usize,
    /// Number of physical sheets (= output pages)
    pub sheets: usize,
    /// Page size including bleed, in points
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    /// Size of the printed image canvas across all trimmed sheets (inches)
    pub printed_width_inches: f32,
    pub printed_height_inches: f32,
    /// Assembled size once sheets are overlapped and glued
    pub assembled: crate::PosterDimensions,
}
