//! Print-ready PDF composition
//!
//! This module orchestrates document generation:
//! 1. Classify and read the source image
//! 2. Compute page geometry for the order's print size
//! 3. Render one page per sheet with crop marks
//! 4. Serialize the document to bytes

mod io;
mod poster;
mod single;

pub use io::{load_image, save_pdf};
pub use poster::compose_poster;
pub use single::compose_single_sheet;

use crate::options::ComposeOptions;
use crate::render::serialize_pdf;
use crate::types::*;

/// Generate a single-sheet PDF for an order
pub async fn generate_single_sheet_pdf(
    image: &[u8],
    order: &Order,
    options: &ComposeOptions,
) -> Result<Vec<u8>> {
    let image = image.to_vec();
    let order = order.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || {
        let doc = compose_single_sheet(&image, &order, &options)?;
        serialize_pdf(doc)
    })
    .await?
}

/// Generate a poster PDF tiled over `grid`
pub async fn generate_poster_pdf(
    image: &[u8],
    order: &Order,
    grid: GridShape,
    options: &ComposeOptions,
) -> Result<Vec<u8>> {
    let image = image.to_vec();
    let order = order.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || {
        let doc = compose_poster(&image, &order, grid, &options)?;
        serialize_pdf(doc)
    })
    .await?
}
