//! Poster composition: one image tiled across a grid of sheets

use crate::layout::poster_pages;
use crate::options::ComposeOptions;
use crate::raster::{ImageFormat, RasterImage, detect_image_format};
use crate::render::{
    DocumentBuilder, DocumentMetadata, create_image_xobject, create_label_font, render_page,
};
use crate::specs::compute_print_specs;
use crate::types::*;
use chrono::Utc;
use lopdf::Document;

/// Compose a poster document with one page per grid cell, row-major.
///
/// `grid` must have at least one row and one column; callers take it from
/// the [`PosterConfig`] catalog.
pub fn compose_poster(
    image: &[u8],
    order: &Order,
    grid: GridShape,
    options: &ComposeOptions,
) -> Result<Document> {
    options.validate()?;

    if detect_image_format(image) == ImageFormat::Unsupported {
        return Err(PrintError::UnsupportedImageFormat);
    }
    let size = order.require_print_size().inspect_err(|_| {
        log::warn!("order {} has no print size", order.code);
    })?;
    let raster = RasterImage::from_bytes(image)?;

    let constants = &options.constants;
    let specs = compute_print_specs(size, constants);
    let pages = poster_pages(&specs, grid, constants);

    log::debug!(
        "poster {}x{} of {} for order {}: {} pages of {}x{}pt",
        grid.rows,
        grid.cols,
        size.name,
        order.code,
        pages.len(),
        specs.total_width,
        specs.total_height
    );

    let mut builder = DocumentBuilder::new();
    let parent = builder.pages_id();
    let output = builder.document_mut();

    // One image and one font object, shared by every tile
    let image_id = create_image_xobject(output, &raster);
    let font_id = create_label_font(output);

    let page_ids: Vec<_> = pages
        .iter()
        .map(|page| render_page(output, page, parent, image_id, Some(font_id), constants))
        .collect();
    for page_id in page_ids {
        builder.push_page(page_id);
    }

    Ok(builder.finish(&DocumentMetadata {
        title: format!("{} - Poster {}x{}", order.code, grid.rows, grid.cols),
        subject: format!(
            "Multi-sheet poster: {} sheets of {}",
            grid.cell_count(),
            size.name
        ),
        producer: options.producer.clone(),
        creation_date: Utc::now(),
    }))
}
