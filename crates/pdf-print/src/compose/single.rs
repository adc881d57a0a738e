//! Single-sheet composition

use crate::layout::single_sheet_page;
use crate::options::ComposeOptions;
use crate::raster::{ImageFormat, RasterImage, detect_image_format};
use crate::render::{DocumentBuilder, DocumentMetadata, create_image_xobject, render_page};
use crate::specs::compute_print_specs;
use crate::types::*;
use chrono::Utc;
use lopdf::Document;

/// Compose a one-page, full-bleed document for an order.
pub fn compose_single_sheet(
    image: &[u8],
    order: &Order,
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
    let page = single_sheet_page(&specs, constants);

    log::debug!(
        "single sheet {} for order {}: {}x{}pt, image {}x{}px",
        size.name,
        order.code,
        specs.total_width,
        specs.total_height,
        raster.width,
        raster.height
    );

    let mut builder = DocumentBuilder::new();
    let parent = builder.pages_id();
    let output = builder.document_mut();
    let image_id = create_image_xobject(output, &raster);
    let page_id = render_page(output, &page, parent, image_id, None, constants);
    builder.push_page(page_id);

    Ok(builder.finish(&DocumentMetadata {
        title: order.code.clone(),
        subject: size.name.clone(),
        producer: options.producer.clone(),
        creation_date: Utc::now(),
    }))
}
