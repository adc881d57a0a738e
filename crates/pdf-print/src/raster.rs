//! Raster image classification and decoding
//!
//! Only JPEG and PNG are accepted. JPEG data is passed through to the PDF
//! untouched; PNG is decoded to 8-bit samples.

use crate::types::{PrintError, Result};
use image::ImageDecoder;
use image::codecs::jpeg::JpegDecoder;
use std::io::Cursor;

const JPEG_MAGIC: [u8; 2] = [0xFF, 0xD8];
const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

const MARKER_SOS: u8 = 0xDA;
const MARKER_EOI: u8 = 0xD9;
const MARKER_APP14: u8 = 0xEE;

/// Format of an uploaded image, from its leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Unsupported,
}

/// Classify a buffer by magic bytes
pub fn detect_image_format(bytes: &[u8]) -> ImageFormat {
    if bytes.starts_with(&JPEG_MAGIC) {
        ImageFormat::Jpeg
    } else if bytes.starts_with(&PNG_MAGIC) {
        ImageFormat::Png
    } else {
        ImageFormat::Unsupported
    }
}

/// PDF colour space of decoded samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRgb,
    DeviceCmyk,
}

impl ColorSpace {
    pub fn pdf_name(self) -> &'static [u8] {
        match self {
            ColorSpace::DeviceGray => b"DeviceGray",
            ColorSpace::DeviceRgb => b"DeviceRGB",
            ColorSpace::DeviceCmyk => b"DeviceCMYK",
        }
    }
}

/// Sample data ready to become a PDF image XObject
#[derive(Debug, Clone, PartialEq)]
pub enum RasterData {
    /// Baseline/progressive JPEG stream, embedded with /DCTDecode
    Jpeg {
        data: Vec<u8>,
        /// CMYK samples stored inverted, as Adobe applications write them
        inverted: bool,
    },
    /// Uncompressed 8-bit samples plus an optional alpha channel
    Samples {
        pixels: Vec<u8>,
        alpha: Option<Vec<u8>>,
    },
}

/// A decoded (or passed-through) raster image
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub color_space: ColorSpace,
    pub data: RasterData,
}

impl RasterImage {
    /// Read an image buffer, rejecting anything but JPEG and PNG
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match detect_image_format(bytes) {
            ImageFormat::Jpeg => Self::from_jpeg(bytes),
            ImageFormat::Png => Self::from_png(bytes),
            ImageFormat::Unsupported => Err(PrintError::UnsupportedImageFormat),
        }
    }

    fn from_jpeg(bytes: &[u8]) -> Result<Self> {
        // Header only; the compressed data goes into the PDF as-is
        let decoder = JpegDecoder::new(Cursor::new(bytes))?;
        let (width, height) = decoder.dimensions();

        // The decoder reports its output colour type, which is RGB for CMYK
        // input, so the component count comes from the frame header.
        let header = scan_jpeg_header(bytes);
        let components = match header {
            Some(header) => header.components,
            None => decoder.color_type().channel_count(),
        };
        let color_space = match components {
            1 => ColorSpace::DeviceGray,
            4 => ColorSpace::DeviceCmyk,
            _ => ColorSpace::DeviceRgb,
        };
        let inverted =
            color_space == ColorSpace::DeviceCmyk && header.is_some_and(|header| header.adobe);

        log::debug!(
            "jpeg {}x{}px, {} components, adobe inverted: {}",
            width,
            height,
            components,
            inverted
        );

        Ok(Self {
            width,
            height,
            color_space,
            data: RasterData::Jpeg {
                data: bytes.to_vec(),
                inverted,
            },
        })
    }

    fn from_png(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?;
        let (width, height) = (decoded.width(), decoded.height());
        let color = decoded.color();

        if !color.has_color() && !color.has_alpha() {
            return Ok(Self {
                width,
                height,
                color_space: ColorSpace::DeviceGray,
                data: RasterData::Samples {
                    pixels: decoded.to_luma8().into_raw(),
                    alpha: None,
                },
            });
        }

        if !color.has_alpha() {
            return Ok(Self {
                width,
                height,
                color_space: ColorSpace::DeviceRgb,
                data: RasterData::Samples {
                    pixels: decoded.to_rgb8().into_raw(),
                    alpha: None,
                },
            });
        }

        let rgba = decoded.to_rgba8();
        let pixel_count = (width as usize) * (height as usize);
        let mut rgb = Vec::with_capacity(pixel_count * 3);
        let mut alpha = Vec::with_capacity(pixel_count);
        for pixel in rgba.pixels() {
            rgb.extend_from_slice(&pixel.0[..3]);
            alpha.push(pixel.0[3]);
        }

        Ok(Self {
            width,
            height,
            color_space: ColorSpace::DeviceRgb,
            data: RasterData::Samples {
                pixels: rgb,
                alpha: Some(alpha),
            },
        })
    }
}

/// Facts read from the marker segments ahead of the scan data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct JpegHeader {
    /// Component count from the SOF segment
    components: u8,
    /// An Adobe APP14 segment is present
    adobe: bool,
}

/// Walk the JPEG marker segments up to the first scan.
///
/// Returns `None` if no frame header precedes the scan or the segments
/// are truncated.
fn scan_jpeg_header(bytes: &[u8]) -> Option<JpegHeader> {
    let mut pos = JPEG_MAGIC.len();
    let mut components = None;
    let mut adobe = false;

    loop {
        if *bytes.get(pos)? != 0xFF {
            return None;
        }
        let marker = *bytes.get(pos + 1)?;

        match marker {
            // Fill byte
            0xFF => {
                pos += 1;
                continue;
            }
            // Standalone markers carry no length
            0x01 | 0xD0..=0xD7 => {
                pos += 2;
                continue;
            }
            MARKER_SOS | MARKER_EOI => break,
            _ => {}
        }

        let length = u16::from_be_bytes([*bytes.get(pos + 2)?, *bytes.get(pos + 3)?]) as usize;
        if length < 2 {
            return None;
        }
        let segment = bytes.get(pos + 4..pos + 2 + length)?;

        match marker {
            MARKER_APP14 if segment.starts_with(b"Adobe") => adobe = true,
            // SOF0-SOF15, minus DHT (C4), JPG (C8) and DAC (CC).
            // Payload: precision, height (2), width (2), component count
            0xC0..=0xCF if !matches!(marker, 0xC4 | 0xC8 | 0xCC) => {
                components = Some(*segment.get(5)?);
            }
            _ => {}
        }

        pos += 2 + length;
    }

    components.map(|components| JpegHeader { components, adobe })
}
