//! Image XObject creation
//!
//! The source image is added to the output document once and referenced
//! by name from every page that draws it.

use crate::raster::{ColorSpace, RasterData, RasterImage};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Add a raster image to the document as an Image XObject.
pub fn create_image_xobject(output: &mut Document, image: &RasterImage) -> ObjectId {
    let mut dict = image_dictionary(image.width, image.height, image.color_space);

    let content = match &image.data {
        RasterData::Jpeg { data, inverted } => {
            dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
            if *inverted {
                dict.set("Decode", inverted_decode(image.color_space));
            }
            data.clone()
        }
        RasterData::Samples { pixels, alpha } => {
            if let Some(alpha) = alpha {
                let smask = Stream::new(
                    image_dictionary(image.width, image.height, ColorSpace::DeviceGray),
                    alpha.clone(),
                );
                let smask_id = output.add_object(smask);
                dict.set("SMask", Object::Reference(smask_id));
            }
            pixels.clone()
        }
    };

    // DCT data must not be Flate-wrapped again
    let allows_compression = !matches!(image.data, RasterData::Jpeg { .. });
    let mut stream = Stream::new(dict, content);
    stream.allows_compression = allows_compression;

    output.add_object(stream)
}

fn image_dictionary(width: u32, height: u32, color_space: ColorSpace) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.pdf_name().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict
}

/// `[1 0 1 0 ...]`, one pair per colour component
fn inverted_decode(color_space: ColorSpace) -> Object {
    let components = match color_space {
        ColorSpace::DeviceGray => 1,
        ColorSpace::DeviceRgb => 3,
        ColorSpace::DeviceCmyk => 4,
    };
    Object::Array(
        (0..components)
            .flat_map(|_| [Object::Integer(1), Object::Integer(0)])
            .collect(),
    )
}
