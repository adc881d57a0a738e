//! Output page rendering
//!
//! Turns a [`PageDescriptor`] into a PDF page object: the image draw,
//! crop marks and the optional assembly label.

use crate::layout::{PageDescriptor, PageLabel, Rect};
use crate::marks::generate_crop_marks;
use crate::options::PrintConstants;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Resource name of the source image on every page
pub const IMAGE_RESOURCE_NAME: &str = "Im0";

/// Resource name of the label font
pub const LABEL_FONT_RESOURCE_NAME: &str = "F1";

// =============================================================================
// Public API
// =============================================================================

/// Render one output page into `output`.
///
/// # Arguments
/// * `output` - The output document
/// * `page` - Geometry of the page
/// * `parent_pages_id` - The parent Pages object ID
/// * `image_id` - The shared source image XObject
/// * `font_id` - Label font, required when the page has a label
/// * `constants` - Crop mark styling
pub fn render_page(
    output: &mut Document,
    page: &PageDescriptor,
    parent_pages_id: ObjectId,
    image_id: ObjectId,
    font_id: Option<ObjectId>,
    constants: &PrintConstants,
) -> ObjectId {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        box_array(&Rect::new(0.0, 0.0, page.width, page.height)),
    );
    page_dict.set(
        "BleedBox",
        box_array(&Rect::new(0.0, 0.0, page.width, page.height)),
    );
    page_dict.set(
        "TrimBox",
        box_array(&Rect::new(
            page.bleed,
            page.bleed,
            page.width - 2.0 * page.bleed,
            page.height - 2.0 * page.bleed,
        )),
    );

    let mut xobjects = Dictionary::new();
    xobjects.set(IMAGE_RESOURCE_NAME, Object::Reference(image_id));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut content_ops = vec![
        generate_image_command(IMAGE_RESOURCE_NAME, &page.image_rect),
        generate_crop_marks(&page.crop_marks, constants),
    ];

    if let (Some(label), Some(font_id)) = (&page.label, font_id) {
        let mut fonts = Dictionary::new();
        fonts.set(LABEL_FONT_RESOURCE_NAME, Object::Reference(font_id));
        resources.set("Font", Object::Dictionary(fonts));
        content_ops.push(generate_label(LABEL_FONT_RESOURCE_NAME, label));
    }

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    output.add_object(page_dict)
}

/// Add the standard Helvetica font used for labels
pub fn create_label_font(output: &mut Document) -> ObjectId {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    output.add_object(font_dict)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Content stream command drawing an image XObject into `rect`.
///
/// Image space is the unit square, so the matrix scales it straight to
/// the target size.
pub fn generate_image_command(xobject_name: &str, rect: &Rect) -> String {
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        rect.width, rect.height, rect.x, rect.y, xobject_name
    )
}

/// Content stream commands for a gray text label
pub fn generate_label(font_name: &str, label: &PageLabel) -> String {
    format!(
        "q {} g BT /{} {} Tf {} {} Td ({}) Tj ET Q\n",
        label.gray,
        font_name,
        label.font_size,
        label.x,
        label.y,
        escape_pdf_string(&label.text)
    )
}

fn escape_pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

fn box_array(rect: &Rect) -> Object {
    Object::Array(vec![
        Object::Real(rect.x),
        Object::Real(rect.y),
        Object::Real(rect.right()),
        Object::Real(rect.top()),
    ])
}
