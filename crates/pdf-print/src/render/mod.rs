//! PDF rendering modules
//!
//! This module handles all PDF-specific operations:
//! - Embedding the source image as an XObject
//! - Building output pages from page descriptors
//! - Assembling the page tree and document metadata

mod document;
mod page;
mod xobject;

pub use document::*;
pub use page::*;
pub use xobject::create_image_xobject;
