//! nvembed - externally-hosted document and iframe embeds for
//! rich-text content.
//!
//! The model is a single embed node (source URL, sizing mode, pixel
//! dimensions, aspect ratio, optional viewer provider, passthrough
//! attributes). Markup conversion runs through two directions:
//!
//! - upcast (markup to model): [`read::parse`] recognizes the
//!   canonical wrapper structure, the prior version's wrapper, and
//!   bare pasted iframes
//! - downcast (model to markup): [`write::downcast`] produces the
//!   canonical three-tag structure for storage or editing
//!
//! Two flavors share the engine, selected by [`FlavorConfig`]:
//! `document_viewer` (Google Docs / Office web viewer documents) and
//! `generic_iframe` (any iframe-able media).
//!
//! ```rust
//! use nvembed::prelude::*;
//!
//! let config = FlavorConfig::generic_iframe();
//! let embeds = nvembed::read::parse(
//!     r#"<iframe src="https://www.youtube.com/embed/x" width="560" height="315"></iframe>"#,
//!     &config,
//! ).unwrap();
//! assert_eq!(embeds[0].ratio, Ratio::new(16, 9));
//!
//! let html = nvembed::write::emit(&nvembed::write::downcast(
//!     &embeds[0], &config, nvembed::write::DowncastMode::Data,
//! ));
//! assert!(html.contains("nvck-docs-inner"));
//! ```

pub use nvembed_core::*;

/// Upcast: HTML fragments to embed nodes.
pub mod read {
    pub use nvembed_read_html::*;
}

/// Downcast: embed nodes to HTML.
pub mod write {
    pub use nvembed_write_html::*;
}

mod command;
mod document;
mod form;
mod normalize;

pub use command::{InsertEmbedCommand, InsertOptions, ReplaceEmbedSourceCommand};
pub use document::{Block, Document, DocumentSchema, Selection};
pub use form::{FieldError, FormData, validate_form};
pub use normalize::normalize_fragment;

/// Commonly used types.
pub mod prelude {
    pub use crate::command::{InsertEmbedCommand, InsertOptions, ReplaceEmbedSourceCommand};
    pub use crate::document::{Block, Document, DocumentSchema};
    pub use crate::form::{FormData, validate_form};
    pub use nvembed_core::{
        EmbedNode, Flavor, FlavorConfig, Provider, Ratio, SizingMode,
    };
}
