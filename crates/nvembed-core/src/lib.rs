//! nvembed-core: Model types for embedded-document and iframe content.
//!
//! This crate provides the semantic embed node, the markup view tree it
//! converts to and from, and the pure ratio/URL math shared by the
//! upcast and downcast crates.

mod attrs;
mod error;
mod flavor;
mod node;
mod ratio;
mod schema;
mod urls;
mod view;

pub use attrs::*;
pub use error::*;
pub use flavor::*;
pub use node::*;
pub use ratio::*;
pub use schema::*;
pub use urls::*;
pub use view::*;
