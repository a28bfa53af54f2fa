//! Wire contracts of the server-driven view endpoints
//!
//! - `field` - field descriptors and the metadata column set
//! - `layout` - layout endpoint response and the layout node tree
//! - `filter` - nested AND/OR filter expression as the query endpoint reads it
//! - `query` - data endpoint request and response
//! - `route` - tenant/product/object/view identifiers scoping both endpoints

mod de;
pub mod field;
pub mod filter;
pub mod layout;
pub mod query;
pub mod route;

pub use field::*;
pub use filter::*;
pub use layout::*;
pub use query::*;
pub use route::*;
