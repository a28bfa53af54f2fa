//! Dynamic view - server-described admin pages
//!
//! ## Architecture
//! The server describes a page as a tree of typed layout nodes plus a field
//! catalogue. The client interprets that tree, renders tables for it, lets the
//! user build a nested AND/OR filter and pages through a generic data endpoint.
//!
//! ## Structure
//! - `catalog` - field catalogue folded out of the layout response
//! - `filter_tree` - owned filter expression tree and its edit operations
//! - `column_layout` - visible columns, minimum widths, flex column, body rows
//! - `interpreter` - layout node tree -> render plan
//! - `pagination` - page state machine and paginator items
//! - `query_builder` - data endpoint request body
//! - `fence` - request sequencing that discards stale responses
//! - `title` - page title and labels derived from codes
//! - `api` - layout/data endpoint calls
//! - `ui/` - Leptos components
//!
//! ## Usage
//! ```ignore
//! // Route context is taken from the location path /{tenant}/{product}/{object}/{view}
//! <DynamicViewPage route=route />
//! ```

pub mod api;
pub mod catalog;
pub mod column_layout;
pub mod fence;
pub mod filter_tree;
pub mod interpreter;
pub mod pagination;
pub mod query_builder;
pub mod title;
pub mod ui;

pub use ui::DynamicViewPage;
