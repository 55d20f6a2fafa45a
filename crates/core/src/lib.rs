//! `stratus-core` — domain foundation for the cloud controller API.
//!
//! This crate contains **pure data** shared by the client and the fake
//! controller: GUIDs, the wire document schema, and the pagination engine.
//! No IO, no HTTP.

pub mod documents;
pub mod guid;
pub mod page;

pub use guid::Guid;
pub use page::{Page, PageQuery};
