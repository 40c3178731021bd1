//! Core types and boundary contracts for the apidoc pipeline.
//!
//! This crate provides the foundational pieces used by the resolver and
//! renderer crates:
//! - Raw JSON schema types and the variant classifier
//! - The expanded view model handed to the template layer
//! - Reference links and the URL-builder boundary
//! - The content-resolution boundary
//! - Error types

pub mod content;
pub mod errors;
pub mod link;
pub mod schema;
pub mod view;

pub use content::*;
pub use errors::*;
pub use link::*;
pub use schema::*;
pub use view::*;
