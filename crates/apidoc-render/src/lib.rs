//! Document rendering for documentation pages.
//!
//! Substitutes the three inline directives (`$(title)`,
//! `$(table_of_contents)`, `$(ref:...)`) in a single left-to-right
//! pass, accumulating warnings instead of failing. A bad directive leaves
//! its text in place; a page never crashes over one broken reference.

pub mod scan;
mod renderer;

pub use renderer::{DocumentRenderer, Rendered};
