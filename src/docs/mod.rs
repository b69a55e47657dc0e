//! Client for the developer.wordpress.org REST API.
//!
//! Two documentation collections share the same host: the handbooks
//! (plugin, theme, block editor, ...) and the code reference (functions,
//! hooks, classes, methods). Each collection has its own closed set of
//! subtypes and its own content shape.

pub mod client;
pub mod domain;
pub mod model;

pub use client::{DocsClient, effective_per_page};
pub use domain::DocDomain;
pub use model::{HandbookDoc, ReferenceDoc, SearchHit};
