//! Renderer-facing side of the pipeline: canonical content goes in, flat
//! UI prop bags and an ordered section list come out. Everything here is
//! pure and synchronous; loading documents is the edge layer's job.

pub mod brands;
pub mod composer;
pub mod facade;
pub mod mapper;
pub mod preview;

pub use composer::{compose, compose_manifest, ComposedSection, SectionProps, SectionStore};
pub use preview::PreviewSource;
