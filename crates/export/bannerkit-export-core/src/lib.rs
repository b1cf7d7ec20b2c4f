#![allow(dead_code)]
//! Bannerkit Export Core
//!
//! Turns a resolved banner timeline into deliverable documents: native
//! keyframe lists and CSS synthesis, preset-aware markup assembly for the
//! supported ad networks, a static-export minifier, manifest sidecars, and
//! the batch export boundary.

pub mod keyframes;
pub mod manifest;
pub mod markup;
pub mod minify;
pub mod pipeline;
pub mod preset;

// Re-exports for consumers (hosts and tooling)
pub use keyframes::{
    render_animations, render_setting, IterationCount, KeyframeDefinition, KeyframeStep,
    KeyframeTiming, RenderedAnimationData,
};
pub use manifest::{manifest_for, ManifestInputs};
pub use markup::{assemble_document, DocumentMode, SourceMap};
pub use minify::minify;
pub use pipeline::{
    export_batch, export_interactive, export_static, BatchFailure, BatchOutcome, CancelToken,
    ExportError, ExportJob, StaticExport,
};
