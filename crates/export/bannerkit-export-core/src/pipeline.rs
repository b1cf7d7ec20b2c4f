#![allow(dead_code)]
//! Export pipeline: single-banner entry points and the multi-banner batch
//! boundary.
//!
//! No error here is fatal: a bad banner in a batch is reported with its
//! originating index while completed items keep their output, and a host may
//! cancel between items through an explicit token.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use thiserror::Error;

use bannerkit_timeline_core::BannerData;

use crate::keyframes::render_animations;
use crate::manifest::{manifest_for, ManifestInputs};
use crate::markup::{assemble_document, DocumentMode, SourceMap};
use crate::minify::minify;

/// Errors produced while exporting a single banner.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid banner data: {0}")]
    InvalidBanner(String),
}

/// One banner's static deliverables: the minified document and the preset's
/// manifest (absent for networks that take none).
#[derive(Clone, Debug, PartialEq)]
pub struct StaticExport {
    pub document: String,
    pub manifest: Option<serde_json::Value>,
}

/// Generate the minified static document plus manifest for one banner.
pub fn export_static(banner: &BannerData, sources: &SourceMap) -> Result<StaticExport, ExportError> {
    banner.validate_basic().map_err(ExportError::InvalidBanner)?;
    let rendered = render_animations(banner);
    let document = assemble_document(banner, &rendered, sources, DocumentMode::Static);
    let manifest = manifest_for(
        banner.preset,
        &ManifestInputs {
            frame_name: banner.name.clone(),
            banner_width: banner.width,
            banner_height: banner.height,
            click_tag: banner.click_url.clone(),
        },
    );
    Ok(StaticExport {
        document: minify(&document),
        manifest,
    })
}

/// Generate the interactive (scrubbable) document for one banner. Left
/// unminified so the embedding preview surface stays legible.
pub fn export_interactive(banner: &BannerData, sources: &SourceMap) -> Result<String, ExportError> {
    banner.validate_basic().map_err(ExportError::InvalidBanner)?;
    let rendered = render_animations(banner);
    Ok(assemble_document(
        banner,
        &rendered,
        sources,
        DocumentMode::Interactive,
    ))
}

/// Cooperative cancellation checked between batch items, never inside one.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One batch item: the banner plus its asset-id -> file-path source map.
#[derive(Clone, Debug)]
pub struct ExportJob {
    pub banner: BannerData,
    pub sources: SourceMap,
}

/// A failed batch item, tagged with its originating index.
#[derive(Clone, Debug)]
pub struct BatchFailure {
    pub index: usize,
    pub message: String,
}

/// Batch result: completed exports keep their index pairing so the host can
/// match them back to its inputs.
#[derive(Clone, Debug, Default)]
pub struct BatchOutcome {
    pub exports: Vec<(usize, StaticExport)>,
    pub failures: Vec<BatchFailure>,
    pub cancelled: bool,
}

/// Export several banners. Per-item failures are collected, not propagated;
/// already-completed items are always returned.
pub fn export_batch(jobs: &[ExportJob], cancel: &CancelToken) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for (index, job) in jobs.iter().enumerate() {
        if cancel.is_cancelled() {
            log::debug!("export batch cancelled before item {index}");
            outcome.cancelled = true;
            break;
        }
        let result = export_static(&job.banner, &job.sources)
            .with_context(|| format!("exporting banner '{}' at index {index}", job.banner.name));
        match result {
            Ok(export) => outcome.exports.push((index, export)),
            Err(err) => {
                let message = format!("{err:#}");
                log::warn!("{message}");
                outcome.failures.push(BatchFailure { index, message });
            }
        }
    }
    outcome
}
