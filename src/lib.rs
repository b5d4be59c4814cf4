//! Client workflow for a remote icon-set generation service.
//!
//! A prompt, a style preset and up to five brand colors are validated,
//! posted to `<base>/api/generate`, and the four returned images can then be
//! downloaded one by one or as a paced, strictly ordered batch.

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod presenter;
pub mod validation;
pub mod workflow;

pub use client::{GenerationBackend, GenerationClient, HttpImageFetcher, IconClient, ImageFetcher};
pub use config::IconConfig;
pub use error::{IconError, Result};
pub use models::*;
pub use presenter::{
    BatchReport, DirectorySink, DownloadQueue, GridView, ImageSink, Pacing, ResultPresenter,
    SavedImage,
};
pub use validation::ValidationError;
pub use workflow::{Intent, Outcome, WorkflowController, WorkflowState};
