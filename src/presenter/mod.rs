//! Holds one generated icon set and downloads its images, one at a time or
//! as a paced batch.

pub mod queue;
pub mod sink;

use crate::{
    client::traits::ImageFetcher,
    error::{IconError, Result},
    models::{GenerationMetadata, GenerationResult},
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;

pub use queue::{DownloadQueue, DownloadTask, Pacing};
pub use sink::{DirectorySink, ImageSink};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Longest prompt slug, in bytes, that keeps a filename under the common
/// 255-byte limit.
pub const MAX_SLUG_BYTES: usize = 200;

fn truncate_to_bytes(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// `icon-<prompt-with-hyphens>-<n>.png`, with `n` counted from 1. Path
/// separators in the prompt become hyphens as well, and the prompt part is
/// cut to [`MAX_SLUG_BYTES`] on a character boundary.
pub fn download_filename(prompt: Option<&str>, index: usize) -> String {
    match prompt {
        Some(prompt) => {
            let slug = WHITESPACE_RUN
                .replace_all(prompt, "-")
                .replace(['/', '\\'], "-");
            format!(
                "icon-{}-{}.png",
                truncate_to_bytes(&slug, MAX_SLUG_BYTES),
                index + 1
            )
        }
        None => format!("icon-{}.png", index + 1),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub index: usize,
    pub url: String,
    pub path: PathBuf,
    pub size_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFailure {
    pub index: usize,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub saved: Vec<SavedImage>,
    pub failed: Vec<DownloadFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub index: usize,
    pub label: String,
    pub url: String,
    pub downloading: bool,
}

impl TileView {
    pub fn button_label(&self) -> &'static str {
        if self.downloading {
            "Downloading..."
        } else {
            "Download PNG"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub tiles: Vec<TileView>,
    pub metadata: Option<GenerationMetadata>,
}

/// Clears the downloading marker when dropped, whichever way the download
/// ends.
struct DownloadingMark<'a> {
    marker: &'a watch::Sender<Option<usize>>,
}

impl<'a> DownloadingMark<'a> {
    fn set(marker: &'a watch::Sender<Option<usize>>, index: usize) -> Self {
        marker.send_replace(Some(index));
        Self { marker }
    }
}

impl Drop for DownloadingMark<'_> {
    fn drop(&mut self) {
        self.marker.send_replace(None);
    }
}

pub struct ResultPresenter {
    images: Vec<String>,
    metadata: Option<GenerationMetadata>,
    fetcher: Arc<dyn ImageFetcher>,
    sink: Arc<dyn ImageSink>,
    pacing: Pacing,
    downloading: watch::Sender<Option<usize>>,
}

impl ResultPresenter {
    pub fn new(
        result: GenerationResult,
        fetcher: Arc<dyn ImageFetcher>,
        sink: Arc<dyn ImageSink>,
        pacing: Pacing,
    ) -> Self {
        let (downloading, _) = watch::channel(None);
        Self {
            images: result.images,
            metadata: result.metadata,
            fetcher,
            sink,
            pacing,
            downloading,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn metadata(&self) -> Option<&GenerationMetadata> {
        self.metadata.as_ref()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Index currently being fetched, if any.
    pub fn downloading(&self) -> Option<usize> {
        *self.downloading.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<usize>> {
        self.downloading.subscribe()
    }

    pub fn filename_for(&self, index: usize) -> String {
        download_filename(self.metadata.as_ref().map(|m| m.prompt.as_str()), index)
    }

    pub async fn download_image(&self, index: usize) -> Result<SavedImage> {
        let url = self
            .images
            .get(index)
            .cloned()
            .ok_or_else(|| IconError::Download(format!("no image at index {}", index)))?;

        self.run_task(&DownloadTask { index, url }).await
    }

    /// Downloads every image in list order, strictly one after another, with
    /// the pacing delay between consecutive items. A failed item is recorded
    /// and the batch moves on to the next one.
    pub async fn download_all(&self) -> BatchReport {
        let mut queue = DownloadQueue::from_images(&self.images, self.pacing);
        let mut report = BatchReport::default();

        log::info!("📦 Downloading {} icons", queue.remaining());

        while let Some(task) = queue.next_task() {
            match self.run_task(&task).await {
                Ok(saved) => report.saved.push(saved),
                Err(e) => report.failed.push(DownloadFailure {
                    index: task.index,
                    error: e.to_string(),
                }),
            }

            if let Some(pause) = queue.pause_before_next() {
                tokio::time::sleep(pause).await;
            }
        }

        log::info!(
            "Batch download finished: {} saved, {} failed",
            report.saved.len(),
            report.failed.len()
        );
        report
    }

    pub fn view(&self) -> GridView {
        let downloading = self.downloading();
        let tiles = self
            .images
            .iter()
            .enumerate()
            .map(|(index, url)| TileView {
                index,
                label: format!("Icon {}", index + 1),
                url: url.clone(),
                downloading: downloading == Some(index),
            })
            .collect();

        GridView {
            tiles,
            metadata: self.metadata.clone(),
        }
    }

    async fn run_task(&self, task: &DownloadTask) -> Result<SavedImage> {
        let _mark = DownloadingMark::set(&self.downloading, task.index);

        let outcome = self.fetch_and_save(task).await;
        match &outcome {
            Ok(saved) => log::info!("💾 Saved icon {} to {}", task.index + 1, saved.path.display()),
            Err(e) => log::error!("Download failed for icon {}: {}", task.index + 1, e),
        }
        outcome
    }

    async fn fetch_and_save(&self, task: &DownloadTask) -> Result<SavedImage> {
        let bytes = self.fetcher.fetch(&task.url).await?;
        let size_bytes = bytes.len();
        let path = self.sink.save(&self.filename_for(task.index), bytes).await?;

        Ok(SavedImage {
            index: task.index,
            url: task.url.clone(),
            path,
            size_bytes,
        })
    }
}
