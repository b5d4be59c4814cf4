use std::collections::VecDeque;
use std::time::Duration;

use crate::config::DEFAULT_DOWNLOAD_DELAY_MS;

/// Fixed pause between consecutive batch downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DOWNLOAD_DELAY_MS),
        }
    }
}

impl Pacing {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub index: usize,
    pub url: String,
}

/// Ordered, one-at-a-time work list for a batch download.
#[derive(Debug)]
pub struct DownloadQueue {
    pending: VecDeque<DownloadTask>,
    pacing: Pacing,
}

impl DownloadQueue {
    pub fn from_images(images: &[String], pacing: Pacing) -> Self {
        let pending = images
            .iter()
            .enumerate()
            .map(|(index, url)| DownloadTask {
                index,
                url: url.clone(),
            })
            .collect();

        Self { pending, pacing }
    }

    pub fn next_task(&mut self) -> Option<DownloadTask> {
        self.pending.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Pause to take before the next task. `None` once the queue is drained
    /// so the last download is never followed by a delay.
    pub fn pause_before_next(&self) -> Option<Duration> {
        if self.pending.is_empty() || self.pacing.delay.is_zero() {
            None
        } else {
            Some(self.pacing.delay)
        }
    }
}
