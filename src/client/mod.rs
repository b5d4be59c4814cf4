pub mod download_client;
pub mod generation_client;
pub mod traits;

use crate::{
    config::IconConfig,
    error::{IconError, Result},
    presenter::{DirectorySink, Pacing},
    workflow::WorkflowController,
};
use reqwest::Client;
use std::sync::Arc;

pub use download_client::HttpImageFetcher;
pub use generation_client::GenerationClient;
pub use traits::{GenerationBackend, ImageFetcher};

/// Entry point that shares one HTTP connection pool between the generation
/// request and the image downloads.
#[derive(Clone)]
pub struct IconClient {
    config: IconConfig,
    generation_client: GenerationClient,
    image_fetcher: HttpImageFetcher,
}

impl IconClient {
    pub fn new(config: IconConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("icongen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| IconError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            generation_client: GenerationClient::new(client.clone(), config.generate_url()),
            image_fetcher: HttpImageFetcher::new(client),
            config,
        })
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    pub fn generation(&self) -> &GenerationClient {
        &self.generation_client
    }

    pub fn fetcher(&self) -> &HttpImageFetcher {
        &self.image_fetcher
    }

    /// A fresh workflow that saves downloads into the configured directory.
    pub fn controller(&self) -> WorkflowController {
        WorkflowController::new(
            Arc::new(self.generation_client.clone()),
            Arc::new(self.image_fetcher.clone()),
            Arc::new(DirectorySink::new(&self.config.download_dir)),
            Pacing::new(self.config.download_delay),
        )
    }
}
