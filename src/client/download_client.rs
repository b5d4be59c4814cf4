use crate::{
    client::traits::ImageFetcher,
    error::{IconError, Result},
};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("Fetching image: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| IconError::Download(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IconError::Download(format!(
                "GET {} returned {}",
                url, status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| IconError::Download(format!("reading body of {} failed: {}", url, e)))?;

        log::debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
