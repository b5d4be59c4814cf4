use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.life-sui.com";
pub const DEFAULT_DOWNLOAD_DELAY_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct IconConfig {
    pub base_url: String,
    pub download_dir: PathBuf,
    pub download_delay: Duration,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: PathBuf::from("."),
            download_delay: Duration::from_millis(DEFAULT_DOWNLOAD_DELAY_MS),
        }
    }
}

impl IconConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `ICONGEN_BASE_URL`, `ICONGEN_DOWNLOAD_DIR` and
    /// `ICONGEN_DOWNLOAD_DELAY_MS`, falling back to defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = env::var("ICONGEN_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.base_url);
        let download_dir = env::var("ICONGEN_DOWNLOAD_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(defaults.download_dir);
        let download_delay = env::var("ICONGEN_DOWNLOAD_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.download_delay);

        IconConfig {
            base_url,
            download_dir,
            download_delay,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn with_download_delay(mut self, delay: Duration) -> Self {
        self.download_delay = delay;
        self
    }

    /// Full URL of the generation endpoint. Works for both an absolute
    /// origin and a same-origin relative base such as `""` or `"/"`.
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}
