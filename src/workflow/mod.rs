pub mod intent;
pub mod state;

use crate::{
    client::traits::{GenerationBackend, ImageFetcher},
    error::IconError,
    presenter::{GridView, ImageSink, Pacing, ResultPresenter},
    validation::prepare_request,
};
use std::sync::Arc;

pub use intent::{Intent, Outcome};
pub use state::{
    WorkflowState, DOWNLOAD_FAILED_MESSAGE, GENERATION_FAILED_MESSAGE, NETWORK_FAILED_MESSAGE,
};

/// Owns the session state and applies intents to it. Everything the user
/// sees is derived from [`WorkflowState`] and the current presenter.
pub struct WorkflowController {
    state: WorkflowState,
    presenter: Option<ResultPresenter>,
    generator: Arc<dyn GenerationBackend>,
    fetcher: Arc<dyn ImageFetcher>,
    sink: Arc<dyn ImageSink>,
    pacing: Pacing,
}

impl WorkflowController {
    pub fn new(
        generator: Arc<dyn GenerationBackend>,
        fetcher: Arc<dyn ImageFetcher>,
        sink: Arc<dyn ImageSink>,
        pacing: Pacing,
    ) -> Self {
        Self {
            state: WorkflowState::new(),
            presenter: None,
            generator,
            fetcher,
            sink,
            pacing,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn presenter(&self) -> Option<&ResultPresenter> {
        self.presenter.as_ref()
    }

    /// The result grid, shown only once a non-empty set has arrived and no
    /// request is outstanding.
    pub fn results_view(&self) -> Option<GridView> {
        match &self.presenter {
            Some(presenter) if !presenter.is_empty() && !self.state.loading => {
                Some(presenter.view())
            }
            _ => None,
        }
    }

    pub async fn dispatch(&mut self, intent: Intent) -> Outcome {
        log::debug!("Dispatching {:?}", intent);

        match intent {
            Intent::SetPrompt(prompt) => {
                self.state.prompt = prompt;
                Outcome::Updated
            }
            Intent::SetStyle(style) => {
                self.state.style = style;
                Outcome::Updated
            }
            Intent::AddColor => updated_if(self.state.colors.add()),
            Intent::RemoveColor(index) => updated_if(self.state.colors.remove(index)),
            Intent::UpdateColor(index, value) => {
                updated_if(self.state.colors.update(index, value))
            }
            Intent::DismissAlert => {
                self.state.alert = None;
                Outcome::Updated
            }
            Intent::Submit => self.submit().await,
            Intent::DownloadImage(index) => self.download_image(index).await,
            Intent::DownloadAll => self.download_all().await,
        }
    }

    async fn submit(&mut self) -> Outcome {
        if self.state.loading {
            log::warn!("⚠️  Submit ignored, a generation request is already in flight");
            return Outcome::Ignored;
        }

        let request = match prepare_request(
            &self.state.prompt,
            self.state.style,
            self.state.colors.as_slice(),
        ) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("Submission blocked: {}", e);
                self.state.error = Some(e.to_string());
                return Outcome::Rejected(e);
            }
        };

        self.state.error = None;
        self.presenter = None;
        self.state.last_request = Some(request.clone());

        let response = {
            let _loading = LoadingFlag::raise(&mut self.state.loading);
            self.generator.generate(&request).await
        };

        match response {
            Ok(result) if result.success => {
                let images = result.images.len();
                log::info!("✅ Received {} icons for '{}'", images, request.prompt);
                self.presenter = Some(ResultPresenter::new(
                    result,
                    self.fetcher.clone(),
                    self.sink.clone(),
                    self.pacing,
                ));
                Outcome::Generated { images }
            }
            Ok(_) => {
                log::warn!("Generation service reported failure for '{}'", request.prompt);
                self.state.error = Some(GENERATION_FAILED_MESSAGE.to_string());
                Outcome::Failed(IconError::GenerationFailure(
                    "service responded with success=false".to_string(),
                ))
            }
            Err(e) => {
                log::error!("❌ Generation error: {}", e);
                self.state.error = Some(NETWORK_FAILED_MESSAGE.to_string());
                Outcome::Failed(e)
            }
        }
    }

    async fn download_image(&mut self, index: usize) -> Outcome {
        let Some(presenter) = &self.presenter else {
            log::warn!("Download requested before any icons were generated");
            return Outcome::Ignored;
        };

        match presenter.download_image(index).await {
            Ok(saved) => Outcome::Downloaded(saved),
            Err(e) => {
                self.state.alert = Some(DOWNLOAD_FAILED_MESSAGE.to_string());
                Outcome::Failed(e)
            }
        }
    }

    async fn download_all(&mut self) -> Outcome {
        let Some(presenter) = &self.presenter else {
            log::warn!("Download requested before any icons were generated");
            return Outcome::Ignored;
        };

        let report = presenter.download_all().await;
        if !report.is_complete() {
            self.state.alert = Some(DOWNLOAD_FAILED_MESSAGE.to_string());
        }
        Outcome::BatchFinished(report)
    }
}

/// Holds `loading` up for as long as it lives, so a submit whose future is
/// dropped mid-request still leaves the form usable.
struct LoadingFlag<'a> {
    loading: &'a mut bool,
}

impl<'a> LoadingFlag<'a> {
    fn raise(loading: &'a mut bool) -> Self {
        *loading = true;
        Self { loading }
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        *self.loading = false;
    }
}

fn updated_if(changed: bool) -> Outcome {
    if changed {
        Outcome::Updated
    } else {
        Outcome::Ignored
    }
}
