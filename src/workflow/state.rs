use crate::models::{ColorSlots, GenerationRequest, StylePreset};

pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate icons";
pub const NETWORK_FAILED_MESSAGE: &str = "Could not reach the icon service";
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download image";

/// Form fields and status flags of one workflow session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowState {
    pub prompt: String,
    pub style: StylePreset,
    pub colors: ColorSlots,
    pub loading: bool,
    /// Inline message under the form.
    pub error: Option<String>,
    /// Intrusive notice raised by a failed download.
    pub alert: Option<String>,
    pub last_request: Option<GenerationRequest>,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors the submit button: disabled while loading or with a blank prompt.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.prompt.trim().is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Generating Icons..."
        } else {
            "Generate Icon Set"
        }
    }
}
