use crate::{
    error::IconError,
    models::StylePreset,
    presenter::{BatchReport, SavedImage},
    validation::ValidationError,
};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetPrompt(String),
    SetStyle(StylePreset),
    AddColor,
    RemoveColor(usize),
    UpdateColor(usize, String),
    Submit,
    DownloadImage(usize),
    DownloadAll,
    DismissAlert,
}

/// What a dispatched intent led to.
#[derive(Debug)]
pub enum Outcome {
    Updated,
    Ignored,
    Rejected(ValidationError),
    Generated { images: usize },
    Failed(IconError),
    Downloaded(SavedImage),
    BatchFinished(BatchReport),
}
