use crate::prediction::PredictionResult;

/// Where the interface is in its load-then-analyze cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    /// The model bundle is still being fetched.
    Loading,
    /// An analysis request is in flight.
    Sending,
    Done(PredictionResult),
    Error(String),
}

impl AnalysisStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, AnalysisStatus::Loading | AnalysisStatus::Sending)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            AnalysisStatus::Done(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Status after the user picks another file. A finished result or error
    /// is cleared, except a model load failure, which stays for the session.
    pub fn after_file_selected(&self, load_failed: bool) -> Self {
        match self {
            AnalysisStatus::Done(_) | AnalysisStatus::Error(_) if !load_failed => {
                AnalysisStatus::Idle
            }
            other => other.clone(),
        }
    }

    /// Only one analysis may be in flight; nothing starts while loading either.
    pub fn accepts_analysis(&self) -> bool {
        !self.is_busy()
    }
}

/// Whether the Analyze trigger accepts a click.
pub fn analyze_enabled(has_file: bool, model_ready: bool, status: &AnalysisStatus) -> bool {
    has_file && model_ready && status.accepts_analysis()
}
