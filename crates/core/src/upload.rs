use std::{fmt::Display, path::PathBuf};

use crate::{
    credential::Credential,
    error::SubmitRejection,
    notice::Notice,
    options::AnalysisOptions,
    preview::{PreviewHandle, PreviewRegistry},
    report::AnalysisResult,
    request::{AnalysisRequest, VideoFile},
    transport::AnalysisTransport,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    InFlight,
}

/// Admits at most one analysis at a time and owns the preview of the last
/// accepted video.
pub struct UploadController {
    state: UploadState,
    previews: PreviewRegistry,
    preview: Option<PreviewHandle>,
}

impl UploadController {
    pub fn new(previews: PreviewRegistry) -> Self {
        Self {
            state: UploadState::Idle,
            previews,
            preview: None,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == UploadState::InFlight
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// Validate a drop and, if admitted, switch to in-flight.
    ///
    /// A rejection leaves both the state and the current preview untouched.
    pub fn begin(
        &mut self,
        files: Vec<PathBuf>,
        credential: &Credential,
        options: &AnalysisOptions,
    ) -> Result<AnalysisRequest, SubmitRejection> {
        if self.is_in_flight() {
            tracing::debug!("drop ignored while an analysis is in flight");
            return Err(SubmitRejection::Busy);
        }

        let mut files = files.into_iter();
        let first = files.next();
        let discarded = files.count();
        if discarded > 0 {
            tracing::debug!(discarded, "only the first dropped file is analyzed");
        }

        if !credential.is_present() {
            return Err(SubmitRejection::MissingApiKey);
        }
        if !options.any_enabled() {
            return Err(SubmitRejection::NoOptionSelected);
        }

        let Some(video) = first.as_deref().and_then(VideoFile::from_path) else {
            tracing::debug!(file = ?first, "drop ignored, not a supported video");
            return Err(SubmitRejection::NoVideoFile);
        };

        // Old handle must be revoked before the new one exists.
        drop(self.preview.take());
        self.preview = Some(self.previews.create(&video.path));
        self.state = UploadState::InFlight;

        tracing::info!(
            file = %video.file_name,
            options = ?options.enabled().map(|c| c.form_field()).collect::<Vec<_>>(),
            "analysis started"
        );

        Ok(AnalysisRequest {
            video,
            api_key: credential.key().to_string(),
            options: *options,
        })
    }

    /// Return to idle and report how the analysis went.
    pub fn complete<E: Display>(&mut self, outcome: &Result<AnalysisResult, E>) -> Notice {
        self.state = UploadState::Idle;

        match outcome {
            Ok(_) => {
                tracing::info!("analysis completed");
                Notice::analysis_succeeded()
            }
            Err(e) => {
                tracing::error!(error = %e, "analysis failed");
                Notice::analysis_failed()
            }
        }
    }

    /// Begin, send through `transport`, and complete in one call.
    pub async fn submit(
        &mut self,
        transport: &dyn AnalysisTransport,
        files: Vec<PathBuf>,
        credential: &Credential,
        options: &AnalysisOptions,
    ) -> Result<(Notice, crate::Result<AnalysisResult>), SubmitRejection> {
        let request = self.begin(files, credential, options)?;
        let outcome = transport.analyze(request).await;
        let notice = self.complete(&outcome);
        Ok((notice, outcome))
    }
}
