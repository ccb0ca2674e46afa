use std::{fmt::Display, path::PathBuf};

use crate::{
    credential::Credential,
    error::SubmitRejection,
    notice::Notice,
    options::AnalysisOptions,
    preview::PreviewRegistry,
    report::AnalysisResult,
    request::AnalysisRequest,
    transport::AnalysisTransport,
    upload::UploadController,
};

/// Everything a front end session owns: key, options, last result and the
/// upload controller.
pub struct AppState {
    pub credential: Credential,
    pub options: AnalysisOptions,
    pub upload: UploadController,
    result: Option<AnalysisResult>,
}

impl AppState {
    pub fn new(default_api_key: Option<String>) -> Self {
        Self {
            credential: Credential::new(default_api_key.unwrap_or_default()),
            options: AnalysisOptions::default(),
            upload: UploadController::new(PreviewRegistry::new()),
            result: None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.upload.is_in_flight()
    }

    pub fn begin_submission(
        &mut self,
        files: Vec<PathBuf>,
    ) -> Result<AnalysisRequest, SubmitRejection> {
        self.upload.begin(files, &self.credential, &self.options)
    }

    /// Store a successful result in one assignment; a failure leaves the
    /// previous result in place.
    pub fn complete_submission<E: Display>(&mut self, outcome: Result<AnalysisResult, E>) -> Notice {
        let notice = self.upload.complete(&outcome);
        if let Ok(result) = outcome {
            self.result = Some(result);
        }
        notice
    }

    /// Run one submission end to end. Rejections that should be shown to the
    /// user come back as a notice.
    pub async fn analyze(
        &mut self,
        transport: &dyn AnalysisTransport,
        files: Vec<PathBuf>,
    ) -> Result<Notice, SubmitRejection> {
        let request = self.begin_submission(files)?;
        let outcome = transport.analyze(request).await;
        Ok(self.complete_submission(outcome))
    }
}
