use std::{
    collections::VecDeque,
    sync::Mutex,
};

use async_trait::async_trait;

use crate::{
    error::{ClipguardError, Result},
    report::{AnalysisResult, ResultTable},
    request::AnalysisRequest,
    transport::AnalysisTransport,
};

/// Transport that records requests and replays queued outcomes.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<AnalysisResult>>>,
    requests: Mutex<Vec<AnalysisRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, result: AnalysisResult) {
        self.outcomes.lock().unwrap().push_back(Ok(result));
    }

    pub fn push_err(&self, error: ClipguardError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<AnalysisRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AnalysisTransport for ScriptedTransport {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClipguardError::Config("no scripted outcome".into())))
    }
}

pub fn sample_result() -> AnalysisResult {
    let skipped = || -> ResultTable { [("N/A", "Not analyzed")].into_iter().collect() };

    AnalysisResult {
        transcript: "sample transcript".into(),
        abusive_table: skipped(),
        violent_table: skipped(),
        nsfw_audio_table: [("status", "flagged"), ("confidence", "0.92")]
            .into_iter()
            .collect(),
        political_table: skipped(),
        religious_table: skipped(),
        video_nsfw_info: None,
        video_violence_info: None,
    }
}
