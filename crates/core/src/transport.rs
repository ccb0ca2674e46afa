use async_trait::async_trait;
use reqwest::{
    Body, Url,
    multipart::{Form, Part},
};

use crate::{
    error::{ClipguardError, Result},
    report::AnalysisResult,
    request::{AnalysisRequest, VIDEO_FIELD},
};

/// Sends one analysis request to the moderation service.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult>;
}

/// Multipart `POST <endpoint>/analyze` over reqwest.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    analyze_url: Url,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Result<Self> {
        Ok(Self {
            client,
            analyze_url: analyze_url(endpoint)?,
        })
    }

    pub fn analyze_url(&self) -> &Url {
        &self.analyze_url
    }
}

fn analyze_url(endpoint: &str) -> Result<Url> {
    let invalid = |reason: String| ClipguardError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let base = Url::parse(&format!("{}/", endpoint.trim_end_matches('/')))
        .map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", base.scheme())));
    }

    base.join("analyze").map_err(|e| invalid(e.to_string()))
}

#[async_trait]
impl AnalysisTransport for HttpTransport {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult> {
        let read_failed = |source: std::io::Error| ClipguardError::VideoRead {
            path: request.video.path.clone(),
            source,
        };
        let file = tokio::fs::File::open(&request.video.path)
            .await
            .map_err(read_failed)?;
        let size = file.metadata().await.map_err(read_failed)?.len();

        tracing::info!(
            url = %self.analyze_url,
            file = %request.video.file_name,
            size,
            "uploading video for analysis"
        );

        let video = Part::stream_with_length(Body::from(file), size)
            .file_name(request.video.file_name.clone())
            .mime_str(request.video.mime_type)?;
        let form = request
            .text_fields()
            .into_iter()
            .fold(Form::new().part(VIDEO_FIELD, video), |form, (name, value)| {
                form.text(name, value)
            });

        let response = self
            .client
            .post(self.analyze_url.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClipguardError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        AnalysisResult::from_service_json(&body)
    }
}
