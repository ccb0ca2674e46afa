use std::path::{Path, PathBuf};

use crate::options::{AnalysisOptions, Category};

pub const VIDEO_FIELD: &str = "video";
pub const API_KEY_FIELD: &str = "gemini_api";

/// A local video accepted for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
}

impl VideoFile {
    /// Accept `path` if its extension names a video container the service takes.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        let mime_type = match ext.as_str() {
            "mp4" => "video/mp4",
            "avi" => "video/x-msvideo",
            "mov" => "video/quicktime",
            "mkv" => "video/x-matroska",
            "webm" => "video/webm",
            _ => return None,
        };
        let file_name = path.file_name()?.to_string_lossy().into_owned();

        Some(Self {
            path: path.to_path_buf(),
            file_name,
            mime_type,
        })
    }
}

/// Everything one `POST /analyze` carries.
#[derive(Clone)]
pub struct AnalysisRequest {
    pub video: VideoFile,
    pub api_key: String,
    pub options: AnalysisOptions,
}

impl AnalysisRequest {
    /// Text fields of the multipart form, in submission order.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::with_capacity(6);
        fields.push((API_KEY_FIELD, self.api_key.clone()));
        for category in Category::ALL {
            fields.push((category.form_field(), self.options.get(category).to_string()));
        }
        fields
    }
}

impl std::fmt::Debug for AnalysisRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisRequest")
            .field("video", &self.video)
            .field("api_key", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}
