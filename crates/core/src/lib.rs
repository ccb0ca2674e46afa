//! clipguard core library
//!
//! State, validation, upload lifecycle and report rendering for a client of
//! the video content-moderation service.

pub mod config;
pub mod credential;
pub mod error;
pub mod notice;
pub mod options;
pub mod preview;
pub mod render;
pub mod report;
pub mod request;
pub mod state;
pub mod transport;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items at crate root
pub use config::Config;
pub use credential::Credential;
pub use error::{ClipguardError, Result, SubmitRejection};
pub use notice::{Notice, NoticeLevel};
pub use options::{AnalysisOptions, Category};
pub use preview::{PreviewHandle, PreviewRegistry};
pub use render::{ReportView, Section, SectionBody, format_report_readable, render};
pub use report::{AnalysisResult, NOT_ANALYZED, ResultTable};
pub use request::{AnalysisRequest, VideoFile};
pub use state::AppState;
pub use transport::{AnalysisTransport, HttpTransport};
pub use upload::{UploadController, UploadState};
