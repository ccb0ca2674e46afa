use std::time::Duration;

use crate::error::SubmitRejection;

/// How long a front end keeps a notice on screen.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, non-blocking notification (toast).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn analysis_succeeded() -> Self {
        Self::success("Analysis completed successfully!")
    }

    pub fn analysis_failed() -> Self {
        Self::error("Analysis failed. Please try again.")
    }
}

impl SubmitRejection {
    /// The notice shown for this rejection, if the user should see one.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitRejection::MissingApiKey => Some(Notice::error("Please enter your API key")),
            SubmitRejection::NoOptionSelected => Some(Notice::error(
                "Please select at least one analysis option",
            )),
            SubmitRejection::Busy | SubmitRejection::NoVideoFile => None,
        }
    }
}
