use std::{path::PathBuf, sync::Mutex};

use async_trait::async_trait;
use clipguard_core::{
    AnalysisRequest, AnalysisResult, AnalysisTransport, AppState, Category, ClipguardError,
    NoticeLevel, SectionBody, UploadState, format_report_readable, render,
};

const SERVICE_BODY: &str = r#"{
    "transcript": "yeh ek misaal hai",
    "abusive_table": [["status", "Not analyzed"]],
    "violent_table": [["N/A", "Not analyzed"]],
    "nsfw_audio_table": [["status", "flagged"], ["confidence", "0.92"]],
    "political_table": [["N/A", "Not analyzed"]],
    "religious_table": [["N/A", "Not analyzed"]],
    "video_nsfw_info": "",
    "video_violence_info": ""
}"#;

/// Answers every request with the decoded `SERVICE_BODY` and remembers what it was sent.
struct CannedService {
    seen: Mutex<Vec<AnalysisRequest>>,
    fail: bool,
}

impl CannedService {
    fn new(fail: bool) -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            fail,
        }
    }
}

#[async_trait]
impl AnalysisTransport for CannedService {
    async fn analyze(&self, request: AnalysisRequest) -> clipguard_core::Result<AnalysisResult> {
        self.seen.lock().unwrap().push(request);
        if self.fail {
            return Err(ClipguardError::Status { status: 500 });
        }
        AnalysisResult::from_service_json(SERVICE_BODY.as_bytes())
    }
}

#[tokio::test]
async fn nsfw_only_drop_renders_transcript_and_nsfw_table() {
    let service = CannedService::new(false);
    let mut state = AppState::new(Some("abc123".into()));
    state.options.set(Category::Nsfw, true);

    let notice = state
        .analyze(&service, vec![PathBuf::from("clip.mp4")])
        .await
        .unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);

    let seen = service.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0].text_fields(),
        vec![
            ("gemini_api", "abc123".to_string()),
            ("detect_abusive", "false".to_string()),
            ("detect_violent", "false".to_string()),
            ("detect_nsfw", "true".to_string()),
            ("detect_political", "false".to_string()),
            ("detect_religious", "false".to_string()),
        ]
    );
    assert_eq!(seen[0].video.file_name, "clip.mp4");

    let result = state.result().unwrap();
    let view = render(result);
    assert_eq!(
        view.titles(),
        vec!["Transcript (Urdu)", "NSFW Content Analysis"]
    );
    let SectionBody::Table(rows) = view.sections[1].body else {
        panic!("NSFW section should be a table");
    };
    assert_eq!(rows.len(), 2);

    let text = format_report_readable(&view);
    assert!(text.contains("yeh ek misaal hai"));
    assert!(text.contains("confidence  0.92"));
    assert!(!text.contains("Abusive"));
}

#[tokio::test]
async fn failed_request_keeps_earlier_report_visible() {
    let ok = CannedService::new(false);
    let broken = CannedService::new(true);
    let mut state = AppState::new(Some("abc123".into()));
    state.options.set(Category::Nsfw, true);

    state.analyze(&ok, vec!["clip.mp4".into()]).await.unwrap();
    let before = state.result().cloned();

    let notice = state.analyze(&broken, vec!["clip.mp4".into()]).await.unwrap();

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(state.result().cloned(), before);
    assert_eq!(state.upload.state(), UploadState::Idle);
    assert_eq!(broken.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn preview_follows_the_latest_accepted_file() {
    let service = CannedService::new(false);
    let mut state = AppState::new(Some("abc123".into()));
    state.options.set(Category::Violent, true);

    state.analyze(&service, vec!["one.mp4".into()]).await.unwrap();
    state.analyze(&service, vec!["two.mov".into()]).await.unwrap();

    let preview = state.upload.preview().unwrap();
    assert_eq!(preview.file_name(), "two.mov");

    let registry = state.upload.previews().clone();
    assert_eq!(registry.created(), 2);
    assert_eq!(registry.released(), 1);

    drop(state);
    assert_eq!(registry.live(), 0);
    assert_eq!(registry.released(), 2);
}
