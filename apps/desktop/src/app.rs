use std::{path::PathBuf, sync::Arc};

use clipguard_core::{
    AnalysisResult, AnalysisTransport, AppState, Category, Config, HttpTransport, Notice,
    notice::NOTICE_TIMEOUT, request::VideoFile,
};
use iced::{Element, Event, Subscription, Task, event, window};

pub struct App {
    pub(crate) state: AppState,
    transport: Option<Arc<HttpTransport>>,
    pub(crate) hovering: bool,
    /// Set by the first hover of a drag gesture, consumed by its first drop.
    drop_batch_open: bool,
    pub(crate) notice: Option<Notice>,
    notice_generation: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    ApiKeyChanged(String),
    ToggleKeyVisibility,
    OptionToggled(Category, bool),
    FileHovered(PathBuf),
    FilesHoveredLeft,
    FileDropped(PathBuf),
    PickFile,
    FilePicked(Option<PathBuf>),
    AnalysisFinished(Result<AnalysisResult, String>),
    PlayPreview,
    DismissNotice,
    NoticeExpired(u64),
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config unreadable, using defaults");
            Config::default()
        });
        let mut app = Self::with_config(config);
        let task = match app.notice.take() {
            Some(notice) => app.notify(notice),
            None => Task::none(),
        };
        (app, task)
    }

    pub fn with_config(config: Config) -> Self {
        let (transport, notice) = match HttpTransport::new(&config.endpoint) {
            Ok(transport) => {
                tracing::info!(url = %transport.analyze_url(), "analysis endpoint");
                (Some(Arc::new(transport)), None)
            }
            Err(e) => {
                tracing::error!(error = %e, "no usable analysis endpoint");
                (None, Some(Notice::error(e.to_string())))
            }
        };

        Self {
            state: AppState::new(config.api_key),
            transport,
            hovering: false,
            drop_batch_open: false,
            notice,
            notice_generation: 0,
        }
    }

    pub fn title(&self) -> String {
        if self.state.is_in_flight() {
            "Video Content Moderation - analyzing".to_string()
        } else {
            "Video Content Moderation".to_string()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ApiKeyChanged(key) => self.state.credential.set_key(key),
            Message::ToggleKeyVisibility => self.state.credential.toggle_visibility(),
            Message::OptionToggled(category, enabled) => self.state.options.set(category, enabled),
            Message::FileHovered(path) => {
                // One event per file; only the first of a gesture decides.
                if !self.drop_batch_open {
                    self.drop_batch_open = true;
                    self.hovering =
                        !self.state.is_in_flight() && VideoFile::from_path(&path).is_some();
                }
            }
            Message::FilesHoveredLeft => {
                self.hovering = false;
                self.drop_batch_open = false;
            }
            Message::FileDropped(path) => {
                self.hovering = false;
                if !std::mem::take(&mut self.drop_batch_open) {
                    tracing::debug!(path = %path.display(), "discarding extra dropped file");
                    return Task::none();
                }
                return self.submit(vec![path]);
            }
            Message::PickFile => {
                if self.state.is_in_flight() {
                    return Task::none();
                }
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select a video")
                            .add_filter("Video", &["mp4", "avi", "mov", "mkv", "webm"])
                            .pick_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::FilePicked,
                );
            }
            Message::FilePicked(Some(path)) => return self.submit(vec![path]),
            Message::FilePicked(None) => {}
            Message::AnalysisFinished(outcome) => {
                let notice = self.state.complete_submission(outcome);
                return self.notify(notice);
            }
            Message::PlayPreview => return self.play_preview(),
            Message::DismissNotice => self.notice = None,
            Message::NoticeExpired(generation) => {
                if generation == self.notice_generation {
                    self.notice = None;
                }
            }
        }
        Task::none()
    }

    /// Show `notice` and schedule its own dismissal; a newer notice outlives older timers.
    fn notify(&mut self, notice: Notice) -> Task<Message> {
        self.notice_generation += 1;
        self.notice = Some(notice);

        let generation = self.notice_generation;
        Task::perform(
            async move {
                tokio::time::sleep(NOTICE_TIMEOUT).await;
                generation
            },
            Message::NoticeExpired,
        )
    }

    fn submit(&mut self, files: Vec<PathBuf>) -> Task<Message> {
        let request = match self.state.begin_submission(files) {
            Ok(request) => request,
            Err(rejection) => {
                return match rejection.notice() {
                    Some(notice) => self.notify(notice),
                    None => Task::none(),
                };
            }
        };

        let Some(transport) = self.transport.clone() else {
            let outcome = Err::<AnalysisResult, _>("analysis endpoint is not configured");
            let notice = self.state.complete_submission(outcome);
            return self.notify(notice);
        };

        Task::perform(
            async move {
                transport
                    .analyze(request)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::AnalysisFinished,
        )
    }

    fn play_preview(&mut self) -> Task<Message> {
        let Some(path) = self.state.upload.preview().map(|p| p.path().to_path_buf()) else {
            return Task::none();
        };

        match open::that(&path) {
            Ok(()) => Task::none(),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "failed to open preview");
                self.notify(Notice::error("Could not open the video preview"))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        crate::view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(path)) => Some(Message::FileHovered(path)),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }
}
