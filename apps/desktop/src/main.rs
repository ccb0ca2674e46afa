mod app;
mod view;

use app::App;
use iced::Size;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_env("CLIPGUARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new("clipguard_desktop=info,clipguard_core=info,warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting clipguard desktop");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window_size(Size::new(960.0, 860.0))
        .run()
}
