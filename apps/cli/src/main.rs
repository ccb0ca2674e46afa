use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use clipguard_core::{
    AnalysisOptions, AnalysisResult, AnalysisTransport, AppState, Category, Config, HttpTransport, NoticeLevel,
    format_report_readable, render,
};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

mod logging;

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

#[derive(Parser)]
#[command(name = "clipguard")]
#[command(about = "Submit a video to the content-moderation service and print the report")]
struct Cli {
    /// Video file (mp4, avi, mov, mkv, webm)
    video: PathBuf,

    /// Detect hate speech, harassment, and offensive language
    #[arg(long)]
    abusive: bool,

    /// Detect violence, threats, and dangerous behavior
    #[arg(long)]
    violent: bool,

    /// Detect adult content and inappropriate material
    #[arg(long)]
    nsfw: bool,

    /// Detect political bias and politically charged language
    #[arg(long)]
    political: bool,

    /// Detect religious content and potentially sensitive material
    #[arg(long)]
    religious: bool,

    /// Run every detection category
    #[arg(short, long)]
    all: bool,

    /// Gemini API key. Defaults to GEMINI_API_KEY or the config file.
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Base URL of the analysis service
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Print the raw result as JSON instead of the readable report
    #[arg(long)]
    json: bool,

    /// More log output on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> AnalysisOptions {
        if self.all {
            return AnalysisOptions::all();
        }

        let mut options = AnalysisOptions::default();
        for (category, enabled) in [
            (Category::Abusive, self.abusive),
            (Category::Violent, self.violent),
            (Category::Nsfw, self.nsfw),
            (Category::Political, self.political),
            (Category::Religious, self.religious),
        ] {
            options.set(category, enabled);
        }
        options
    }
}

/// `--json` output: the categories that were requested next to what came back.
fn json_report(options: &AnalysisOptions, result: &AnalysisResult) -> serde_json::Value {
    serde_json::json!({
        "options": options,
        "result": result,
    })
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load()?;
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(key) = &cli.api_key {
        config.api_key = Some(key.clone());
    }

    let transport = HttpTransport::new(&config.endpoint)?;
    let mut state = AppState::new(config.api_key);
    state.options = cli.options();

    println!(
        "\n{}  {}\n",
        style("clipguard").cyan().bold(),
        style("Video Content Moderation").dim()
    );

    let request = match state.begin_submission(vec![cli.video.clone()]) {
        Ok(request) => request,
        Err(rejection) => {
            let message = rejection
                .notice()
                .map(|notice| notice.message)
                .unwrap_or_else(|| format!("{} ({})", rejection, cli.video.display()));
            eprintln!("{} {}", style("Error:").red().bold(), message);
            std::process::exit(1);
        }
    };

    let enabled: Vec<_> = state.options.enabled().map(|c| c.label()).collect();
    println!("{} {}", style("✓").green().bold(), enabled.join(", "));
    println!("{}", style("─".repeat(60)).dim());

    let start = Instant::now();
    let spinner = create_spinner(&format!(
        "Analyzing {} at {}...",
        request.video.file_name,
        transport.analyze_url()
    ));
    let outcome = transport.analyze(request).await;
    let failure = outcome.as_ref().err().map(|e| e.to_string());
    let notice = state.complete_submission(outcome);

    match notice.level {
        NoticeLevel::Success => spinner.finish_with_message(format!(
            "{} {} {}",
            style("✓").green().bold(),
            notice.message,
            style(format!("[{}]", format_duration(start.elapsed()))).dim()
        )),
        NoticeLevel::Error => {
            spinner.finish_with_message(format!(
                "{} {}",
                style("✗").red().bold(),
                notice.message
            ));
            if let Some(failure) = failure {
                eprintln!("{} {}", style("Error:").red().bold(), failure);
            }
            std::process::exit(1);
        }
    }

    let result = state
        .result()
        .context("analysis succeeded without a stored result")?;

    if cli.json {
        let report = json_report(&state.options, result);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", format_report_readable(&render(result)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_options() {
        let cli = Cli::parse_from(["clipguard", "clip.mp4", "--nsfw", "--religious"]);
        assert_eq!(
            cli.options(),
            AnalysisOptions {
                detect_nsfw: true,
                detect_religious: true,
                ..Default::default()
            }
        );

        let cli = Cli::parse_from(["clipguard", "clip.mp4", "--all"]);
        assert_eq!(cli.options(), AnalysisOptions::all());

        let cli = Cli::parse_from(["clipguard", "clip.mp4"]);
        assert!(!cli.options().any_enabled());
    }

    #[test]
    fn key_and_endpoint_flags() {
        let cli = Cli::parse_from([
            "clipguard",
            "clip.mp4",
            "-k",
            "abc123",
            "--endpoint",
            "http://localhost:9000",
            "-vv",
        ]);
        assert_eq!(cli.api_key.as_deref(), Some("abc123"));
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn json_output_echoes_requested_options() {
        let options = AnalysisOptions {
            detect_violent: true,
            ..Default::default()
        };
        let result = AnalysisResult {
            transcript: "salaam".into(),
            video_violence_info: Some("no violence detected".into()),
            ..Default::default()
        };

        let report = json_report(&options, &result);

        assert_eq!(report["options"]["detect_violent"], true);
        assert_eq!(report["options"]["detect_nsfw"], false);
        assert_eq!(report["result"]["transcript"], "salaam");
        assert_eq!(
            report["result"]["video_violence_info"],
            "no violence detected"
        );
    }

    #[test]
    fn durations_are_short() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }
}
