use std::fs;
use std::path::PathBuf;

use case_chart::api::{DashboardConfig, DashboardController, DashboardView};
use case_chart::render::{CairoRenderer, Renderer};
use case_chart::source::StatsClient;
use case_chart::telemetry::init_default_tracing;
use tracing::info;

const DEFAULT_OUTPUT_DIR: &str = "target/dashboard";

#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    output_dir: PathBuf,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            DashboardConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => DashboardConfig::default(),
    };

    let client = StatsClient::new(&config).map_err(|err| err.to_string())?;
    let mut dashboard = DashboardController::new(config).map_err(|err| err.to_string())?;

    let (history, snapshot) = client.fetch_all();
    dashboard.on_history_loaded(history);
    dashboard.on_snapshot_loaded(snapshot);
    dashboard.set_animation_progress(1.0);

    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    let mut written = 0usize;
    for view in DashboardView::ALL {
        let frame = dashboard
            .frame_for(view)
            .map_err(|err| format!("view `{}` frame build failed: {err}", view.name()))?;
        let Some(frame) = frame else {
            eprintln!("skipping `{}`: data unavailable", view.name());
            continue;
        };

        let width = i32::try_from(frame.viewport.width)
            .map_err(|_| format!("view `{}` width overflows i32", view.name()))?;
        let height = i32::try_from(frame.viewport.height)
            .map_err(|_| format!("view `{}` height overflows i32", view.name()))?;
        let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
        renderer.render(&frame).map_err(|err| err.to_string())?;

        let path = args.output_dir.join(format!("{}.png", view.name()));
        renderer.write_png(&path).map_err(|err| err.to_string())?;
        info!(view = view.name(), path = %path.display(), "wrote view");
        written += 1;
    }

    println!(
        "wrote {written} view(s) to {}",
        args.output_dir.display()
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut config_path = None;
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        config_path,
        output_dir,
    })
}

fn usage_message() -> &'static str {
    "usage: render_dashboard [--config <dashboard.json>] [--output-dir <dir>]"
}
