//! `touchpaint` — replay a recorded contact trace through the engine.
//!
//! Each input line is one JSON [`ContactEvent`]. After every event the engine
//! requests a repaint, which is rendered into a recording surface and printed
//! to stdout as one JSON line. Diagnostics go to stderr via `tracing`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use touchpaint::engine::{Action, EngineCore};
use touchpaint::input::ContactEvent;
use touchpaint::render::{DrawCommand, RecordingSurface};
use touchpaint::style::{ColorValue, SurfaceConfig, WidthValue};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid contact event: {source}")]
    Event { line: usize, source: serde_json::Error },
    #[error("invalid config file {path}: {source}")]
    Config { path: PathBuf, source: serde_json::Error },
    #[error("frame encoding failed: {0}")]
    Encode(serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "touchpaint", about = "Replay a contact trace and print the frames it draws")]
struct Cli {
    /// JSON-lines contact trace. Reads stdin when omitted.
    trace: Option<PathBuf>,

    /// JSON file with `strokeWidth` / `strokeColor`.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, env = "TOUCHPAINT_STROKE_WIDTH")]
    stroke_width: Option<String>,

    #[arg(long, env = "TOUCHPAINT_STROKE_COLOR")]
    stroke_color: Option<String>,

    /// Print only the final frame.
    #[arg(long)]
    summary: bool,
}

#[derive(Serialize)]
struct Frame<'a> {
    frame: usize,
    active: usize,
    commands: &'a [DrawCommand],
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(frames) => {
            tracing::info!(frames, "replay finished");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "replay failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<usize, CliError> {
    let config = load_config(cli)?;
    let mut core = EngineCore::new(&config);
    let style = core.style();
    tracing::info!(stroke_width = style.stroke_width(), stroke_color = %style.stroke_color(), "surface ready");

    let reader: Box<dyn BufRead> = match &cli.trace {
        Some(path) => Box::new(BufReader::new(open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut surface = RecordingSurface::new();
    let mut last = Vec::new();
    let mut frames = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: ContactEvent =
            serde_json::from_str(&line).map_err(|source| CliError::Event { line: index + 1, source })?;

        for action in core.handle(&event) {
            match action {
                // Replays have no window to capture pointers on.
                Action::CapturePointer(_) | Action::ReleasePointer(_) => {
                    tracing::trace!(?action, "capture change skipped");
                }
                Action::RenderNeeded => {
                    let Ok(()) = core.render_to(&mut surface);
                    last = surface.take();
                    frames += 1;
                    if !cli.summary {
                        write_frame(&mut out, frames, core.active_count(), &last)?;
                    }
                }
            }
        }
    }

    if cli.summary {
        write_frame(&mut out, frames, core.active_count(), &last)?;
    }
    out.flush()?;
    Ok(frames)
}

/// File values first, then flags and environment on top.
fn load_config(cli: &Cli) -> Result<SurfaceConfig, CliError> {
    let base = match &cli.config {
        Some(path) => {
            let file = open(path)?;
            serde_json::from_reader(BufReader::new(file))
                .map_err(|source| CliError::Config { path: path.clone(), source })?
        }
        None => SurfaceConfig::default(),
    };

    let overlay = SurfaceConfig {
        stroke_width: cli.stroke_width.clone().map(WidthValue::Text),
        stroke_color: cli.stroke_color.clone().map(ColorValue::Text),
    };
    Ok(base.merged(overlay))
}

fn open(path: &Path) -> Result<File, CliError> {
    File::open(path).map_err(|source| CliError::Open { path: path.to_path_buf(), source })
}

fn write_frame(out: &mut impl Write, frame: usize, active: usize, commands: &[DrawCommand]) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, &Frame { frame, active, commands }).map_err(CliError::Encode)?;
    writeln!(out)?;
    Ok(())
}
