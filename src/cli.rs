use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use crate::model::{AxisKind, FrameIndexModel};
use crate::runtime::AppContext;

#[derive(Debug, Parser)]
#[command(
    name = "frameview",
    version,
    about = "Frame/channel selection tools for multi-dimensional image viewers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Summarize the axes and channels of an image metadata document.
    Info { meta: PathBuf },
    /// Map axis indices to a linear frame number, or back with --frame.
    Frame {
        #[arg(long)]
        meta: PathBuf,
        /// Axis assignment such as IndexZ=3; repeatable.
        #[arg(long = "set", value_name = "AXIS=INDEX")]
        set: Vec<String>,
        /// Derive every axis index from this linear frame instead.
        #[arg(long, conflicts_with = "set")]
        frame: Option<usize>,
    },
    /// Print the style descriptor for the default or preset state.
    Style {
        #[arg(long)]
        meta: PathBuf,
        #[arg(long)]
        preset: Option<PathBuf>,
    },
    /// Composite a frame stack into an RGBA image.
    Render {
        #[arg(long)]
        meta: PathBuf,
        #[arg(long)]
        stack: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        preset: Option<PathBuf>,
    },
    /// Query annotation counts for item identifiers.
    Counts {
        #[arg(long)]
        api: String,
        #[arg(required = true)]
        items: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
struct AxisInfo {
    axis: String,
    range: usize,
    stride: usize,
}

#[derive(Debug, Serialize)]
struct MetaInfo {
    size_x: usize,
    size_y: usize,
    frames: usize,
    axes: Vec<AxisInfo>,
    channels: Vec<String>,
}

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let app = AppContext::new();

    match cli.command {
        Commands::Info { meta } => {
            let meta = app
                .io_service()
                .read_meta(&meta)
                .map_err(|error| error.to_string())?;
            let axes = meta
                .axes()
                .map_err(|error| error.to_string())?
                .into_iter()
                .map(|axis| AxisInfo {
                    axis: axis.kind.to_string(),
                    range: axis.range,
                    stride: axis.stride,
                })
                .collect();
            let info = MetaInfo {
                size_x: meta.size_x,
                size_y: meta.size_y,
                frames: meta.frame_count(),
                axes,
                channels: meta.channels.clone(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
        }
        Commands::Frame { meta, set, frame } => {
            let mut model = load_model(&app, &meta)?;
            if let Some(frame) = frame {
                model.set_linear_frame(frame).map_err(|error| error.to_string())?;
            } else {
                for assignment in &set {
                    let (kind, value) = parse_assignment(assignment)?;
                    model
                        .set_axis_current(kind, value)
                        .map_err(|error| error.to_string())?;
                }
            }
            let axes = model
                .axes()
                .iter()
                .map(|axis| (axis.kind.to_string(), axis.current))
                .collect::<BTreeMap<_, _>>();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "frame": model.linear_frame(),
                    "axes": axes,
                }))
                .map_err(|error| error.to_string())?
            );
        }
        Commands::Style { meta, preset } => {
            let mut model = load_model(&app, &meta)?;
            apply_preset(&app, &mut model, preset.as_deref())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&model.style_spec())
                    .map_err(|error| error.to_string())?
            );
        }
        Commands::Render {
            meta,
            stack,
            output,
            preset,
        } => {
            let mut model = load_model(&app, &meta)?;
            apply_preset(&app, &mut model, preset.as_deref())?;
            let stack = app
                .io_service()
                .read_stack(&stack)
                .map_err(|error| error.to_string())?;
            let bands = model.band_specs();
            let image = app
                .render_service()
                .composite(&stack, &bands)
                .map_err(|error| error.to_string())?;
            app.render_service()
                .write(&output, &image)
                .map_err(|error| error.to_string())?;
            println!(
                "{}",
                json!({"status": "ok", "output": output, "bands": bands.len()})
            );
        }
        Commands::Counts { api, items } => {
            let counts = app
                .annotation_service()
                .counts(&api, &items)
                .map_err(|error| error.to_string())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&counts).map_err(|error| error.to_string())?
            );
        }
    }

    Ok(())
}

fn load_model(app: &AppContext, meta: &std::path::Path) -> Result<FrameIndexModel, String> {
    let meta = app
        .io_service()
        .read_meta(meta)
        .map_err(|error| error.to_string())?;
    meta.build_model().map_err(|error| error.to_string())
}

fn apply_preset(
    app: &AppContext,
    model: &mut FrameIndexModel,
    preset: Option<&std::path::Path>,
) -> Result<(), String> {
    let Some(path) = preset else {
        return Ok(());
    };
    let preset = app
        .preset_service()
        .load(path)
        .map_err(|error| error.to_string())?;
    preset.apply(model).map_err(|error| error.to_string())
}

fn parse_assignment(raw: &str) -> Result<(AxisKind, usize), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected AXIS=INDEX, got `{raw}`"))?;
    let kind = name.parse::<AxisKind>().map_err(|error| error.to_string())?;
    let value = value
        .parse::<usize>()
        .map_err(|error| format!("invalid index `{value}`: {error}"))?;
    Ok((kind, value))
}
