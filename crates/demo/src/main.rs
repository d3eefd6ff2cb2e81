// File: crates/demo/src/main.rs
// Summary: Demo loads a label/value CSV and renders bar and line charts (optionally animated frames) to PNGs.

use anyhow::{Context, Result};
use chart_core::{theme, Animation, Chart, ChartOptions, DataPoint, Dataset, DrawOptions, FrameState};
use chart_render_skia::{render_to_png, ChartKind, SkiaRenderer};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Every n-th animation frame is written to disk.
const FRAME_STRIDE: usize = 25;

struct Args {
    input: Option<PathBuf>,
    out_dir: PathBuf,
    animate: bool,
    theme: String,
    width: f64,
    height: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let dataset = match &args.input {
        Some(path) => load_label_value_csv(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => {
            info!("no input file given; using built-in sample data");
            sample_dataset()
        }
    };
    info!(points = dataset.len(), "dataset loaded");

    let opts = ChartOptions::default().with_theme(theme::find(&args.theme));
    let chart = Chart::new(args.width, args.height, dataset, opts)?;
    let l = chart.layout();
    println!(
        "Upper bound {} | slot width {:.2} | {} ticks",
        l.vertical_upper_bound,
        l.horizontal_label_freq,
        l.items_number + 1
    );

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    for (kind, name) in [(ChartKind::Bar, "bar_chart.png"), (ChartKind::Line, "line_chart.png")] {
        let out = args.out_dir.join(name);
        render_to_png(&chart, kind, &out)?;
        println!("Wrote {}", out.display());
    }

    if args.animate {
        for kind in [ChartKind::Bar, ChartKind::Line] {
            let dir = args.out_dir.join(format!("frames_{}", kind_name(kind)));
            let written = render_animation_frames(&chart, kind, &dir)?;
            println!("Wrote {written} frames to {}", dir.display());
        }
    }
    Ok(())
}

fn kind_name(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar => "bar",
        ChartKind::Line => "line",
    }
}

/// Drive the animation headless, snapshotting every `FRAME_STRIDE`-th frame and the last one.
fn render_animation_frames(chart: &Chart, kind: ChartKind, dir: &Path) -> Result<usize> {
    let mut renderer = SkiaRenderer::for_chart(chart)?;
    let mut anim: Box<dyn Animation> = match kind {
        ChartKind::Bar => Box::new(
            chart.draw_bar_chart(&mut renderer, DrawOptions::animated())
                .context("animated draw returned no controller")?,
        ),
        ChartKind::Line => Box::new(
            chart.draw_line_chart(&mut renderer, DrawOptions::animated())
                .context("animated draw returned no controller")?,
        ),
    };

    let mut written = 0usize;
    loop {
        let state = if anim.is_done() { FrameState::Done } else { anim.next_frame(&mut renderer) };
        let frame = anim.frames_drawn();
        if frame % FRAME_STRIDE == 0 || state == FrameState::Done {
            renderer.write_png(dir.join(format!("frame_{frame:05}.png")))?;
            written += 1;
        }
        if state == FrameState::Done {
            break;
        }
    }
    Ok(written)
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        input: None,
        out_dir: PathBuf::from("target/out"),
        animate: false,
        theme: "light".to_string(),
        width: chart_core::types::WIDTH,
        height: chart_core::types::HEIGHT,
    };
    while let Some(a) = it.next() {
        match a.as_str() {
            "--animate" => args.animate = true,
            "--out" => args.out_dir = PathBuf::from(it.next().context("--out needs a directory")?),
            "--theme" => args.theme = it.next().context("--theme needs a name")?,
            "--size" => {
                let v = it.next().context("--size needs WIDTHxHEIGHT")?;
                let (w, h) = v.split_once('x').context("--size expects WIDTHxHEIGHT")?;
                args.width = w.trim().parse().with_context(|| format!("bad width '{w}'"))?;
                args.height = h.trim().parse().with_context(|| format!("bad height '{h}'"))?;
            }
            s if s.starts_with("--") => anyhow::bail!("unknown flag {s}"),
            _ => args.input = Some(PathBuf::from(a)),
        }
    }
    Ok(args)
}

fn sample_dataset() -> Dataset {
    Dataset::from_pairs([
        ("Jan", 50.0), ("Feb", 150.0), ("March", 90.0), ("April", 120.0), ("May", 35.0),
        ("June", 170.0), ("July", 110.0), ("Aug", 64.0), ("Sep", 142.0),
    ])
}

/// Load `label,value` rows. A header row is optional; bare single-column
/// values are labelled by their row index.
fn load_label_value_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut points = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let cells: Vec<&str> = rec.iter().map(str::trim).collect();
        let parsed = match cells.as_slice() {
            [value] => value.parse::<f64>().ok().map(|v| DataPoint::indexed(points.len(), v)),
            [label, value, ..] => value.parse::<f64>().ok().map(|v| DataPoint::new(*label, v)),
            [] => None,
        };
        match parsed {
            Some(p) => points.push(p),
            // header line
            None if row == 0 => {}
            None => warn!(row, ?cells, "skipping row without a numeric value"),
        }
    }
    Ok(Dataset::new(points))
}
