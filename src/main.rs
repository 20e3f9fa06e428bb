use brush2bez::kurbo::Point;
use brush2bez::{BrushConfig, BrushError, DeviceKind, InputSource, TraceBuffer};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brush2bez", about = "Freehand brush trace to a font-ready bezier path")]
struct Cli {
    /// Input trace file: one "x y" sample per line, in capture order
    #[arg(short, long)]
    input: PathBuf,

    /// Output UFO path (will insert/replace the glyph)
    #[arg(short, long)]
    output: PathBuf,

    /// Glyph name
    #[arg(short, long)]
    name: String,

    /// Unicode codepoint (hex, e.g. "003F" for ?)
    #[arg(short = 'u', long)]
    unicode: Option<String>,

    /// Stroke width in font units
    #[arg(short = 'w', long, default_value = "80")]
    width: f64,

    /// Smoothing level (0 = finest, each level coarsens by 1.25x)
    #[arg(short, long, default_value = "8")]
    smoothing: u32,

    /// Treat the trace as stylus input (finer sample spacing)
    #[arg(long)]
    stylus: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let codepoints: Vec<char> = match &cli.unicode {
        Some(u) => {
            let cp = u32::from_str_radix(u, 16)?;
            char::from_u32(cp).into_iter().collect()
        }
        None => vec![],
    };

    let samples = read_trace(&cli.input)?;
    let unicode_str = cli
        .unicode
        .as_deref()
        .map(|u| format!(" (U+{})", u.to_uppercase()))
        .unwrap_or_default();
    eprintln!();
    eprintln!(
        "  brush2bez \u{00b7} {}{} ({} samples)",
        cli.name,
        unicode_str,
        samples.len()
    );

    let kind = if cli.stylus {
        DeviceKind::Stylus
    } else {
        DeviceKind::Pointer
    };

    // Replay the samples through the live buffer so the file goes
    // through the same min-distance filtering as interactive input.
    let mut buffer = TraceBuffer::new();
    let mut samples = samples.into_iter();
    if let Some(first) = samples.next() {
        buffer.begin(first, InputSource::new(kind, None));
    }
    for p in samples {
        buffer.push(p);
    }
    eprintln!("  kept {} samples after spacing filter", buffer.len());

    let config = BrushConfig {
        stroke_width: cli.width,
        smoothing: cli.smoothing,
        ..BrushConfig::default()
    };

    let Some(path) = buffer.finish(&config) else {
        eprintln!("  trace too short, nothing to insert");
        return Ok(());
    };
    eprintln!("  emitted {} nodes", path.nodes.len());

    let glyph = brush2bez::ufo::to_glyph(&cli.name, &path, &codepoints)?;
    let mut font = norad::Font::load(&cli.output)?;
    font.default_layer_mut().insert_glyph(glyph);
    font.save(&cli.output)?;

    eprintln!("  \u{2713} {}", cli.output.display());
    eprintln!();
    Ok(())
}

/// Parse a plain-text trace file: one "x y" pair per line, blank lines
/// and `#` comments skipped.
fn read_trace(path: &std::path::Path) -> Result<Vec<Point>, BrushError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| BrushError::InvalidTrace(format!("{}: {e}", path.display())))?;

    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (x, y) = match (parts.next(), parts.next()) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                return Err(BrushError::InvalidTrace(format!(
                    "line {}: expected \"x y\"",
                    lineno + 1
                )))
            }
        };
        let x: f64 = x
            .parse()
            .map_err(|e| BrushError::InvalidTrace(format!("line {}: {e}", lineno + 1)))?;
        let y: f64 = y
            .parse()
            .map_err(|e| BrushError::InvalidTrace(format!("line {}: {e}", lineno + 1)))?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}
