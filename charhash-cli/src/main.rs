use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

const EXAMPLES: &str = "\
Examples:
  character-hash 0123456789abcdef > glyph.svg
  character-hash 0x0123456789ABCDEF glyph.svg
  character-hash deadbeefcafebabe --size 512 --stroke 18 --fg \"#111\" --bg white --pad 20 > deadbeef.svg";

/// Turn a 64-bit key into a deterministic glyph-like SVG.
#[derive(Parser, Debug)]
#[command(name = "character-hash", version, after_help = EXAMPLES)]
struct Cli {
    /// 64-bit key as 16 hex characters, optionally prefixed with 0x.
    key: String,

    /// Output file (same as --out; --out wins when both are given).
    #[arg(value_name = "OUT")]
    out_positional: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output width/height in px.
    #[arg(long, default_value_t = 256.0, allow_negative_numbers = true)]
    size: f64,

    /// Stroke width in px.
    #[arg(long, default_value_t = 16.0, allow_negative_numbers = true)]
    stroke: f64,

    /// Padding in output px.
    #[arg(long, default_value_t = 14.0, allow_negative_numbers = true)]
    pad: f64,

    /// Stroke color.
    #[arg(long, default_value = "black")]
    fg: String,

    /// Background fill, or `none`.
    #[arg(long, default_value = "none")]
    bg: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Log generation decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// SVG document.
    Svg,
    /// Glyph record (seed, layout, fill stats, path data) as JSON.
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let seed = charhash::Seed::parse(&cli.key)?;
    let opts = charhash::SvgOptions {
        size: cli.size,
        stroke: cli.stroke,
        pad: cli.pad,
        fg: cli.fg,
        bg: cli.bg,
    };
    opts.validate()?;

    let doc = match cli.format {
        Format::Svg => charhash::render_svg(seed, &opts)?,
        Format::Json => charhash::generate_glyph(seed, opts.pad_viewbox()).to_json()?,
    };

    match cli.out.or(cli.out_positional) {
        Some(path) => write_file(&path, &doc),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(doc.as_bytes())
                .and_then(|()| stdout.flush())
                .context("write to stdout")
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn write_file(path: &Path, doc: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, doc).with_context(|| format!("write '{}'", path.display()))?;
    tracing::info!(path = %path.display(), bytes = doc.len(), "wrote output");
    Ok(())
}
