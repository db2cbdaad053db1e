use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "carousel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved layout of one slide as JSON.
    Layout(SlideArgs),
    /// Print the visual tree of one slide as JSON.
    Tree(SlideArgs),
    /// Render every slide as a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct SlideArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Slide index (0-based).
    #[arg(long, default_value_t = 0)]
    slide: usize,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `slide-01.png`, `slide-02.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 1080)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 1350)]
    height: u32,

    /// Directory of .ttf/.otf/.ttc files used for text.
    #[arg(long)]
    fonts: Option<PathBuf>,

    /// Worker threads (defaults to one per core).
    #[arg(long, env = "CAROUSEL_THREADS")]
    threads: Option<usize>,

    /// Fail instead of drawing placeholders when an image cannot be loaded.
    #[arg(long)]
    abort_on_missing_image: bool,

    /// Capture slides with identical content once.
    #[arg(long)]
    elide_identical: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Tree(args) => cmd_tree(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_project(path: &Path) -> anyhow::Result<carousel::Project> {
    carousel::Project::from_json_file(path)
        .with_context(|| format!("load project '{}'", path.display()))
}

fn project_root(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn cmd_layout(args: SlideArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    let slide = project.slides.get(args.slide).with_context(|| {
        format!(
            "slide {} out of range (project has {} slides)",
            args.slide,
            project.slides.len()
        )
    })?;
    let layout = carousel::resolve_layout(slide, &project.settings);
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

fn cmd_tree(args: SlideArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    let tree = carousel::compose_slide(&project, args.slide)?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    let size = carousel::FrameSize::new(args.width, args.height)?;

    let fonts = match &args.fonts {
        Some(dir) => carousel::FontSet::from_dir(dir)
            .with_context(|| format!("load fonts from '{}'", dir.display()))?,
        None => carousel::FontSet::new(),
    };
    let settings = carousel::RenderSettings {
        fonts,
        image_errors: if args.abort_on_missing_image {
            carousel::ImageErrorPolicy::Abort
        } else {
            carousel::ImageErrorPolicy::Placeholder
        },
    };
    let opts = carousel::ExportOpts {
        size,
        threading: carousel::ExportThreading {
            threads: args.threads,
            elide_identical: args.elide_identical,
        },
    };
    let loader = carousel::FsImageLoader::new(project_root(&args.in_path));

    let report = carousel::export_carousel(
        &project,
        &loader,
        &settings,
        &opts,
        &carousel::CancelToken::new(),
    )?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (idx, slide) in report.slides.iter().enumerate() {
        let carousel::SlideOutcome::Captured { png } = &slide.outcome else {
            continue;
        };
        let path = args.out_dir.join(format!("slide-{:02}.png", idx + 1));
        std::fs::write(&path, png).with_context(|| format!("write png '{}'", path.display()))?;
        let digest = sha2::Sha256::digest(png);
        println!("{}  {}", hex(&digest), path.display());
    }

    eprintln!(
        "rendered {} slides ({} elided) into {}",
        report.slides.len(),
        report.slides_elided,
        args.out_dir.display()
    );
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
