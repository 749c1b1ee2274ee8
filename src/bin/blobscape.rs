use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "blobscape", version)]
struct Cli {
    /// Log debug events to stderr (otherwise `RUST_LOG`, default `warn`).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one SVG per built-in recipe into a directory.
    Batch(BatchArgs),
    /// Write a single recipe's SVG.
    Render(RenderArgs),
    /// List recipes and presets.
    List,
}

#[derive(Args, Debug)]
struct BaseArgs {
    /// Scene seed; the same seed always reproduces the same scene.
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Named base preset (see `list`).
    #[arg(long, conflicts_with = "base")]
    preset: Option<String>,

    /// Base scene config JSON.
    #[arg(long)]
    base: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    #[command(flatten)]
    base: BaseArgs,

    /// Output directory.
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// Also write a still PNG preview next to each SVG.
    #[arg(long)]
    png: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    base: BaseArgs,

    /// Recipe name (see `list`).
    #[arg(long)]
    recipe: String,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write a still PNG preview to this path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Also write the generated scene config as JSON to this path.
    #[arg(long)]
    config_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Batch(args) => cmd_batch(args),
        Command::Render(args) => cmd_render(args),
        Command::List => cmd_list(),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_base(args: &BaseArgs) -> anyhow::Result<blobscape::SceneConfig> {
    if let Some(path) = &args.base {
        let base = blobscape::SceneConfig::from_path(path)
            .with_context(|| format!("load base config '{}'", path.display()))?;
        base.validate()
            .with_context(|| format!("validate base config '{}'", path.display()))?;
        return Ok(base);
    }
    match &args.preset {
        Some(name) => blobscape::preset(name).with_context(|| {
            format!(
                "unknown preset '{name}' (known: {})",
                blobscape::PRESET_NAMES.join(", ")
            )
        }),
        None => Ok(blobscape::default_base()),
    }
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let base = load_base(&args.base)?;
    let registry = blobscape::RecipeRegistry::builtin();

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let total = registry.len();
    for (i, name) in registry.names().enumerate() {
        let generated = blobscape::generate(&registry, name, &base, args.base.seed)
            .with_context(|| format!("generate '{name}'"))?;
        let svg = generated.document.to_svg();

        let path = args.out.join(format!("{name}.svg"));
        write_text(&path, &svg)?;
        if args.png {
            write_png(&path.with_extension("png"), &svg)?;
        }

        println!(
            "[{}/{total}] {name}: {} shapes -> {} (sha256 {})",
            i + 1,
            generated.config.shapes.len(),
            path.display(),
            sha256_hex(svg.as_bytes())
        );
    }

    println!("done: {total} scenes in {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let base = load_base(&args.base)?;
    let registry = blobscape::RecipeRegistry::builtin();

    let generated = blobscape::generate(&registry, &args.recipe, &base, args.base.seed)?;
    let svg = generated.document.to_svg();
    write_text(&args.out, &svg)?;

    if let Some(png) = &args.png {
        write_png(png, &svg)?;
    }
    if let Some(path) = &args.config_out {
        let json = generated.config.to_json_pretty()?;
        write_text(path, &json)?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    println!("recipes:");
    for r in blobscape::RecipeRegistry::builtin().iter() {
        println!(
            "  {:<10} {:>2}-{:<2} shapes  {}",
            r.name, r.min_shapes, r.max_shapes, r.description
        );
    }
    println!("presets:");
    for name in blobscape::PRESET_NAMES {
        if let Some(p) = blobscape::preset(name) {
            println!("  {:<10} {}x{}", name, p.width, p.height);
        }
    }
    Ok(())
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}

fn write_png(path: &Path, svg: &str) -> anyhow::Result<()> {
    let image = blobscape::rasterize_svg(svg).context("rasterize preview")?;
    image
        .save_png(path)
        .with_context(|| format!("write png '{}'", path.display()))
}

fn sha256_hex(bytes: &[u8]) -> String {
    sha2::Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
