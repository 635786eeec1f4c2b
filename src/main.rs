use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anyhow::Context;
use zx_dither::{
    AttributeStrategy, ColourMode, DitherAlgorithm, GigaScreenStrategy, HsbOption, Named,
    Scaling,
};
use zx_screen::models::config::DEFAULT_CONFIG_FILE;
use zx_screen::models::AppConfig;
use zx_screen::services::ConversionService;

#[derive(Parser)]
#[command(name = "zx-screen")]
#[command(about = "Convert images to ZX Spectrum screens")]
struct Cli {
    /// Config file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PNG image
    Convert(ConvertArgs),
    /// Write a default config.yaml
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
    /// List selectable algorithms, modes and strategies
    List,
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Input PNG file
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Dither algorithm (see `zx-screen list`)
    #[arg(long, value_parser = parse_named::<DitherAlgorithm>)]
    dither: Option<DitherAlgorithm>,

    /// Colour mode: full-palette, gigascreen or monochrome
    #[arg(long, value_parser = parse_named::<ColourMode>)]
    colour_mode: Option<ColourMode>,

    /// Attribute strategy
    #[arg(long, value_parser = parse_named::<AttributeStrategy>)]
    attribute: Option<AttributeStrategy>,

    /// GigaScreen strategy
    #[arg(long, value_parser = parse_named::<GigaScreenStrategy>)]
    giga_strategy: Option<GigaScreenStrategy>,

    /// GigaScreen flicker reorder option
    #[arg(long, value_parser = parse_named::<HsbOption>)]
    hsb: Option<HsbOption>,

    /// Alternate error diffusion row direction
    #[arg(long)]
    serpentine: bool,

    /// Keep diffused error inside each 8x8 block
    #[arg(long)]
    constrained: bool,

    /// Snap very dark and very light pixels to black and white
    #[arg(long)]
    prefer_detail: bool,

    /// Monochrome channel-sum threshold (0-765)
    #[arg(long)]
    black_threshold: Option<u32>,

    /// Monochrome ink colour index (0-7)
    #[arg(long)]
    ink: Option<u8>,

    /// Monochrome paper colour index (0-7)
    #[arg(long)]
    paper: Option<u8>,

    /// Ordered dither intensity
    #[arg(long)]
    intensity: Option<f32>,

    /// Contrast multiplier
    #[arg(long)]
    contrast: Option<f32>,

    /// Brightness offset
    #[arg(long, allow_hyphen_values = true)]
    brightness: Option<f32>,

    /// Saturation offset
    #[arg(long, allow_hyphen_values = true)]
    saturation: Option<f32>,

    /// Initial resample: none, screen, width-proportional or height-proportional
    #[arg(long, value_parser = parse_named::<Scaling>)]
    scaling: Option<Scaling>,

    /// Write a .scr screen dump
    #[arg(long)]
    scr: bool,

    /// Write a JSON report
    #[arg(long)]
    report: bool,

    /// Write a text rendering built from ROM glyphs
    #[arg(long)]
    text: bool,
}

fn parse_named<T: Named>(s: &str) -> Result<T, String> {
    T::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = T::ALL.iter().map(|v| v.name()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zx_screen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = AppConfig::resolve_path(cli.config);

    match cli.command {
        Some(Commands::Convert(args)) => run_convert_command(config_path.as_deref(), args),
        Some(Commands::Init { force }) => run_init_command(config_path.as_deref(), force),
        Some(Commands::List) => {
            run_list_command();
            Ok(())
        }
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

/// Convert one PNG file
fn run_convert_command(config_path: Option<&Path>, args: ConvertArgs) -> anyhow::Result<()> {
    let mut config = AppConfig::load(config_path);
    apply_overrides(&mut config, &args);

    let service = ConversionService::new(config);
    let report = service
        .convert_file(&args.input, args.output.as_deref())
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    for path in &report.outputs {
        println!("  + {}", path.display());
    }
    Ok(())
}

/// CLI flags win over config file values
fn apply_overrides(config: &mut AppConfig, args: &ConvertArgs) {
    let conv = &mut config.conversion;
    if let Some(v) = args.dither {
        conv.dither = v;
    }
    if let Some(v) = args.colour_mode {
        conv.colour_mode = v;
    }
    if let Some(v) = args.attribute {
        conv.attribute = v;
    }
    if let Some(v) = args.giga_strategy {
        conv.giga_strategy = v;
    }
    if let Some(v) = args.hsb {
        conv.hsb_option = v;
    }
    conv.serpentine |= args.serpentine;
    conv.constrained |= args.constrained;
    conv.prefer_detail |= args.prefer_detail;
    if let Some(v) = args.black_threshold {
        conv.black_threshold = v;
    }
    if let Some(v) = args.ink {
        conv.mono_ink = v;
    }
    if let Some(v) = args.paper {
        conv.mono_paper = v;
    }
    if let Some(v) = args.intensity {
        conv.intensity = v;
    }

    let pre = &mut config.preprocess;
    if let Some(v) = args.contrast {
        pre.contrast = v;
    }
    if let Some(v) = args.brightness {
        pre.brightness = v;
    }
    if let Some(v) = args.saturation {
        pre.saturation = v;
    }
    if let Some(v) = args.scaling {
        pre.scaling = v;
    }

    config.output.scr |= args.scr;
    config.output.report |= args.report;
    config.output.text |= args.text;
}

/// Write the default configuration
fn run_init_command(config_path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    if path.exists() && !force {
        println!(
            "Skipped existing {} (use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }
    let yaml = AppConfig::default().to_yaml()?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  + {}", path.display());
    Ok(())
}

/// Print every selectable option name
fn run_list_command() {
    fn section<T: Named + PartialEq + Default>(title: &str) {
        println!("{title}:");
        for &v in T::ALL {
            let marker = if v == T::default() { " (default)" } else { "" };
            println!("  {}{marker}", v.name());
        }
        println!();
    }

    section::<DitherAlgorithm>("Dither algorithms");
    section::<ColourMode>("Colour modes");
    section::<AttributeStrategy>("Attribute strategies");
    section::<GigaScreenStrategy>("GigaScreen strategies");
    section::<HsbOption>("GigaScreen HSB options");
    section::<Scaling>("Scaling modes");
}

/// Display status and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("zx-screen v{VERSION}");
    println!("ZX Spectrum screen converter\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        rust_log.as_deref().unwrap_or("zx_screen=warn (default)")
    );

    let source = match config_path {
        Some(p) if p.exists() => p.display().to_string(),
        Some(p) => format!("defaults ({} not found)", p.display()),
        None => "defaults".to_string(),
    };
    println!("\nConfiguration:");
    println!("  Source:      {source}");

    let config = AppConfig::load(config_path);
    let conv = &config.conversion;
    println!("  Dither:      {}", conv.dither);
    println!("  Colour mode: {}", conv.colour_mode);
    println!("  Attributes:  {}", conv.attribute);
    println!("  Scaling:     {}", config.preprocess.scaling);

    println!("\nCommands:");
    println!("  zx-screen convert   Convert a PNG image");
    println!("  zx-screen init      Write a default config.yaml");
    println!("  zx-screen list      List algorithms and strategies");
    println!("\nRun 'zx-screen --help' for more details.");
}
