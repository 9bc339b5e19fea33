use clap::Parser;
use cygni_arcana::config::default_output;
use cygni_arcana::{layout, plot, Catalog, ChartConfig, ImageFormat, Theme};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cygni-arcana")]
#[command(about = "Render the Cygni Arcana star-to-tarot chart")]
#[command(version)]
struct Cli {
    /// Color theme
    #[arg(long, value_enum, default_value = "dark")]
    theme: Theme,

    /// Image format
    #[arg(long, value_enum, default_value = "png")]
    format: ImageFormat,

    /// Output path (default: generated/cygni_arcana_plot_<theme>.<format>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Raster resolution
    #[arg(long, default_value = "300")]
    dpi: u32,

    /// Skip the terminal preview
    #[arg(long)]
    no_preview: bool,

    /// Log each placement
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            theme: self.theme,
            format: self.format,
            output: self
                .output
                .clone()
                .unwrap_or_else(|| default_output(self.theme, self.format)),
            dpi: self.dpi,
            ..ChartConfig::default()
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "cygni_arcana=debug"
    } else {
        "cygni_arcana=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.chart_config();
    if config.dpi == 0 {
        anyhow::bail!("--dpi must be positive");
    }
    let catalog = Catalog::builtin();
    let placements = layout::place_stars(&catalog, &config.thresholds);
    let path = plot::render(&placements, &config)?;

    if !cli.no_preview {
        println!("{}", plot::preview_terminal(&placements));
    }
    println!("Wrote {}", path.display());
    Ok(())
}
