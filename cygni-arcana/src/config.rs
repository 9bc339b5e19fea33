use std::path::PathBuf;

use clap::ValueEnum;

use crate::layout::BandThresholds;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Everything the renderer needs besides the placements themselves.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub theme: Theme,
    pub format: ImageFormat,
    pub output: PathBuf,
    pub dpi: u32,
    pub width_in: f64,
    pub height_in: f64,
    pub thresholds: BandThresholds,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let theme = Theme::default();
        let format = ImageFormat::default();
        Self {
            theme,
            format,
            output: default_output(theme, format),
            dpi: 300,
            width_in: 16.0,
            height_in: 12.0,
            thresholds: BandThresholds::default(),
        }
    }
}

impl ChartConfig {
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    /// Converts typographic points to pixels at the configured DPI.
    pub fn px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }
}

pub fn default_output(theme: Theme, format: ImageFormat) -> PathBuf {
    PathBuf::from("generated").join(format!(
        "cygni_arcana_plot{}.{}",
        theme.suffix(),
        format.extension()
    ))
}
