use std::fs;
use std::path::PathBuf;

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::config::{ChartConfig, ImageFormat};
use crate::error::{Error, Result};
use crate::layout::Placement;
use crate::star::Rgb;
use crate::theme::{Palette, ACCENT};

use super::furniture::{self, CaptionStyle, DisplayScale};
use super::markers::{label_offset_pt, marker_layers, radius_px, MarkerLayer};

type PlotResult = std::result::Result<(), Box<dyn std::error::Error>>;
type StarChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const ARC_SAMPLES: usize = 64;

/// Draws the chart and writes it to `config.output`.
pub fn render(placements: &[Placement], config: &ChartConfig) -> Result<PathBuf> {
    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let size = config.pixel_size();
    let drawn = match config.format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(&config.output, size).into_drawing_area();
            draw(&root, placements, config)
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(&config.output, size).into_drawing_area();
            draw(&root, placements, config)
        }
    };
    drawn.map_err(|e| Error::Render(e.to_string()))?;
    tracing::info!(path = %config.output.display(), width = size.0, height = size.1, "wrote chart");
    Ok(config.output.clone())
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

fn font(config: &ChartConfig, size_pt: f64, bold: bool) -> FontDesc<'static> {
    let style = if bold { FontStyle::Bold } else { FontStyle::Normal };
    FontDesc::new(FontFamily::SansSerif, config.px(size_pt), style)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    placements: &[Placement],
    config: &ChartConfig,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let palette = config.theme.palette();
    root.fill(&rgb(palette.background))?;
    let mut chart = build_chart(root, config, &palette)?;
    draw_gridlines(&mut chart, config, &palette)?;
    for placement in placements {
        draw_star(&mut chart, placement, config, &palette)?;
    }
    draw_rotation_arrow(&mut chart, config)?;
    draw_captions(&mut chart, config, &palette)?;
    root.present()?;
    Ok(())
}

fn build_chart<'a, DB: DrawingBackend + 'a>(
    area: &'a DrawingArea<DB, Shift>,
    config: &ChartConfig,
    palette: &Palette,
) -> std::result::Result<StarChart<'a, DB>, Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    let text = rgb(palette.text);
    let mut chart = ChartBuilder::on(area)
        .caption(furniture::TITLE, font(config, 14.0, true).color(&text))
        .margin(config.px(12.0) as u32)
        .y_label_area_size(config.px(24.0) as u32)
        .build_cartesian_2d(
            furniture::X_RANGE.0..furniture::X_RANGE.1,
            furniture::Y_RANGE.0..furniture::Y_RANGE.1,
        )?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_labels(0)
        .y_desc(furniture::Y_DESC)
        .axis_desc_style(font(config, 12.0, false).color(&text))
        .axis_style(text.stroke_width(config.px(0.8).max(1.0) as u32))
        .draw()?;
    Ok(chart)
}

fn draw_gridlines<DB: DrawingBackend>(
    chart: &mut StarChart<DB>,
    config: &ChartConfig,
    palette: &Palette,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let (y0, y1) = furniture::Y_RANGE;
    let width = config.px(0.5).max(1.0) as u32;
    for x in furniture::gridline_xs() {
        if x == 0.0 {
            let dash = config.px(3.7) as u32;
            chart.draw_series(std::iter::once(DashedPathElement::new(
                vec![(x, y0), (x, y1)],
                dash,
                dash / 2 + 1,
                rgb(ACCENT).mix(0.8).stroke_width(width),
            )))?;
        } else {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x, y0), (x, y1)],
                rgb(palette.grid).mix(0.3).stroke_width(width),
            )))?;
        }
    }
    Ok(())
}

fn draw_star<DB: DrawingBackend>(
    chart: &mut StarChart<DB>,
    placement: &Placement,
    config: &ChartConfig,
    palette: &Palette,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let at = (placement.x, placement.y);
    for layer in marker_layers(placement.star, palette) {
        draw_layer(chart, at, &layer, config)?;
    }
    let style = font(config, 10.0, false)
        .color(&rgb(palette.text))
        .pos(Pos::new(HPos::Left, VPos::Center));
    let dx = config.px(label_offset_pt(placement.star)) as i32;
    chart.draw_series(std::iter::once(
        EmptyElement::at(at) + Text::new(placement.star.label(), (dx, 0), style),
    ))?;
    Ok(())
}

fn draw_layer<DB: DrawingBackend>(
    chart: &mut StarChart<DB>,
    at: (f64, f64),
    layer: &MarkerLayer,
    config: &ChartConfig,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let radius = radius_px(layer.area_pt2, config.dpi).round().max(1.0) as u32;
    if let Some(fill) = layer.fill {
        let style = ShapeStyle {
            color: rgb(fill).mix(layer.alpha),
            filled: true,
            stroke_width: 0,
        };
        chart.draw_series(std::iter::once(Circle::new(at, radius, style)))?;
    }
    if let Some(edge) = layer.edge {
        let style = ShapeStyle {
            color: rgb(edge).mix(layer.alpha),
            filled: false,
            stroke_width: config.px(layer.edge_width_pt).round().max(1.0) as u32,
        };
        chart.draw_series(std::iter::once(Circle::new(at, radius, style)))?;
    }
    Ok(())
}

fn draw_rotation_arrow<DB: DrawingBackend>(
    chart: &mut StarChart<DB>,
    config: &ChartConfig,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let (w, h) = config.pixel_size();
    let scale = DisplayScale::for_pixels(w, h);
    let points = furniture::arc_points(
        furniture::ARROW_START,
        furniture::ARROW_END,
        furniture::ARROW_BEND,
        scale,
        ARC_SAMPLES,
    );
    let style = rgb(ACCENT).mix(0.6).stroke_width(config.px(1.0).max(1.0) as u32);
    let dash = config.px(3.7) as u32;
    let wings = furniture::arrow_head(points[0], points[1], config.px(8.0), 25.0, scale);
    chart.draw_series(std::iter::once(DashedPathElement::new(
        points,
        dash,
        dash / 2 + 1,
        style,
    )))?;
    chart.draw_series(wings.iter().map(|&wing| {
        PathElement::new(vec![furniture::ARROW_START, wing], style)
    }))?;
    Ok(())
}

fn draw_captions<DB: DrawingBackend>(
    chart: &mut StarChart<DB>,
    config: &ChartConfig,
    palette: &Palette,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    for caption in furniture::CAPTIONS {
        let (color, bold) = match caption.style {
            CaptionStyle::Plain => (palette.text, false),
            CaptionStyle::Accent => (ACCENT, true),
        };
        let style = font(config, caption.size_pt, bold)
            .color(&rgb(color))
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(std::iter::once(Text::new(caption.text, caption.at, style)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::layout::{place_stars, BandThresholds};
    use crate::theme::Theme;

    fn small_config(dir: &std::path::Path, theme: Theme, format: ImageFormat) -> ChartConfig {
        ChartConfig {
            theme,
            format,
            output: dir.join("nested").join(format!("chart.{}", format.extension())),
            dpi: 40,
            ..ChartConfig::default()
        }
    }

    #[test]
    fn svg_written_with_labels() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin();
        let placements = place_stars(&catalog, &BandThresholds::default());
        let config = small_config(dir.path(), Theme::Light, ImageFormat::Svg);
        let path = render(&placements, &config).unwrap();
        assert_eq!(path, config.output);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
        assert!(contents.contains("Antares (550 ly) The Hierophant (V)"));
        assert!(contents.contains("Cygni Arcana"));
    }

    #[test]
    fn png_written_with_expected_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin();
        let placements = place_stars(&catalog, &BandThresholds::default());
        let config = small_config(dir.path(), Theme::Dark, ImageFormat::Png);
        let path = render(&placements, &config).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        assert_eq!((width, height), config.pixel_size());
    }

    #[test]
    fn rgb_conversion() {
        assert_eq!(rgb(Rgb::hex(0x228B22)), RGBColor(0x22, 0x8B, 0x22));
    }
}
