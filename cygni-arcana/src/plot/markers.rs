//! Marker styling. Sizes are scatter areas in pt², as a plotting library
//! would take them, and converted to circle radii at render time.

use crate::star::{Rgb, StarRecord, StarRole};
use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerLayer {
    pub area_pt2: f64,
    pub fill: Option<Rgb>,
    pub edge: Option<Rgb>,
    pub edge_width_pt: f64,
    pub alpha: f64,
}

/// Layers for one star, drawn bottom to top.
pub fn marker_layers(star: &StarRecord, palette: &Palette) -> Vec<MarkerLayer> {
    match star.role {
        StarRole::GalacticCenter => vec![
            MarkerLayer {
                area_pt2: star.size * 12.0,
                fill: Some(palette.black_hole_glow),
                edge: None,
                edge_width_pt: 0.0,
                alpha: 0.4,
            },
            MarkerLayer {
                area_pt2: star.size * 10.0,
                fill: None,
                edge: Some(palette.black_hole_edge),
                edge_width_pt: 2.0,
                alpha: 1.0,
            },
            MarkerLayer {
                area_pt2: star.size * 6.0,
                fill: Some(palette.background),
                edge: Some(palette.black_hole_edge),
                edge_width_pt: 1.0,
                alpha: 1.0,
            },
        ],
        StarRole::Observer => vec![MarkerLayer {
            area_pt2: star.size * 10.0,
            fill: Some(star.color),
            edge: Some(palette.sol_edge),
            edge_width_pt: 2.0,
            alpha: 0.8,
        }],
        StarRole::Ranked => vec![MarkerLayer {
            area_pt2: star.size * 10.0,
            fill: Some(star.color),
            edge: Some(star.edge_color.unwrap_or(palette.text)),
            edge_width_pt: 1.0,
            alpha: 0.8,
        }],
    }
}

/// Horizontal gap between a marker and its label, in points.
pub fn label_offset_pt(star: &StarRecord) -> f64 {
    match star.role {
        StarRole::GalacticCenter => 36.0,
        _ => 16.0,
    }
}

/// Radius in pixels of a circle whose marker area is `area_pt2`.
pub fn radius_px(area_pt2: f64, dpi: u32) -> f64 {
    libm::sqrt(area_pt2) / 2.0 * f64::from(dpi) / 72.0
}
