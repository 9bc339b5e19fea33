//! Static chart decoration: limits, gridlines, the rotation arrow and the
//! anchor captions.

use crate::layout::LineBand;

pub const X_RANGE: (f64, f64) = (-2.4, 3.2);
pub const Y_RANGE: (f64, f64) = (-0.8, 0.8);

pub const TITLE: &str = "Cygni Arcana - Stars Mapped to Tarot Cards by Galactic Coordinates";
pub const Y_DESC: &str = "(GAC \u{2190} \u{2192} GC) Ordinal Distance Ranking";

pub const ARROW_START: (f64, f64) = (-1.5, -0.65);
pub const ARROW_END: (f64, f64) = (1.5, -0.65);
pub const ARROW_BEND: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptionStyle {
    Plain,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caption {
    pub text: &'static str,
    pub at: (f64, f64),
    pub size_pt: f64,
    pub style: CaptionStyle,
}

pub const CAPTIONS: [Caption; 3] = [
    Caption {
        text: "Milky Way Rotation Direction",
        at: (0.0, -0.685),
        size_pt: 10.0,
        style: CaptionStyle::Plain,
    },
    Caption {
        text: "\u{269B}\u{FE0E} GC",
        at: (0.0, 0.76),
        size_pt: 14.0,
        style: CaptionStyle::Accent,
    },
    Caption {
        text: "\u{2605} GAC",
        at: (0.0, -0.75),
        size_pt: 14.0,
        style: CaptionStyle::Accent,
    },
];

/// X positions of the vertical gridlines, one per band.
pub fn gridline_xs() -> impl Iterator<Item = f64> {
    LineBand::ALL.into_iter().map(LineBand::plot_x)
}

/// Pixels per data unit along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    pub x: f64,
    pub y: f64,
}

impl DisplayScale {
    pub fn for_pixels(width: u32, height: u32) -> Self {
        Self {
            x: f64::from(width) / (X_RANGE.1 - X_RANGE.0),
            y: f64::from(height) / (Y_RANGE.1 - Y_RANGE.0),
        }
    }

    fn to_display(self, p: (f64, f64)) -> (f64, f64) {
        (p.0 * self.x, p.1 * self.y)
    }

    fn to_data(self, p: (f64, f64)) -> (f64, f64) {
        (p.0 / self.x, p.1 / self.y)
    }
}

/// Samples a quadratic arc from `start` to `end`.
///
/// The control point sits `rad` times the chord length off the chord's
/// midpoint, to the right of the direction of travel, measured in display
/// space so the bend looks the same whatever the aspect ratio.
pub fn arc_points(
    start: (f64, f64),
    end: (f64, f64),
    rad: f64,
    scale: DisplayScale,
    samples: usize,
) -> Vec<(f64, f64)> {
    let (x1, y1) = scale.to_display(start);
    let (x2, y2) = scale.to_display(end);
    let (dx, dy) = (x2 - x1, y2 - y1);
    let cx = (x1 + x2) / 2.0 + rad * dy;
    let cy = (y1 + y2) / 2.0 - rad * dx;
    let n = samples.max(2);
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            let u = 1.0 - t;
            let px = u * u * x1 + 2.0 * u * t * cx + t * t * x2;
            let py = u * u * y1 + 2.0 * u * t * cy + t * t * y2;
            scale.to_data((px, py))
        })
        .collect()
}

/// The two wing tips of an arrow head at `tip`, opening toward `toward`.
pub fn arrow_head(
    tip: (f64, f64),
    toward: (f64, f64),
    length_px: f64,
    half_angle_deg: f64,
    scale: DisplayScale,
) -> [(f64, f64); 2] {
    let (tx, ty) = scale.to_display(tip);
    let (ox, oy) = scale.to_display(toward);
    let heading = libm::atan2(oy - ty, ox - tx);
    let spread = half_angle_deg.to_radians();
    [heading + spread, heading - spread].map(|a| {
        scale.to_data((
            tx + length_px * libm::cos(a),
            ty + length_px * libm::sin(a),
        ))
    })
}
