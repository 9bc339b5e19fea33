//! Star records and the small value types they carry.

use std::fmt;

use crate::catalog::GALACTIC_CENTER_DISTANCE_LY;
use crate::transform::{self, LineOffset};

/// 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// How a record takes part in the layout.
///
/// The two anchors get pinned chart positions; everything else is ranked
/// relative to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarRole {
    GalacticCenter,
    Observer,
    #[default]
    Ranked,
}

/// One catalog entry. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    pub name: &'static str,
    /// Distance from Sol, in light-years.
    pub distance_ly: f64,
    /// Galactic longitude in degrees. 0° points from Sol towards the center.
    pub longitude_deg: f64,
    /// Galactic latitude in degrees. `None` keeps the star in the plane.
    pub latitude_deg: Option<f64>,
    /// Marker scaling factor.
    pub size: f64,
    pub tarot: &'static str,
    pub roman: &'static str,
    pub color: Rgb,
    /// Overrides the theme's marker edge color for ranked stars.
    pub edge_color: Option<Rgb>,
    /// Precomputed distance from the galactic center, in light-years.
    pub center_distance_ly: Option<f64>,
    pub role: StarRole,
}

impl StarRecord {
    pub fn offset(&self) -> LineOffset {
        transform::project(self.distance_ly, self.longitude_deg, self.latitude_deg)
    }

    /// Ranking measure for the vertical layout.
    ///
    /// Uses the precomputed value when the record has one and otherwise
    /// measures along the GC-Sol line.
    pub fn galactic_center_distance(&self) -> f64 {
        self.center_distance_ly
            .unwrap_or_else(|| GALACTIC_CENTER_DISTANCE_LY - self.offset().along)
    }

    pub fn is_anchor(&self) -> bool {
        self.role != StarRole::Ranked
    }

    pub fn label(&self) -> String {
        format!(
            "{} ({} ly) {} ({})",
            self.name.trim(),
            self.distance_ly,
            self.tarot,
            self.roman
        )
    }
}
