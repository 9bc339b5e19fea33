//! Horizontal bucketing by distance from the GC-Sol-GAC line.
//!
//! The chart mirrors rotation for left-to-right reading: stars ahead of
//! clockwise rotation (positive perpendicular offset) land on the negative
//! side, stars behind it on the positive side.

/// One of the seven discrete x positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineBand {
    FarAhead,
    Ahead,
    NearAhead,
    OnLine,
    NearBehind,
    Behind,
    FarBehind,
}

impl LineBand {
    pub const ALL: [LineBand; 7] = [
        LineBand::FarAhead,
        LineBand::Ahead,
        LineBand::NearAhead,
        LineBand::OnLine,
        LineBand::NearBehind,
        LineBand::Behind,
        LineBand::FarBehind,
    ];

    pub fn plot_x(self) -> f64 {
        match self {
            LineBand::FarAhead => -2.0,
            LineBand::Ahead => -1.0,
            LineBand::NearAhead => -0.5,
            LineBand::OnLine => 0.0,
            LineBand::NearBehind => 0.5,
            LineBand::Behind => 1.0,
            LineBand::FarBehind => 2.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LineBand::FarAhead => "far ahead",
            LineBand::Ahead => "ahead",
            LineBand::NearAhead => "near ahead",
            LineBand::OnLine => "on line",
            LineBand::NearBehind => "near behind",
            LineBand::Behind => "behind",
            LineBand::FarBehind => "far behind",
        }
    }
}

/// Upper bounds (exclusive, light-years) of the inner bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandThresholds {
    pub on_line: f64,
    pub near: f64,
    pub moderate: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            on_line: 1.0,
            near: 12.0,
            moderate: 70.0,
        }
    }
}

impl BandThresholds {
    pub fn categorize(&self, perpendicular_ly: f64) -> LineBand {
        let magnitude = perpendicular_ly.abs();
        let ahead = perpendicular_ly >= 0.0;
        if magnitude < self.on_line {
            LineBand::OnLine
        } else if magnitude < self.near {
            if ahead { LineBand::NearAhead } else { LineBand::NearBehind }
        } else if magnitude < self.moderate {
            if ahead { LineBand::Ahead } else { LineBand::Behind }
        } else if ahead {
            LineBand::FarAhead
        } else {
            LineBand::FarBehind
        }
    }
}

/// Plot x coordinate for a perpendicular offset under the default thresholds.
pub fn categorize_distance_from_line(perpendicular_ly: f64) -> f64 {
    BandThresholds::default().categorize(perpendicular_ly).plot_x()
}
