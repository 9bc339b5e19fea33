//! Vertical layout by ordinal rank of distance from the galactic center.
//!
//! Positions encode rank, not distance. Ranked stars split into those
//! closer to the center than the observer and those farther away; each
//! group is sorted by center distance and spread evenly over its own band.
//! Sagittarius A* and Sol keep fixed positions whatever the catalog holds.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::star::StarRole;

pub const GALACTIC_CENTER_Y: f64 = 0.7;
pub const OBSERVER_Y: f64 = 0.0;
/// Distance of the nearest rank from the observer row.
pub const RANK_INNER: f64 = 0.1;
/// Height of each rank band; bands cover `0.1..=0.57` and `-0.57..=-0.1`.
pub const RANK_SPAN: f64 = 0.47;
/// Position of a lone star in its band.
pub const RANK_MIDPOINT: f64 = 0.35;

/// Position of the `rank`-th closest (0 = nearest the center) of `count`
/// stars on the galactic-center side. Nearest the center sits highest.
pub fn closer_position(rank: usize, count: usize) -> f64 {
    if count <= 1 {
        return RANK_MIDPOINT;
    }
    let reversed = count - 1 - rank;
    RANK_INNER + reversed as f64 / (count - 1) as f64 * RANK_SPAN
}

/// Position of the `rank`-th closest of `count` stars on the anticenter
/// side. Nearest the observer sits just below it.
pub fn farther_position(rank: usize, count: usize) -> f64 {
    if count <= 1 {
        return -RANK_MIDPOINT;
    }
    -RANK_INNER - rank as f64 / (count - 1) as f64 * RANK_SPAN
}

/// Y positions for every star of a catalog, in catalog order.
#[derive(Debug, Clone)]
pub struct RankLayout {
    names: Vec<&'static str>,
    positions: Vec<f64>,
}

impl RankLayout {
    pub fn new(catalog: &Catalog) -> Self {
        let stars = catalog.stars();
        let reference = catalog.observer().galactic_center_distance();
        let mut positions = vec![OBSERVER_Y; stars.len()];

        let mut closer = Vec::new();
        let mut farther = Vec::new();
        for (i, star) in stars.iter().enumerate() {
            match star.role {
                StarRole::GalacticCenter => positions[i] = GALACTIC_CENTER_Y,
                StarRole::Observer => positions[i] = OBSERVER_Y,
                StarRole::Ranked => {
                    let d = star.galactic_center_distance();
                    match d.partial_cmp(&reference) {
                        Some(Ordering::Less) => closer.push((i, d)),
                        Some(Ordering::Greater) => farther.push((i, d)),
                        _ => tracing::debug!(star = star.name, "level with observer"),
                    }
                }
            }
        }

        // Stable sort: equal distances keep catalog order.
        closer.sort_by(|a, b| a.1.total_cmp(&b.1));
        farther.sort_by(|a, b| a.1.total_cmp(&b.1));

        for (rank, &(i, _)) in closer.iter().enumerate() {
            positions[i] = closer_position(rank, closer.len());
        }
        for (rank, &(i, _)) in farther.iter().enumerate() {
            positions[i] = farther_position(rank, farther.len());
        }

        Self {
            names: stars.iter().map(|s| s.name).collect(),
            positions,
        }
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn position(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| *n == name)
            .map(|i| self.positions[i])
    }
}
