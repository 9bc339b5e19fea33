pub mod bands;
pub mod ranking;

pub use bands::{categorize_distance_from_line, BandThresholds, LineBand};
pub use ranking::RankLayout;

use crate::catalog::Catalog;
use crate::star::StarRecord;
use crate::transform::LineOffset;

/// Where one star lands on the chart.
#[derive(Debug, Clone)]
pub struct Placement<'a> {
    pub star: &'a StarRecord,
    pub offset: LineOffset,
    pub band: LineBand,
    pub x: f64,
    pub y: f64,
}

/// Transforms, buckets and ranks every star, in catalog order.
pub fn place_stars<'a>(catalog: &'a Catalog, thresholds: &BandThresholds) -> Vec<Placement<'a>> {
    let ranks = RankLayout::new(catalog);
    catalog
        .stars()
        .iter()
        .zip(ranks.positions())
        .map(|(star, &y)| {
            let offset = star.offset();
            let band = thresholds.categorize(offset.perpendicular);
            tracing::debug!(
                star = star.name,
                perpendicular = offset.perpendicular,
                band = band.name(),
                y,
                "placed"
            );
            Placement {
                star,
                offset,
                band,
                x: band.plot_x(),
                y,
            }
        })
        .collect()
}
