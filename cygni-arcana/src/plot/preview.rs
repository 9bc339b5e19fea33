use textplots::{Chart, Plot, Shape};

use crate::layout::Placement;

use super::furniture::X_RANGE;

/// Text rendition of the chart: a dot plot followed by one line per star.
pub fn preview_terminal(placements: &[Placement]) -> String {
    let title = "Cygni Arcana";
    if placements.is_empty() {
        return format!("{title}\n  (no stars)\n");
    }
    let points = to_f32_points(placements);
    let chart_body = render_chart(&points);
    let mut out = format!("{title}\n  rank vs distance from line\n{chart_body}\n");
    for p in sorted_by_rank(placements) {
        out.push_str(&format!(
            "  {:>+5.2} {:>+5.1}  {:<12} {}\n",
            p.y,
            p.x,
            p.band.name(),
            p.star.label()
        ));
    }
    out
}

fn render_chart(pts: &[(f32, f32)]) -> String {
    let shape = Shape::Points(pts);
    let mut chart = Chart::new(120, 48, X_RANGE.0 as f32, X_RANGE.1 as f32);
    let rendered = chart.lineplot(&shape);
    rendered.axis();
    rendered.figures();
    format!("{rendered}")
}

fn to_f32_points(placements: &[Placement]) -> Vec<(f32, f32)> {
    placements.iter().map(|p| (p.x as f32, p.y as f32)).collect()
}

fn sorted_by_rank<'a>(placements: &'a [Placement<'a>]) -> Vec<&'a Placement<'a>> {
    let mut rows: Vec<_> = placements.iter().collect();
    rows.sort_by(|a, b| b.y.total_cmp(&a.y));
    rows
}
