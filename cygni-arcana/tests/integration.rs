use cygni_arcana::layout::ranking::{GALACTIC_CENTER_Y, OBSERVER_Y};
use cygni_arcana::layout::{categorize_distance_from_line, place_stars, BandThresholds, LineBand};
use cygni_arcana::transform::{galactic_to_cartesian_x, project};
use cygni_arcana::{plot, Catalog, ChartConfig, ImageFormat, Rgb, StarRecord, StarRole, Theme};

fn star(name: &'static str, distance_ly: f64, longitude_deg: f64, role: StarRole) -> StarRecord {
    StarRecord {
        name,
        distance_ly,
        longitude_deg,
        latitude_deg: None,
        size: 25.0,
        tarot: "Card",
        roman: "I",
        color: Rgb::hex(0xFFFFFF),
        edge_color: None,
        center_distance_ly: None,
        role,
    }
}

fn anchors() -> Vec<StarRecord> {
    vec![
        star("Sagittarius A*", 26000.0, 0.0, StarRole::GalacticCenter),
        star("Sol", 0.0, 0.0, StarRole::Observer),
    ]
}

// --- Transform and bucketing ---

#[test]
fn antares_end_to_end() {
    let x = galactic_to_cartesian_x(550.0, 351.0);
    assert!((x + 86.0).abs() < 0.1);
    assert_eq!(categorize_distance_from_line(x), 2.0);
}

#[test]
fn every_builtin_star_lands_on_a_band() {
    let allowed: Vec<f64> = LineBand::ALL.iter().map(|b| b.plot_x()).collect();
    let catalog = Catalog::builtin();
    for p in place_stars(&catalog, &BandThresholds::default()) {
        assert!(allowed.contains(&p.x), "{} at {}", p.star.name, p.x);
    }
}

#[test]
fn threshold_boundary_is_strict() {
    assert_ne!(categorize_distance_from_line(1.0), 0.0);
    assert_eq!(categorize_distance_from_line(0.999), 0.0);
}

// --- Ranking ---

#[test]
fn anchors_fixed_for_any_catalog() {
    let mut stars = anchors();
    for (i, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
        stars.push(star(name, 100.0 * (i + 1) as f64, 90.0 * i as f64, StarRole::Ranked));
    }
    let catalog = Catalog::new(stars).unwrap();
    let placements = place_stars(&catalog, &BandThresholds::default());
    assert_eq!(placements[0].y, GALACTIC_CENTER_Y);
    assert_eq!(placements[1].y, OBSERVER_Y);
}

#[test]
fn derived_center_distance_partitions_by_longitude() {
    // Without precomputed distances, longitude 0 is toward the center and
    // 180 away from it.
    let mut stars = anchors();
    stars.push(star("toward", 500.0, 10.0, StarRole::Ranked));
    stars.push(star("away", 500.0, 170.0, StarRole::Ranked));
    stars.push(star("farther away", 900.0, 180.0, StarRole::Ranked));
    let catalog = Catalog::new(stars).unwrap();
    let placements = place_stars(&catalog, &BandThresholds::default());
    let y = |name: &str| placements.iter().find(|p| p.star.name == name).unwrap().y;
    assert_eq!(y("toward"), 0.35);
    assert!((y("away") + 0.1).abs() < 1e-12);
    assert!((y("farther away") + 0.57).abs() < 1e-12);
}

#[test]
fn builtin_ranks_are_monotonic_in_center_distance() {
    let catalog = Catalog::builtin();
    let placements = place_stars(&catalog, &BandThresholds::default());
    let mut ranked: Vec<_> = placements
        .iter()
        .filter(|p| !p.star.is_anchor())
        .collect();
    ranked.sort_by(|a, b| b.y.total_cmp(&a.y));
    for pair in ranked.windows(2) {
        assert!(
            pair[0].star.galactic_center_distance() <= pair[1].star.galactic_center_distance(),
            "{} above {}",
            pair[0].star.name,
            pair[1].star.name
        );
    }
    assert!(ranked.iter().all(|p| p.y.abs() >= 0.1 - 1e-12 && p.y.abs() <= 0.57 + 1e-12));
}

#[test]
fn latitude_reduces_projected_offset() {
    let flat = project(1500.0, 80.0, None);
    let raised = project(1500.0, 80.0, Some(2.0));
    assert!(raised.perpendicular < flat.perpendicular);
    assert!(raised.perpendicular > 0.99 * flat.perpendicular);
}

// --- Rendering ---

#[test]
fn render_light_svg() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::builtin();
    let config = ChartConfig {
        theme: Theme::Light,
        format: ImageFormat::Svg,
        output: dir.path().join("plot_light.svg"),
        dpi: 30,
        ..ChartConfig::default()
    };
    let placements = place_stars(&catalog, &config.thresholds);
    let path = plot::render(&placements, &config).unwrap();
    let svg = std::fs::read_to_string(path).unwrap();
    assert!(svg.contains("Sol (0 ly) The Sun (XIX)"));
    assert!(svg.contains("Milky Way Rotation Direction"));
}

#[test]
fn render_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("generated").join("cygni_arcana_plot_dark.png");
    let config = ChartConfig {
        output: output.clone(),
        dpi: 30,
        ..ChartConfig::default()
    };
    let catalog = Catalog::builtin();
    let placements = place_stars(&catalog, &config.thresholds);
    plot::render(&placements, &config).unwrap();
    assert!(output.exists());
}

#[test]
fn preview_mentions_every_tarot_card() {
    let catalog = Catalog::builtin();
    let placements = place_stars(&catalog, &BandThresholds::default());
    let text = plot::preview_terminal(&placements);
    for s in catalog.stars() {
        assert!(text.contains(s.tarot), "missing {}", s.tarot);
    }
}
