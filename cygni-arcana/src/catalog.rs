//! The star catalog: an immutable, ordered list of [`StarRecord`]s.
//!
//! [`Catalog::builtin`] is the hand-authored Cygni Arcana table. Other
//! catalogs go through [`Catalog::new`], which checks the invariants the
//! layout relies on: unique names and exactly one of each anchor.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::star::{Rgb, StarRecord, StarRole};

/// Sol's distance from the galactic center, in light-years.
pub const GALACTIC_CENTER_DISTANCE_LY: f64 = 26000.0;

#[derive(Debug, Clone)]
pub struct Catalog {
    stars: Vec<StarRecord>,
    galactic_center: usize,
    observer: usize,
}

impl Catalog {
    pub fn new(stars: Vec<StarRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for star in &stars {
            if !seen.insert(star.name) {
                return Err(Error::Catalog(format!("duplicate star name: {}", star.name)));
            }
        }
        let galactic_center = single_role(&stars, StarRole::GalacticCenter)?;
        let observer = single_role(&stars, StarRole::Observer)?;
        Ok(Self {
            stars,
            galactic_center,
            observer,
        })
    }

    /// The Cygni Arcana table, Sagittarius A* first and Sol second.
    pub fn builtin() -> Self {
        Self {
            stars: builtin_stars(),
            galactic_center: 0,
            observer: 1,
        }
    }

    pub fn stars(&self) -> &[StarRecord] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&StarRecord> {
        self.stars.iter().find(|s| s.name == name)
    }

    pub fn galactic_center(&self) -> &StarRecord {
        &self.stars[self.galactic_center]
    }

    pub fn observer(&self) -> &StarRecord {
        &self.stars[self.observer]
    }
}

fn single_role(stars: &[StarRecord], role: StarRole) -> Result<usize> {
    let mut found = stars
        .iter()
        .enumerate()
        .filter(|(_, s)| s.role == role)
        .map(|(i, _)| i);
    match (found.next(), found.next()) {
        (Some(i), None) => Ok(i),
        (None, _) => Err(Error::Catalog(format!("no {role:?} anchor"))),
        (Some(_), Some(_)) => Err(Error::Catalog(format!("more than one {role:?} anchor"))),
    }
}

#[allow(clippy::too_many_arguments)]
fn ranked(
    name: &'static str,
    distance_ly: f64,
    longitude_deg: f64,
    size: f64,
    tarot: &'static str,
    roman: &'static str,
    center_distance_ly: f64,
    color: u32,
) -> StarRecord {
    StarRecord {
        name,
        distance_ly,
        longitude_deg,
        latitude_deg: None,
        size,
        tarot,
        roman,
        color: Rgb::hex(color),
        edge_color: None,
        center_distance_ly: Some(center_distance_ly),
        role: StarRole::Ranked,
    }
}

fn builtin_stars() -> Vec<StarRecord> {
    vec![
        StarRecord {
            role: StarRole::GalacticCenter,
            ..ranked("Sagittarius A*", 26000.0, 0.0, 60.0, "Wheel of Fortune", "X", 0.0, 0x000000)
        },
        StarRecord {
            role: StarRole::Observer,
            ..ranked("Sol", 0.0, 0.0, 40.0, "The Sun", "XIX", 26000.0, 0xFFFF00)
        },
        ranked("T Coronae Borealis", 3000.0, 55.0, 30.0, "Judgment", "XX", 18000.0, 0xFFFFFF),
        ranked("Sheliak", 960.0, 63.0, 25.0, "The Moon", "XVIII", 25040.0, 0x1C1CF0),
        ranked("Antares", 550.0, 351.0, 50.0, "The Hierophant", "V", 25450.0, 0xFF4500),
        ranked("Deneb", 1500.0, 80.0, 50.0, "The High Priestess", "II", 25780.0, 0xCFE2F3),
        ranked("Polaris", 433.0, 123.0, 25.0, "The Hermit", "IX", 25567.0, 0xF0E68C),
        ranked("Albireo", 430.0, 62.0, 25.0, "The Lovers", "VI", 25570.0, 0xFFD700),
        ranked("Spica", 250.0, 316.0, 25.0, "Strength", "VIII", 25750.0, 0x7B68EE),
        ranked("Achernar", 139.0, 290.0, 25.0, "The Hanged Man", "XII", 25862.0, 0x00BFFF),
        ranked("Zubenelgenubi", 77.0, 347.0, 25.0, "Justice", "XI", 25923.0, 0xFFFFE0),
        ranked("Arcturus", 36.7, 15.0, 30.0, "The Magician", "I", 25963.0, 0xFF8C00),
        ranked("Fomalhaut", 25.0, 20.0, 20.0, "The Star", "XVII", 25975.0, 0xFFFFFF),
        ranked("Vega", 25.0, 67.0, 20.0, "The Empress", "III", 25975.0, 0xE0FFFF),
        ranked("Alpha Centauri", 4.37, 315.0, 20.0, "The World", "XXI", 25996.0, 0xFFD700),
        ranked("Sirius", 8.6, 227.0, 20.0, "The Fool", "0", 26008.0, 0xADD8E6),
        ranked("Tau Ceti", 12.0, 172.0, 20.0, "Temperance", "XIV", 26012.0, 0xF5DEB3),
        ranked("Capella", 42.9, 162.0, 25.0, "The Chariot", "VII", 26042.0, 0xFFDAB9),
        ranked("Regulus", 79.0, 226.0, 25.0, "The Emperor", "IV", 26078.0, 0xA9A9F5),
        ranked("Algol", 93.0, 151.0, 25.0, "The Devil", "XV", 26092.0, 0xFF6347),
        ranked("Mira", 420.0, 171.0, 30.0, "Death", "XIII", 26420.0, 0xFF4500),
        ranked("Betelgeuse", 642.0, 199.0, 50.0, "The Tower", "XVI", 26641.0, 0xFF4500),
        // Minor arcana suits
        ranked("Eltanin", 154.0, 94.0, 25.0, "Wands", "\u{2663}", 26154.0, 0xFF4500),
        ranked("Thuban", 309.0, 96.0, 25.0, "Cups", "\u{2665}", 26309.0, 0xADD8E6),
        ranked("Algenib", 390.0, 162.0, 25.0, "Swords", "\u{2660}", 26390.0, 0xFFD700),
        ranked("Markab", 140.0, 139.0, 25.0, "Pentacles", "\u{2666}", 26140.0, 0x228B22),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_passes_validation() {
        let checked = Catalog::new(builtin_stars()).unwrap();
        let builtin = Catalog::builtin();
        assert_eq!(checked.len(), 26);
        assert_eq!(checked.galactic_center(), builtin.galactic_center());
        assert_eq!(checked.observer(), builtin.observer());
    }

    #[test]
    fn builtin_anchors() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.galactic_center().name, "Sagittarius A*");
        assert_eq!(catalog.observer().name, "Sol");
        assert_eq!(
            catalog.observer().galactic_center_distance(),
            GALACTIC_CENTER_DISTANCE_LY
        );
    }

    #[test]
    fn get_by_name() {
        let catalog = Catalog::builtin();
        let antares = catalog.get("Antares").unwrap();
        assert_eq!(antares.distance_ly, 550.0);
        assert_eq!(antares.longitude_deg, 351.0);
        assert!(catalog.get("Proxima").is_none());
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut stars = builtin_stars();
        stars.push(stars[4].clone());
        let err = Catalog::new(stars).unwrap_err();
        assert!(err.to_string().contains("duplicate star name: Antares"));
    }

    #[test]
    fn missing_anchor_rejected() {
        let stars: Vec<_> = builtin_stars()
            .into_iter()
            .filter(|s| s.role != StarRole::Observer)
            .collect();
        let err = Catalog::new(stars).unwrap_err();
        assert!(err.to_string().contains("no Observer anchor"));
    }

    #[test]
    fn second_center_anchor_rejected() {
        let mut stars = builtin_stars();
        stars[2].role = StarRole::GalacticCenter;
        let err = Catalog::new(stars).unwrap_err();
        assert!(err.to_string().contains("more than one GalacticCenter anchor"));
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(Catalog::new(Vec::new()).is_err());
    }
}
