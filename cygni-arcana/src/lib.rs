//! Cygni Arcana: stars mapped to tarot cards by galactic coordinates.
//!
//! One pass, no state: the built-in [`Catalog`] is projected onto the
//! GC-Sol-GAC line ([`transform`]), bucketed horizontally by distance from
//! that line and ranked vertically by distance from the galactic center
//! ([`layout`]), then drawn ([`plot`]).
//!
//! ```no_run
//! use cygni_arcana::{layout, plot, Catalog, ChartConfig};
//!
//! let catalog = Catalog::builtin();
//! let config = ChartConfig::default();
//! let placements = layout::place_stars(&catalog, &config.thresholds);
//! plot::render(&placements, &config)?;
//! # Ok::<(), cygni_arcana::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod plot;
pub mod star;
pub mod theme;
pub mod transform;

pub use catalog::Catalog;
pub use config::{ChartConfig, ImageFormat};
pub use error::{Error, Result};
pub use star::{Rgb, StarRecord, StarRole};
pub use theme::Theme;
