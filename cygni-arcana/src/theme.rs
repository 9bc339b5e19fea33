use clap::ValueEnum;

use crate::star::Rgb;

/// Gold used for the center gridline, rotation arrow and anchor captions.
pub const ACCENT: Rgb = Rgb::hex(0xFFD700);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub grid: Rgb,
    pub black_hole_edge: Rgb,
    pub black_hole_glow: Rgb,
    pub sol_edge: Rgb,
}

const WHITE: Rgb = Rgb::hex(0xFFFFFF);
const BLACK: Rgb = Rgb::hex(0x000000);
const ORANGE: Rgb = Rgb::hex(0xFFA500);

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: BLACK,
                text: WHITE,
                grid: WHITE,
                black_hole_edge: WHITE,
                black_hole_glow: Rgb::hex(0xFF8C00),
                sol_edge: ORANGE,
            },
            Theme::Light => Palette {
                background: WHITE,
                text: BLACK,
                grid: BLACK,
                black_hole_edge: BLACK,
                black_hole_glow: Rgb::hex(0xFFD700),
                sol_edge: ORANGE,
            },
        }
    }

    /// File name suffix for this theme.
    pub fn suffix(self) -> &'static str {
        match self {
            Theme::Dark => "_dark",
            Theme::Light => "_light",
        }
    }
}
