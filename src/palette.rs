//! Fallback Material-style color palettes.
//!
//! Both tables list the same roles in the same order, so any
//! `colors.<mode>.<role>` placeholder resolves regardless of mode.

use std::fmt;
use std::str::FromStr;

/// Theme mode selecting which palette is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dark,
    Light,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Mode must be 'dark' or 'light', got '{0}'")]
pub struct InvalidMode(pub String);

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Mode::Dark),
            "light" => Ok(Mode::Light),
            _ => Err(InvalidMode(s.to_string())),
        }
    }
}

const DARK: &[(&str, &str)] = &[
    ("background", "#131318"),
    ("surface", "#131318"),
    ("primary", "#c6bfff"),
    ("secondary", "#c8c3dc"),
    ("tertiary", "#ebb8cf"),
    ("on_background", "#e5e1e9"),
    ("on_surface", "#e5e1e9"),
    ("on_primary", "#2e295f"),
    ("on_secondary", "#302e41"),
    ("on_tertiary", "#482537"),
    ("surface_variant", "#47464f"),
    ("on_surface_variant", "#c9c5d0"),
    ("outline", "#928f99"),
    ("outline_variant", "#47464f"),
    ("primary_container", "#454077"),
    ("on_primary_container", "#e4dfff"),
    ("secondary_container", "#474459"),
    ("on_secondary_container", "#e4dff9"),
    ("tertiary_container", "#613b4e"),
    ("on_tertiary_container", "#ffd8e8"),
    ("inverse_surface", "#e5e1e9"),
    ("inverse_on_surface", "#313036"),
    ("inverse_primary", "#5d5791"),
    ("scrim", "#000000"),
    ("shadow", "#000000"),
    ("surface_tint", "#c6bfff"),
];

const LIGHT: &[(&str, &str)] = &[
    ("background", "#fefbff"),
    ("surface", "#fefbff"),
    ("primary", "#5d5791"),
    ("secondary", "#625b71"),
    ("tertiary", "#7d5260"),
    ("on_background", "#1c1b1f"),
    ("on_surface", "#1c1b1f"),
    ("on_primary", "#ffffff"),
    ("on_secondary", "#ffffff"),
    ("on_tertiary", "#ffffff"),
    ("surface_variant", "#e7e0ec"),
    ("on_surface_variant", "#49454f"),
    ("outline", "#79747e"),
    ("outline_variant", "#cab6d0"),
    ("primary_container", "#e4dfff"),
    ("on_primary_container", "#191249"),
    ("secondary_container", "#e8def8"),
    ("on_secondary_container", "#1d192b"),
    ("tertiary_container", "#ffd8e4"),
    ("on_tertiary_container", "#31111d"),
    ("inverse_surface", "#313033"),
    ("inverse_on_surface", "#f4f0f4"),
    ("inverse_primary", "#c6bfff"),
    ("scrim", "#000000"),
    ("shadow", "#000000"),
    ("surface_tint", "#5d5791"),
];

/// An immutable, ordered role → hex mapping for one mode.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    mode: Mode,
    entries: &'static [(&'static str, &'static str)],
}

impl Palette {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn get(&self, role: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, hex)| *hex)
    }
}

/// Select the compiled-in palette for `mode`.
pub fn resolve(mode: Mode) -> Palette {
    let entries = match mode {
        Mode::Dark => DARK,
        Mode::Light => LIGHT,
    };
    Palette { mode, entries }
}
