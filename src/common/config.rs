use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_SNAP_DISTANCE: f64 = 20.0;
pub const DEFAULT_GUIDE_THICKNESS: f64 = 10.0;
pub const DEFAULT_SPACING: f64 = 5.0;
pub const DEFAULT_COLOR: Color = Color { r: 0xa8, g: 0xf0, b: 0xf4 };

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid color {0:?}, expected #rrggbb or #rgb")]
    InvalidColor(String),
    #[error("`{field}` must be a finite non-negative number, got {value}")]
    InvalidDistance { field: &'static str, value: f64 },
    #[error("`{0}` has the wrong type")]
    WrongType(&'static str),
}

bitflags! {
    /// Which kinds of reference edges a dragged window may snap against.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SnapTargets: u8 {
        const SCREEN = 1 << 0;
        const WINDOWS = 1 << 1;
    }
}

impl Default for SnapTargets {
    fn default() -> Self { SnapTargets::all() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 0x11);
                Ok(Color { r: short(0)?, g: short(1)?, b: short(2)? })
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Session settings for the snapper. Fixed once the snapper is constructed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SnapSettings {
    pub targets: SnapTargets,
    /// Largest gap, in pixels, at which two edges are considered aligned.
    pub snap_distance: f64,
    pub color: Color,
    pub guide_thickness: f64,
    /// Gap left between a committed window and the edge it snapped to.
    pub spacing: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        SnapSettings {
            targets: SnapTargets::default(),
            snap_distance: DEFAULT_SNAP_DISTANCE,
            color: DEFAULT_COLOR,
            guide_thickness: DEFAULT_GUIDE_THICKNESS,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl SnapSettings {
    /// Replaces any negative or non-finite distance with its default.
    pub fn normalized(self) -> Self {
        let defaults = SnapSettings::default();
        let checked = |value: f64, field: &'static str| Some(checked_distance(value, field));
        SnapSettings {
            snap_distance: or_default(
                checked(self.snap_distance, "snap"),
                defaults.snap_distance,
            ),
            guide_thickness: or_default(
                checked(self.guide_thickness, "size"),
                defaults.guide_thickness,
            ),
            spacing: or_default(checked(self.spacing, "spacing"), defaults.spacing),
            ..self
        }
    }

    pub fn snaps_to_screen(&self) -> bool { self.targets.contains(SnapTargets::SCREEN) }

    pub fn snaps_to_windows(&self) -> bool { self.targets.contains(SnapTargets::WINDOWS) }

    /// Reads host options (`screen`, `windows`, `snap`, `color`, `size`, `spacing`)
    /// from a JSON value. Anything malformed falls back to its default.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match SnapOptions::deserialize(value) {
            Ok(options) => options.into_settings(),
            Err(err) => {
                warn!(%err, "Snap options are not an object; using defaults");
                SnapSettings::default()
            }
        }
    }

    /// Same as [`SnapSettings::from_json`], for a TOML document.
    pub fn from_toml_str(source: &str) -> Self {
        match toml::from_str::<SnapOptions>(source) {
            Ok(options) => options.into_settings(),
            Err(err) => {
                warn!(%err, "Failed to parse snap options; using defaults");
                SnapSettings::default()
            }
        }
    }
}

/// A field that keeps parsing even when the host supplied the wrong type.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_result(this: Option<Self>, field: &'static str) -> Option<Result<T, ConfigError>> {
        match this? {
            Lenient::Valid(value) => Some(Ok(value)),
            Lenient::Invalid(_) => Some(Err(ConfigError::WrongType(field))),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SnapOptions {
    screen: Option<Lenient<bool>>,
    windows: Option<Lenient<bool>>,
    snap: Option<Lenient<f64>>,
    color: Option<Lenient<String>>,
    size: Option<Lenient<f64>>,
    spacing: Option<Lenient<f64>>,
}

impl SnapOptions {
    fn into_settings(self) -> SnapSettings {
        let defaults = SnapSettings::default();

        let mut targets = SnapTargets::empty();
        if or_default(Lenient::into_result(self.screen, "screen"), true) {
            targets |= SnapTargets::SCREEN;
        }
        if or_default(Lenient::into_result(self.windows, "windows"), true) {
            targets |= SnapTargets::WINDOWS;
        }

        let color = Lenient::into_result(self.color, "color")
            .map(|res| res.and_then(|raw| raw.parse::<Color>()));

        SnapSettings {
            targets,
            snap_distance: or_default(distance(self.snap, "snap"), defaults.snap_distance),
            color: or_default(color, defaults.color),
            guide_thickness: or_default(distance(self.size, "size"), defaults.guide_thickness),
            spacing: or_default(distance(self.spacing, "spacing"), defaults.spacing),
        }
    }
}

fn distance(raw: Option<Lenient<f64>>, field: &'static str) -> Option<Result<f64, ConfigError>> {
    Lenient::into_result(raw, field).map(|res| res.and_then(|value| checked_distance(value, field)))
}

fn checked_distance(value: f64, field: &'static str) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidDistance { field, value })
    }
}

fn or_default<T: fmt::Debug>(value: Option<Result<T, ConfigError>>, default: T) -> T {
    match value {
        None => default,
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            warn!(%err, ?default, "Ignoring snap option");
            default
        }
    }
}
