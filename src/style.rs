use std::str::FromStr;

use crate::error::EnrichError;
use crate::schema::{asset_paths, output};

/// Rendering-fidelity variant. Only affects the path prefix, never the
/// chosen filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    LowPoly,
    Realistic,
    Schematic,
}

impl Style {
    pub fn prefix(&self) -> &'static str {
        match self {
            Style::LowPoly => asset_paths::LOW_POLY,
            Style::Realistic => asset_paths::REALISTIC,
            Style::Schematic => asset_paths::SCHEMATIC,
        }
    }

    /// Output column holding this style's path.
    pub fn column(&self) -> &'static str {
        match self {
            Style::LowPoly => output::FINAL_ASSET_LOW_POLY,
            Style::Realistic => output::FINAL_ASSET_REALISTIC,
            Style::Schematic => output::FINAL_ASSET_SCHEMATIC,
        }
    }

    pub fn asset_path(&self, base_file: &str) -> String {
        format!("{}{}", self.prefix(), base_file)
    }
}

impl FromStr for Style {
    type Err = EnrichError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LowPoly" => Ok(Style::LowPoly),
            "Realistic" => Ok(Style::Realistic),
            "Schematic" => Ok(Style::Schematic),
            other => Err(EnrichError::UnknownStyle(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_low_poly() {
        assert_eq!(Style::default(), Style::LowPoly);
    }

    #[test]
    fn asset_paths_use_the_fixed_prefixes() {
        assert_eq!(
            Style::LowPoly.asset_path("oak.glb"),
            "assets/Trees/LowPoly/oak.glb"
        );
        assert_eq!(
            Style::Realistic.asset_path("oak.glb"),
            "assets/Trees/Realistic/oak.glb"
        );
        assert_eq!(
            Style::Schematic.asset_path("Unknown.glb"),
            "assets/Trees/Schematic/Unknown.glb"
        );
    }

    #[test]
    fn parses_exactly_the_three_variants() {
        assert_eq!("LowPoly".parse::<Style>().unwrap(), Style::LowPoly);
        assert_eq!("Realistic".parse::<Style>().unwrap(), Style::Realistic);
        assert_eq!("Schematic".parse::<Style>().unwrap(), Style::Schematic);
    }

    #[test]
    fn unrecognized_style_fails_fast() {
        let err = "lowpoly".parse::<Style>().unwrap_err();
        assert!(matches!(err, EnrichError::UnknownStyle(s) if s == "lowpoly"));
    }
}
