use std::fmt;
use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::EnrichError;
use crate::loader;
use crate::normalize;
use crate::resolve::{self, MatchType};
use crate::schema::{crosswalk, inventory, match_type, output};
use crate::style::Style;

/// Per-MatchType record counts for one enrichment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichSummary {
    pub rows: usize,
    pub species_match: usize,
    pub genus_fallback: usize,
    pub unknown: usize,
}

impl EnrichSummary {
    fn from_matches(match_types: &[MatchType]) -> Self {
        let mut summary = EnrichSummary {
            rows: match_types.len(),
            species_match: 0,
            genus_fallback: 0,
            unknown: 0,
        };
        for mt in match_types {
            match mt {
                MatchType::SpeciesMatch => summary.species_match += 1,
                MatchType::GenusFallback => summary.genus_fallback += 1,
                MatchType::Unknown => summary.unknown += 1,
            }
        }
        summary
    }
}

impl fmt::Display for EnrichSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", output::MATCH_TYPE)?;
        writeln!(f, "{:<16} {}", match_type::SPECIES_MATCH, self.species_match)?;
        writeln!(f, "{:<16} {}", match_type::GENUS_FALLBACK, self.genus_fallback)?;
        writeln!(f, "{:<16} {}", match_type::UNKNOWN, self.unknown)
    }
}

/// Enrich an already-loaded inventory frame against a crosswalk frame.
///
/// Normalizes both frames in place (the normalized genus/species text is
/// what the output carries), resolves a base asset per row and appends the
/// three style path columns, the selected `FinalAsset` and `MatchType`.
///
/// The output frame has exactly one row per inventory row.
pub fn enrich_frames(
    mut inventory_df: DataFrame,
    mut crosswalk_df: DataFrame,
    style: Style,
) -> Result<(DataFrame, EnrichSummary), EnrichError> {
    normalize::normalize_column(&mut inventory_df, inventory::GENUS)?;
    normalize::normalize_column(&mut inventory_df, inventory::SPECIES)?;
    normalize::normalize_column(&mut crosswalk_df, crosswalk::GENUS)?;
    normalize::normalize_column(&mut crosswalk_df, crosswalk::SPECIES)?;

    let keys = normalize::join_keys(&inventory_df, inventory::GENUS, inventory::SPECIES)?;
    let resolved = resolve::resolve_assets(&inventory_df, &keys, &crosswalk_df)?;

    let final_assets: Vec<String> = resolved
        .base_files
        .iter()
        .map(|base| style.asset_path(base))
        .collect();

    for style_variant in [Style::LowPoly, Style::Realistic, Style::Schematic] {
        let paths: Vec<String> = resolved
            .base_files
            .iter()
            .map(|base| style_variant.asset_path(base))
            .collect();
        inventory_df.with_column(Column::new(style_variant.column().into(), paths))?;
    }

    inventory_df.with_column(Column::new(output::FINAL_ASSET.into(), final_assets))?;

    let match_col: Vec<&str> = resolved.match_types.iter().map(MatchType::as_str).collect();
    inventory_df.with_column(Column::new(output::MATCH_TYPE.into(), match_col))?;

    let summary = EnrichSummary::from_matches(&resolved.match_types);
    Ok((inventory_df, summary))
}

/// Write the enriched frame as CSV with a header row and no index column.
pub fn write_output(df: &mut DataFrame, path: impl AsRef<Path>) -> Result<(), EnrichError> {
    let file = File::create(path)?;
    CsvWriter::new(file).include_header(true).finish(df)?;
    Ok(())
}

/// One-shot file-to-file run: load both inputs, enrich, write the output.
///
/// Load and style errors are fatal; per-record resolution failures are not
/// (they degrade to the Unknown classification and are only visible in the
/// returned summary).
pub fn enrich_file(
    inventory_path: impl AsRef<Path>,
    crosswalk_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    style: Style,
) -> Result<EnrichSummary, EnrichError> {
    let inventory_df = loader::load_inventory(inventory_path)?;
    let crosswalk_df = loader::load_crosswalk(crosswalk_path)?;

    let (mut enriched, summary) = enrich_frames(inventory_df, crosswalk_df, style)?;
    write_output(&mut enriched, output_path)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_every_row_exactly_once() {
        let matches = [
            MatchType::SpeciesMatch,
            MatchType::SpeciesMatch,
            MatchType::GenusFallback,
            MatchType::Unknown,
        ];
        let summary = EnrichSummary::from_matches(&matches);
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.species_match, 2);
        assert_eq!(summary.genus_fallback, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(
            summary.rows,
            summary.species_match + summary.genus_fallback + summary.unknown
        );
    }

    #[test]
    fn summary_display_names_all_three_match_types() {
        let summary = EnrichSummary {
            rows: 3,
            species_match: 1,
            genus_fallback: 1,
            unknown: 1,
        };
        let text = summary.to_string();
        assert!(text.contains("Species match"));
        assert!(text.contains("Genus fallback"));
        assert!(text.contains("Unknown"));
    }
}
