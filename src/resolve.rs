use std::collections::HashMap;

use polars::prelude::*;

use crate::error::EnrichError;
use crate::normalize;
use crate::schema::{asset_paths, crosswalk, inventory, match_type};

/// How a record's asset was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    SpeciesMatch,
    GenusFallback,
    Unknown,
}

impl MatchType {
    /// The value written to the output `MatchType` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::SpeciesMatch => match_type::SPECIES_MATCH,
            MatchType::GenusFallback => match_type::GENUS_FALLBACK,
            MatchType::Unknown => match_type::UNKNOWN,
        }
    }
}

/// Per-row resolution output, column-oriented.
pub struct ResolvedAssets {
    pub base_files: Vec<String>,
    pub match_types: Vec<MatchType>,
}

/// Resolve a base asset filename for every inventory row.
///
/// Lookup tables are built from the crosswalk in row order with first-wins
/// semantics, so duplicate keys can never duplicate inventory rows and the
/// earliest crosswalk entry decides ambiguous matches. Per row, in order:
///   1. exact genus+species key with a non-blank asset file → SpeciesMatch
///   2. any crosswalk row with the same normalized genus → GenusFallback
///   3. the Unknown.glb sentinel → Unknown
///
/// Both frames must already be normalized. Unresolved rows are not errors.
pub fn resolve_assets(
    inventory_df: &DataFrame,
    inventory_keys: &[String],
    crosswalk_df: &DataFrame,
) -> Result<ResolvedAssets, EnrichError> {
    let crosswalk_keys =
        normalize::join_keys(crosswalk_df, crosswalk::GENUS, crosswalk::SPECIES)?;
    let genus_col = crosswalk_df.column(crosswalk::GENUS)?.str()?;
    let asset_col = crosswalk_df.column(crosswalk::ASSET_FILE)?.str()?;

    let mut by_key: HashMap<&str, &str> = HashMap::new();
    let mut by_genus: HashMap<&str, &str> = HashMap::new();

    for (i, key) in crosswalk_keys.iter().enumerate() {
        let asset = asset_col.get(i).unwrap_or("");
        by_key.entry(key.as_str()).or_insert(asset);
        if let Some(genus) = genus_col.get(i) {
            by_genus.entry(genus).or_insert(asset);
        }
    }

    let inventory_genus = inventory_df.column(inventory::GENUS)?.str()?;

    let mut base_files = Vec::with_capacity(inventory_keys.len());
    let mut match_types = Vec::with_capacity(inventory_keys.len());

    for (key, genus) in inventory_keys.iter().zip(inventory_genus.into_iter()) {
        // A key hit with a blank asset file falls through to the genus stage.
        if let Some(asset) = by_key.get(key.as_str()) {
            if !asset.trim().is_empty() {
                base_files.push(base_name(asset).to_string());
                match_types.push(MatchType::SpeciesMatch);
                continue;
            }
        }

        if let Some(asset) = by_genus.get(genus.unwrap_or("")) {
            base_files.push(base_name(asset).to_string());
            match_types.push(MatchType::GenusFallback);
            continue;
        }

        base_files.push(asset_paths::UNKNOWN_FILE.to_string());
        match_types.push(MatchType::Unknown);
    }

    Ok(ResolvedAssets {
        base_files,
        match_types,
    })
}

/// Filename component of a path. Splits on both `/` and `\` because the
/// crosswalk data carries Windows-style paths.
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
