/// Column-name and sentinel constants for the Forestree crosswalk pipeline.
/// Single source of truth for every column the pipeline reads or writes.

// ── Inventory (Forestree workbook) ──────────────────────────────────────────
pub mod inventory {
    pub const SHEET_NAME: &str = "Forestree";
    pub const GENUS: &str = "genus";
    pub const SPECIES: &str = "species";
}

// ── Crosswalk CSV ───────────────────────────────────────────────────────────
pub mod crosswalk {
    pub const GENUS: &str = "Genus";
    pub const SPECIES: &str = "Species";
    pub const ASSET_FILE: &str = "asset_file";
}

// ── Output columns ──────────────────────────────────────────────────────────
pub mod output {
    pub const FINAL_ASSET_LOW_POLY: &str = "FinalAsset_LowPoly";
    pub const FINAL_ASSET_REALISTIC: &str = "FinalAsset_Realistic";
    pub const FINAL_ASSET_SCHEMATIC: &str = "FinalAsset_Schematic";
    pub const FINAL_ASSET: &str = "FinalAsset";
    pub const MATCH_TYPE: &str = "MatchType";
}

// ── MatchType values ────────────────────────────────────────────────────────
pub mod match_type {
    pub const SPECIES_MATCH: &str = "Species match";
    pub const GENUS_FALLBACK: &str = "Genus fallback";
    pub const UNKNOWN: &str = "Unknown";
}

// ── Asset path prefixes ─────────────────────────────────────────────────────
pub mod asset_paths {
    pub const LOW_POLY: &str = "assets/Trees/LowPoly/";
    pub const REALISTIC: &str = "assets/Trees/Realistic/";
    pub const SCHEMATIC: &str = "assets/Trees/Schematic/";

    /// Sentinel base file for records that resolve to nothing.
    pub const UNKNOWN_FILE: &str = "Unknown.glb";
}
