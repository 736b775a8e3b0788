//! Forestree asset crosswalk enrichment.
//!
//! Resolves each forestry inventory record's genus/species pair to a 3D
//! asset file via a crosswalk table, with a two-stage fallback (exact
//! species match, then genus-only, then an `Unknown.glb` sentinel), and
//! bakes in full asset paths for the three rendering styles.

mod error;
mod loader;
mod normalize;
mod pipeline;
mod resolve;
pub mod schema;
mod style;

pub use error::EnrichError;
pub use loader::{load_crosswalk, load_inventory};
pub use pipeline::{enrich_file, enrich_frames, write_output, EnrichSummary};
pub use resolve::MatchType;
pub use style::Style;
