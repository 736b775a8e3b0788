use forestree_assets::{enrich_file, Style};

// One-shot batch run over fixed paths, like the workflow this replaces.
const INVENTORY_PATH: &str = "data/Forestree.xlsx";
const CROSSWALK_PATH: &str = "data/Tree_CE2025_MasterCrosswalk_Schematic_Key.csv";
const OUTPUT_PATH: &str = "data/Forestree_WithAssets_FullPath.csv";

fn main() {
    match enrich_file(INVENTORY_PATH, CROSSWALK_PATH, OUTPUT_PATH, Style::default()) {
        Ok(summary) => {
            println!("Saved enriched dataset to {OUTPUT_PATH}");
            print!("{summary}");
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
