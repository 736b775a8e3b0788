use polars::prelude::*;

use crate::error::EnrichError;

/// Normalize a botanical name: trim, uppercase the first character,
/// lowercase the rest.
///
/// This is deliberately narrower than case-insensitive comparison -
/// multi-word and accented names normalize imperfectly, matching the
/// behavior the crosswalk data was built against.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Replace a String column with its normalized values, in place.
/// Nulls become empty strings.
pub fn normalize_column(df: &mut DataFrame, name: &str) -> Result<(), EnrichError> {
    let normalized: Vec<String> = df
        .column(name)?
        .str()?
        .into_iter()
        .map(|v| v.map(normalize_name).unwrap_or_default())
        .collect();
    df.with_column(Column::new(name.into(), normalized))?;
    Ok(())
}

/// Build the composite join key per row: normalized genus immediately
/// followed by normalized species, no separator.
///
/// Both columns must already be normalized.
pub fn join_keys(
    df: &DataFrame,
    genus_col: &str,
    species_col: &str,
) -> Result<Vec<String>, EnrichError> {
    let genus = df.column(genus_col)?.str()?;
    let species = df.column(species_col)?.str()?;

    Ok(genus
        .into_iter()
        .zip(species.into_iter())
        .map(|(g, s)| format!("{}{}", g.unwrap_or(""), s.unwrap_or("")))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_capitalizes() {
        assert_eq!(normalize_name("  quercus "), "Quercus");
        assert_eq!(normalize_name("QUERCUS"), "Quercus");
        assert_eq!(normalize_name("alba"), "Alba");
    }

    #[test]
    fn empty_and_whitespace_become_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn only_the_first_letter_is_capitalized() {
        // Multi-word names keep later words lowercase. Inherited behavior.
        assert_eq!(normalize_name("acer pseudoplatanus"), "Acer pseudoplatanus");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [" quercus ", "PINUS", "Acer pseudoplatanus", ""] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn join_keys_concatenate_without_separator() {
        let mut df = DataFrame::new(vec![
            Column::new("genus".into(), vec![" quercus ", "pinus"]),
            Column::new("species".into(), vec![Some("ALBA"), None]),
        ])
        .unwrap();

        normalize_column(&mut df, "genus").unwrap();
        normalize_column(&mut df, "species").unwrap();

        let keys = join_keys(&df, "genus", "species").unwrap();
        assert_eq!(keys, vec!["QuercusAlba".to_string(), "Pinus".to_string()]);
    }
}
