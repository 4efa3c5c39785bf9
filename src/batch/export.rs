//! CSV export of batch results.
//!
//! Matches the export format of the hosted web client: an
//! `"English","Ibani"` header plus one quoted row per translation, written
//! to an epoch-stamped file in the working directory.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Utc;

use crate::api::types::TranslationResult;

/// Render results as a two-column CSV with a header row.
pub fn to_csv(translations: &[TranslationResult]) -> String {
    let mut csv = String::from("\"English\",\"Ibani\"\n");
    for t in translations {
        csv.push_str(&format!(
            "\"{}\",\"{}\"\n",
            escape_field(&t.source),
            escape_field(&t.translation)
        ));
    }
    csv
}

/// Interior quotes are doubled so quoted fields stay well-formed.
fn escape_field(field: &str) -> String {
    field.replace('"', "\"\"")
}

fn export_path() -> PathBuf {
    PathBuf::from(format!(
        "ibani-translations-{}.csv",
        Utc::now().timestamp_millis()
    ))
}

/// Write the results next to the current working directory and return the
/// file's path.
pub fn write_csv(translations: &[TranslationResult]) -> io::Result<PathBuf> {
    let path = export_path();
    fs::write(&path, to_csv(translations))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(source: &str, translation: &str) -> TranslationResult {
        TranslationResult {
            source: source.to_string(),
            translation: translation.to_string(),
            model: "marian-ibani".to_string(),
        }
    }

    #[test]
    fn test_csv_header_only_for_empty_results() {
        assert_eq!(to_csv(&[]), "\"English\",\"Ibani\"\n");
    }

    #[test]
    fn test_csv_rows_in_order() {
        let csv = to_csv(&[result("Good morning", "ḅarị"), result("Thank you", "sụọ")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "\"English\",\"Ibani\"");
        assert_eq!(lines[1], "\"Good morning\",\"ḅarị\"");
        assert_eq!(lines[2], "\"Thank you\",\"sụọ\"");
    }

    #[test]
    fn test_csv_escapes_interior_quotes() {
        let csv = to_csv(&[result(r#"say "hello""#, "x")]);
        assert!(csv.contains(r#""say ""hello""","x""#));
    }

    #[test]
    fn test_export_path_shape() {
        let path = export_path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("ibani-translations-"));
        assert!(name.ends_with(".csv"));
    }
}
