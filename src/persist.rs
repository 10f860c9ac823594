// Artifacts written to disk: the curriculum as JSON and the exported deck.

use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub const DEFAULT_CURRICULUM_FILE: &str = "curriculum.json";
pub const DEFAULT_EXPORT_FILE: &str = "Formation.pptx";

/// Write the curriculum as UTF-8 JSON with 2-space indentation. Non-ASCII
/// characters are written as-is.
pub fn save_curriculum(curriculum: &Value, path: &Path) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, curriculum)?;
    file.flush()?;
    tracing::debug!("curriculum saved to {}", path.display());
    Ok(())
}

/// Write the presentation payload verbatim and return the size on disk.
pub fn write_export(bytes: &[u8], path: &Path) -> io::Result<u64> {
    fs::write(path, bytes)?;
    let size = fs::metadata(path)?.len();
    tracing::debug!("{} bytes written to {}", size, path.display());
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn curriculum_round_trip_keeps_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("curriculum.json");
        let curriculum = json!({
            "title": "Sécurité au travail",
            "totalDuration": 120,
            "modules": [{"title": "Évaluation", "duration": 60, "extra": {"x": null}}],
            "customField": [1, 2, 3]
        });

        save_curriculum(&curriculum, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Sécurité au travail"));
        assert!(text.contains("\n  \"title\""));
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, curriculum);
    }

    #[test]
    fn export_bytes_are_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.pptx");
        let payload: Vec<u8> = (0..=255u8).cycle().take(3000).collect();

        let size = write_export(&payload, &path).unwrap();

        assert_eq!(size, 3000);
        assert_eq!(fs::read(&path).unwrap(), payload);
    }

    #[test]
    fn save_fails_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("curriculum.json");
        assert!(save_curriculum(&json!({}), &path).is_err());
    }
}
