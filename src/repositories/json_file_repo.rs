use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::error::LookupError;
use crate::models::restaurant::RestaurantRecord;

/// Persists one query's records as a pretty-printed JSON array.
pub struct JsonFileRepo {
    output_dir: PathBuf,
}

impl JsonFileRepo {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn path_for_city(&self, city: &str) -> PathBuf {
        self.output_dir.join(output_file_name(city))
    }

    /// Replaces any previous file for the same city. The target only ever holds a
    /// complete document.
    pub fn store_restaurants(
        &self,
        city: &str,
        records: &[RestaurantRecord],
    ) -> Result<PathBuf, LookupError> {
        let path = self.path_for_city(city);
        let document = serde_json::to_string_pretty(records)?;

        let tmp_path = path.with_extension("json.tmp");
        if let Err(e) = write_then_rename(&tmp_path, &path, &document) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        info!("Stored {} restaurants at {}", records.len(), path.display());
        Ok(path)
    }
}

fn write_then_rename(tmp_path: &Path, path: &Path, document: &str) -> std::io::Result<()> {
    fs::write(tmp_path, document)?;
    fs::rename(tmp_path, path)
}

/// `top-10-restaurants-<city>.json`, lowercased, with whitespace and path
/// separators collapsed to `_`.
pub fn output_file_name(city: &str) -> String {
    let slug: String = city
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect::<String>()
        .to_lowercase();

    format!("top-10-restaurants-{}.json", slug)
}
