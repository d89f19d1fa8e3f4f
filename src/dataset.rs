use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Read the logistics reference data into memory.
///
/// The file is read exactly once at startup; a missing or unreadable file is
/// fatal and the process does not start.
pub fn load_dataset(path: &Path) -> Result<String> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read logistics data file at {}", path.display()))?;
    info!(path = %path.display(), bytes = data.len(), "Loaded logistics dataset");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_dataset_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "category,item,value").unwrap();
        writeln!(file, "fuel,Daily consumption,8500").unwrap();
        drop(file);

        let data = load_dataset(&path).unwrap();
        assert!(data.contains("fuel,Daily consumption,8500"));
    }

    #[test]
    fn test_load_dataset_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.csv");

        let err = load_dataset(&path).unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
    }
}
