//! Output persistence for rendered map pages.

use anyhow::{Context, Result};
use tracing::{debug, info};

use std::fs;
use std::path::Path;

/// Writes a rendered HTML page to disk, creating parent directories as
/// needed, and logs the saved path.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = html.len(), "Writing map page");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }

    fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;

    info!(path = %path.display(), "Map saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_write_page_creates_file() {
        let path = temp_path("jetfuel_maps_test_create.html");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_page(&path, "<html></html>").unwrap();

        assert!(path.exists());
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "<html></html>");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_page_overwrites_existing() {
        let path = temp_path("jetfuel_maps_test_overwrite.html");
        let _ = fs::remove_file(&path);

        write_page(&path, "first").unwrap();
        write_page(&path, "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "second");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_page_creates_parent_dirs() {
        let dir = temp_path("jetfuel_maps_test_nested");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("maps").join("page.html");

        write_page(&path, "nested").unwrap();

        assert!(path.exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
