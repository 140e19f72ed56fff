// src/output.rs
// =============================================================================
// Creates the bundle folder and writes generated files into it.
//
// Layout:
//   {id}. {name}/
//     index.html, style.css, pygments.css
//     assets/   section pages ({page}.html) and downloaded images
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

pub const ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone)]
pub struct Bundle {
    root: PathBuf,
    assets: PathBuf,
}

impl Bundle {
    /// Creates `{output_root}/{id}. {name}/assets` (and any missing parents)
    pub fn create(output_root: &Path, module_id: u64, module_name: &str) -> Result<Self> {
        let root = output_root.join(bundle_dir_name(module_id, module_name));
        let assets = root.join(ASSETS_DIR);
        fs::create_dir_all(&assets).map_err(|e| Error::io(&assets, e))?;
        debug!(path = %root.display(), "bundle directory ready");

        Ok(Bundle { root, assets })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets
    }

    /// Writes a file at the bundle root and returns its path
    pub fn write_root_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        write(self.root.join(name), content)
    }

    /// Writes a section page into assets/ and returns its path
    pub fn write_page(&self, name: &str, content: &str) -> Result<PathBuf> {
        write(self.assets.join(name), content)
    }
}

fn write(path: PathBuf, content: &str) -> Result<PathBuf> {
    fs::write(&path, content).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

/// "{id}. {name}", with path separators in the name replaced by "_"
pub fn bundle_dir_name(module_id: u64, module_name: &str) -> String {
    let name: String = module_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}. {}", module_id, name)
}
