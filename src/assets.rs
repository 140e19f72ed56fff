// src/assets.rs
// =============================================================================
// Downloads the images a section references into the bundle's assets/ dir.
//
// Rules:
// - relative paths are resolved against the site origin
// - the local name is the URL's last path segment, query string dropped
// - a file already on disk is never fetched again (no freshness check)
// - each name is attempted at most once per run, even if it failed
// - failures are logged and swallowed; the caller always gets the name back
// =============================================================================

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use url::Url;

use crate::api::ApiClient;
use crate::error::{Error, Result};

/// Running totals, reported in the end-of-run summary
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct AssetDownloader<'a> {
    api: &'a ApiClient<'a>,
    assets_dir: PathBuf,
    attempted: HashSet<String>,
    stats: AssetStats,
}

impl<'a> AssetDownloader<'a> {
    pub fn new(api: &'a ApiClient<'a>, assets_dir: impl Into<PathBuf>) -> Self {
        AssetDownloader {
            api,
            assets_dir: assets_dir.into(),
            attempted: HashSet::new(),
            stats: AssetStats::default(),
        }
    }

    pub fn stats(&self) -> AssetStats {
        self.stats
    }

    /// Makes sure `src` is available locally and returns its file name.
    ///
    /// The name is returned whether or not the download worked, so the page
    /// points at assets/<name> instead of a remote URL.
    pub async fn download(&mut self, src: &str) -> String {
        let filename = asset_filename(src).to_string();

        if filename.is_empty() {
            warn!(src, "image URL has no file name, not downloading");
            self.stats.failed += 1;
            return filename;
        }

        let path = self.assets_dir.join(&filename);
        if path.exists() || !self.attempted.insert(filename.clone()) {
            debug!(file = %filename, "asset already handled, skipping");
            self.stats.skipped += 1;
            return filename;
        }

        match self.fetch_to(src, &path).await {
            Ok(()) => {
                println!("   ✓ {}", filename);
                self.stats.downloaded += 1;
            }
            Err(e) => {
                warn!(src, error = %e, "✗ failed to download asset");
                self.stats.failed += 1;
            }
        }

        filename
    }

    async fn fetch_to(&self, src: &str, path: &Path) -> Result<()> {
        let url = resolve_asset_url(&self.api.config().site_origin, src)?;
        let bytes = self.api.fetch_bytes(url.as_str()).await?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| Error::io(path, e))
    }
}

// Resolves a possibly-relative image URL against the site origin
//
// Examples (origin = https://academy.hackthebox.com):
//   "/storage/modules/1/a.png"  -> https://academy.hackthebox.com/storage/modules/1/a.png
//   "https://cdn.example/b.png" -> unchanged
pub fn resolve_asset_url(origin: &Url, src: &str) -> Result<Url> {
    match Url::parse(src) {
        Ok(url) => Ok(url),
        Err(_) => origin.join(src).map_err(|source| Error::InvalidUrl {
            url: src.to_string(),
            source,
        }),
    }
}

/// The last path segment of `src`, without query string or fragment.
pub fn asset_filename(src: &str) -> &str {
    let end = src.find(|c: char| c == '?' || c == '#').unwrap_or(src.len());
    let path = &src[..end];
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::test_config;
    use httpmock::{Method::GET, MockServer};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_filename_strips_query() {
        assert_eq!(asset_filename("https://host/path/img.png?v=2"), "img.png");
        assert_eq!(asset_filename("https://host/path/img.png?v=3&x=y"), "img.png");
        assert_eq!(asset_filename("/storage/a/b/shot.jpg"), "shot.jpg");
        assert_eq!(asset_filename("plain.gif"), "plain.gif");
        assert_eq!(asset_filename("https://host/dir/"), "");
    }

    #[test]
    fn test_filename_is_stable() {
        let first = asset_filename("https://host/path/img.png?v=2");
        let second = asset_filename(first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_relative_against_origin() {
        let origin = Url::parse("https://academy.hackthebox.com").unwrap();
        let url = resolve_asset_url(&origin, "/storage/modules/1/a.png").unwrap();
        assert_eq!(
            url.as_str(),
            "https://academy.hackthebox.com/storage/modules/1/a.png"
        );

        let url = resolve_asset_url(&origin, "https://cdn.example.com/b.png").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/b.png");
    }

    #[tokio::test]
    async fn test_downloads_relative_image() {
        let server = MockServer::start_async().await;
        let dir = TempDir::new().unwrap();
        let config = test_config(&server.base_url(), dir.path());
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/storage/modules/77/diagram.png")
                    .header("cookie", "session=test");
                then.status(200).body(b"PNGDATA".to_vec());
            })
            .await;

        let api = ApiClient::new(&config).unwrap();
        let mut downloader = AssetDownloader::new(&api, dir.path());
        let name = downloader
            .download("/storage/modules/77/diagram.png?version=4")
            .await;

        mock.assert_async().await;
        assert_eq!(name, "diagram.png");
        assert_eq!(fs::read(dir.path().join("diagram.png")).unwrap(), b"PNGDATA");
        assert_eq!(downloader.stats().downloaded, 1);
    }

    #[tokio::test]
    async fn test_existing_file_skips_network() {
        let server = MockServer::start_async().await;
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cached.png"), b"old").unwrap();
        let config = test_config(&server.base_url(), dir.path());
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/img/cached.png");
                then.status(200).body(b"new".to_vec());
            })
            .await;

        let api = ApiClient::new(&config).unwrap();
        let mut downloader = AssetDownloader::new(&api, dir.path());
        let name = downloader.download("/img/cached.png").await;

        mock.assert_hits_async(0).await;
        assert_eq!(name, "cached.png");
        assert_eq!(fs::read(dir.path().join("cached.png")).unwrap(), b"old");
        assert_eq!(downloader.stats().skipped, 1);
    }

    #[tokio::test]
    async fn test_failed_download_still_returns_name_once() {
        let server = MockServer::start_async().await;
        let dir = TempDir::new().unwrap();
        let config = test_config(&server.base_url(), dir.path());
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/img/missing.png");
                then.status(404);
            })
            .await;

        let api = ApiClient::new(&config).unwrap();
        let mut downloader = AssetDownloader::new(&api, dir.path());
        let first = downloader.download("/img/missing.png").await;
        let second = downloader.download("/img/missing.png?again=1").await;

        assert_eq!(first, "missing.png");
        assert_eq!(second, "missing.png");
        assert!(!dir.path().join("missing.png").exists());
        mock.assert_hits_async(1).await;
        assert_eq!(downloader.stats().failed, 1);
        assert_eq!(downloader.stats().skipped, 1);
    }
}
