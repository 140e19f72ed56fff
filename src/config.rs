// src/config.rs
// =============================================================================
// Run-wide settings, built once from the command line and then passed by
// reference to every component.
//
// Nothing in here touches the network. The only I/O is reading the cookie
// file, and that happens before the first request so a missing cookie is
// reported without contacting the API at all.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::cli::Cli;
use crate::error::{Error, Result};

pub const DEFAULT_API_BASE: &str = "https://academy.hackthebox.com/api/v2";
pub const DEFAULT_SITE_ORIGIN: &str = "https://academy.hackthebox.com";
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Browser-like user agent; the API rejects obvious bots
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub module_id: u64,
    pub cookie: String,
    /// API root without a trailing slash, e.g. https://host/api/v2
    pub api_base: String,
    /// Origin that relative image paths are resolved against
    pub site_origin: Url,
    /// Parent directory of the bundle folder
    pub output_root: PathBuf,
    pub theme: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let cookie = resolve_cookie(cli.cookie, &cli.cookie_file)?;
        let api_base = parse_url(&cli.api_base)?;
        let site_origin = parse_url(&cli.site_origin)?;

        Ok(Config {
            module_id: cli.module_id,
            cookie,
            api_base: api_base.as_str().trim_end_matches('/').to_string(),
            site_origin,
            output_root: cli.output_dir,
            theme: cli.theme,
        })
    }

    /// GET target for the module metadata
    pub fn module_url(&self) -> String {
        format!("{}/modules/{}", self.api_base, self.module_id)
    }

    /// GET target for one section's detail
    pub fn section_url(&self, section_id: u64) -> String {
        format!(
            "{}/modules/{}/sections/{}",
            self.api_base, self.module_id, section_id
        )
    }

    /// The module's page on the website, sent as Referer
    pub fn referer(&self) -> String {
        format!(
            "{}/beta/module/{}",
            self.site_origin.as_str().trim_end_matches('/'),
            self.module_id
        )
    }

    pub fn favicon_url(&self) -> String {
        format!("{}/favicon.ico", self.site_origin.as_str().trim_end_matches('/'))
    }
}

// The flag wins; otherwise the file is read and trimmed. An empty cookie is
// treated the same as a missing one.
fn resolve_cookie(flag: Option<String>, file: &Path) -> Result<String> {
    let cookie = match flag {
        Some(cookie) => cookie,
        None => match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::MissingCookie {
                    path: file.to_path_buf(),
                })
            }
            Err(e) => return Err(Error::io(file, e)),
        },
    };

    let cookie = cookie.trim();
    if cookie.is_empty() {
        return Err(Error::MissingCookie {
            path: file.to_path_buf(),
        });
    }

    Ok(cookie.to_string())
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| Error::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    /// Config pointing at a mock server, shared by the other modules' tests
    pub(crate) fn test_config(base: &str, output_root: &Path) -> Config {
        Config {
            module_id: 77,
            cookie: "session=test".to_string(),
            api_base: format!("{}/api/v2", base.trim_end_matches('/')),
            site_origin: Url::parse(base).unwrap(),
            output_root: output_root.to_path_buf(),
            theme: DEFAULT_THEME.to_string(),
        }
    }

    #[test]
    fn test_cookie_flag_wins_over_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("cookie.txt");
        fs::write(&file, "from-file").unwrap();

        let cookie = resolve_cookie(Some("from-flag".to_string()), &file).unwrap();
        assert_eq!(cookie, "from-flag");
    }

    #[test]
    fn test_cookie_read_and_trimmed_from_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("cookie.txt");
        fs::write(&file, "  session=xyz\n").unwrap();

        let cookie = resolve_cookie(None, &file).unwrap();
        assert_eq!(cookie, "session=xyz");
    }

    #[test]
    fn test_missing_cookie_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("cookie.txt");

        let result = resolve_cookie(None, &file);
        assert!(matches!(result, Err(Error::MissingCookie { .. })));
    }

    #[test]
    fn test_blank_cookie_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("cookie.txt");
        fs::write(&file, "\n\n").unwrap();

        let result = resolve_cookie(None, &file);
        assert!(matches!(result, Err(Error::MissingCookie { .. })));
    }

    #[test]
    fn test_urls_from_cli() {
        let cli = Cli::try_parse_from([
            "module-offline",
            "--module",
            "15",
            "--cookie",
            "c=1",
            "--api-base",
            "http://localhost:9000/api/v2/",
        ])
        .unwrap();
        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.module_url(), "http://localhost:9000/api/v2/modules/15");
        assert_eq!(
            config.section_url(3),
            "http://localhost:9000/api/v2/modules/15/sections/3"
        );
        assert_eq!(
            config.referer(),
            "https://academy.hackthebox.com/beta/module/15"
        );
    }

    #[test]
    fn test_invalid_api_base() {
        let cli = Cli::try_parse_from([
            "module-offline",
            "--module",
            "1",
            "--cookie",
            "c=1",
            "--api-base",
            "not a url",
        ])
        .unwrap();
        assert!(matches!(
            Config::from_cli(cli),
            Err(Error::InvalidUrl { .. })
        ));
    }
}
