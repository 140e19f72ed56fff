// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are no subcommands: one run downloads one module. Everything the
// user passes here is folded into a `Config` (see config.rs) before any
// network call is made.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_API_BASE, DEFAULT_SITE_ORIGIN, DEFAULT_THEME};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "module-offline",
    version = "0.1.0",
    about = "Download a learning module and build an offline HTML bundle",
    long_about = "module-offline fetches every section of a module, renders its markdown to HTML, \
                  downloads the images it references and writes a browsable folder with a \
                  table-of-contents sidebar on every page."
)]
pub struct Cli {
    /// Module ID (required)
    ///
    /// Example: module-offline --module 112
    #[arg(long = "module", value_name = "ID")]
    pub module_id: u64,

    /// Cookie string sent with every request
    ///
    /// If not provided, the cookie is read from --cookie-file
    #[arg(long)]
    pub cookie: Option<String>,

    /// File to read the cookie from when --cookie is not given
    #[arg(long, default_value = "cookie.txt")]
    pub cookie_file: PathBuf,

    /// Directory in which the "{id}. {name}" bundle folder is created
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Syntax highlighting theme used to generate pygments.css
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    // The next two exist so the tool can be pointed at a mirror or a
    // local test server; regular users never need them.
    #[arg(long, default_value = DEFAULT_API_BASE, hide = true)]
    pub api_base: String,

    #[arg(long, default_value = DEFAULT_SITE_ORIGIN, hide = true)]
    pub site_origin: String,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[arg(long = "module")] do?
//    - It creates a --module flag and stores its value in `module_id`
//    - Because the field is a u64 (not Option), the flag is required
//    - clap rejects non-numeric values before our code runs
//
// 2. Why Option<String> for cookie?
//    - None means "not given on the command line"
//    - config.rs then falls back to the cookie file
//
// 3. What is hide = true?
//    - The flag still works, it just doesn't show up in --help
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_is_required() {
        let result = Cli::try_parse_from(["module-offline"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["module-offline", "--module", "42"]).unwrap();
        assert_eq!(cli.module_id, 42);
        assert!(cli.cookie.is_none());
        assert_eq!(cli.cookie_file, PathBuf::from("cookie.txt"));
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.theme, DEFAULT_THEME);
        assert_eq!(cli.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_module_must_be_numeric() {
        let result = Cli::try_parse_from(["module-offline", "--module", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cookie_flag() {
        let cli =
            Cli::try_parse_from(["module-offline", "--module", "7", "--cookie", "sid=abc"]).unwrap();
        assert_eq!(cli.cookie.as_deref(), Some("sid=abc"));
    }
}
