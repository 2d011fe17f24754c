// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`] (CLI, tests)
//! 2. **Environment variable** `COURSE_LENS_CONFIG_DIR` (if set and non-empty)
//! 3. **Platform default** - via `dirs` crate, with the app name appended

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "CourseLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "COURSE_LENS_CONFIG_DIR";

/// Returns the application config directory path.
///
/// - Linux: `~/.config/CourseLens/`
/// - macOS: `~/Library/Application Support/CourseLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\CourseLens\`
///
/// Returns `None` if the config directory cannot be determined.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory path with an optional override.
#[must_use]
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
