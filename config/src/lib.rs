//! Load settings from XDG `config.toml` and a project `.env`, then apply them to the process
//! environment with priority: **existing env > .env > XDG**.
//!
//! Binaries call [`load_and_apply`] once at startup, before parsing arguments, so that clap's
//! `env` fallbacks (e.g. `REPLICA_COUNT`) and `RUST_LOG` see the file values.

mod dotenv;
mod xdg_toml;

#[cfg(feature = "tracing-init")]
mod tracing_init;

#[cfg(feature = "tracing-init")]
pub use tracing_init::init_tracing;

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Loads `<config_home>/<app_name>/config.toml` `[env]` and `.env`, and sets every key that is
/// not already present in the process environment.
///
/// * `app_name`: directory name under the config home, e.g. `"replica"`.
/// * `dotenv_dir`: where to look for `.env`; defaults to the current directory.
///
/// Returns the keys that were set.
pub fn load_and_apply(
    app_name: &str,
    dotenv_dir: Option<&Path>,
) -> Result<Vec<String>, LoadError> {
    let home = xdg_toml::config_home()?;
    load_and_apply_from(&home, app_name, dotenv_dir)
}

/// Same as [`load_and_apply`] with an explicit config home instead of `$XDG_CONFIG_HOME`.
pub fn load_and_apply_from(
    config_home: &Path,
    app_name: &str,
    dotenv_dir: Option<&Path>,
) -> Result<Vec<String>, LoadError> {
    let mut merged: HashMap<String, String> = xdg_toml::load_env_map(config_home, app_name)?;
    merged.extend(dotenv::load_env_map(dotenv_dir).map_err(LoadError::DotenvRead)?);

    let mut applied: Vec<String> = merged
        .into_iter()
        .filter(|(key, _)| std::env::var_os(key).is_none())
        .map(|(key, value)| {
            std::env::set_var(&key, value);
            key
        })
        .collect();
    applied.sort();
    Ok(applied)
}
