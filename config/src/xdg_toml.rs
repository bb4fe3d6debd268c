//! Read the `[env]` table of `<config_home>/<app>/config.toml`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::LoadError;

/// `$XDG_CONFIG_HOME` when set and non-empty, otherwise the platform config dir.
pub fn config_home() -> Result<PathBuf, LoadError> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => dirs::config_dir()
            .ok_or_else(|| LoadError::XdgPath("no config directory for this platform".into())),
    }
}

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Returns the `[env]` pairs for `app_name` under `config_home`.
/// A missing file or section yields an empty map.
pub fn load_env_map(
    config_home: &Path,
    app_name: &str,
) -> Result<HashMap<String, String>, LoadError> {
    let path = config_home.join(app_name).join("config.toml");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let file: ConfigFile = toml::from_str(&content)?;
    Ok(file.env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(home: &Path, app: &str, body: &str) {
        let dir = home.join(app);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), body).unwrap();
    }

    #[test]
    fn missing_file_is_empty() {
        let home = tempfile::tempdir().unwrap();
        assert!(load_env_map(home.path(), "replica").unwrap().is_empty());
    }

    #[test]
    fn reads_env_table() {
        let home = tempfile::tempdir().unwrap();
        write_config(
            home.path(),
            "replica",
            "[env]\nREPLICA_COUNT = \"4\"\nRUST_LOG = \"replica=debug\"\n",
        );
        let map = load_env_map(home.path(), "replica").unwrap();
        assert_eq!(map.get("REPLICA_COUNT").map(String::as_str), Some("4"));
        assert_eq!(map.get("RUST_LOG").map(String::as_str), Some("replica=debug"));
    }

    #[test]
    fn other_tables_are_ignored() {
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "replica", "[ui]\ncolor = \"never\"\n");
        assert!(load_env_map(home.path(), "replica").unwrap().is_empty());
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "replica", "[env\nbroken");
        assert!(matches!(
            load_env_map(home.path(), "replica"),
            Err(LoadError::XdgParse(_))
        ));
    }
}
