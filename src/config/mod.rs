pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

pub use types::{AgentConfig, Config, RefinementConfig};

pub const CONFIG_FILE_NAME: &str = ".stackgen.toml";

/// Get the global config file path (~/.stackgen.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Load configuration.
///
/// An explicit path wins; otherwise the working directory is checked first,
/// then the global file. A malformed file is logged and skipped rather than
/// aborting the run.
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = override_path {
        let content = fs::read_to_string(path)?;
        return toml::from_str(&content)
            .map_err(|e| ConfigError::ParsingFailed(e.to_string()).into());
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    for candidate in [Some(local), global_config_path()].into_iter().flatten() {
        if !candidate.exists() {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&candidate) {
            match toml::from_str(&content) {
                Ok(config) => return Ok(config),
                Err(e) => log::warn!("ignoring malformed config {}: {}", candidate.display(), e),
            }
        }
    }

    Ok(Config::default())
}

/// Save configuration to the global config file
pub fn save_global_config(config: &Config) -> Result<()> {
    if let Some(path) = global_config_path() {
        let content = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;
        fs::write(&path, content)?;

        // API keys live in this file; keep it owner-readable
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&path, perms).ok();
        }
    }
    Ok(())
}

/// Load only the agent config section (for API keys)
pub fn load_agent_config() -> AgentConfig {
    if let Some(global) = global_config_path() {
        if global.exists() {
            if let Ok(content) = fs::read_to_string(&global) {
                if let Ok(config) = toml::from_str::<Config>(&content) {
                    return config.agent;
                }
            }
        }
    }
    AgentConfig::default()
}

/// Save agent config, preserving other config sections
pub fn save_agent_config(agent: &AgentConfig) -> Result<()> {
    let mut config = load_config(None)?;
    config.agent = agent.clone();
    save_global_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_with_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[refinement]\nmax_rounds = 2").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.refinement.max_rounds, 2);
    }

    #[test]
    fn test_load_config_with_missing_explicit_path_fails() {
        let result = load_config(Some(Path::new("/nonexistent/stackgen.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_malformed_explicit_path_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [").unwrap();

        let result = load_config(Some(file.path()));
        assert!(result.is_err());
    }
}
