use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_stmtclean_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gate: GateSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSection {
    /// Environment variable holding the shared access password
    pub password_env: String,
    /// Inline password, used only when the environment variable is unset
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub file_name: String,
    pub preview_rows: usize,
}

impl Default for GateSection {
    fn default() -> Self {
        Self {
            password_env: "APP_PASSWORD".to_string(),
            password: None,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            file_name: stmtclean_ingest::OUTPUT_FILE_NAME.to_string(),
            preview_rows: stmtclean_ingest::output::DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl GateSection {
    /// The configured secret: env var first, then the inline value.
    pub fn secret(&self) -> Option<String> {
        std::env::var(&self.password_env)
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.password.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_stmtclean_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.gate.password_env, "APP_PASSWORD");
        assert_eq!(cfg.output.file_name, "Cleaned_Data.csv");
        assert_eq!(cfg.output.preview_rows, 100);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let cfg = parse_config("[output]\nfile_name = \"jan.csv\"\npreview_rows = 20\n").unwrap();
        assert_eq!(cfg.output.file_name, "jan.csv");
        assert_eq!(cfg.output.preview_rows, 20);
        assert_eq!(cfg.gate.password_env, "APP_PASSWORD");
    }

    #[test]
    fn test_inline_password_used_when_env_unset() {
        let gate = GateSection {
            password_env: "STMTCLEAN_TEST_UNSET_VAR".to_string(),
            password: Some("pw".to_string()),
        };
        assert_eq!(gate.secret().as_deref(), Some("pw"));
    }
}
