use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn stmtclean_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".stmtclean"))
}

pub fn ensure_stmtclean_home() -> Result<PathBuf> {
    let dir = stmtclean_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Read one uploaded statement as raw bytes, labelled by its file name.
pub fn read_input(path: &Path) -> Result<stmtclean_ingest::StatementInput> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    Ok(stmtclean_ingest::StatementInput::new(label, bytes))
}

pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
