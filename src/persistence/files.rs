use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the tempo directory - checks for local .tempo first, then falls back to global ~/.tempo
pub fn get_tempo_dir() -> Result<PathBuf> {
    // Check for local .tempo directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let local_tempo = find_local_tempo(&current_dir);

    if let Some(local_dir) = local_tempo {
        return Ok(local_dir);
    }

    // Fall back to global ~/.tempo
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".tempo"))
}

/// Find local .tempo directory by walking up the directory tree
fn find_local_tempo(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let tempo_dir = current.join(".tempo");
        if tempo_dir.exists() && tempo_dir.is_dir() {
            return Some(tempo_dir);
        }

        // Move up to parent directory
        current = current.parent()?;
    }
}

/// Ensure the tempo directory exists
pub fn ensure_tempo_dir() -> Result<PathBuf> {
    let dir = get_tempo_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .tempo directory in the current directory
pub fn init_local_tempo() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let tempo_dir = current_dir.join(".tempo");

    if tempo_dir.exists() {
        anyhow::bail!("Tempo directory already exists: {}", tempo_dir.display());
    }

    fs::create_dir_all(&tempo_dir)
        .with_context(|| format!("Failed to create directory: {}", tempo_dir.display()))?;

    Ok(tempo_dir)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tempo_dir() {
        let dir = get_tempo_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".tempo"));
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        let content = "Hello, world!";
        atomic_write(&test_file, content).unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "first").unwrap();
        atomic_write(&test_file, "second").unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content, "second");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.txt");

        let content = read_file(&test_file).unwrap();
        assert_eq!(content, "");
    }
}
