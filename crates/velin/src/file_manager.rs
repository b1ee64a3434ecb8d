use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of loading a file into the editor.
pub enum LoadOutcome {
    /// The file existed and was read.
    Loaded(String),
    /// The file does not exist yet; the buffer starts empty with the
    /// filename pending.
    NewFile,
}

/// Blocking persistence for the buffer text. The controller is the only
/// caller; load/save happen inline during startup and command execution.
pub struct FileManager {
    current_path: Option<PathBuf>,
}

impl FileManager {
    pub fn new() -> Self {
        Self { current_path: None }
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn has_file(&self) -> bool {
        self.current_path.is_some()
    }

    pub fn set_current_path(&mut self, path: PathBuf) {
        self.current_path = Some(path);
    }

    /// Reads the file at `path` and remembers it as the current path. A
    /// missing file is not an error: it starts a new buffer.
    pub fn load_file(&mut self, path: PathBuf) -> Result<LoadOutcome> {
        match fs::read_to_string(&path) {
            Ok(content) => {
                log::info!("Opened file: {}", path.display());
                self.current_path = Some(path);
                Ok(LoadOutcome::Loaded(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("File not found, starting new: {}", path.display());
                self.current_path = Some(path);
                Ok(LoadOutcome::NewFile)
            }
            Err(e) => {
                let message = match e.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        format!("Permission denied: {}", path.display())
                    }
                    std::io::ErrorKind::InvalidData => {
                        format!("File is not valid UTF-8: {}", path.display())
                    }
                    _ => format!("Error reading {}: {}", path.display(), e),
                };
                Err(anyhow::anyhow!(message))
            }
        }
    }

    /// Writes `content` to the current path. Fails when no path is set.
    pub fn save(&self, content: &str) -> Result<()> {
        let path = self
            .current_path
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No filename specified"))?;

        match fs::write(path, content.as_bytes()) {
            Ok(()) => {
                log::info!("Saved file: {}", path.display());
                Ok(())
            }
            Err(e) => {
                let message = match e.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        format!("Permission denied: {}", path.display())
                    }
                    _ => format!("{}: {}", path.display(), e),
                };
                Err(anyhow::anyhow!(message))
            }
        }
    }
}

impl Default for FileManager {
    fn default() -> Self {
        Self::new()
    }
}
