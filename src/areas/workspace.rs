use crate::errors::GitError;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::Path;

/// A directory tree on the file system that files are read from or written to
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.into())
    }

    /// Write a new file; an existing file at that path is an error
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        // open file as WRONLY, CREAT, EXCL
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    pub fn make_directory(&self, dir_path: &Path) -> anyhow::Result<()> {
        let dir_path = self.path.join(dir_path);

        std::fs::create_dir(&dir_path)
            .with_context(|| format!("Failed to create directory: {:?}", dir_path))
    }

    /// Fail unless the root is an existing, empty directory
    pub fn ensure_empty(&self) -> anyhow::Result<()> {
        if !self.path.is_dir() {
            return Err(GitError::NotADirectory(self.path.to_path_buf()).into());
        }

        let mut entries = std::fs::read_dir(&self.path)
            .with_context(|| format!("Failed to list directory: {:?}", self.path))?;
        if entries.next().is_some() {
            return Err(GitError::NotEmpty(self.path.to_path_buf()).into());
        }

        Ok(())
    }
}
