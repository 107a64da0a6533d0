// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio::fs;

/// A temporary directory holding inventory and config files, removed on drop.
#[allow(dead_code)]
#[derive(Debug)]
pub struct TestDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestDir {
    /// Path of the directory.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Writes a file into the directory and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub async fn write(
        &self,
        name: &str,
        content: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.dir.path().join(name);
        fs::write(&path, content).await?;
        Ok(path)
    }
}

#[allow(dead_code)]
/// Sets up a temporary directory for integration tests.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub fn setup_temp_dir() -> Result<TestDir, Box<dyn std::error::Error>> {
    Ok(TestDir {
        dir: tempfile::tempdir()?,
    })
}
