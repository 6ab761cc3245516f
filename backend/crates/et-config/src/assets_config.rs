use crate::{DEFAULT_PUBLIC_DIRECTORY, DEFAULT_VIEWS_DIRECTORY};

use std::path::PathBuf;

use serde::Deserialize;

/// Where the landing page and static files live, relative to the working
/// directory unless absolute.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub views_dir: String,
    pub public_dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            views_dir: String::from(DEFAULT_VIEWS_DIRECTORY),
            public_dir: String::from(DEFAULT_PUBLIC_DIRECTORY),
        }
    }
}

impl AssetsConfig {
    pub fn index_page(&self) -> PathBuf {
        PathBuf::from(&self.views_dir).join("index.html")
    }

    pub fn public_path(&self) -> PathBuf {
        PathBuf::from(&self.public_dir)
    }
}
