//! Scene files: container size, engine config and the initial element list.

use crate::error::{ReplayError, ReplayResult};
use freeform_core::element::null_as_default;
use freeform_core::{Element, EngineConfig};
use kurbo::Size;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Starting point of a replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub container: Container,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: EngineConfig,
    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: Vec<Element>,
}

impl Scene {
    /// Load a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ReplayResult<Self> {
        read_json(path.as_ref())
    }
}

/// Read and parse a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> ReplayResult<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}
