// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run configuration, persisted as JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BlurwerkError, Result};
use crate::types::MaskSize;

/// Settings for a single blur run.
///
/// Missing keys in a config file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    /// Side length of the square blur window (default 3).
    pub mask_size: MaskSize,
    /// Image to read.
    pub input: PathBuf,
    /// PNG file to write.
    pub output: PathBuf,
    /// Split the blur pass across rayon worker threads.
    pub parallel: bool,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            mask_size: MaskSize::DEFAULT,
            input: PathBuf::from("lenna.png"),
            output: PathBuf::from("lenna-blurred.png"),
            parallel: true,
        }
    }
}

impl BlurConfig {
    /// Read a config file. A zero mask size or malformed JSON is reported as
    /// `BlurwerkError::Config` naming the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|err| {
            BlurwerkError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        serde_json::from_str(&data)
            .map_err(|err| BlurwerkError::Config(format!("{}: {}", path.display(), err)))
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_tool() {
        let config = BlurConfig::default();
        assert_eq!(config.mask_size.get(), 3);
        assert_eq!(config.input, PathBuf::from("lenna.png"));
        assert_eq!(config.output, PathBuf::from("lenna-blurred.png"));
        assert!(config.parallel);
    }

    #[test]
    fn partial_file_uses_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blurwerk.json");
        std::fs::write(&path, r#"{ "mask_size": 5 }"#).unwrap();

        let config = BlurConfig::load(&path).unwrap();
        assert_eq!(config.mask_size.get(), 5);
        assert_eq!(config.input, PathBuf::from("lenna.png"));
        assert!(config.parallel);
    }

    #[test]
    fn zero_mask_in_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "mask_size": 0 }"#).unwrap();

        match BlurConfig::load(&path) {
            Err(BlurwerkError::Config(msg)) => assert!(msg.contains("bad.json"), "{msg}"),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = BlurConfig::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(BlurwerkError::Config(_))));
    }

    #[test]
    fn save_then_load_returns_same_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blurwerk.json");
        let config = BlurConfig {
            mask_size: MaskSize::new(4).unwrap(),
            input: PathBuf::from("in.png"),
            output: PathBuf::from("out.png"),
            parallel: false,
        };

        config.save(&path).unwrap();
        assert_eq!(BlurConfig::load(&path).unwrap(), config);
    }
}
