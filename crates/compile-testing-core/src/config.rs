use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inputs of the fixture's `main`.
///
/// Every key is optional in the JSON form; missing keys fall back to the
/// values hard-coded in the `CompileTesting` class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureConfig {
    pub left: i32,
    pub right: i32,
    pub message: String,
    pub numbers: Vec<i32>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            left: 5,
            right: 7,
            message: "Hello".to_string(),
            numbers: vec![1, 2, 3, 4, 5],
        }
    }
}

impl FixtureConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid config '{}'", path.display()))?;
        log::debug!("Loaded config from '{}': {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults when `path` is `None`, otherwise the parsed file
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_reproduce_fixture() {
        let c = FixtureConfig::default();
        assert_eq!((c.left, c.right), (5, 7));
        assert_eq!(c.message, "Hello");
        assert_eq!(c.numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = FixtureConfig::from_json(r#"{ "left": 1, "numbers": [9] }"#).unwrap();
        assert_eq!(c.left, 1);
        assert_eq!(c.right, 7);
        assert_eq!(c.message, "Hello");
        assert_eq!(c.numbers, vec![9]);
    }

    #[test]
    fn empty_object_is_default() {
        let c = FixtureConfig::from_json("{}").unwrap();
        assert_eq!(c, FixtureConfig::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(FixtureConfig::from_json(r#"{ "lefty": 1 }"#).is_err());
    }

    #[test]
    fn load_from_file() {
        let td = tempdir().unwrap();
        let path = td.path().join("fixture.json");
        fs::write(&path, r#"{ "message": "abc" }"#).unwrap();

        let c = FixtureConfig::load_or_default(Some(path.as_path())).unwrap();
        assert_eq!(c.message, "abc");
    }

    #[test]
    fn missing_file_names_path_in_error() {
        let td = tempdir().unwrap();
        let path = td.path().join("nope.json");
        let err = FixtureConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.json"));
    }
}
