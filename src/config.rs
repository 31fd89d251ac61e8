use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::attributes::KnownAttributes;

/// A config file, e.g.
///
/// ```json
/// { "known": ["name", "schema", "type"] }
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Attribute names to recognize.
    #[serde(default)]
    pub known: Vec<String>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse config file {}", path.display()))
    }

    pub fn known_attributes(&self) -> KnownAttributes {
        self.known.iter().map(String::as_str).collect()
    }
}

/// Reads the top-level keys of the JSON object in `path`, in document order. Values are ignored.
pub fn read_attribute_names(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Could not read attribute file {}", path.display()))?;
    let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&contents)
        .with_context(|| {
            format!(
                "Could not parse attribute file {} as a JSON object",
                path.display()
            )
        })?;
    Ok(document.into_iter().map(|(name, _)| name).collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::{read_attribute_names, Config};
    use crate::tests::tempdir;

    #[test]
    fn load_config() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "known": ["schema", "name"] }"#)?;

        let config = Config::load(&path)?;
        assert_eq!(config.known, ["schema", "name"]);
        assert_eq!(config.known_attributes().to_string(), "name, schema");
        Ok(())
    }

    #[test]
    fn config_defaults_and_rejects_unknown_keys() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");

        fs::write(&path, "{}")?;
        assert_eq!(Config::load(&path)?, Config::default());

        fs::write(&path, r#"{ "knwon": [] }"#)?;
        let error = Config::load(&path).expect_err("misspelled key");
        assert!(format!("{error:#}").starts_with("Could not parse config file "));
        Ok(())
    }

    #[test]
    fn attribute_names_keep_document_order() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("function.json");
        fs::write(
            &path,
            r#"{ "schema": "public", "name": "add", "": 1, "my attr": null, "line\nbreak": [] }"#,
        )?;

        assert_eq!(
            read_attribute_names(&path)?,
            ["schema", "name", "", "my attr", "line\nbreak"]
        );
        Ok(())
    }

    #[test]
    fn attribute_file_must_be_an_object() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("list.json");
        fs::write(&path, r#"["name"]"#)?;

        let error = read_attribute_names(&path).expect_err("not an object");
        assert!(error.to_string().ends_with("as a JSON object"));
        Ok(())
    }
}
