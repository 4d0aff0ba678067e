//! Grammar manifest (dialect.yaml) parsing.
//!
//! The manifest lives in the root grammar directory and configures the
//! fragment extension, the license header and the generated output path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DialectError, Result};

use super::ExtractOptions;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "dialect.yaml";

/// License header read when the manifest names none, relative to the root.
pub const DEFAULT_LICENSE: &str = "src/resources/license.txt";

/// Grammar manifest loaded from dialect.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Extension of fragment files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// License header prepended to generated output, relative to the root.
    ///
    /// Falls back to [`DEFAULT_LICENSE`] when that file exists.
    #[serde(default)]
    pub license: Option<PathBuf>,

    /// Generated file, relative to the dialect directory.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_extension() -> String {
    super::DEFAULT_EXTENSION.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("build/generated/parserImpls.ftl")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            license: None,
            output: default_output(),
        }
    }
}

impl Manifest {
    /// Load manifest from a dialect.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DialectError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| DialectError::Manifest {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Load the manifest of a root grammar directory, if it has one.
    ///
    /// Returns the manifest and whether a file was found.
    pub fn discover(root: &Path) -> Result<(Self, bool)> {
        let path = root.join(MANIFEST_FILENAME);
        if path.is_file() {
            Ok((Self::load(&path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    /// Extraction options described by this manifest.
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions::with_extension(&self.extension)
    }

    /// Read the license header.
    ///
    /// A configured license must exist; the default one is optional.
    pub fn license_text(&self, root: &Path) -> Result<Option<String>> {
        let path = match &self.license {
            Some(license) => root.join(license),
            None => {
                let default = root.join(DEFAULT_LICENSE);
                if !default.is_file() {
                    return Ok(None);
                }
                default
            }
        };

        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| DialectError::Io {
                path,
                message: format!("Failed to read license: {}", e),
            })
    }

    /// Resolve the generated file path for a dialect directory.
    pub fn output_path(&self, dialect: &Path) -> PathBuf {
        dialect.join(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
extension: jj
license: src/resources/license.txt
output: generated/Parser.jj
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.extension, "jj");
        assert_eq!(
            manifest.license,
            Some(PathBuf::from("src/resources/license.txt"))
        );
        assert_eq!(manifest.output, PathBuf::from("generated/Parser.jj"));
    }

    #[test]
    fn test_parse_partial_manifest() {
        let manifest = Manifest::parse("license: LICENSE").unwrap();

        assert_eq!(manifest.extension, "ftl");
        assert_eq!(manifest.license, Some(PathBuf::from("LICENSE")));
        assert_eq!(
            manifest.output,
            PathBuf::from("build/generated/parserImpls.ftl")
        );
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
        assert_eq!(Manifest::parse("\n  \n").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let err = Manifest::parse("extension: [ftl").unwrap_err();

        assert!(matches!(err, DialectError::Manifest { .. }));
    }

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();

        let (manifest, found) = Manifest::discover(dir.path()).unwrap();

        assert!(!found);
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "extension: tmpl\n").unwrap();

        let (manifest, found) = Manifest::discover(dir.path()).unwrap();

        assert!(found);
        assert_eq!(manifest.options().extension, "tmpl");
    }

    #[test]
    fn test_license_text() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("license.txt"), "// licensed\n").unwrap();

        let manifest = Manifest {
            license: Some(PathBuf::from("license.txt")),
            ..Default::default()
        };

        assert_eq!(
            manifest.license_text(dir.path()).unwrap(),
            Some("// licensed\n".to_string())
        );
        assert_eq!(Manifest::default().license_text(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_default_license_location() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/resources")).unwrap();
        fs::write(dir.path().join(DEFAULT_LICENSE), "<#-- license -->\n").unwrap();

        let (manifest, found) = Manifest::discover(dir.path()).unwrap();

        assert!(!found);
        assert_eq!(
            manifest.license_text(dir.path()).unwrap(),
            Some("<#-- license -->\n".to_string())
        );
    }

    #[test]
    fn test_missing_license_is_an_error() {
        let dir = tempdir().unwrap();
        let manifest = Manifest {
            license: Some(PathBuf::from("missing.txt")),
            ..Default::default()
        };

        assert!(matches!(
            manifest.license_text(dir.path()),
            Err(DialectError::Io { .. })
        ));
    }

    #[test]
    fn test_output_path() {
        let manifest = Manifest::default();

        assert_eq!(
            manifest.output_path(Path::new("/grammar/dialects/mysql")),
            PathBuf::from("/grammar/dialects/mysql/build/generated/parserImpls.ftl")
        );
    }
}
