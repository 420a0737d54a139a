//! Test helpers for preparing feature lists and invoking the encode command.

use super::*;
use crate::encode::{EncodeConfig, EncodeSummary, execute};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const FEATURES_JSON: &str = r#"[
  {"type": "node", "lat": "39.1", "lon": "-108.2", "uid": "7", "user": "alice",
   "tags": {"amenity": "cafe"}},
  {"type": "way", "refs": ["39.1", "-108.2", "39.2;-108.3"], "uid": "7", "user": "alice",
   "tags": {"highway": "track", "track": "Morning walk"}}
]"#;

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    pub(super) fn with_features(contents: &str) -> Self {
        let workspace = Self::new();
        fs::write(workspace.input(), contents).expect("write feature list");
        workspace
    }

    pub(super) fn input(&self) -> Utf8PathBuf {
        self.root.join("features.json")
    }

    pub(super) fn output(&self) -> Utf8PathBuf {
        self.root.join("out/track.osm")
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Parse an invocation and run it without consulting config files or env.
pub(super) fn run_without_layers(args: &[String]) -> Result<EncodeSummary, CliError> {
    let mut invocation = vec!["osmfile".to_owned(), "encode".to_owned()];
    invocation.extend(args.iter().cloned());
    let cli = Cli::try_parse_from(invocation).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Encode(args) => {
            let config = EncodeConfig::try_from(args)?;
            config.validate_sources()?;
            execute(&config)
        }
    }
}
