//! Encode command implementation for the osmfile CLI.

use std::io::{BufReader, BufWriter};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use osmfile_core::{DEFAULT_GENERATOR, Escaping, Feature, FeatureEncoder, OsmDocument};
use serde::{Deserialize, Serialize};

use crate::CliError;

pub(crate) const ARG_INPUT: &str = "input";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_GENERATOR: &str = "generator";
pub(crate) const ARG_ESCAPING: &str = "escaping";
pub(crate) const ARG_OVERWRITE: &str = "overwrite";
pub(crate) const ENV_INPUT: &str = "OSMFILE_CMDS_ENCODE_INPUT";
pub(crate) const ENV_OUTPUT: &str = "OSMFILE_CMDS_ENCODE_OUTPUT";

/// Value escaping selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum EscapingMode {
    /// Raw values, compatible with older documents.
    Historical,
    /// Escape XML markup characters in every value.
    Full,
}

impl From<EscapingMode> for Escaping {
    fn from(mode: EscapingMode) -> Self {
        match mode {
            EscapingMode::Historical => Self::Historical,
            EscapingMode::Full => Self::Full,
        }
    }
}

/// CLI arguments for the `encode` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Encode a JSON list of node and way records into an OSM XML \
                 document. Paths can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Encode feature records as OSM XML"
)]
#[ortho_config(prefix = "OSMFILE")]
pub(crate) struct EncodeArgs {
    /// Path to the JSON feature list.
    #[arg(long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Path of the `.osm` document to write.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Generator announced in the `<osm>` root element.
    #[arg(long = ARG_GENERATOR, value_name = "name")]
    #[serde(default)]
    pub(crate) generator: Option<String>,
    /// How attribute and tag values are escaped.
    #[arg(long = ARG_ESCAPING, value_enum)]
    #[serde(default)]
    pub(crate) escaping: Option<EscapingMode>,
    /// Replace an existing output document.
    #[arg(long = ARG_OVERWRITE, action = ArgAction::SetTrue)]
    #[serde(default)]
    pub(crate) overwrite: bool,
}

impl EncodeArgs {
    pub(crate) fn into_config(self) -> Result<EncodeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EncodeConfig::try_from(merged)
    }
}

/// Resolved `encode` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EncodeConfig {
    pub(crate) input: Utf8PathBuf,
    pub(crate) output: Utf8PathBuf,
    pub(crate) generator: String,
    pub(crate) escaping: Escaping,
    pub(crate) overwrite: bool,
}

impl EncodeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.input, ARG_INPUT)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match osmfile_fs::is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<EncodeArgs> for EncodeConfig {
    type Error = CliError;

    fn try_from(args: EncodeArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_INPUT,
        })?;
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT,
            env: ENV_OUTPUT,
        })?;
        Ok(Self {
            input,
            output,
            generator: args
                .generator
                .unwrap_or_else(|| DEFAULT_GENERATOR.to_owned()),
            escaping: args.escaping.map(Escaping::from).unwrap_or_default(),
            overwrite: args.overwrite,
        })
    }
}

/// Feature counts written by one `encode` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct EncodeSummary {
    pub(crate) nodes: usize,
    pub(crate) ways: usize,
}

pub(crate) fn run_encode(args: EncodeArgs) -> Result<EncodeSummary, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute(&config)
}

/// Encode every feature, then write the document in one pass.
///
/// Encoding finishes before the output is created, so a bad record never
/// leaves a truncated document behind.
pub(crate) fn execute(config: &EncodeConfig) -> Result<EncodeSummary, CliError> {
    let features = read_features(&config.input)?;
    let encoder = FeatureEncoder::new().with_escaping(config.escaping);
    let mut summary = EncodeSummary::default();
    let mut fragments = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        let fragment = encoder.encode(feature).map_err(|source| {
            warn!("stopping at feature #{index}: {source}");
            CliError::Encode { index, source }
        })?;
        match feature {
            Feature::Node(_) => summary.nodes += 1,
            Feature::Way(_) => summary.ways += 1,
        }
        fragments.push(fragment);
    }

    let file = osmfile_fs::create_output(&config.output, config.overwrite).map_err(|source| {
        CliError::CreateOutput {
            path: config.output.clone(),
            source,
        }
    })?;
    let mut document = OsmDocument::new(BufWriter::new(file), config.generator.as_str());
    document.header()?;
    document.write_all(&fragments)?;
    document.footer()?;
    info!(
        "wrote {} node(s) and {} way(s) to {}",
        summary.nodes, summary.ways, config.output
    );
    Ok(summary)
}

fn read_features(path: &Utf8Path) -> Result<Vec<Feature>, CliError> {
    let file = osmfile_fs::open_input(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}
