//! Behaviour-driven step definitions driving the encode CLI scenarios.

use super::helpers::{FEATURES_JSON, Workspace, run_without_layers};
use super::*;
use crate::encode::{ARG_INPUT, ARG_OUTPUT, EncodeSummary};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::{cell::RefCell, fs};

const EXISTING_DOCUMENT: &str = "<osm>previous run</osm>\n";

/// Aggregates encode scenario state behind a single world fixture.
struct EncodeWorld {
    workspace: RefCell<Option<Workspace>>,
    cli_args: RefCell<Vec<String>>,
    cli_result: RefCell<Option<Result<EncodeSummary, CliError>>>,
}

impl EncodeWorld {
    fn new() -> Self {
        Self {
            workspace: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            cli_result: RefCell::new(None),
        }
    }

    fn with_workspace<T>(&self, action: impl FnOnce(&Workspace) -> T) -> T {
        let guard = self.workspace.borrow();
        action(guard.as_ref().expect("workspace prepared"))
    }
}

#[fixture]
fn world() -> EncodeWorld {
    EncodeWorld::new()
}

#[given("a feature list with one node and one track")]
fn feature_list(#[from(world)] world: &EncodeWorld) {
    *world.workspace.borrow_mut() = Some(Workspace::with_features(FEATURES_JSON));
}

#[given("the output document already exists")]
fn output_exists(#[from(world)] world: &EncodeWorld) {
    world.with_workspace(|workspace| {
        let output = workspace.output();
        let parent = output.parent().expect("output has a parent");
        fs::create_dir_all(parent).expect("create output directory");
        fs::write(&output, EXISTING_DOCUMENT).expect("seed existing document");
    });
}

#[given("I pass the input and output paths with CLI flags")]
fn cli_provides_paths(#[from(world)] world: &EncodeWorld) {
    let args = world.with_workspace(|workspace| {
        [
            format!("--{ARG_INPUT}"),
            workspace.input().into_string(),
            format!("--{ARG_OUTPUT}"),
            workspace.output().into_string(),
        ]
    });
    world.cli_args.borrow_mut().extend(args);
}

#[given("I pass only the input CLI flag")]
fn cli_only_input(#[from(world)] world: &EncodeWorld) {
    let args =
        world.with_workspace(|workspace| [format!("--{ARG_INPUT}"), workspace.input().into_string()]);
    world.cli_args.borrow_mut().extend(args);
}

#[when("I run the encode command")]
fn run_encode_command(#[from(world)] world: &EncodeWorld) {
    let outcome = run_without_layers(&world.cli_args.borrow());
    world.cli_result.replace(Some(outcome));
}

#[then("the output document wraps one node, one split node and one way")]
fn document_written(#[from(world)] world: &EncodeWorld) {
    let borrowed = world.cli_result.borrow();
    let summary = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect("expected success");
    assert_eq!(*summary, EncodeSummary { nodes: 1, ways: 1 });

    let xml = world.with_workspace(|workspace| {
        fs::read_to_string(workspace.output()).expect("read output document")
    });
    assert!(xml.starts_with("<?xml version='1.0' encoding='UTF-8'?>\n<osm version=\"0.6\""));
    assert!(xml.ends_with("</osm>\n"));
    assert_eq!(xml.matches("<node ").count(), 2, "unexpected nodes in {xml}");
    assert_eq!(xml.matches("<way ").count(), 1);
    assert!(xml.contains("<nd ref=\"-3\"/>"));
    assert!(xml.contains("<tag k='highway' v='track'/>"));
    assert!(!xml.contains("Morning walk"), "track names are never written");
}

#[then("the CLI reports that the \"output\" flag is missing")]
fn reports_missing_output(#[from(world)] world: &EncodeWorld) {
    let borrowed = world.cli_result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_OUTPUT),
        other => panic!("unexpected error {other:?}"),
    }
}

#[then("the existing document is left untouched")]
fn existing_document_kept(#[from(world)] world: &EncodeWorld) {
    let borrowed = world.cli_result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::CreateOutput { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists);
        }
        other => panic!("unexpected error {other:?}"),
    }
    let contents = world.with_workspace(|workspace| {
        fs::read_to_string(workspace.output()).expect("read output document")
    });
    assert_eq!(contents, EXISTING_DOCUMENT);
}

macro_rules! register_encode_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/encode_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: EncodeWorld) {
            let _ = world;
        }
    };
}

register_encode_scenario!(writing_from_cli_flags, "writing a document from CLI flags");
register_encode_scenario!(rejecting_missing_output, "rejecting a missing output path");
register_encode_scenario!(
    refusing_to_overwrite,
    "refusing to replace an existing document"
);
