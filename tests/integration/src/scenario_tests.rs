//! End-to-end scenarios for a full transform pass
//!
//! Each test builds a real source tree, resolves settings through the
//! layered resolver and drives `TransformRunner` the way the CLI does.

use pretty_assertions::assert_eq;
use xform_core::{
    ENGINE_RELATIVE_PATH, Error, RunRoots, SettingsLayer, SettingsResolver, TransformRunner,
};
use xform_fs::{NormalizedPath, canonical_root};
use xform_test_utils::{RecordingFileService, TestTree};

const CONFIG: &str = "<configuration />";

/// Register every listed file, plus the engine, with a recording service.
fn service_seeing(tree: &TestTree, files: &[&str]) -> RecordingFileService {
    let root = canonical_root(&tree.source_root()).unwrap();
    files.iter().fold(
        RecordingFileService::new()
            .with_base_working_directory("/agent")
            .with_file(NormalizedPath::new("/agent").join(ENGINE_RELATIVE_PATH)),
        |service, file| service.with_file(root.join(file)),
    )
}

fn transforms_in(service: &RecordingFileService) -> Vec<String> {
    service
        .argument_strings()
        .iter()
        .map(|args| {
            let start = args.find("transform:\"").unwrap() + "transform:\"".len();
            let end = start + args[start..].find('"').unwrap();
            let path = NormalizedPath::new(&args[start..end]);
            path.file_name().unwrap().to_string()
        })
        .collect()
}

#[test]
fn web_gets_release_then_staging_and_app_gets_nothing() {
    let tree = TestTree::new();
    for file in ["Web.config", "App.config", "Web.Release.config", "Web.Staging.config"] {
        tree.write(file, CONFIG);
    }
    let service = service_seeing(
        &tree,
        &["Web.config", "App.config", "Web.Release.config", "Web.Staging.config"],
    );

    let settings = SettingsResolver::new(tree.source_root())
        .with_overrides(SettingsLayer {
            environment_suffix: Some("Staging".into()),
            additional_transforms: Some(String::new()),
            ..Default::default()
        })
        .resolve()
        .unwrap();
    let report = TransformRunner::new(&service, RunRoots::in_place(tree.source_root()), settings)
        .run()
        .unwrap();

    assert_eq!(
        transforms_in(&service),
        vec!["Web.Release.config", "Web.Staging.config"]
    );
    assert!(
        report
            .applied
            .iter()
            .all(|a| a.base.file_name() == Some("Web.config"))
    );
}

#[test]
fn project_settings_drive_additional_suffixes() {
    let tree = TestTree::new();
    for file in ["Web.config", "Web.Release.config", "Web.Deploy.config", "Web.Test.config"] {
        tree.write(file, CONFIG);
    }
    tree.write(
        ".xform/config.toml",
        "additional_transforms = \" Test.config, ,Deploy.config , Release \"\n",
    );
    let service = service_seeing(
        &tree,
        &["Web.Release.config", "Web.Deploy.config", "Web.Test.config"],
    );

    let settings = SettingsResolver::new(tree.source_root()).resolve().unwrap();
    TransformRunner::new(&service, RunRoots::in_place(tree.source_root()), settings)
        .run()
        .unwrap();

    assert_eq!(
        transforms_in(&service),
        vec!["Web.Release.config", "Web.Test.config", "Web.Deploy.config"]
    );
}

#[test]
fn environment_suffix_equal_to_default_runs_once() {
    let tree = TestTree::new();
    tree.write("Web.config", CONFIG);
    tree.write("Web.Release.config", CONFIG);
    let service = service_seeing(&tree, &["Web.Release.config"]);

    let settings = SettingsResolver::new(tree.source_root())
        .with_overrides(SettingsLayer {
            environment_suffix: Some("Release".into()),
            ..Default::default()
        })
        .resolve()
        .unwrap();
    TransformRunner::new(&service, RunRoots::in_place(tree.source_root()), settings)
        .run()
        .unwrap();

    assert_eq!(transforms_in(&service), vec!["Web.Release.config"]);
}

#[test]
fn flags_follow_indent_in_the_argument_string() {
    let tree = TestTree::new();
    tree.write("Web.config", CONFIG);
    tree.write("Web.Release.config", CONFIG);
    let service = service_seeing(&tree, &["Web.Release.config"]);

    let settings = SettingsResolver::new(tree.source_root())
        .with_overrides(SettingsLayer {
            preserve_whitespace: Some(true),
            verbose: Some(false),
            ..Default::default()
        })
        .resolve()
        .unwrap();
    TransformRunner::new(&service, RunRoots::in_place(tree.source_root()), settings)
        .run()
        .unwrap();

    let args = &service.argument_strings()[0];
    assert!(args.ends_with("\" indent preservewhitespace"));
    assert!(!args.contains("verbose"));
}

#[test]
fn missing_engine_fails_before_any_invocation() {
    let tree = TestTree::new();
    tree.write("Web.config", CONFIG);
    tree.write("Web.Release.config", CONFIG);
    let root = canonical_root(&tree.source_root()).unwrap();
    let service = RecordingFileService::new().with_file(root.join("Web.Release.config"));

    let settings = SettingsResolver::new(tree.source_root()).resolve().unwrap();
    let result =
        TransformRunner::new(&service, RunRoots::in_place(tree.source_root()), settings).run();

    assert!(matches!(result, Err(Error::MissingTool { .. })));
    assert!(service.invocations().is_empty());
}

#[test]
fn nested_trees_keep_relative_layout_under_target() {
    let tree = TestTree::new();
    tree.write("areas/admin/Web.config", CONFIG);
    tree.write("areas/admin/Web.Release.config", CONFIG);
    let service = service_seeing(&tree, &["areas/admin/Web.Release.config"]);
    let target = tree.root().join("out");
    std::fs::create_dir_all(&target).unwrap();

    let settings = SettingsResolver::new(tree.source_root()).resolve().unwrap();
    let report = TransformRunner::new(
        &service,
        RunRoots::new(tree.source_root(), NormalizedPath::new(&target)),
        settings,
    )
    .run()
    .unwrap();

    let target_root = canonical_root(&NormalizedPath::new(&target)).unwrap();
    assert_eq!(
        report.applied[0].destination,
        target_root.join("areas/admin/Web.config")
    );
}
