//! Multi-file pipeline behavior: filtering, dry runs, in-place writes, and
//! per-file failure isolation.

mod common;

use std::{fs, path::Path};

use common::TempProject;
use undebugify::{
    pipeline::{FileFilter, FileReport, Pipeline, PipelineOptions},
    RemovalConfig,
};

fn fixed_options(write: bool) -> PipelineOptions {
    PipelineOptions {
        filter: FileFilter::default(),
        write,
        config: Some(RemovalConfig::from_names(["log"])),
    }
}

#[test]
fn filter_admits_by_extension() {
    let filter = FileFilter::default();
    assert!(filter.admits(Path::new("a.js")));
    assert!(filter.admits(Path::new("a.mjs")));
    assert!(!filter.admits(Path::new("a.ts")));
    assert!(!filter.admits(Path::new("README")));

    let narrowed = FileFilter {
        include: vec!["js".into()],
        exclude: vec!["js".into()],
    };
    assert!(!narrowed.admits(Path::new("a.js")));
}

#[test]
fn dry_run_reports_without_touching_files() {
    let project = TempProject::new("dryrun");
    let file = project.write("a.js", "log(1);\nwork();\n");
    project.write("notes.txt", "log(1);\n");

    let reports = Pipeline::new(fixed_options(false))
        .run(&project.root)
        .unwrap();

    assert_eq!(reports.len(), 1);
    match &reports[0] {
        FileReport::Stripped {
            removed, changed, ..
        } => {
            assert_eq!(*removed, 1);
            assert!(changed);
        }
        other => panic!("expected Stripped, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&file).unwrap(), "log(1);\nwork();\n");
}

#[test]
fn write_mode_rewrites_in_place() {
    let project = TempProject::new("write");
    let file = project.write("a.js", "log(1);\nwork();\n");

    Pipeline::new(fixed_options(true)).run(&project.root).unwrap();

    assert_eq!(fs::read_to_string(&file).unwrap(), "\nwork();\n");
}

#[test]
fn configuration_is_discovered_per_file() {
    let project = TempProject::new("perfile");
    project.write(
        "package.json",
        r#"{ "undebugify": { "remove": ["log"] } }"#,
    );
    let file = project.write("src/a.js", "log(1);\nwork();\n");

    let options = PipelineOptions {
        write: true,
        ..PipelineOptions::default()
    };
    Pipeline::new(options).run(&project.root).unwrap();

    assert_eq!(fs::read_to_string(&file).unwrap(), "\nwork();\n");
}

#[test]
fn files_without_configuration_pass_through() {
    let project = TempProject::new("unconfigured");
    project.write("package.json", r#"{ "name": "app" }"#);
    project.write("a.js", "log(1);\n");

    let options = PipelineOptions {
        write: true,
        ..PipelineOptions::default()
    };
    let reports = Pipeline::new(options).run(&project.root).unwrap();

    assert!(matches!(reports[0], FileReport::Unconfigured { .. }));
    assert_eq!(fs::read_to_string(project.path("a.js")).unwrap(), "log(1);\n");
}

#[test]
fn one_broken_file_does_not_abort_the_run() {
    let project = TempProject::new("isolation");
    project.write("bad.js", "function (");
    let good = project.write("good.js", "log(1);\n");

    let reports = Pipeline::new(fixed_options(true))
        .run(&project.root)
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert!(matches!(reports[0], FileReport::Failed { .. }));
    assert!(matches!(reports[1], FileReport::Stripped { .. }));
    assert_eq!(fs::read_to_string(&good).unwrap(), "\n");
}
