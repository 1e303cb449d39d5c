//! End-to-end runs over a temporary project tree

use license_header::{HeaderEngine, HeaderError};
use license_header_cli::{collect_files, CliConfig, FileFilter, OutputFormat, Reporter, Runner};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const HEADER: &str = "/**\n * Copyright Foo Corp.\n */";

fn write(root: &Path, name: &str, contents: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "resources/license-header.js", &format!("{HEADER}\n"));
    write(
        root,
        "license-header.toml",
        r#"
        header = "resources/license-header.js"
        extensions = ["js", "vue"]
        exclude = ["vendor"]
        "#,
    );
    write(root, "src/valid.js", &format!("{HEADER}\n\nfoo();\n"));
    write(root, "src/missing.js", "foo();\n");
    write(root, "src/cli.js", &format!("#!/usr/bin/env node\n{HEADER}\nfoo();\n"));
    write(root, "src/App.vue", "<template>\n</template>\n<script>\n</script>\n");
    write(root, "vendor/lib.js", "untouched();\n");
    dir
}

fn load(root: &Path) -> (HeaderEngine, CliConfig) {
    let config = CliConfig::from_file(root.join("license-header.toml")).unwrap();
    let engine = HeaderEngine::new(&config.header_options(), config.base_dir()).unwrap();
    (engine, config)
}

#[test]
fn check_reports_problems_per_file() {
    let dir = project();
    let (engine, config) = load(dir.path());
    let files = collect_files(
        &[dir.path().join("src"), dir.path().join("vendor")],
        &FileFilter::new(&config.extensions, &config.exclude),
    );
    assert_eq!(files.len(), 4);

    let summary = Runner::new(&engine, false).run(&files);
    let problems: Vec<(String, Vec<String>)> = summary
        .reports
        .iter()
        .map(|report| {
            let name = Path::new(&report.path)
                .file_name()
                .unwrap()
                .to_string_lossy()
                .to_string();
            let messages = report.diagnostics.iter().map(|d| d.message.clone()).collect();
            (name, messages)
        })
        .collect();

    assert_eq!(
        problems,
        vec![
            ("App.vue".to_string(), vec![]),
            (
                "cli.js".to_string(),
                vec![
                    "Missing new line after license header".to_string(),
                    "Missing new line before license header".to_string(),
                ]
            ),
            (
                "missing.js".to_string(),
                vec!["Missing license header".to_string()]
            ),
            ("valid.js".to_string(), vec![]),
        ]
    );
    assert_eq!(summary.problem_count(), 3);
}

#[test]
fn fix_makes_project_clean() {
    let dir = project();
    let root = dir.path();
    let (engine, config) = load(root);
    let filter = FileFilter::new(&config.extensions, &config.exclude);

    let files = collect_files(&[root.to_path_buf()], &filter);
    let summary = Runner::new(&engine, true).run(&files);
    assert!(summary.is_clean());
    assert_eq!(summary.files_fixed, 2);

    assert_eq!(
        fs::read_to_string(root.join("src/cli.js")).unwrap(),
        format!("#!/usr/bin/env node\n\n{HEADER}\n\nfoo();\n")
    );
    assert_eq!(
        fs::read_to_string(root.join("src/missing.js")).unwrap(),
        format!("{HEADER}\n\nfoo();\n")
    );
    assert_eq!(
        fs::read_to_string(root.join("vendor/lib.js")).unwrap(),
        "untouched();\n"
    );

    let recheck = Runner::new(&engine, false).run(&files);
    assert!(recheck.is_clean());
}

#[test]
fn json_report_lists_every_file() {
    let dir = project();
    let (engine, config) = load(dir.path());
    let files = collect_files(
        &[dir.path().join("src/missing.js")],
        &FileFilter::new(&config.extensions, &config.exclude),
    );
    let summary = Runner::new(&engine, false).run(&files);

    let output = Reporter::new(OutputFormat::Json)
        .format_reports(&summary.reports)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["diagnostics"][0]["rule"], "license-header/header");
    assert_eq!(value[0]["diagnostics"][0]["line"], 1);
}

#[test]
fn unreadable_header_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "license-header.toml", r#"header = "nope.js""#);

    let config = CliConfig::from_file(dir.path().join("license-header.toml")).unwrap();
    let err = HeaderEngine::new(&config.header_options(), config.base_dir())
        .err()
        .unwrap();

    assert!(matches!(err, HeaderError::UnreadableHeader { .. }));
    assert!(err
        .to_string()
        .starts_with("could not read license header from"));
}

#[test]
fn missing_header_is_a_configuration_error() {
    let config = CliConfig::from_str("extensions = [\"js\"]").unwrap();
    let err = HeaderEngine::new(&config.header_options(), config.base_dir())
        .err()
        .unwrap();
    assert_eq!(err.to_string(), "missing license header path");
}
