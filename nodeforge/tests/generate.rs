//! Integration tests for end-to-end project generation

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use nodeforge::{
    CommandLine, CommandRunner, CommandStatus, ForgeConfig, ForgeError, Generator, Manifest,
    ProjectLayout, ProjectName, ProvisionStep, Result, MANIFEST_FILE, PROJECT_DIRECTORIES,
    TEMPLATE_FILES,
};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Stand-in for the package manager: records every call and writes a
/// `package.json` on `init` the way `npm init -y` does
#[derive(Default)]
struct FakePackageManager {
    calls: RefCell<Vec<(CommandLine, PathBuf)>>,
    fail_on: Option<&'static str>,
}

impl FakePackageManager {
    fn failing_on(arg: &'static str) -> Self {
        Self {
            fail_on: Some(arg),
            ..Self::default()
        }
    }

    fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(cmd, _)| cmd.args.join(" "))
            .collect()
    }
}

impl CommandRunner for FakePackageManager {
    fn run(&self, command: &CommandLine, working_dir: &Path) -> Result<CommandStatus> {
        self.calls
            .borrow_mut()
            .push((command.clone(), working_dir.to_path_buf()));

        if self.fail_on.is_some_and(|arg| command.args.iter().any(|a| a == arg)) {
            return Ok(CommandStatus::from_code(1));
        }

        if command.args.first().map(String::as_str) == Some("init") {
            let name = working_dir.file_name().unwrap().to_string_lossy();
            let manifest = format!(
                r#"{{
  "name": "{name}",
  "version": "1.0.0",
  "main": "index.js",
  "scripts": {{
    "test": "echo \"Error: no test specified\" && exit 1",
    "build": "tsc"
  }},
  "license": "ISC"
}}
"#
            );
            fs::write(working_dir.join(MANIFEST_FILE), manifest).unwrap();
        }

        Ok(CommandStatus::from_code(0))
    }
}

fn demo_name() -> ProjectName {
    ProjectName::from_arg(Some("demo".to_string()), "backend")
}

fn snapshot(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    entries.sort();
    entries
}

/// Every path under `root`, relative and sorted
fn tree(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<_> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    paths.sort();
    paths
}

#[test]
fn test_generate_writes_exact_tree() {
    let cwd = TempDir::new().unwrap();
    let pm = FakePackageManager::default();
    let layout = ProjectLayout::plan(cwd.path(), &demo_name()).unwrap();

    Generator::new(&ForgeConfig::default(), &pm)
        .generate(&layout, |_| {})
        .unwrap();

    let mut expected: Vec<PathBuf> = PROJECT_DIRECTORIES
        .iter()
        .chain(TEMPLATE_FILES.iter().map(|template| &template.path))
        .chain(std::iter::once(&MANIFEST_FILE))
        .map(|path| PathBuf::from(*path))
        .collect();
    expected.sort();

    assert_eq!(tree(layout.root()), expected);
    assert_eq!(snapshot(cwd.path()), vec![cwd.path().join("demo")]);
}

#[test]
fn test_generate_creates_complete_project() {
    let cwd = TempDir::new().unwrap();
    let pm = FakePackageManager::default();
    let layout = ProjectLayout::plan(cwd.path(), &demo_name()).unwrap();

    let mut steps = Vec::new();
    let project = Generator::new(&ForgeConfig::default(), &pm)
        .generate(&layout, |progress| steps.push(progress))
        .unwrap();

    let root = cwd.path().join("demo");
    assert_eq!(project.root, root);

    for dir in PROJECT_DIRECTORIES {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
    }
    for template in TEMPLATE_FILES {
        assert!(root.join(template.path).is_file(), "missing file {}", template.path);
    }
    assert!(root.join(MANIFEST_FILE).is_file());

    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# demo\n"));

    let routes = fs::read_to_string(root.join("src/routes/example.routes.js")).unwrap();
    assert!(routes.contains(r#"router.get("/""#));
    assert!(routes.contains(r#"router.post("/""#));
    let app = fs::read_to_string(root.join("src/app.js")).unwrap();
    assert!(app.contains(r#""/api/examples""#));

    assert_eq!(fs::read_to_string(root.join(".env")).unwrap(), "PORT=5000\n");

    assert_eq!(steps.len(), 1 + ProvisionStep::ALL.len());
}

#[test]
fn test_provisioning_runs_in_project_root_in_order() {
    let cwd = TempDir::new().unwrap();
    let pm = FakePackageManager::default();
    let layout = ProjectLayout::plan(cwd.path(), &demo_name()).unwrap();

    Generator::new(&ForgeConfig::default(), &pm)
        .generate(&layout, |_| {})
        .unwrap();

    assert_eq!(
        pm.commands(),
        vec![
            "init -y",
            "install express cors dotenv",
            "install -D nodemon",
        ]
    );
    assert!(pm
        .calls
        .borrow()
        .iter()
        .all(|(_, dir)| dir == &cwd.path().join("demo")));
}

#[test]
fn test_manifest_scripts_are_replaced() {
    let cwd = TempDir::new().unwrap();
    let pm = FakePackageManager::default();
    let layout = ProjectLayout::plan(cwd.path(), &demo_name()).unwrap();

    Generator::new(&ForgeConfig::default(), &pm)
        .generate(&layout, |_| {})
        .unwrap();

    let manifest = Manifest::load(layout.root()).unwrap();
    assert_eq!(
        manifest.scripts(),
        vec![("start", "node server.js"), ("dev", "nodemon server.js")]
    );
    assert_eq!(manifest.name(), Some("demo"));
}

#[test]
fn test_existing_file_blocks_generation() {
    let cwd = TempDir::new().unwrap();
    fs::write(cwd.path().join("demo"), "keep me").unwrap();
    let before = snapshot(cwd.path());

    let err = ProjectLayout::plan(cwd.path(), &demo_name()).unwrap_err();

    assert!(matches!(err, ForgeError::AlreadyExists { .. }));
    assert_eq!(snapshot(cwd.path()), before);
    assert_eq!(fs::read_to_string(cwd.path().join("demo")).unwrap(), "keep me");
}

#[test]
fn test_second_run_fails_without_mutation() {
    let cwd = TempDir::new().unwrap();
    let pm = FakePackageManager::default();

    let layout = ProjectLayout::plan(cwd.path(), &demo_name()).unwrap();
    Generator::new(&ForgeConfig::default(), &pm)
        .generate(&layout, |_| {})
        .unwrap();

    let root = cwd.path().join("demo");
    let before = snapshot(&root);
    let manifest_before = fs::read_to_string(root.join(MANIFEST_FILE)).unwrap();

    let err = ProjectLayout::plan(cwd.path(), &demo_name()).unwrap_err();

    assert!(matches!(err, ForgeError::AlreadyExists { .. }));
    assert_eq!(snapshot(&root), before);
    assert_eq!(
        fs::read_to_string(root.join(MANIFEST_FILE)).unwrap(),
        manifest_before
    );
}

#[test]
fn test_failed_install_leaves_partial_project() {
    let cwd = TempDir::new().unwrap();
    let pm = FakePackageManager::failing_on("express");
    let layout = ProjectLayout::plan(cwd.path(), &demo_name()).unwrap();

    let err = Generator::new(&ForgeConfig::default(), &pm)
        .generate(&layout, |_| {})
        .unwrap_err();

    match err {
        ForgeError::CommandFailed { step, status, .. } => {
            assert_eq!(step, ProvisionStep::InstallDependencies);
            assert_eq!(status.code(), Some(1));
        }
        other => panic!("unexpected error: {other}"),
    }

    // dev install never ran
    assert_eq!(pm.commands().len(), 2);
    // scripts were patched before the failing install
    let manifest = Manifest::load(layout.root()).unwrap();
    assert_eq!(manifest.scripts().len(), 2);
}

#[test]
fn test_custom_dependencies_from_config() {
    let cwd = TempDir::new().unwrap();
    let pm = FakePackageManager::default();
    let layout = ProjectLayout::plan(cwd.path(), &demo_name()).unwrap();

    let mut config = ForgeConfig::default();
    config.provisioning.dependencies = vec!["express@4".to_string()];
    config.provisioning.dev_dependencies = vec!["nodemon@3".to_string()];

    Generator::new(&config, &pm).generate(&layout, |_| {}).unwrap();

    assert_eq!(
        pm.commands(),
        vec!["init -y", "install express@4", "install -D nodemon@3"]
    );
}
