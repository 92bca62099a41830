mod common;

use common::TestContext;
use modplan::app::api;
use modplan::{AppError, BuildOrderReport, CheckOptions};
use tempfile::TempDir;

#[test]
fn full_flow_on_a_scaffolded_workspace() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();

    let outcome = api::init_at(root.clone(), "core").expect("init failed");
    assert_eq!(outcome.module, "core");

    let report = api::order_at(root.clone(), &[]).expect("order failed");
    assert_eq!(report.modules.len(), 1);
    assert_eq!(report.modules[0].name, "core");
    assert_eq!(report.modules[0].language_version, 8);

    let summaries = api::list_at(root.clone()).expect("list failed");
    assert_eq!(summaries.len(), 1);
    assert!(!summaries[0].executable);

    let check = api::check_at(root, CheckOptions::default()).expect("check failed");
    assert_eq!(check.exit_code, 0);
}

#[test]
fn order_at_is_deterministic_across_runs() {
    let ctx = TestContext::new();
    ctx.write_demo_workspace();

    let names = |report: &BuildOrderReport| -> Vec<String> {
        report.modules.iter().map(|module| module.name.clone()).collect()
    };

    let first = api::order_at(ctx.work_dir(), &[]).unwrap();
    let second = api::order_at(ctx.work_dir(), &[]).unwrap();

    assert_eq!(names(&first), names(&second));
}

#[test]
fn order_at_scopes_to_the_requested_closure() {
    let ctx = TestContext::new();
    ctx.write_demo_workspace();

    let report = api::order_at(ctx.work_dir(), &["ll4j-train".to_string()]).unwrap();

    let names: Vec<&str> = report.modules.iter().map(|module| module.name.as_str()).collect();
    assert_eq!(names, vec!["ll4j-huzpsb", "ll4j-train"]);
}

#[test]
fn order_at_surfaces_resolution_errors() {
    let ctx = TestContext::new();
    ctx.write_workspace(&["a"]);
    ctx.write_module("a", 8, &["ghost"], None);

    let err = api::order_at(ctx.work_dir(), &[]).unwrap_err();

    assert!(matches!(
        err,
        AppError::UnknownDependency { dependency, .. } if dependency == "ghost"
    ));
}

#[test]
fn list_detail_at_reports_dependents() {
    let ctx = TestContext::new();
    ctx.write_demo_workspace();

    let detail = api::list_detail_at(ctx.work_dir(), "ll4j-huzpsb").unwrap();

    assert_eq!(detail.dependents, vec!["ll4j-train", "ll4j-demo"]);
    assert!(detail.main_class.is_none());
}

#[test]
fn check_at_counts_warnings() {
    let ctx = TestContext::new();
    ctx.write_workspace(&["demo", "core"]);
    ctx.write_module("core", 8, &[], None);
    ctx.write_module("demo", 8, &["core", "core"], None);

    let outcome = api::check_at(ctx.work_dir(), CheckOptions::default()).unwrap();

    assert_eq!(outcome.errors, 0);
    assert_eq!(outcome.warnings, 1);
    assert_eq!(outcome.exit_code, 0);
}

#[test]
fn load_graph_at_supports_direct_queries() {
    let ctx = TestContext::new();
    ctx.write_demo_workspace();

    let graph = api::load_graph_at(ctx.work_dir()).unwrap();

    let closure = graph.closure(&["ll4j-demo".to_string()]).unwrap();
    assert_eq!(closure.len(), 3);

    let dependents = graph.dependents_of("ll4j-train").unwrap();
    assert_eq!(dependents.len(), 1);
}
