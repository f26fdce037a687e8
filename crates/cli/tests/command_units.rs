use std::fs;

use godi::commands::{
    generate_command, init_command, list_services_command, plan_command, CommandContext,
};
use godi_core::scan::DeclarationScanner;
use tempfile::tempdir;

const SERVICE_GO: &str = "package demo\n\n// @Service\nfunc NewA() *A { return nil }\n";

#[test]
fn context_uses_defaults_without_config() {
    let dir = tempdir().expect("tempdir");
    let ctx = CommandContext::load(dir.path().to_str().expect("utf8"), None).expect("load");
    assert_eq!(ctx.config.output, "services.go");
    assert_eq!(ctx.layout.output_path, ctx.layout.source_dir.join("services.go"));
}

#[test]
fn context_scanner_skips_generated_output() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("service.go"), SERVICE_GO).expect("write");
    fs::write(
        dir.path().join("services.go"),
        "package demo\n\n// @Service\nfunc NewGenerated() *Generated { return nil }\n",
    )
    .expect("write output");

    let ctx = CommandContext::load(dir.path().to_str().expect("utf8"), None).expect("load");
    let scanned = ctx.scanner().scan(&ctx.layout.source_dir).expect("scan");
    let names: Vec<&str> = scanned.declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["NewA"]);
}

#[test]
fn explicit_json_config_is_honored() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("wiring.json");
    fs::write(&config, r#"{"output": "gen.go"}"#).expect("write config");
    fs::write(dir.path().join("service.go"), SERVICE_GO).expect("write");

    let root = dir.path().to_str().expect("utf8");
    generate_command(root, Some(&config), false, false).expect("generate");
    assert!(dir.path().join("gen.go").is_file());
    assert!(!dir.path().join("services.go").exists());
}

#[test]
fn generate_check_detects_edits() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("service.go"), SERVICE_GO).expect("write");
    let root = dir.path().to_str().expect("utf8");

    generate_command(root, None, false, false).expect("generate");
    generate_command(root, None, true, false).expect("fresh output passes check");

    fs::write(dir.path().join("services.go"), "package demo\n").expect("clobber");
    let err = generate_command(root, None, true, true).unwrap_err();
    assert!(err.to_string().contains("out of date"));
}

#[test]
fn plan_and_list_succeed_on_valid_package() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("service.go"), SERVICE_GO).expect("write");
    let root = dir.path().to_str().expect("utf8");

    plan_command(root, None, false).expect("plan");
    plan_command(root, None, true).expect("plan json");
    list_services_command(root, None, false).expect("list");
    list_services_command(root, None, true).expect("list json");
}

#[test]
fn plan_fails_on_duplicate_services() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("service.go"),
        "package demo\n\n// @Service\nfunc NewA() *A { return nil }\n\n// @Service\nfunc MakeA() *A { return nil }\n",
    )
    .expect("write");

    let err = plan_command(dir.path().to_str().expect("utf8"), None, false).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("duplicate service *demo.A: provided by both NewA and MakeA"), "{chain}");
}

#[test]
fn init_creates_missing_root() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("fresh");
    init_command(root.to_str().expect("utf8"), false).expect("init");
    let body = fs::read_to_string(root.join("godi.yaml")).expect("read config");
    assert!(body.contains("output: services.go"));
}

#[test]
fn nested_output_does_not_hide_same_named_source_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("godi.yaml"), "output: gen/wire.go\n").expect("write config");
    fs::write(
        dir.path().join("wire.go"),
        "package demo\n\n// @Service\nfunc NewWire() *Wire { return nil }\n",
    )
    .expect("write source");

    let ctx = CommandContext::load(dir.path().to_str().expect("utf8"), None).expect("load");
    let scanned = ctx.scanner().scan(&ctx.layout.source_dir).expect("scan");
    assert_eq!(scanned.declarations.len(), 1);

    generate_command(dir.path().to_str().expect("utf8"), None, false, false).expect("generate");
    let generated = fs::read_to_string(dir.path().join("gen").join("wire.go")).expect("read output");
    assert!(generated.contains("\twire := NewWire()\n"), "{generated}");
}
