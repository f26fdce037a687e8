use godi_core::emit::{is_stale, write_if_changed, Emitter, NameAllocator, WiringPlan};
use godi_core::model::{Identifier, Service};
use tempfile::tempdir;

fn plan(services: Vec<Service>) -> WiringPlan {
    WiringPlan {
        package: "demo".into(),
        container: "Container".into(),
        constructor: "NewContainer".into(),
        services,
    }
}

fn demo_plan() -> WiringPlan {
    let a = Identifier::new("demo", "A", true);
    let b = Identifier::new("demo", "B", true);
    plan(vec![Service::new(a.clone(), "NewA", vec![]), Service::new(b, "NewB", vec![a])])
}

#[test]
fn renders_calls_in_plan_order_with_previous_bindings() {
    let source = Emitter::new().expect("emitter").render(&demo_plan()).expect("render");

    assert!(source.starts_with("// Code generated by godi. DO NOT EDIT.\n"));
    assert!(source.contains("package demo\n"));
    assert!(source.contains("type Container struct {\n"));
    assert!(source.contains("\tA *A\n"));
    assert!(source.contains("\tB *B\n"));
    assert!(source.contains("func NewContainer() *Container {\n"));

    let a = source.find("\ta := NewA()\n").expect("NewA call");
    let b = source.find("\tb := NewB(a)\n").expect("NewB call");
    assert!(a < b, "NewA must be called before NewB:\n{source}");
    assert!(source.contains("\treturn &Container{\n"));
    assert!(source.contains("\t\tA: a,\n"));
    assert!(source.contains("\t\tB: b,\n"));
}

#[test]
fn value_services_get_distinct_names_from_pointer_services() {
    let ptr = Identifier::new("demo", "Config", true);
    let val = Identifier::new("demo", "Config", false);
    let source = Emitter::new()
        .expect("emitter")
        .render(&plan(vec![
            Service::new(ptr.clone(), "NewConfig", vec![]),
            Service::new(val.clone(), "LoadConfig", vec![]),
            Service::new(Identifier::new("demo", "App", true), "NewApp", vec![val, ptr]),
        ]))
        .expect("render");

    assert!(source.contains("\tconfig := NewConfig()\n"));
    assert!(source.contains("\tconfigValue := LoadConfig()\n"));
    assert!(source.contains("\tapp := NewApp(configValue, config)\n"));
    assert!(source.contains("\tConfigValue Config\n"));
}

#[test]
fn struct_fields_and_literal_keys_are_aligned() {
    let short = Identifier::new("demo", "A", true);
    let long = Identifier::new("demo", "Repository", true);
    let source = Emitter::new()
        .expect("emitter")
        .render(&plan(vec![
            Service::new(short, "NewA", vec![]),
            Service::new(long, "NewRepository", vec![]),
        ]))
        .expect("render");

    assert!(source.contains("\tA          *A\n"), "unaligned field:\n{source}");
    assert!(source.contains("\tRepository *Repository\n"));
    assert!(source.contains("\t\tA:          a,\n"), "unaligned key:\n{source}");
    assert!(source.contains("\t\tRepository: repository,\n"));
}

#[test]
fn alignment_counts_characters_not_bytes() {
    let short = Identifier::new("demo", "A", true);
    let wide = Identifier::new("demo", "Zürich", true);
    let source = Emitter::new()
        .expect("emitter")
        .render(&plan(vec![
            Service::new(short, "NewA", vec![]),
            Service::new(wide, "NewZürich", vec![]),
        ]))
        .expect("render");

    assert!(source.contains("\tA      *A\n"), "misaligned field:\n{source}");
    assert!(source.contains("\tZürich *Zürich\n"));
    assert!(source.contains("\t\tA:      a,\n"), "misaligned key:\n{source}");
    assert!(source.contains("\t\tZürich: zürich,\n"));
}

#[test]
fn empty_plan_renders_empty_container() {
    let source = Emitter::new().expect("emitter").render(&plan(vec![])).expect("render");
    assert!(source.contains("type Container struct {\n}\n"));
    assert!(source.contains("\treturn &Container{\n\t}\n"));
}

#[test]
fn rendering_is_deterministic_and_hash_tracks_the_plan() {
    let emitter = Emitter::new().expect("emitter");
    let first = emitter.render(&demo_plan()).expect("first");
    let second = emitter.render(&demo_plan()).expect("second");
    assert_eq!(first, second);

    let plan = demo_plan();
    assert!(first.contains(&format!("// godi:plan-hash {}\n", plan.hash())));

    let mut renamed = demo_plan();
    renamed.container = "Services".into();
    assert_ne!(plan.hash(), renamed.hash());
}

#[test]
fn keyword_names_get_a_suffix() {
    let mut names = NameAllocator::new();
    assert_eq!(names.binding_for(&Identifier::new("demo", "Type", true)), "type2");
    assert_eq!(names.binding_for(&Identifier::new("demo", "Map", true)), "map2");

    let mut fields = NameAllocator::new();
    fields.reserve("Container");
    assert_eq!(fields.field_for(&Identifier::new("demo", "Container", true)), "Container2");
}

#[test]
fn colliding_names_stay_unique() {
    let mut names = NameAllocator::new();
    assert_eq!(names.binding_for(&Identifier::new("demo", "Repo", true)), "repo");
    assert_eq!(names.binding_for(&Identifier::new("demo", "repo", true)), "repo2");
    assert_eq!(names.binding_for(&Identifier::new("demo", "RepoValue", true)), "repoValue");
    assert_eq!(names.binding_for(&Identifier::new("demo", "Repo", false)), "repoValue2");
}

#[test]
fn write_if_changed_only_writes_new_content() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("services.go");

    assert!(is_stale(&path, "package demo\n").expect("stale check"));
    assert!(write_if_changed(&path, "package demo\n").expect("first write"));
    assert!(!is_stale(&path, "package demo\n").expect("fresh check"));
    assert!(!write_if_changed(&path, "package demo\n").expect("second write"));
    assert!(write_if_changed(&path, "package other\n").expect("third write"));
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "package other\n");
}
