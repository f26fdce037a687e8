use godi_core::analysis::{extract, extract_all, is_service, TypePosition, WiringError};
use godi_core::model::{Declaration, TypeExpr};

fn tagged(name: &str) -> Declaration {
    Declaration::new(name, "demo").with_doc(format!("// {name} constructor")).with_doc("// @Service")
}

#[test]
fn declaration_without_docs_is_not_a_service() {
    let decl = Declaration::new("NewA", "demo").with_result(TypeExpr::indirect("A"));
    assert_eq!(extract(&decl).expect("extract"), None);
}

#[test]
fn declaration_without_marker_is_not_a_service() {
    let decl = Declaration::new("NewA", "demo")
        .with_doc("// NewA constructor")
        .with_result(TypeExpr::indirect("A"));
    assert_eq!(extract(&decl).expect("extract"), None);
}

#[test]
fn marker_is_found_after_trimming_comment_leaders() {
    for line in ["// @Service", "//@Service", "/* @Service */", " * @Service", "  @Service  "] {
        let decl = Declaration::new("NewA", "demo").with_doc(line);
        assert!(is_service(&decl), "marker not detected in {line:?}");
    }
}

#[test]
fn marker_inside_multiline_block_comment_is_found() {
    let decl = Declaration::new("NewA", "demo").with_doc("/*\n NewA builds A.\n @Service\n*/");
    assert!(is_service(&decl));
}

#[test]
fn valid_constructor_yields_service_with_ordered_parameters() {
    let decl = tagged("NewC")
        .with_result(TypeExpr::indirect("C"))
        .with_param(TypeExpr::indirect("A"))
        .with_param(TypeExpr::plain("B"))
        .with_param(TypeExpr::indirect("B"));

    let service = extract(&decl).expect("extract").expect("service");
    assert_eq!(service.identifier.to_string(), "*demo.C");
    assert_eq!(service.factory_name, "NewC");
    let params: Vec<String> = service.parameters.iter().map(|p| p.to_string()).collect();
    assert_eq!(params, vec!["*demo.A", "demo.B", "*demo.B"]);
}

#[test]
fn unexported_constructor_is_reported_not_aborted() {
    let decl = tagged("newA").with_result(TypeExpr::indirect("A")).at("service.go", 9);
    match extract(&decl) {
        Err(WiringError::NonExportableService { factory, location }) => {
            assert_eq!(factory, "newA");
            assert_eq!(location.line, 9);
        }
        other => panic!("expected NonExportableService, got {other:?}"),
    }
}

#[test]
fn constructor_must_return_exactly_one_value() {
    let none = tagged("NewA");
    assert!(matches!(
        extract(&none),
        Err(WiringError::InvalidConstructorShape { results: 0, .. })
    ));

    let two = tagged("NewA").with_result(TypeExpr::indirect("A")).with_result(TypeExpr::plain("error"));
    assert!(matches!(
        extract(&two),
        Err(WiringError::InvalidConstructorShape { results: 2, .. })
    ));
}

#[test]
fn unsupported_result_shape_is_reported() {
    let decl = tagged("NewList").with_result(TypeExpr::other("[]Item"));
    match extract(&decl) {
        Err(WiringError::UnsupportedTypeShape { declaration, position, shape, .. }) => {
            assert_eq!(declaration, "NewList");
            assert_eq!(position, TypePosition::Result);
            assert_eq!(shape, "[]Item");
        }
        other => panic!("expected UnsupportedTypeShape, got {other:?}"),
    }
}

#[test]
fn unsupported_parameter_shape_names_its_position() {
    let decl = tagged("NewB")
        .with_result(TypeExpr::indirect("B"))
        .with_param(TypeExpr::indirect("A"))
        .with_param(TypeExpr::other("config.Config"));
    match extract(&decl) {
        Err(WiringError::UnsupportedTypeShape { position, shape, .. }) => {
            assert_eq!(position, TypePosition::Parameter(1));
            assert_eq!(shape, "config.Config");
        }
        other => panic!("expected UnsupportedTypeShape, got {other:?}"),
    }
}

#[test]
fn extract_all_collects_errors_and_keeps_going() {
    let decls = vec![
        tagged("newHidden").with_result(TypeExpr::indirect("Hidden")),
        tagged("NewA").with_result(TypeExpr::indirect("A")),
        Declaration::new("helper", "demo"),
        tagged("NewBad").with_result(TypeExpr::indirect("Bad")).with_param(TypeExpr::other("...Opt")),
        tagged("NewB").with_result(TypeExpr::indirect("B")).with_param(TypeExpr::indirect("A")),
    ];

    let extraction = extract_all(&decls);
    let names: Vec<&str> = extraction.services.iter().map(|s| s.factory_name.as_str()).collect();
    assert_eq!(names, vec!["NewA", "NewB"]);
    let kinds: Vec<&str> = extraction.errors.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec!["non_exportable_service", "unsupported_type_shape"]);
}
