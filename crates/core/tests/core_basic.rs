use godi_core::analysis::SERVICE_MARKER;
use godi_core::version;

#[test]
fn version_matches_package() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn service_marker_is_the_doc_tag() {
    assert_eq!(SERVICE_MARKER, "@Service");
}
