use tracing::debug;

use crate::analysis::{TypePosition, WiringError};
use crate::model::{Declaration, Identifier, Service};

/// Doc-comment marker that tags a constructor as a service.
pub const SERVICE_MARKER: &str = "@Service";

/// Services and errors produced by extracting a batch of declarations.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub services: Vec<Service>,
    pub errors: Vec<WiringError>,
}

/// Whether any documentation line carries the service marker.
pub fn is_service(declaration: &Declaration) -> bool {
    declaration
        .doc_lines
        .iter()
        .flat_map(|comment| comment.lines())
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '/' || c == '*'))
        .any(|line| line.contains(SERVICE_MARKER))
}

/// Go exports an identifier iff its first character is an uppercase letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Turn one declaration into a service.
///
/// Returns `Ok(None)` for declarations that are not tagged.
pub fn extract(declaration: &Declaration) -> Result<Option<Service>, WiringError> {
    if !is_service(declaration) {
        return Ok(None);
    }

    if !is_exported(&declaration.name) {
        return Err(WiringError::NonExportableService {
            factory: declaration.name.clone(),
            location: declaration.location.clone(),
        });
    }

    let [result] = declaration.results.as_slice() else {
        return Err(WiringError::InvalidConstructorShape {
            factory: declaration.name.clone(),
            results: declaration.results.len(),
            location: declaration.location.clone(),
        });
    };

    let identifier = Identifier::parse(result, &declaration.scope)
        .map_err(|err| unsupported(declaration, TypePosition::Result, err.0))?;

    let parameters = declaration
        .params
        .iter()
        .enumerate()
        .map(|(index, param)| {
            Identifier::parse(param, &declaration.scope)
                .map_err(|err| unsupported(declaration, TypePosition::Parameter(index), err.0))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let service = Service::new(identifier, declaration.name.clone(), parameters)
        .with_location(declaration.location.clone());
    debug!(
        service = %service.identifier,
        factory = %service.factory_name,
        params = service.parameters.len(),
        "discovered service"
    );
    Ok(Some(service))
}

fn unsupported(declaration: &Declaration, position: TypePosition, shape: String) -> WiringError {
    WiringError::UnsupportedTypeShape {
        declaration: declaration.name.clone(),
        position,
        shape,
        location: declaration.location.clone(),
    }
}

/// Extract every declaration, collecting errors instead of stopping at the first.
pub fn extract_all<'a, I>(declarations: I) -> Extraction
where
    I: IntoIterator<Item = &'a Declaration>,
{
    let mut extraction = Extraction::default();
    for declaration in declarations {
        match extract(declaration) {
            Ok(Some(service)) => extraction.services.push(service),
            Ok(None) => {}
            Err(err) => {
                debug!(declaration = %declaration.name, error = %err, "extraction failed");
                extraction.errors.push(err);
            }
        }
    }
    extraction
}
