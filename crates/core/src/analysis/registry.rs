use std::collections::HashMap;

use crate::analysis::WiringError;
use crate::model::Service;

/// Discovered services keyed by produced identifier, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: Vec<Service>,
    index: HashMap<String, usize>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self { services: Vec::new(), index: HashMap::new() }
    }

    /// Register every service, collecting collisions.
    pub fn from_services<I>(services: I) -> (Self, Vec<WiringError>)
    where
        I: IntoIterator<Item = Service>,
    {
        let mut registry = Self::new();
        let errors = services.into_iter().filter_map(|s| registry.register(s).err()).collect();
        (registry, errors)
    }

    /// Insert a service under its canonical identifier.
    ///
    /// A key that is already present keeps its first service and reports both
    /// factory names.
    pub fn register(&mut self, service: Service) -> Result<(), WiringError> {
        if let Some(&existing) = self.index.get(service.key()) {
            return Err(WiringError::DuplicateService {
                identifier: service.key().to_string(),
                first: self.services[existing].factory_name.clone(),
                second: service.factory_name,
            });
        }
        self.index.insert(service.key().to_string(), self.services.len());
        self.services.push(service);
        Ok(())
    }

    pub fn lookup(&self, identifier: &str) -> Option<&Service> {
        self.index.get(identifier).map(|&i| &self.services[i])
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Registration position of an identifier.
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.index.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Services in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Service> {
        self.services.iter()
    }

    pub fn as_slice(&self) -> &[Service] {
        &self.services
    }
}

impl<'a> IntoIterator for &'a ServiceRegistry {
    type Item = &'a Service;
    type IntoIter = std::slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
