use std::collections::BTreeSet;

use tracing::debug;

use crate::analysis::{Diagnostics, ServiceRegistry, WiringError};
use crate::model::Service;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnStack,
    Done,
}

/// Compute a construction order in which every service follows the services
/// its parameters refer to.
///
/// Services with no ordering constraint between them keep registration order.
/// Missing dependencies and cycles are all reported; no partial order is
/// returned on failure.
pub fn resolve(registry: &ServiceRegistry) -> Result<Vec<&Service>, Diagnostics> {
    let services = registry.as_slice();
    let count = services.len();
    let mut errors = Diagnostics::new();

    // deps[i]: registration indices service i needs, first occurrence only.
    let mut deps: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];
    for (index, service) in services.iter().enumerate() {
        for (position, param) in service.parameters.iter().enumerate() {
            match registry.position(param.as_str()) {
                Some(dep) if !deps[index].contains(&dep) => {
                    deps[index].push(dep);
                    dependents[dep].push(index);
                }
                Some(_) => {}
                None => errors.push(WiringError::MissingDependency {
                    factory: service.factory_name.clone(),
                    service: service.key().to_string(),
                    missing: param.to_string(),
                    position,
                }),
            }
        }
    }

    let mut pending: Vec<usize> = deps.iter().map(Vec::len).collect();
    let mut ready: BTreeSet<usize> = (0..count).filter(|&i| pending[i] == 0).collect();
    let mut order = Vec::with_capacity(count);

    while let Some(index) = ready.pop_first() {
        order.push(index);
        for &dependent in &dependents[index] {
            pending[dependent] -= 1;
            if pending[dependent] == 0 {
                ready.insert(dependent);
            }
        }
    }

    if order.len() < count {
        errors.extend(find_cycles(services, &deps, &pending));
    }

    debug!(services = count, errors = errors.len(), "resolved construction order");
    errors.into_result(order.into_iter().map(|i| &services[i]).collect())
}

/// Report one cycle per back edge among the services the sort could not place.
///
/// Every unplaced service sits on a cycle or depends on one, so walking only
/// unplaced nodes finds them all.
fn find_cycles(services: &[Service], deps: &[Vec<usize>], pending: &[usize]) -> Vec<WiringError> {
    let unplaced = |i: usize| pending[i] > 0;
    let mut state = vec![Visit::New; services.len()];
    let mut cycles = Vec::new();

    for start in 0..services.len() {
        if !unplaced(start) || state[start] != Visit::New {
            continue;
        }

        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        state[start] = Visit::OnStack;

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let Some(&dep) = deps[node].get(frame.1) else {
                state[node] = Visit::Done;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if !unplaced(dep) {
                continue;
            }
            match state[dep] {
                Visit::New => {
                    state[dep] = Visit::OnStack;
                    stack.push((dep, 0));
                }
                Visit::OnStack => {
                    let begin = stack.iter().position(|&(n, _)| n == dep).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        stack[begin..].iter().map(|&(n, _)| services[n].key().to_string()).collect();
                    cycle.push(services[dep].key().to_string());
                    cycles.push(WiringError::CyclicDependency { cycle });
                }
                Visit::Done => {}
            }
        }
    }

    cycles
}
