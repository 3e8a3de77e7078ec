use std::{cell::RefCell, rc::Rc};

use crate::{ResolveError, ServiceId};

/// The services whose producers are currently running, outermost first.
#[derive(Default)]
pub(crate) struct DependencyChain {
    stack: Rc<RefCell<Vec<ServiceId>>>,
}

impl DependencyChain {
    /// Marks `id` as in progress until the returned guard is dropped.
    pub(crate) fn enter(&self, id: &ServiceId) -> Result<ResolutionGuard, ResolveError> {
        let mut stack = self.stack.borrow_mut();

        if stack.contains(id) {
            let mut chain = stack.clone();
            chain.push(id.clone());

            return Err(ResolveError::CircularDependency {
                id: id.clone(),
                chain,
            });
        }

        stack.push(id.clone());

        Ok(ResolutionGuard {
            stack: Rc::clone(&self.stack),
            id: id.clone(),
        })
    }

    pub(crate) fn snapshot(&self) -> Vec<ServiceId> {
        self.stack.borrow().clone()
    }
}

/// Removes its service from the [`DependencyChain`] on drop,
/// whether the resolution returned normally, failed, or unwound.
pub(crate) struct ResolutionGuard {
    stack: Rc<RefCell<Vec<ServiceId>>>,
    id: ServiceId,
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        let mut stack = self.stack.borrow_mut();

        if let Some(position) = stack.iter().rposition(|id| id == &self.id) {
            stack.remove(position);
        }
    }
}
