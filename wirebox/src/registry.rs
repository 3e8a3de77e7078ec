use std::collections::HashMap;

use crate::{Definition, Instance, Provider, ServiceId};

#[derive(Default)]
pub(crate) struct SingletonRegistry {
    registry: HashMap<ServiceId, Instance>,
}

impl SingletonRegistry {
    pub(crate) fn insert(&mut self, id: ServiceId, instance: Instance) {
        // An entry is only ever inserted after its provider was found in the
        // provider registry, so a cached id is always a registered id.
        self.registry.insert(id, instance);
    }

    pub(crate) fn get(&self, id: &ServiceId) -> Option<Instance> {
        self.registry.get(id).cloned()
    }

    pub(crate) fn contains(&self, id: &ServiceId) -> bool {
        self.registry.contains_key(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.registry.len()
    }
}

#[derive(Default)]
pub(crate) struct ProviderRegistry {
    registry: HashMap<ServiceId, Provider>,
    order: Vec<ServiceId>,
}

impl ProviderRegistry {
    #[track_caller]
    pub(crate) fn insert(&mut self, provider: Provider, allow_override: bool) {
        let id = provider.id().clone();

        if !self.registry.contains_key(&id) {
            #[cfg(feature = "tracing")]
            tracing::debug!("(+) insert new: {:?}", provider.definition());

            self.order.push(id.clone());
        } else if allow_override {
            #[cfg(feature = "tracing")]
            tracing::warn!("(!) override by `id`: {:?}", provider.definition());
        } else {
            panic!(
                "already existing a provider with the same `id`: {:?}",
                provider.definition()
            );
        }

        self.registry.insert(id, provider);
    }

    pub(crate) fn get(&self, id: &ServiceId) -> Option<&Provider> {
        self.registry.get(id)
    }

    pub(crate) fn contains(&self, id: &ServiceId) -> bool {
        self.registry.contains_key(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Identifiers in registration order, a re-registered id keeps its first position.
    pub(crate) fn ids(&self) -> &[ServiceId] {
        &self.order
    }

    pub(crate) fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.order
            .iter()
            .filter_map(|id| self.registry.get(id))
            .map(Provider::definition)
    }
}
