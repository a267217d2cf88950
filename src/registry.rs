use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;
use crate::environment::{Environment, Event};
use crate::options::RotatorOptions;
use crate::rotator::Rotator;
use crate::slide::Panel;

// One rotator per container
#[derive(Debug)]
pub struct Registry<K> {
    bindings: HashMap<K, Rotator>,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self { bindings: HashMap::new() }
    }
}

impl<K: Eq + Hash> Registry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    // A key that is already bound keeps its rotator
    pub fn bind(
        &mut self,
        key: K,
        panels: Vec<Panel>,
        options: RotatorOptions,
        environment: Environment,
    ) -> &mut Rotator {
        self.bindings
            .entry(key)
            .or_insert_with(|| Rotator::new(panels, options, environment))
    }

    pub fn get(&self, key: &K) -> Option<&Rotator> {
        self.bindings.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Rotator> {
        self.bindings.get_mut(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn dispatch(&mut self, event: Event) {
        for rotator in self.bindings.values_mut() {
            rotator.handle_event(event);
        }
    }

    pub fn update(&mut self, dt: Duration) {
        for rotator in self.bindings.values_mut() {
            rotator.update(dt);
        }
    }
}
