use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

/// Type-erased resource map shared across plugins. Resources are keyed by
/// their [`TypeId`], so each type can only appear once; the browser uses it
/// to pass the notice board between the lab browser and the status bar
/// without wiring them together directly.
#[derive(Clone, Default)]
pub struct SharedState {
    inner: Arc<RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_arc<T>(&self, value: Arc<T>) -> Result<(), SharedStateError>
    where
        T: Send + Sync + 'static,
    {
        let mut guard = self.inner.write().map_err(|_| SharedStateError::Poisoned)?;
        let type_id = TypeId::of::<T>();
        if guard.contains_key(&type_id) {
            return Err(SharedStateError::AlreadyExists);
        }
        guard.insert(type_id, Box::new(value));
        Ok(())
    }

    pub fn get<T>(&self) -> Result<Arc<T>, SharedStateError>
    where
        T: Send + Sync + 'static,
    {
        let guard = self.inner.read().map_err(|_| SharedStateError::Poisoned)?;
        let boxed = guard
            .get(&TypeId::of::<T>())
            .ok_or(SharedStateError::Missing)?;
        let arc = boxed
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or(SharedStateError::TypeMismatch)?;
        Ok(arc)
    }

    pub fn get_or_insert_with<T, F>(&self, make: F) -> Result<Arc<T>, SharedStateError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        if let Ok(value) = self.get::<T>() {
            return Ok(value);
        }
        let value = Arc::new(make());
        {
            let mut guard = self.inner.write().map_err(|_| SharedStateError::Poisoned)?;
            guard
                .entry(TypeId::of::<T>())
                .or_insert_with(|| Box::new(value.clone()));
        }
        Ok(value)
    }
}

#[derive(Debug, Error)]
pub enum SharedStateError {
    #[error("resource already exists")]
    AlreadyExists,
    #[error("resource missing")]
    Missing,
    #[error("resource type mismatch")]
    TypeMismatch,
    #[error("shared state poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Notice(RwLock<Option<String>>);

    #[test]
    fn insert_and_get() {
        let state = SharedState::new();
        state
            .insert_arc(Arc::new(Notice(RwLock::new(None))))
            .unwrap();
        let board = state.get::<Notice>().unwrap();
        *board.0.write().unwrap() = Some("Copy failed. Please copy manually.".into());
        assert!(board.0.read().unwrap().is_some());
    }

    #[test]
    fn duplicate_insert_fails() {
        let state = SharedState::new();
        state
            .insert_arc(Arc::new(Notice(RwLock::new(None))))
            .unwrap();
        let err = state
            .insert_arc(Arc::new(Notice(RwLock::new(None))))
            .unwrap_err();
        assert!(matches!(err, SharedStateError::AlreadyExists));
    }

    #[test]
    fn get_missing() {
        let state = SharedState::new();
        let err = state.get::<Notice>().unwrap_err();
        assert!(matches!(err, SharedStateError::Missing));
    }

    #[test]
    fn lazy_init_returns_same_resource() {
        let state = SharedState::new();
        let first = state
            .get_or_insert_with::<Notice, _>(|| Notice(RwLock::new(None)))
            .unwrap();
        let second = state.get::<Notice>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
