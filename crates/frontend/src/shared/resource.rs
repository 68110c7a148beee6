//! Loading/error/data state around one remote call.
//!
//! Three transitions: pending sets `loading`, fulfilled stores the payload and
//! clears the error, rejected stores the error text and keeps the old data.
//! Each load gets a generation number; a response that arrives after a newer
//! load was started is dropped.

use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub struct Remote<T: Send + Sync + 'static> {
    pub data: RwSignal<T>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
    label: &'static str,
}

impl<T: Send + Sync + 'static> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Remote<T> {}

/// Remote array of records, the input of the list engine.
pub type RemoteList<T> = Remote<Vec<T>>;

/// Single remote document (a static page, the dashboard counters).
pub type RemoteValue<T> = Remote<T>;

impl<T: Send + Sync + 'static> Remote<T> {
    pub fn new(label: &'static str, initial: T) -> Self {
        Self {
            data: RwSignal::new(initial),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            generation: StoredValue::new(0),
            label,
        }
    }

    /// Starts `request`; the last started request wins.
    pub fn load<F>(&self, request: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        self.loading.set(true);
        log::debug!("{}: pending (#{})", self.label, generation);

        let this = *self;
        spawn_local(async move {
            let result = request.await;
            match this.generation.try_get_value() {
                Some(current) if current == generation => {}
                Some(_) => {
                    log::debug!("{}: response #{} superseded", this.label, generation);
                    return;
                }
                // screen unmounted
                None => return,
            }
            match result {
                Ok(value) => {
                    log::debug!("{}: fulfilled (#{})", this.label, generation);
                    this.data.try_set(value);
                    this.error.try_set(None);
                }
                Err(e) => {
                    log::warn!("{}: rejected [{}] {}", this.label, e.kind(), e);
                    this.error.try_set(Some(e.to_string()));
                }
            }
            this.loading.try_set(false);
        });
    }
}

impl<T: Send + Sync + 'static> Remote<Vec<T>> {
    pub fn empty(label: &'static str) -> Self {
        Self::new(label, Vec::new())
    }
}
