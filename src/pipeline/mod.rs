//! Ordered, short-circuiting request validation.
//!
//! Every operation owns a [`Pipeline`] of [`Check`]s. Checks run in order
//! against the inbound [`Request`] and the current store contents; the first
//! failing check ends the run with its error and nothing after it executes.
//! Lookups made by earlier checks are handed forward through the
//! [`RequestContext`] so neither later checks nor the handler repeat them.

pub mod checks;

use log::debug;
use serde_json::{Map, Value};

use crate::domain::errors::DomainError;
use crate::domain::ports::{Record, Store};

static NO_BODY: Value = Value::Null;

/// Inbound request as seen by the checks: the route id, if the operation
/// addresses a single record, and the raw JSON body.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    route_id: Option<&'a str>,
    body: &'a Value,
}

impl<'a> Request<'a> {
    /// A collection-level request (create).
    pub fn new(body: &'a Value) -> Self {
        Self {
            route_id: None,
            body,
        }
    }

    /// A request addressing the record `route_id`.
    pub fn for_route(route_id: &'a str, body: &'a Value) -> Self {
        Self {
            route_id: Some(route_id),
            body,
        }
    }

    /// A bodiless request addressing the record `route_id` (read, delete).
    pub fn for_route_only(route_id: &'a str) -> Self {
        Self::for_route(route_id, &NO_BODY)
    }

    pub fn route_id(&self) -> Option<&'a str> {
        self.route_id
    }

    /// The body's `data` value, or `null` when the body has none.
    pub fn data_value(&self) -> &'a Value {
        self.body.get("data").unwrap_or(&NO_BODY)
    }

    /// The body's `data` object. `None` unless `data` is a JSON object.
    pub fn data(&self) -> Option<&'a Map<String, Value>> {
        self.data_value().as_object()
    }

    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.data()?.get(name)
    }
}

/// Per-request scratch space filled in by checks and read by the handler.
#[derive(Debug)]
pub struct RequestContext<T> {
    record: Option<T>,
    record_id: Option<String>,
}

impl<T> RequestContext<T> {
    pub fn new() -> Self {
        Self {
            record: None,
            record_id: None,
        }
    }

    pub fn set_record(&mut self, record: T) {
        self.record = Some(record);
    }

    /// The record resolved by the existence check.
    pub fn record(&self) -> Result<&T, DomainError> {
        self.record
            .as_ref()
            .ok_or_else(|| DomainError::Internal("no record resolved for request".to_string()))
    }

    pub fn into_record(self) -> Result<T, DomainError> {
        self.record
            .ok_or_else(|| DomainError::Internal("no record resolved for request".to_string()))
    }

    pub fn set_record_id(&mut self, id: String) {
        self.record_id = Some(id);
    }

    /// The id reconciled between route and body by the id-match check.
    pub fn record_id(&self) -> Result<&str, DomainError> {
        self.record_id
            .as_deref()
            .ok_or_else(|| DomainError::Internal("no record id reconciled for request".to_string()))
    }
}

impl<T> Default for RequestContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One validation step.
pub trait Check<T: Record>: Send + Sync {
    /// Short label used when logging a rejection.
    fn name(&self) -> &'static str;

    fn run(
        &self,
        request: &Request<'_>,
        context: &mut RequestContext<T>,
        store: &dyn Store<T>,
    ) -> Result<(), DomainError>;
}

pub struct Pipeline<T: Record> {
    checks: Vec<Box<dyn Check<T>>>,
}

impl<T: Record> Pipeline<T> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Append `check` to the end of the pipeline.
    pub fn then(mut self, check: impl Check<T> + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check in order, stopping at the first failure.
    pub fn run(
        &self,
        request: &Request<'_>,
        store: &dyn Store<T>,
    ) -> Result<RequestContext<T>, DomainError> {
        let mut context = RequestContext::new();
        for check in &self.checks {
            if let Err(err) = check.run(request, &mut context, store) {
                debug!("{} check rejected {} request: {}", check.name(), T::KIND, err);
                return Err(err);
            }
        }
        Ok(context)
    }
}

impl<T: Record> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::domain::dish::Dish;
    use crate::infrastructure::memory_store::InMemoryStore;

    struct Counting {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl Check<Dish> for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn run(
            &self,
            _request: &Request<'_>,
            _context: &mut RequestContext<Dish>,
            _store: &dyn Store<Dish>,
        ) -> Result<(), DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(DomainError::InvalidInput(format!(
                    "failed after {}",
                    self.calls.load(Ordering::SeqCst)
                )))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn stops_at_first_failing_check() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::<Dish>::new()
            .then(Counting {
                calls: calls.clone(),
                fail: false,
            })
            .then(Counting {
                calls: calls.clone(),
                fail: true,
            })
            .then(Counting {
                calls: calls.clone(),
                fail: true,
            });
        let store = InMemoryStore::<Dish>::new();
        let body = json!({});

        let err = pipeline.run(&Request::new(&body), &store).unwrap_err();

        assert_eq!(err, DomainError::InvalidInput("failed after 2".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn empty_pipeline_passes_with_empty_context() {
        let pipeline = Pipeline::<Dish>::default();
        let store = InMemoryStore::<Dish>::new();

        let context = pipeline
            .run(&Request::for_route_only("1"), &store)
            .expect("nothing to reject");

        assert!(pipeline.is_empty());
        assert!(matches!(context.record(), Err(DomainError::Internal(_))));
        assert!(matches!(context.record_id(), Err(DomainError::Internal(_))));
    }

    #[test]
    fn request_exposes_data_object_fields() {
        let body = json!({"data": {"name": "soup"}});
        let request = Request::for_route("7", &body);

        assert_eq!(request.route_id(), Some("7"));
        assert_eq!(request.field("name"), Some(&json!("soup")));
        assert_eq!(request.field("price"), None);
    }

    #[test]
    fn request_without_data_object_has_no_fields() {
        let body = json!({"data": "not an object"});
        let request = Request::new(&body);

        assert!(request.data().is_none());
        assert!(request.field("name").is_none());
        assert!(Request::new(&json!({})).data_value().is_null());
    }
}
