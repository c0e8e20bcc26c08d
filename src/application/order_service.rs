use std::sync::{Arc, Mutex, MutexGuard};

use log::info;
use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::{IdGenerator, Store};
use crate::pipeline::checks::{
    DishQuantities, Exists, HasDishes, HasField, IdMatchesRoute, PendingOnly, StatusTransition,
};
use crate::pipeline::{Pipeline, Request};

/// Orders resource: validation pipelines plus the handlers that run once a
/// pipeline passes.
///
/// The store lock is held from the first check to the end of the handler, so
/// no other request can change the store between validation and mutation.
pub struct OrderService<S> {
    store: Mutex<S>,
    ids: Arc<dyn IdGenerator>,
    create_checks: Pipeline<Order>,
    read_checks: Pipeline<Order>,
    update_checks: Pipeline<Order>,
    delete_checks: Pipeline<Order>,
}

impl<S: Store<Order>> OrderService<S> {
    pub fn new(store: S, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: Mutex::new(store),
            ids,
            create_checks: Pipeline::new()
                .then(HasField("deliverTo"))
                .then(HasField("mobileNumber"))
                .then(HasField("dishes"))
                .then(HasDishes)
                .then(DishQuantities),
            read_checks: Pipeline::new().then(Exists),
            update_checks: Pipeline::new()
                .then(Exists)
                .then(IdMatchesRoute)
                .then(HasField("deliverTo"))
                .then(HasField("mobileNumber"))
                .then(HasField("dishes"))
                .then(HasDishes)
                .then(DishQuantities)
                .then(StatusTransition),
            delete_checks: Pipeline::new().then(Exists).then(PendingOnly),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>, DomainError> {
        self.store
            .lock()
            .map_err(|e| DomainError::Internal(format!("order store lock poisoned: {e}")))
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.lock()?.list().to_vec())
    }

    pub fn create_order(&self, body: &Value) -> Result<Order, DomainError> {
        let mut store = self.lock()?;
        let request = Request::new(body);
        self.create_checks.run(&request, &*store)?;

        let order = Order::from_data(self.ids.next_id(), request.data_value())?;
        store.append(order.clone());
        info!("Created order {} ({} dishes)", order.id, order.dishes.len());
        Ok(order)
    }

    pub fn get_order(&self, id: &str) -> Result<Order, DomainError> {
        let store = self.lock()?;
        self.read_checks
            .run(&Request::for_route_only(id), &*store)?
            .into_record()
    }

    pub fn update_order(&self, id: &str, body: &Value) -> Result<Order, DomainError> {
        let mut store = self.lock()?;
        let request = Request::for_route(id, body);
        let context = self.update_checks.run(&request, &*store)?;

        let order = Order::from_data(context.record_id()?.to_string(), request.data_value())?;
        let index = store
            .position(&order.id)
            .ok_or_else(|| DomainError::NotFound(format!("Order id does not exist: {id}")))?;
        store.replace_at(index, order.clone());
        info!(
            "Updated order {} to status {}",
            order.id,
            order.status.map_or("none", OrderStatus::as_str)
        );
        Ok(order)
    }

    pub fn delete_order(&self, id: &str) -> Result<(), DomainError> {
        let mut store = self.lock()?;
        self.delete_checks
            .run(&Request::for_route_only(id), &*store)?;

        let index = store
            .position(id)
            .ok_or_else(|| DomainError::NotFound(format!("Order id does not exist: {id}")))?;
        store.remove_at(index);
        info!("Deleted order {id}");
        Ok(())
    }
}
