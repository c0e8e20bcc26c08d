use std::sync::{Arc, Mutex, MutexGuard};

use log::info;
use serde_json::Value;

use crate::domain::dish::Dish;
use crate::domain::errors::DomainError;
use crate::domain::ports::{IdGenerator, Store};
use crate::pipeline::checks::{Exists, HasField, IdMatchesRoute, PositivePrice};
use crate::pipeline::{Pipeline, Request};

/// Dishes resource. Same shape as the orders service without a status
/// lifecycle or delete.
pub struct DishService<S> {
    store: Mutex<S>,
    ids: Arc<dyn IdGenerator>,
    create_checks: Pipeline<Dish>,
    read_checks: Pipeline<Dish>,
    update_checks: Pipeline<Dish>,
}

fn with_dish_fields(pipeline: Pipeline<Dish>) -> Pipeline<Dish> {
    pipeline
        .then(HasField("name"))
        .then(HasField("description"))
        .then(HasField("price"))
        .then(HasField("image_url"))
        .then(PositivePrice)
}

impl<S: Store<Dish>> DishService<S> {
    pub fn new(store: S, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: Mutex::new(store),
            ids,
            create_checks: with_dish_fields(Pipeline::new()),
            read_checks: Pipeline::new().then(Exists),
            update_checks: with_dish_fields(Pipeline::new().then(Exists).then(IdMatchesRoute)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>, DomainError> {
        self.store
            .lock()
            .map_err(|e| DomainError::Internal(format!("dish store lock poisoned: {e}")))
    }

    pub fn list_dishes(&self) -> Result<Vec<Dish>, DomainError> {
        Ok(self.lock()?.list().to_vec())
    }

    pub fn create_dish(&self, body: &Value) -> Result<Dish, DomainError> {
        let mut store = self.lock()?;
        let request = Request::new(body);
        self.create_checks.run(&request, &*store)?;

        let dish = Dish::from_data(self.ids.next_id(), request.data_value())?;
        store.append(dish.clone());
        info!("Created dish {} ({})", dish.id, dish.name);
        Ok(dish)
    }

    pub fn get_dish(&self, id: &str) -> Result<Dish, DomainError> {
        let store = self.lock()?;
        self.read_checks
            .run(&Request::for_route_only(id), &*store)?
            .into_record()
    }

    pub fn update_dish(&self, id: &str, body: &Value) -> Result<Dish, DomainError> {
        let mut store = self.lock()?;
        let request = Request::for_route(id, body);
        let context = self.update_checks.run(&request, &*store)?;

        let dish = Dish::from_data(context.record_id()?.to_string(), request.data_value())?;
        let index = store
            .position(&dish.id)
            .ok_or_else(|| DomainError::NotFound(format!("Dish id does not exist: {id}")))?;
        store.replace_at(index, dish.clone());
        info!("Updated dish {}", dish.id);
        Ok(dish)
    }
}
