pub mod dish_service;
pub mod order_service;

use std::sync::Arc;

use crate::domain::dish::Dish;
use crate::domain::order::Order;
use crate::domain::ports::IdGenerator;
use crate::infrastructure::memory_store::InMemoryStore;
use crate::infrastructure::seed::Seed;

use dish_service::DishService;
use order_service::OrderService;

/// Everything the HTTP handlers share: one service per resource.
pub struct AppState {
    pub dishes: DishService<InMemoryStore<Dish>>,
    pub orders: OrderService<InMemoryStore<Order>>,
}

impl AppState {
    pub fn new(seed: Seed, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            dishes: DishService::new(InMemoryStore::with_records(seed.dishes), ids.clone()),
            orders: OrderService::new(InMemoryStore::with_records(seed.orders), ids),
        }
    }
}
