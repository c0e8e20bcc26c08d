use serde_json::Value;

use super::{Check, Request, RequestContext};
use crate::domain::dish::Dish;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderStatus, INVALID_STATUS};
use crate::domain::ports::{Record, Store};
use crate::domain::whole_number;

pub const INVALID_PRICE: &str = "Dish must have a price that is an integer greater than 0";
pub const MISSING_DISHES: &str = "Order must include at least one dish";
pub const DELIVERED_IS_FINAL: &str = "A delivered order cannot be changed";
pub const DELETE_REQUIRES_PENDING: &str = "An order cannot be deleted unless it is pending";

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy; arrays and
/// objects are always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A whole number above zero. `2.0` counts, `2.5` and `"2"` do not.
fn is_positive_integer(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => whole_number(n).is_some_and(|n| n > 0),
        _ => false,
    }
}

// ── Shared checks ────────────────────────────────────────────────────────────

/// `data.<field>` must be present and truthy.
#[derive(Debug, Clone, Copy)]
pub struct HasField(pub &'static str);

impl<T: Record> Check<T> for HasField {
    fn name(&self) -> &'static str {
        "field presence"
    }

    fn run(
        &self,
        request: &Request<'_>,
        _context: &mut RequestContext<T>,
        _store: &dyn Store<T>,
    ) -> Result<(), DomainError> {
        match request.field(self.0) {
            Some(value) if is_truthy(value) => Ok(()),
            _ => Err(DomainError::InvalidInput(format!("Must include a {}", self.0))),
        }
    }
}

/// The route id must name a stored record, which is put into the context.
#[derive(Debug, Clone, Copy)]
pub struct Exists;

impl<T: Record> Check<T> for Exists {
    fn name(&self) -> &'static str {
        "existence"
    }

    fn run(
        &self,
        request: &Request<'_>,
        context: &mut RequestContext<T>,
        store: &dyn Store<T>,
    ) -> Result<(), DomainError> {
        let route_id = request.route_id().unwrap_or_default();
        match store.find_by_id(route_id) {
            Some(found) => {
                context.set_record(found.clone());
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "{} id does not exist: {}",
                T::KIND,
                route_id
            ))),
        }
    }
}

/// A body `data.id`, when given, must equal the route id.
#[derive(Debug, Clone, Copy)]
pub struct IdMatchesRoute;

impl<T: Record> Check<T> for IdMatchesRoute {
    fn name(&self) -> &'static str {
        "id match"
    }

    fn run(
        &self,
        request: &Request<'_>,
        context: &mut RequestContext<T>,
        _store: &dyn Store<T>,
    ) -> Result<(), DomainError> {
        let route_id = request.route_id().unwrap_or_default();
        match request.field("id") {
            Some(body_id) if is_truthy(body_id) && body_id.as_str() != Some(route_id) => {
                let shown = match body_id {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Err(DomainError::InvalidInput(format!(
                    "{kind} id does not match route id. {kind}: {shown}, Route: {route_id}",
                    kind = T::KIND
                )))
            }
            _ => {
                context.set_record_id(route_id.to_string());
                Ok(())
            }
        }
    }
}

// ── Dish checks ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct PositivePrice;

impl Check<Dish> for PositivePrice {
    fn name(&self) -> &'static str {
        "price"
    }

    fn run(
        &self,
        request: &Request<'_>,
        _context: &mut RequestContext<Dish>,
        _store: &dyn Store<Dish>,
    ) -> Result<(), DomainError> {
        if is_positive_integer(request.field("price")) {
            Ok(())
        } else {
            Err(DomainError::InvalidInput(INVALID_PRICE.to_string()))
        }
    }
}

// ── Order checks ─────────────────────────────────────────────────────────────

/// `data.dishes` must be a non-empty array.
#[derive(Debug, Clone, Copy)]
pub struct HasDishes;

impl Check<Order> for HasDishes {
    fn name(&self) -> &'static str {
        "dishes collection"
    }

    fn run(
        &self,
        request: &Request<'_>,
        _context: &mut RequestContext<Order>,
        _store: &dyn Store<Order>,
    ) -> Result<(), DomainError> {
        match request.field("dishes").and_then(Value::as_array) {
            Some(dishes) if !dishes.is_empty() => Ok(()),
            _ => Err(DomainError::InvalidInput(MISSING_DISHES.to_string())),
        }
    }
}

/// Every order line needs a positive integer `quantity`; the first offender
/// is reported by index.
#[derive(Debug, Clone, Copy)]
pub struct DishQuantities;

impl Check<Order> for DishQuantities {
    fn name(&self) -> &'static str {
        "dish quantity"
    }

    fn run(
        &self,
        request: &Request<'_>,
        _context: &mut RequestContext<Order>,
        _store: &dyn Store<Order>,
    ) -> Result<(), DomainError> {
        let Some(dishes) = request.field("dishes").and_then(Value::as_array) else {
            return Ok(());
        };
        match dishes
            .iter()
            .position(|line| !is_positive_integer(line.get("quantity")))
        {
            Some(index) => Err(DomainError::InvalidInput(format!(
                "Dish {index} must have a quantity that is an integer greater than 0"
            ))),
            None => Ok(()),
        }
    }
}

/// Guards the status lifecycle on update. A delivered order accepts no
/// further change, and the requested status must be a non-terminal one.
#[derive(Debug, Clone, Copy)]
pub struct StatusTransition;

impl Check<Order> for StatusTransition {
    fn name(&self) -> &'static str {
        "status transition"
    }

    fn run(
        &self,
        request: &Request<'_>,
        context: &mut RequestContext<Order>,
        _store: &dyn Store<Order>,
    ) -> Result<(), DomainError> {
        let current_is_final = context
            .record()
            .is_ok_and(Order::is_delivered);
        let requested = request
            .field("status")
            .and_then(Value::as_str)
            .map(str::parse::<OrderStatus>);

        match requested {
            _ if current_is_final => Err(DomainError::InvalidInput(DELIVERED_IS_FINAL.to_string())),
            Some(Ok(OrderStatus::Delivered)) => {
                Err(DomainError::InvalidInput(DELIVERED_IS_FINAL.to_string()))
            }
            Some(Ok(_)) => Ok(()),
            Some(Err(_)) | None => Err(DomainError::InvalidInput(INVALID_STATUS.to_string())),
        }
    }
}

/// Delete is only allowed while the stored order is still pending.
#[derive(Debug, Clone, Copy)]
pub struct PendingOnly;

impl Check<Order> for PendingOnly {
    fn name(&self) -> &'static str {
        "delete eligibility"
    }

    fn run(
        &self,
        _request: &Request<'_>,
        context: &mut RequestContext<Order>,
        _store: &dyn Store<Order>,
    ) -> Result<(), DomainError> {
        if context.record()?.is_pending() {
            Ok(())
        } else {
            Err(DomainError::InvalidInput(DELETE_REQUIRES_PENDING.to_string()))
        }
    }
}
