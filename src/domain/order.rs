use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::{decode_data, deserialize_whole_number};
use super::errors::DomainError;
use super::ports::Record;

pub const INVALID_STATUS: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

/// Order lifecycle. `Delivered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(DomainError::InvalidInput(INVALID_STATUS.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One dish entry inside an order.
///
/// Only `quantity` is typed. Everything else the client sends with the line
/// (a soft `id` reference, a name or price snapshot, notes) is kept as is and
/// never checked against the dish store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub quantity: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    /// Absent when the order was created without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Lines with a positive `quantity` plus any client fields.
    #[schema(value_type = Vec<Object>)]
    pub dishes: Vec<OrderLine>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderFields {
    deliver_to: String,
    mobile_number: String,
    #[serde(default)]
    status: Option<OrderStatus>,
    dishes: Vec<OrderLine>,
}

impl Order {
    /// Build an order from a request `data` object that already passed validation.
    ///
    /// Any `id` inside `data` is ignored in favour of `id`. The status is kept
    /// as submitted, including when there is none.
    pub fn from_data(id: String, data: &Value) -> Result<Self, DomainError> {
        let fields: OrderFields = decode_data(data)?;
        Ok(Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status,
            dishes: fields.dishes,
        })
    }

    /// An order without a status is not pending.
    pub fn is_pending(&self) -> bool {
        self.status == Some(OrderStatus::Pending)
    }

    pub fn is_delivered(&self) -> bool {
        self.status.is_some_and(OrderStatus::is_terminal)
    }
}

impl Record for Order {
    const KIND: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }
}
