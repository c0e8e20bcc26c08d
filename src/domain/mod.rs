pub mod dish;
pub mod errors;
pub mod order;
pub mod ports;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use errors::DomainError;

/// Decode a validated request `data` object into its typed fields.
///
/// The presence checks only test JSON truthiness, so a wrongly typed value can
/// still reach this point and is rejected here as invalid input.
pub(crate) fn decode_data<T: DeserializeOwned>(data: &Value) -> Result<T, DomainError> {
    T::deserialize(data).map_err(|e| DomainError::InvalidInput(e.to_string()))
}

/// A non-negative JSON number with no fractional part. `10` and `10.0` are
/// both whole; `3.5`, `-1` and `"10"` are not.
pub fn whole_number(number: &Number) -> Option<u64> {
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

pub(crate) fn deserialize_whole_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<u64, D::Error> {
    let number = Number::deserialize(deserializer)?;
    whole_number(&number).ok_or_else(|| {
        serde::de::Error::custom(format!("expected a whole number, found {number}"))
    })
}
