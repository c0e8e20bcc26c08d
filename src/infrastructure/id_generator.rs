use uuid::Uuid;

use crate::domain::ports::IdGenerator;

/// Random v4 UUIDs rendered as 32 lowercase hex characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
