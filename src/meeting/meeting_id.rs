//! MeetingId value object.

use crate::error::ValidationError;
use crate::value_object;
use crate::value_objects::ValueObject;
use uuid::Uuid;

value_object! {
    /// Identifier of a meeting. The nil UUID is rejected.
    pub struct MeetingId(Uuid);

    validate(id) {
        if id.is_nil() {
            return Err(ValidationError::invalid("MeetingId", "nil UUID is not a valid identifier"));
        }
        Ok(())
    }
}

impl MeetingId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        // A v4 UUID is never nil, so the gate cannot reject it.
        Self::from_value(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        self.value()
    }
}
