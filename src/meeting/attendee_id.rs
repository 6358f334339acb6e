//! AttendeeId value object for meeting participants.

use crate::error::ValidationError;
use crate::value_object;

/// Longest identifier accepted, in characters
pub const MAX_ATTENDEE_ID_LENGTH: usize = 64;

value_object! {
    /// A validated attendee identifier.
    ///
    /// ## Validation Rules
    ///
    /// - Must not be empty
    /// - At most [`MAX_ATTENDEE_ID_LENGTH`] characters
    /// - Must not contain whitespace
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use domain_guard::meeting::AttendeeId;
    /// use domain_guard::value_objects::ValueObject;
    ///
    /// let id = AttendeeId::create("bjensen".to_string()).unwrap();
    /// assert_eq!(id.as_str(), "bjensen");
    ///
    /// assert!(AttendeeId::create("b jensen".to_string()).is_err());
    /// ```
    pub struct AttendeeId(String);

    validate(id) {
        if id.is_empty() {
            return Err(ValidationError::Empty { type_name: "AttendeeId" });
        }

        let length = id.chars().count();
        if length > MAX_ATTENDEE_ID_LENGTH {
            return Err(ValidationError::TooLong {
                type_name: "AttendeeId",
                max: MAX_ATTENDEE_ID_LENGTH,
                actual: length,
            });
        }

        if id.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid(
                "AttendeeId",
                "must not contain whitespace",
            ));
        }

        Ok(())
    }
}

impl AttendeeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for AttendeeId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}
