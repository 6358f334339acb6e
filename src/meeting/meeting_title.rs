//! MeetingTitle value object.

use crate::error::ValidationError;
use crate::value_object;

pub const MAX_TITLE_LENGTH: usize = 200;

value_object! {
    /// A non-blank meeting title of at most [`MAX_TITLE_LENGTH`] characters.
    pub struct MeetingTitle(String);

    validate(title) {
        if title.trim().is_empty() {
            return Err(ValidationError::Empty { type_name: "MeetingTitle" });
        }

        let length = title.chars().count();
        if length > MAX_TITLE_LENGTH {
            return Err(ValidationError::TooLong {
                type_name: "MeetingTitle",
                max: MAX_TITLE_LENGTH,
                actual: length,
            });
        }

        Ok(())
    }
}

impl MeetingTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
