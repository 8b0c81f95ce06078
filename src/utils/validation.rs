use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{Error, Result};

pub fn validate<T: Validate>(val: &T) -> Result<()> {
    val.validate()?;
    Ok(())
}

/// Validation failure for a single field, for checks done outside a derive.
pub fn field_error(field: &'static str, code: &'static str, message: &'static str) -> Error {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    Error::Validation(errors)
}
