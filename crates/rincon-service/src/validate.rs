//! Bridge from `validator` results to the application error type.

use validator::Validate;

use rincon_core::result::AppResult;
use rincon_core::AppError;

/// Run derive-based validation and flatten failures into one
/// user-displayable validation error.
pub(crate) fn check(input: &impl Validate) -> AppResult<()> {
    input.validate().map_err(|errors| {
        let mut reasons: Vec<String> = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                match &error.message {
                    Some(message) => reasons.push(message.to_string()),
                    None => reasons.push(format!("Invalid value for '{field}'")),
                }
            }
        }
        reasons.sort();
        AppError::validation(reasons.join("; "))
    })
}
