//! Error handling and exit codes.

use seidel_core::constants::exit_codes;
use seidel_core::MatrixError;

use crate::input::InputError;

/// Map an application error to the process exit code.
///
/// Malformed input (unreadable syntax, negative entries, non-square shape)
/// exits with `ERROR_INPUT`; anything else is `ERROR_GENERIC`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(input) = cause.downcast_ref::<InputError>() {
            return match input {
                InputError::Io(_) => exit_codes::ERROR_GENERIC,
                _ => exit_codes::ERROR_INPUT,
            };
        }
        if cause.is::<MatrixError>() {
            return exit_codes::ERROR_INPUT;
        }
    }
    exit_codes::ERROR_GENERIC
}
