use serde::Serialize;

use crate::cli::ListFormat;
use crate::utils::error::{AppError, AppResult};

/// Render an optional text field; absent values render as the empty string.
pub fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Pretty JSON for `--format json` listings.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Serialize(format!("listing: {}", e)))
}

/// Resolve `--format`, which only applies to `list`; text is the default.
pub fn list_format(is_list: bool, format: Option<ListFormat>) -> AppResult<ListFormat> {
    match (is_list, format) {
        (true, format) => Ok(format.unwrap_or(ListFormat::Text)),
        (false, None) => Ok(ListFormat::Text),
        (false, Some(_)) => Err(AppError::InvalidArgument(
            "--format only applies to the list action".to_string(),
        )),
    }
}
