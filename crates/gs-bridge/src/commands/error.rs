use gs_app::SaveImageError;
use gs_core::channel::MethodResponse;
use gs_core::gallery::Locale;

/// Centralized error mapping for method handlers.
///
/// Only the code and the fixed localized message cross the boundary; the
/// underlying cause stays in the logs.
pub fn map_err(err: &SaveImageError, locale: Locale) -> MethodResponse {
    err.code().into_response(locale)
}
