use std::fmt;

use crate::channel::MethodResponse;

/// Error codes the gallery channel can reply with.
///
/// Kept coarse on purpose: callers see one code per failure class and
/// never a platform-specific cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request itself was malformed.
    InvalidArgs,
    /// Storage could not persist the payload.
    SaveFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgs => "invalid_args",
            ErrorCode::SaveFailed => "save_failed",
        }
    }

    /// Build the error reply for this code in the given locale.
    pub fn into_response(self, locale: Locale) -> MethodResponse {
        MethodResponse::error(self.as_str(), locale.message(self))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of the fixed user-facing error messages.
/// 固定错误消息的语言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// Parse a language tag such as `es`, `en` or `en-US`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn message(&self, code: ErrorCode) -> &'static str {
        match (self, code) {
            (Locale::Es, ErrorCode::InvalidArgs) => "Bytes o nombre del archivo inválidos",
            (Locale::Es, ErrorCode::SaveFailed) => "No se pudo guardar la imagen",
            (Locale::En, ErrorCode::InvalidArgs) => "Invalid bytes or file name",
            (Locale::En, ErrorCode::SaveFailed) => "Could not save the image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_wire_names() {
        assert_eq!(ErrorCode::InvalidArgs.as_str(), "invalid_args");
        assert_eq!(ErrorCode::SaveFailed.to_string(), "save_failed");
    }

    #[test]
    fn default_locale_keeps_spanish_messages() {
        let response = ErrorCode::SaveFailed.into_response(Locale::default());
        match response {
            MethodResponse::Error(err) => {
                assert_eq!(err.code, "save_failed");
                assert_eq!(err.message, "No se pudo guardar la imagen");
                assert!(err.details.is_none());
            }
            other => panic!("expected error reply, got {:?}", other),
        }
    }

    #[test]
    fn locale_tags_parse_loosely() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("ES"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("es_MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::from_tag(""), None);
    }
}
