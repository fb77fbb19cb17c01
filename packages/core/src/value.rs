// ABOUTME: Read-time coercion of stored text values
// ABOUTME: Explicit parse strategies for integer, floating point, boolean and text

use thiserror::Error;

/// A stored value could not be parsed as the requested type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot convert '{value}' to {target}: {reason}")]
pub struct CoercionError {
    pub value: String,
    pub target: &'static str,
    pub reason: String,
}

impl CoercionError {
    fn new(value: &str, target: &'static str, reason: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            target,
            reason: reason.into(),
        }
    }
}

/// Types a stored text value can be read back as.
///
/// The set of implementations is closed: integers, floating point, `bool`
/// and `String`.
pub trait FromSettingValue: Sized {
    /// Name used in error messages
    const TYPE_NAME: &'static str;

    fn from_setting_value(raw: &str) -> Result<Self, CoercionError>;
}

/// Types that can be written as a setting value.
///
/// The produced text is always accepted by the matching [`FromSettingValue`]
/// implementation.
pub trait ToSettingValue {
    fn to_setting_value(&self) -> String;
}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromSettingValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn from_setting_value(raw: &str) -> Result<Self, CoercionError> {
                    raw.trim()
                        .parse::<$ty>()
                        .map_err(|e| CoercionError::new(raw, Self::TYPE_NAME, e.to_string()))
                }
            }

            impl ToSettingValue for $ty {
                fn to_setting_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl FromSettingValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_setting_value(raw: &str) -> Result<Self, CoercionError> {
        // Accept any casing so values like "True" written by other tools still parse
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(CoercionError::new(
                raw,
                Self::TYPE_NAME,
                "Must be 'true' or 'false'",
            ))
        }
    }
}

impl ToSettingValue for bool {
    fn to_setting_value(&self) -> String {
        self.to_string()
    }
}

impl FromSettingValue for String {
    const TYPE_NAME: &'static str = "String";

    fn from_setting_value(raw: &str) -> Result<Self, CoercionError> {
        Ok(raw.to_string())
    }
}

impl ToSettingValue for str {
    fn to_setting_value(&self) -> String {
        self.to_string()
    }
}

impl ToSettingValue for String {
    fn to_setting_value(&self) -> String {
        self.clone()
    }
}

impl<T: ToSettingValue + ?Sized> ToSettingValue for &T {
    fn to_setting_value(&self) -> String {
        (**self).to_setting_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_parsing() {
        assert_eq!(i32::from_setting_value("10").unwrap(), 10);
        assert_eq!(i64::from_setting_value("-42").unwrap(), -42);
        assert_eq!(u8::from_setting_value(" 7 ").unwrap(), 7);
    }

    #[test]
    fn test_integer_rejects_invalid_text() {
        let err = i32::from_setting_value("abc").unwrap_err();
        assert_eq!(err.value, "abc");
        assert_eq!(err.target, "i32");

        assert!(i32::from_setting_value("1.5").is_err());
        assert!(u8::from_setting_value("256").is_err());
        assert!(u32::from_setting_value("-1").is_err());
        assert!(i64::from_setting_value("").is_err());
    }

    #[test]
    fn test_float_parsing() {
        assert_eq!(f64::from_setting_value("2.5").unwrap(), 2.5);
        assert_eq!(f64::from_setting_value("10").unwrap(), 10.0);
        assert!(f32::from_setting_value("two").is_err());
    }

    #[test]
    fn test_bool_parsing() {
        assert!(bool::from_setting_value("true").unwrap());
        assert!(!bool::from_setting_value("false").unwrap());
        assert!(bool::from_setting_value("True").unwrap());
        assert!(!bool::from_setting_value("FALSE").unwrap());
    }

    #[test]
    fn test_bool_rejects_other_words() {
        assert!(bool::from_setting_value("yes").is_err());
        assert!(bool::from_setting_value("1").is_err());
        assert!(bool::from_setting_value("").is_err());
    }

    #[test]
    fn test_text_never_fails() {
        assert_eq!(String::from_setting_value("").unwrap(), "");
        assert_eq!(String::from_setting_value(" padded ").unwrap(), " padded ");
    }

    #[test]
    fn test_written_values_read_back() {
        assert_eq!(i32::from_setting_value(&10i32.to_setting_value()).unwrap(), 10);
        assert!(bool::from_setting_value(&true.to_setting_value()).unwrap());
        assert_eq!(f64::from_setting_value(&0.1f64.to_setting_value()).unwrap(), 0.1);
        assert_eq!(
            String::from_setting_value(&"SomeValue".to_setting_value()).unwrap(),
            "SomeValue"
        );
    }

    #[test]
    fn test_error_message() {
        let err = bool::from_setting_value("maybe").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot convert 'maybe' to bool: Must be 'true' or 'false'"
        );
    }
}
