use crate::error::{Subject, ValidationError, ValidationResult};

/// A raw input that may or may not be a whole number.
///
/// Pagination inputs often arrive loosely typed (an absent query parameter,
/// a JSON number), so the constructor and setters accept anything implementing
/// this trait and perform the integer check themselves.
///
/// # Example
/// ```
/// use paginator_api::PageValue;
///
/// assert_eq!(3u8.integer_value(), Some(3));
/// assert_eq!((-1i64).integer_value(), Some(-1));
/// assert_eq!(2.0f64.integer_value(), None);
/// assert_eq!(None::<u64>.integer_value(), None);
/// ```
pub trait PageValue {
    /// Returns the whole-number value, or `None` when the input is not an integer.
    fn integer_value(self) -> Option<i128>;
}

macro_rules! impl_page_value_for_int {
    ($($t:ty),*) => {
        $(
            impl PageValue for $t {
                fn integer_value(self) -> Option<i128> {
                    Some(self as i128)
                }
            }
        )*
    };
}

impl_page_value_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// Floats are never whole-number types, even when the value has no fraction.
impl PageValue for f32 {
    fn integer_value(self) -> Option<i128> {
        None
    }
}

impl PageValue for f64 {
    fn integer_value(self) -> Option<i128> {
        None
    }
}

impl<T: PageValue> PageValue for Option<T> {
    fn integer_value(self) -> Option<i128> {
        self.and_then(PageValue::integer_value)
    }
}

/// Checks that `value` is an integer, then that it is greater than 0.
pub fn require_positive(value: impl PageValue, subject: Subject) -> ValidationResult<u64> {
    let Some(value) = value.integer_value() else {
        return Err(ValidationError::NotAnInteger { subject });
    };

    if value <= 0 {
        // Non-positive inputs only come from signed types of at most 64 bits.
        let value = i64::try_from(value).unwrap_or(i64::MIN);
        return Err(ValidationError::NotPositive { subject, value });
    }

    Ok(u64::try_from(value).unwrap_or(u64::MAX))
}
