//! Decoded values.

use crate::{GpsMode, PostProcessError};

/// Number of satellite-system columns a [`FieldValue::Modes`] can hold.
pub const MODE_CAPACITY: usize = 8;

/// One decoded token.
///
/// Every variant has an absence sentinel used for empty tokens: `None` for
/// integers and characters, NaN for floats and the empty string for strings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I8(Option<i8>),
    I16(Option<i16>),
    I32(Option<i32>),
    I64(Option<i64>),
    U8(Option<u8>),
    U16(Option<u16>),
    U32(Option<u32>),
    U64(Option<u64>),
    F32(f32),
    F64(f64),
    Char(Option<char>),
    Str(String),
}

impl Value {
    /// Returns `true` for the absence sentinel of the variant.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::I8(v) => v.is_none(),
            Value::I16(v) => v.is_none(),
            Value::I32(v) => v.is_none(),
            Value::I64(v) => v.is_none(),
            Value::U8(v) => v.is_none(),
            Value::U16(v) => v.is_none(),
            Value::U32(v) => v.is_none(),
            Value::U64(v) => v.is_none(),
            Value::F32(v) => v.is_nan(),
            Value::F64(v) => v.is_nan(),
            Value::Char(v) => v.is_none(),
            Value::Str(v) => v.is_empty(),
        }
    }

    /// Numeric view of the value, `None` when absent or not numeric.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match *self {
            Value::F32(v) => v as f64,
            Value::F64(v) => v,
            Value::Char(_) | Value::Str(_) => return None,
            _ => self.as_i64()? as f64,
        };

        (!v.is_nan()).then_some(v)
    }

    /// Integer view of the value, `None` when absent, not an integer or out of range.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::I8(v) => v.map(i64::from),
            Value::I16(v) => v.map(i64::from),
            Value::I32(v) => v.map(i64::from),
            Value::I64(v) => v,
            Value::U8(v) => v.map(i64::from),
            Value::U16(v) => v.map(i64::from),
            Value::U32(v) => v.map(i64::from),
            Value::U64(v) => v.and_then(|v| i64::try_from(v).ok()),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match *self {
            Value::Char(c) => c,
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Time of day in UTC, kept as the `(hours, minutes, seconds)` triplet found in
/// the sentence. No calendar reasoning is applied.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    /// Seconds with fraction, NaN when absent
    pub second: f64,
}

impl UtcTime {
    pub(crate) fn from_values(
        hour: &Value,
        minute: &Value,
        second: &Value,
    ) -> Result<Self, PostProcessError> {
        let component = |v: &Value| -> Result<Option<u8>, PostProcessError> {
            match v.as_i64() {
                Some(n) => u8::try_from(n)
                    .map(Some)
                    .map_err(|_| PostProcessError::Type { expected: "time component" }),
                None if v.is_absent() => Ok(None),
                None => Err(PostProcessError::Type { expected: "integer" }),
            }
        };

        let second = match second.as_f64() {
            Some(s) => s,
            None if second.is_absent() => f64::NAN,
            None => return Err(PostProcessError::Type { expected: "numeric" }),
        };

        Ok(Self {
            hour: component(hour)?,
            minute: component(minute)?,
            second,
        })
    }

    /// Returns `true` when no component was reported.
    pub fn is_absent(&self) -> bool {
        self.hour.is_none() && self.minute.is_none() && self.second.is_nan()
    }

    /// Converts into a [`time::Time`], `None` when a component is absent or out of range.
    ///
    /// ```rust
    /// use nmea0183_schema::UtcTime;
    ///
    /// let utc = UtcTime { hour: Some(12), minute: Some(35), second: 19.25 };
    /// let time = utc.to_time().unwrap();
    /// assert_eq!(time.hour(), 12);
    /// assert_eq!(time.millisecond(), 250);
    /// ```
    #[cfg(feature = "time")]
    #[cfg_attr(docsrs, doc(cfg(feature = "time")))]
    pub fn to_time(&self) -> Option<time::Time> {
        let (hour, minute) = (self.hour?, self.minute?);
        if self.second.is_nan() || self.second < 0.0 {
            return None;
        }

        let milliseconds = (self.second.fract() * 1000.0).round() as u16;
        time::Time::from_hms_milli(hour, minute, self.second.trunc() as u8, milliseconds.min(999))
            .ok()
    }
}

/// The final value of one [`FieldSpec`](crate::FieldSpec) for one sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A single data token, unwrapped
    Value(Value),
    /// Several data tokens, in declaration order
    Tuple(Vec<Value>),
    /// Signed decimal degrees, NaN when absent
    Degrees(f64),
    Time(UtcTime),
    /// One fix quality per satellite-system column
    Modes(heapless::Vec<GpsMode, MODE_CAPACITY>),
    Quality(GpsMode),
}

impl FieldValue {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FieldValue::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            FieldValue::Tuple(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_degrees(&self) -> Option<f64> {
        match *self {
            FieldValue::Degrees(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&UtcTime> {
        match self {
            FieldValue::Time(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_modes(&self) -> Option<&[GpsMode]> {
        match self {
            FieldValue::Modes(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_quality(&self) -> Option<GpsMode> {
        match *self {
            FieldValue::Quality(q) => Some(q),
            _ => None,
        }
    }
}
