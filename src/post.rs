//! Post-processing of decoded token groups into field values.

use crate::{
    FieldValue, GpsMode, PostProcessError, UtcTime, Value,
    value::MODE_CAPACITY,
};

/// How the data tokens of one field become its final value.
///
/// Each strategy takes the field's data tokens of one sentence, in declaration
/// order, and is a pure function of them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// A single token is unwrapped, several tokens are kept as a tuple.
    #[default]
    Default,

    /// `(degrees, minutes, hemisphere)` to signed decimal degrees.
    ///
    /// South and West are negative. Absent degrees, minutes or hemisphere give NaN.
    Degrees,

    /// `(hours, minutes, seconds)` kept as a [`UtcTime`].
    UtcTime,

    /// A string of mode indicators, one per satellite-system column.
    ///
    /// An empty string gives `columns` times [`GpsMode::Unknown`].
    Modes { columns: usize },

    /// A GGA quality indicator, absent gives [`GpsMode::Unknown`].
    Quality,
}

impl PostProcess {
    /// Number of data tokens the strategy takes, `None` for any non-zero count.
    pub fn arity(&self) -> Option<usize> {
        match self {
            PostProcess::Default => None,
            PostProcess::Degrees | PostProcess::UtcTime => Some(3),
            PostProcess::Modes { .. } | PostProcess::Quality => Some(1),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PostProcess::Default => "default",
            PostProcess::Degrees => "degrees",
            PostProcess::UtcTime => "utc time",
            PostProcess::Modes { .. } => "modes",
            PostProcess::Quality => "quality",
        }
    }

    /// Applies the strategy to the data tokens of one sentence.
    ///
    /// `values` must hold exactly [`arity`](Self::arity) values, which
    /// [`FieldSpec`](crate::FieldSpec) construction guarantees.
    ///
    /// ```rust
    /// use nmea0183_schema::{PostProcess, Value};
    ///
    /// let north = vec![Value::F64(40.7), Value::F64(0.0), Value::Char(Some('N'))];
    /// let south = vec![Value::F64(40.7), Value::F64(0.0), Value::Char(Some('S'))];
    ///
    /// let lat = PostProcess::Degrees.apply(north).unwrap();
    /// assert_eq!(lat.as_degrees(), Some(40.7));
    ///
    /// let lat = PostProcess::Degrees.apply(south).unwrap();
    /// assert_eq!(lat.as_degrees(), Some(-40.7));
    /// ```
    pub fn apply(&self, mut values: Vec<Value>) -> Result<FieldValue, PostProcessError> {
        match *self {
            PostProcess::Default => {
                if values.len() == 1 {
                    Ok(FieldValue::Value(values.remove(0)))
                } else {
                    Ok(FieldValue::Tuple(values))
                }
            }
            PostProcess::Degrees => match values.as_slice() {
                [degrees, minutes, hemisphere] => degrees_from(degrees, minutes, hemisphere),
                _ => Err(PostProcessError::Type { expected: "degrees triplet" }),
            },
            PostProcess::UtcTime => match values.as_slice() {
                [hour, minute, second] => UtcTime::from_values(hour, minute, second).map(FieldValue::Time),
                _ => Err(PostProcessError::Type { expected: "time triplet" }),
            },
            PostProcess::Modes { columns } => match values.as_slice() {
                [indicators] => modes_from(indicators, columns),
                _ => Err(PostProcessError::Type { expected: "single mode" }),
            },
            PostProcess::Quality => match values.as_slice() {
                [code] if code.is_absent() => Ok(FieldValue::Quality(GpsMode::Unknown)),
                [code] => {
                    let code = code.as_i64().ok_or(PostProcessError::Type { expected: "integer" })?;
                    GpsMode::from_quality(code)
                        .map(FieldValue::Quality)
                        .ok_or(PostProcessError::Quality(code))
                }
                _ => Err(PostProcessError::Type { expected: "single quality" }),
            },
        }
    }
}

fn degrees_from(
    degrees: &Value,
    minutes: &Value,
    hemisphere: &Value,
) -> Result<FieldValue, PostProcessError> {
    let hemisphere = match hemisphere {
        Value::Char(c) => *c,
        Value::Str(s) if s.is_empty() => None,
        _ => return Err(PostProcessError::Type { expected: "hemisphere" }),
    };

    let sign = match hemisphere {
        Some('N') | Some('E') => 1.0,
        Some('S') | Some('W') => -1.0,
        Some(c) => return Err(PostProcessError::Hemisphere(c)),
        None => return Ok(FieldValue::Degrees(f64::NAN)),
    };

    let value = match (degrees.as_f64(), minutes.as_f64()) {
        (Some(d), Some(m)) => sign * (d + m / 60.0),
        _ => f64::NAN,
    };

    Ok(FieldValue::Degrees(value))
}

fn modes_from(indicators: &Value, columns: usize) -> Result<FieldValue, PostProcessError> {
    let indicators = match indicators {
        Value::Str(s) => s.as_str(),
        Value::Char(None) => "",
        Value::Char(Some(c)) => {
            let mode = GpsMode::from_char(*c).ok_or(PostProcessError::Mode(*c))?;
            let modes = heapless::Vec::from_slice(&[mode]).map_err(|_| too_many_modes(1))?;
            return Ok(FieldValue::Modes(modes));
        }
        _ => return Err(PostProcessError::Type { expected: "mode string" }),
    };

    let mut modes = heapless::Vec::<GpsMode, MODE_CAPACITY>::new();

    if indicators.is_empty() {
        for _ in 0..columns {
            modes
                .push(GpsMode::Unknown)
                .map_err(|_| too_many_modes(columns))?;
        }
        return Ok(FieldValue::Modes(modes));
    }

    for c in indicators.chars() {
        let mode = GpsMode::from_char(c).ok_or(PostProcessError::Mode(c))?;
        modes
            .push(mode)
            .map_err(|_| too_many_modes(indicators.chars().count()))?;
    }

    Ok(FieldValue::Modes(modes))
}

fn too_many_modes(found: usize) -> PostProcessError {
    PostProcessError::TooManyModes {
        found,
        capacity: MODE_CAPACITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees(d: f64, m: f64, h: Option<char>) -> Result<FieldValue, PostProcessError> {
        PostProcess::Degrees.apply(vec![Value::F64(d), Value::F64(m), Value::Char(h)])
    }

    #[test]
    fn test_default() {
        let single = PostProcess::Default.apply(vec![Value::U8(Some(8))]);
        assert_eq!(single, Ok(FieldValue::Value(Value::U8(Some(8)))));

        let tuple = PostProcess::Default.apply(vec![Value::U8(Some(23)), Value::U8(Some(3))]);
        assert_eq!(
            tuple,
            Ok(FieldValue::Tuple(vec![Value::U8(Some(23)), Value::U8(Some(3))]))
        );
    }

    #[test]
    fn test_degrees_sign() {
        assert_eq!(degrees(40.7, 0.0, Some('N')), Ok(FieldValue::Degrees(40.7)));
        assert_eq!(degrees(40.7, 0.0, Some('S')), Ok(FieldValue::Degrees(-40.7)));
        assert_eq!(degrees(11.0, 30.0, Some('E')), Ok(FieldValue::Degrees(11.5)));
        assert_eq!(degrees(11.0, 30.0, Some('W')), Ok(FieldValue::Degrees(-11.5)));
        assert_eq!(degrees(1.0, 0.0, Some('Q')), Err(PostProcessError::Hemisphere('Q')));
    }

    #[test]
    fn test_degrees_absent() {
        let lat = degrees(f64::NAN, f64::NAN, None).unwrap();
        assert!(lat.as_degrees().unwrap().is_nan());

        let lat = PostProcess::Degrees
            .apply(vec![Value::U8(None), Value::F64(f64::NAN), Value::Char(Some('N'))])
            .unwrap();
        assert!(lat.as_degrees().unwrap().is_nan());
    }

    #[test]
    fn test_modes() {
        let modes = PostProcess::Modes { columns: 2 }
            .apply(vec![Value::Str("AR".into())])
            .unwrap();
        assert_eq!(
            modes.as_modes(),
            Some(&[GpsMode::Autonomous, GpsMode::RtkFixed][..])
        );

        let modes = PostProcess::Modes { columns: 2 }
            .apply(vec![Value::Str(String::new())])
            .unwrap();
        assert_eq!(modes.as_modes(), Some(&[GpsMode::Unknown, GpsMode::Unknown][..]));

        let modes = PostProcess::Modes { columns: 1 }
            .apply(vec![Value::Char(Some('F'))])
            .unwrap();
        assert_eq!(modes.as_modes(), Some(&[GpsMode::RtkFloat][..]));

        let modes = PostProcess::Modes { columns: 1 }.apply(vec![Value::Char(None)]).unwrap();
        assert_eq!(modes.as_modes(), Some(&[GpsMode::Unknown][..]));

        let modes = PostProcess::Modes { columns: 9 }.apply(vec![Value::Str(String::new())]);
        assert_eq!(
            modes,
            Err(PostProcessError::TooManyModes {
                found: 9,
                capacity: MODE_CAPACITY
            })
        );

        let modes = PostProcess::Modes { columns: 2 }.apply(vec![Value::Str("AX".into())]);
        assert_eq!(modes, Err(PostProcessError::Mode('X')));

        let modes = PostProcess::Modes { columns: 2 }.apply(vec![Value::Str("ADADADADA".into())]);
        assert_eq!(
            modes,
            Err(PostProcessError::TooManyModes {
                found: 9,
                capacity: MODE_CAPACITY
            })
        );
    }

    #[test]
    fn test_quality() {
        let quality = PostProcess::Quality.apply(vec![Value::U8(Some(1))]);
        assert_eq!(quality, Ok(FieldValue::Quality(GpsMode::Autonomous)));

        let quality = PostProcess::Quality.apply(vec![Value::U8(None)]);
        assert_eq!(quality, Ok(FieldValue::Quality(GpsMode::Unknown)));

        let quality = PostProcess::Quality.apply(vec![Value::U8(Some(9))]);
        assert_eq!(quality, Err(PostProcessError::Quality(9)));
    }
}
