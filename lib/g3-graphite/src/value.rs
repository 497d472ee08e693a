/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

/// Doubles with an integral value below this magnitude are rendered without
/// a fractional part, the same way a statsd daemon prints its numbers.
const MAX_INTEGRAL_DOUBLE: f64 = 1e15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Double(f64),
    Signed(i64),
    Unsigned(u64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Unsigned(u) => f.write_str(itoa::Buffer::new().format(*u)),
            MetricValue::Signed(i) => f.write_str(itoa::Buffer::new().format(*i)),
            MetricValue::Double(v) => {
                if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_INTEGRAL_DOUBLE {
                    f.write_str(itoa::Buffer::new().format(*v as i64))
                } else {
                    f.write_str(ryu::Buffer::new().format(*v))
                }
            }
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for MetricValue {
                fn from(v: $t) -> Self {
                    MetricValue::Unsigned(v as u64)
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for MetricValue {
                fn from(v: $t) -> Self {
                    MetricValue::Signed(v as i64)
                }
            }
        )+
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<f32> for MetricValue {
    fn from(v: f32) -> Self {
        MetricValue::Double(v as f64)
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Double(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(MetricValue::Unsigned(10).to_string(), "10");
        assert_eq!(MetricValue::Signed(-10).to_string(), "-10");
        assert_eq!(MetricValue::Double(2.0).to_string(), "2");
        assert_eq!(MetricValue::Double(-3.0).to_string(), "-3");
        assert_eq!(MetricValue::Double(0.0).to_string(), "0");
        assert_eq!(MetricValue::Double(1.5).to_string(), "1.5");
        assert_eq!(MetricValue::Double(0.25).to_string(), "0.25");
        assert_eq!(MetricValue::Double(1e21).to_string(), "1e21");
    }

    #[test]
    fn convert() {
        assert_eq!(MetricValue::from(3u32), MetricValue::Unsigned(3));
        assert_eq!(MetricValue::from(-3i32), MetricValue::Signed(-3));
        assert_eq!(MetricValue::from(0.5f64), MetricValue::Double(0.5));
    }
}
