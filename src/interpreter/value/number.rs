use std::fmt;

/// A numeric value produced by evaluation or read from a numeric atom.
///
/// Integers stay integers for as long as every operation on them is exact
/// and fits in 64 bits. Anything touching a real, and every division,
/// produces a `Real`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating point value.
    Real(f64),
}

impl Number {
    /// Returns the value as an `f64`, promoting integers.
    ///
    /// Integers above `2^53` in magnitude are rounded to the nearest
    /// representable real, which is the usual host promotion.
    ///
    /// # Example
    /// ```
    /// use lispcalc::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_real(), 3.0);
    /// assert_eq!(Number::Real(0.5).as_real(), 0.5);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for `0`, `0.0` and `-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Returns `true` if the value is stored as an integer.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

/// Numbers compare by value, so `Integer(1) == Real(1.0)`.
impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            _ => self.as_real() == other.as_real(),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` so reals never print like integers.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Number;

    #[test]
    fn integers_and_reals_compare_by_value() {
        assert_eq!(Number::Integer(1), Number::Real(1.0));
        assert_ne!(Number::Integer(1), Number::Real(1.5));
        assert_eq!(Number::Real(-0.0), Number::Integer(0));
    }

    #[test]
    fn display_distinguishes_reals() {
        assert_eq!(Number::Integer(5).to_string(), "5");
        assert_eq!(Number::Real(5.0).to_string(), "5.0");
        assert_eq!(Number::Real(0.25).to_string(), "0.25");
        assert_eq!(Number::Integer(-7).to_string(), "-7");
    }

    #[test]
    fn zero_detection_covers_signed_zero() {
        assert!(Number::Integer(0).is_zero());
        assert!(Number::Real(0.0).is_zero());
        assert!(Number::Real(-0.0).is_zero());
        assert!(!Number::Real(1e-300).is_zero());
    }
}
