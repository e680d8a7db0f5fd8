use core::fmt;

/// Decimal exponent at which floats switch to scientific notation.
const SCIENTIFIC_THRESHOLD: i32 = 6;
/// Smallest decimal exponent still rendered in positional notation.
const MIN_POSITIONAL_EXPONENT: i32 = -4;

/// A JSON number in the representation it was decoded with.
///
/// Its `Display` output is the text returned for numeric values by string lookups. Every
/// variant is rendered as a 64-bit float, so `1000000` and `1e6` both print as `1e+06`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Number {
    PositiveInteger(u64),
    NegativeInteger(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_float(f, self.as_f64())
    }
}

impl Number {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn as_f64(self) -> f64 {
        match self {
            Number::PositiveInteger(n) => n as f64,
            Number::NegativeInteger(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(value: &serde_json::Number) -> Self {
        if let Some(u) = value.as_u64() {
            Number::PositiveInteger(u)
        } else if let Some(i) = value.as_i64() {
            Number::NegativeInteger(i)
        } else {
            Number::Float(value.as_f64().expect("Always succeeds"))
        }
    }
}

/// General floating point format: positional notation for moderate exponents, scientific
/// notation (`1.5e+21`, `1e-05`) otherwise. Never emits trailing zeros.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if !value.is_finite() {
        return write!(f, "{value}");
    }
    if value == 0.0 {
        return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
    }
    // `LowerExp` yields the shortest round-trip digits, e.g. `1.2345e-7`
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return write!(f, "{value}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return write!(f, "{value}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if value.is_sign_negative() {
        f.write_str("-")?;
    }
    if !(MIN_POSITIONAL_EXPONENT..SCIENTIFIC_THRESHOLD).contains(&exponent) {
        let (first, rest) = digits.split_at(1);
        f.write_str(first)?;
        if !rest.is_empty() {
            write!(f, ".{rest}")?;
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "e{sign}{:02}", exponent.unsigned_abs());
    }
    if exponent < 0 {
        f.write_str("0.")?;
        for _ in 0..exponent.unsigned_abs() - 1 {
            f.write_str("0")?;
        }
        return f.write_str(&digits);
    }
    // Non-negative and below the threshold here
    let integral = exponent.unsigned_abs() as usize + 1;
    if digits.len() <= integral {
        f.write_str(&digits)?;
        for _ in digits.len()..integral {
            f.write_str("0")?;
        }
        Ok(())
    } else {
        let (head, tail) = digits.split_at(integral);
        write!(f, "{head}.{tail}")
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::Number;

    fn render(input: &str) -> String {
        let number: serde_json::Number = serde_json::from_str(input).expect("Valid number");
        Number::from(&number).to_string()
    }

    #[test_case("33", "33"; "small integer")]
    #[test_case("0", "0"; "zero")]
    #[test_case("-5", "-5"; "negative integer")]
    #[test_case("123456", "123456"; "largest positional integer")]
    #[test_case("1000000", "1e+06"; "integer in scientific notation")]
    #[test_case("1234567", "1.234567e+06"; "seven digit integer")]
    #[test_case("-1000000", "-1e+06"; "negative integer in scientific notation")]
    #[test_case("12345678901234567890", "1.2345678901234567e+19"; "u64 beyond f64 precision")]
    #[test_case("18446744073709551615", "1.8446744073709552e+19"; "u64 max")]
    #[test_case("-9223372036854775808", "-9.223372036854776e+18"; "i64 min")]
    #[test_case("33.0", "33"; "no trailing zero")]
    #[test_case("0.5", "0.5"; "fraction")]
    #[test_case("-2.25", "-2.25"; "negative fraction")]
    #[test_case("0.1", "0.1"; "shortest round trip")]
    #[test_case("123456.7", "123456.7"; "positional float")]
    #[test_case("100000.0", "100000"; "largest positional power")]
    #[test_case("1000000.0", "1e+06"; "smallest scientific power")]
    #[test_case("1234567.5", "1.2345675e+06"; "scientific float")]
    #[test_case("1e21", "1e+21"; "large exponent")]
    #[test_case("1.5e300", "1.5e+300"; "huge exponent")]
    #[test_case("0.0001", "0.0001"; "smallest positional exponent")]
    #[test_case("0.00001", "1e-05"; "small exponent")]
    #[test_case("-0.000012", "-1.2e-05"; "negative small exponent")]
    #[test_case("-0.0", "-0"; "negative zero")]
    fn display(input: &str, expected: &str) {
        assert_eq!(render(input), expected);
    }

    #[test_case("1000000", "1e6"; "million")]
    #[test_case("33", "33.0"; "small")]
    #[test_case("-250", "-2.5e2"; "negative")]
    fn integer_and_float_spellings_agree(integer: &str, float: &str) {
        assert_eq!(render(integer), render(float));
    }

    #[test]
    fn representation() {
        assert_eq!(
            Number::from(&serde_json::Number::from(7_u64)),
            Number::PositiveInteger(7)
        );
        assert_eq!(
            Number::from(&serde_json::Number::from(-7_i64)),
            Number::NegativeInteger(-7)
        );
        let float = serde_json::Number::from_f64(1.5).expect("Finite");
        assert_eq!(Number::from(&float), Number::Float(1.5));
    }
}
