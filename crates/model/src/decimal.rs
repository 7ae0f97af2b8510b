use std::{
    fmt::{Debug, Display},
    iter::Sum,
    str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const DECIMALS: u8 = 2;

/// Money amount with two implied decimal places. The wire format is a
/// plain number of currency units (rows store `amount: 4500`), so serde
/// converts rather than exposing the raw fixed-point value.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(i64);

impl Decimal {
    pub fn int(value: i64) -> Decimal {
        Decimal(value * 10i64.pow(DECIMALS as u32))
    }

    pub fn zero() -> Decimal {
        Decimal::int(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 10i64.pow(DECIMALS as u32) as f64
    }
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.to_f64())
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.to_f64())
    }
}

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Decimal((value * 10f64.powi(DECIMALS as i32)) as i64)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = ParseDecimalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let val = value.parse::<f64>().map_err(|_| ParseDecimalError)?;
        Ok(Decimal::from(val))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::try_from(s)
    }
}

impl std::ops::AddAssign for Decimal {
    fn add_assign(&mut self, other: Decimal) {
        self.0 += other.0;
    }
}

impl std::ops::SubAssign for Decimal {
    fn sub_assign(&mut self, other: Decimal) {
        self.0 -= other.0;
    }
}

impl std::ops::Add for Decimal {
    type Output = Decimal;

    fn add(self, other: Decimal) -> Decimal {
        Decimal(self.0 + other.0)
    }
}

impl std::ops::Sub for Decimal {
    type Output = Decimal;

    fn sub(self, other: Decimal) -> Decimal {
        Decimal(self.0 - other.0)
    }
}

impl std::ops::Mul<u32> for Decimal {
    type Output = Decimal;

    fn mul(self, other: u32) -> Decimal {
        Decimal(self.0 * other as i64)
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

#[derive(Debug, Error)]
#[error("Failed to parse decimal value")]
pub struct ParseDecimalError;

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UnitsVisitor;

        impl de::Visitor<'_> for UnitsVisitor {
            type Value = Decimal;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "a number of currency units")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
                Ok(Decimal::int(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
                Ok(Decimal::int(value as i64))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
                Ok(Decimal::from(value))
            }
        }

        deserializer.deserialize_any(UnitsVisitor)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!("4500.00", format!("{}", Decimal::int(4500)));
        assert_eq!("-350.00", format!("{}", Decimal::int(-350)));
        assert_eq!("0.00", format!("{}", Decimal::zero()));
        assert_eq!("199.99", format!("{}", Decimal::from(199.99)));
    }

    #[test]
    fn test_sum() {
        let total: Decimal = [Decimal::int(4500), Decimal::int(3500)].into_iter().sum();
        assert_eq!(total, Decimal::int(8000));

        let empty: Decimal = std::iter::empty::<Decimal>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_mul_months() {
        assert_eq!(Decimal::int(1000) * 12, Decimal::int(12000));
    }

    #[test]
    fn test_parse() {
        assert_eq!("350.50".parse::<Decimal>().unwrap(), Decimal::from(350.5));
        assert!("not money".parse::<Decimal>().is_err());
    }
}
