//! Arbitrary-precision integer collaborator
//!
//! Thin wrapper over `num_bigint::BigInt` that adds the composite
//! capabilities. Rendered as plain signed decimal digits.

use crate::composite::Composite;
use crate::kind::Kind;
use crate::release::record_release;
use std::ops::{Add, Mul};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BigInt {
    inner: num_bigint::BigInt,
}

impl BigInt {
    pub fn zero() -> Self {
        Self {
            inner: num_bigint::BigInt::from(0),
        }
    }

    /// Borrow the underlying big integer
    pub fn as_num(&self) -> &num_bigint::BigInt {
        &self.inner
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        Self {
            inner: num_bigint::BigInt::from(n),
        }
    }
}

impl From<num_bigint::BigInt> for BigInt {
    fn from(inner: num_bigint::BigInt) -> Self {
        Self { inner }
    }
}

impl FromStr for BigInt {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            inner: s.trim().parse()?,
        })
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt {
            inner: &self.inner + &rhs.inner,
        }
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt {
            inner: &self.inner * &rhs.inner,
        }
    }
}

impl Composite for BigInt {
    const KIND: Kind = Kind::BigInt;

    fn render(&self, out: &mut String) {
        out.push_str(&self.inner.to_string());
    }

    fn structural_eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn deep_free(self) {
        record_release(Self::KIND);
    }
}
