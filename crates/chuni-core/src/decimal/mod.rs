//! Arbitrary-precision fixed-point decimals.
//!
//! An [`ExactDecimal`] is an integer `magnitude` paired with a non-negative
//! `scale`, denoting `magnitude × 10^-scale`. Arithmetic never goes through
//! binary floating point, so `0.1 + 0.2` is exactly `0.3`.
//!
//! Operations keep whatever scale they produce: trailing zeros survive an
//! operation chain and only [`Display`](std::fmt::Display) strips them.
//! Serialization keeps the full scale so a caller-chosen precision makes it
//! to the other side intact.

mod parse;
mod serde_impl;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

/// `10^exp` as a big integer.
pub(crate) fn pow10(exp: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}

/// Exact decimal number with an explicit scale.
#[derive(Debug, Clone, Default)]
pub struct ExactDecimal {
    magnitude: BigInt,
    scale: u32,
}

impl ExactDecimal {
    /// Build `magnitude × 10^-scale`.
    pub fn new(magnitude: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            magnitude: magnitude.into(),
            scale,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::from(1)
    }

    /// Unscaled integer value.
    pub fn magnitude(&self) -> &BigInt {
        &self.magnitude
    }

    /// Number of fractional digits carried by this value.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.magnitude.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.magnitude.is_positive()
    }

    /// Magnitudes of both operands brought to the larger of the two scales.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, u32) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.magnitude.clone(), other.magnitude.clone(), self.scale),
            Ordering::Less => (
                &self.magnitude * pow10(other.scale - self.scale),
                other.magnitude.clone(),
                other.scale,
            ),
            Ordering::Greater => (
                self.magnitude.clone(),
                &other.magnitude * pow10(self.scale - other.scale),
                self.scale,
            ),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Self {
        let (a, b, scale) = self.aligned(other);
        Self::new(a + b, scale)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Self) -> Self {
        let (a, b, scale) = self.aligned(other);
        Self::new(a - b, scale)
    }

    /// Exact product; the result scale is the sum of both scales.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(&self.magnitude * &other.magnitude, self.scale + other.scale)
    }

    /// Truncating division keeping at least `min_places` fractional digits.
    ///
    /// The dividend is padded with trailing zeros until the quotient's scale
    /// reaches `min_places`, then the magnitudes are divided with truncation
    /// toward zero.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero, like integer division.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, other: &Self, min_places: u32) -> Self {
        let mut magnitude = self.magnitude.clone();
        let mut scale = self.scale;

        let natural = i64::from(scale) - i64::from(other.scale);
        if natural < i64::from(min_places) {
            let pad = (i64::from(min_places) - natural) as u32;
            magnitude *= pow10(pad);
            scale += pad;
        }

        // BigInt division truncates toward zero.
        let quotient = magnitude / &other.magnitude;
        let scale = scale.saturating_sub(other.scale);
        Self::new(quotient, scale)
    }

    /// Like [`div`](Self::div) but returns `None` for a zero divisor.
    pub fn checked_div(&self, other: &Self, min_places: u32) -> Option<Self> {
        if other.is_zero() {
            None
        } else {
            Some(self.div(other, min_places))
        }
    }

    /// Smallest integer not less than `self / other`, computed exactly.
    ///
    /// Returns `None` for a zero divisor.
    pub fn ceil_div(&self, other: &Self) -> Option<BigInt> {
        if other.is_zero() {
            return None;
        }
        // a/10^sa ÷ b/10^sb == (a·10^sb) ÷ (b·10^sa)
        let mut numerator = &self.magnitude * pow10(other.scale);
        let mut denominator = &other.magnitude * pow10(self.scale);
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Some(ceil_quotient(&numerator, &denominator))
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }

    pub fn abs(&self) -> Self {
        Self::new(self.magnitude.abs(), self.scale)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn neg(&self) -> Self {
        Self::new(-&self.magnitude, self.scale)
    }

    /// Same value carried at exactly `places` fractional digits.
    ///
    /// Pads with zeros when widening, truncates toward zero when narrowing.
    pub fn rescale(&self, places: u32) -> Self {
        match places.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self::new(&self.magnitude * pow10(places - self.scale), places),
            Ordering::Less => Self::new(&self.magnitude / pow10(self.scale - places), places),
        }
    }

    /// Copy with trailing fractional zeros removed.
    pub fn normalize(&self) -> Self {
        if self.magnitude.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u8);
        let mut magnitude = self.magnitude.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (quotient, remainder) = magnitude.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            magnitude = quotient;
            scale -= 1;
        }
        Self::new(magnitude, scale)
    }

    /// Render with exactly `places` fractional digits, truncating extra digits.
    pub fn to_fixed(&self, places: u32) -> String {
        self.rescale(places).render()
    }

    /// Largest integer not greater than this value.
    pub fn floor(&self) -> BigInt {
        self.magnitude.div_floor(&pow10(self.scale))
    }

    /// Smallest integer not less than this value.
    pub fn ceil(&self) -> BigInt {
        ceil_quotient(&self.magnitude, &pow10(self.scale))
    }

    /// Nearest `f64`; lossy, for display and plotting only.
    pub fn to_f64(&self) -> f64 {
        self.render().parse().unwrap_or(f64::NAN)
    }

    /// Render at the current scale without normalizing.
    fn render(&self) -> String {
        let digits = self.magnitude.abs().to_string();
        let sign = if self.magnitude.is_negative() { "-" } else { "" };
        if self.scale == 0 {
            return format!("{sign}{digits}");
        }

        let scale = self.scale as usize;
        let digits = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        format!("{sign}{int_part}.{frac_part}")
    }
}

fn ceil_quotient(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let (quotient, remainder) = numerator.div_mod_floor(denominator);
    if remainder.is_zero() {
        quotient
    } else {
        quotient + 1
    }
}

impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalize().render())
    }
}

impl PartialEq for ExactDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for ExactDecimal {}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for ExactDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.magnitude.hash(state);
        normalized.scale.hash(state);
    }
}

impl ToPrimitive for ExactDecimal {
    fn to_i64(&self) -> Option<i64> {
        self.rescale(0).magnitude.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.rescale(0).magnitude.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(ExactDecimal::to_f64(self))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ExactDecimal {
                fn from(value: $t) -> Self {
                    Self::new(value, 0)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize);

impl From<BigInt> for ExactDecimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl std::ops::$trait<&ExactDecimal> for &ExactDecimal {
            type Output = ExactDecimal;

            fn $method(self, rhs: &ExactDecimal) -> ExactDecimal {
                ExactDecimal::$method(self, rhs)
            }
        }

        impl std::ops::$trait for ExactDecimal {
            type Output = ExactDecimal;

            fn $method(self, rhs: ExactDecimal) -> ExactDecimal {
                ExactDecimal::$method(&self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);

impl std::ops::Neg for ExactDecimal {
    type Output = ExactDecimal;

    fn neg(self) -> ExactDecimal {
        ExactDecimal::neg(&self)
    }
}

impl std::iter::Sum for ExactDecimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, x| total.add(&x))
    }
}

impl<'a> std::iter::Sum<&'a ExactDecimal> for ExactDecimal {
    fn sum<I: Iterator<Item = &'a ExactDecimal>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, x| total.add(x))
    }
}
