//! The cost algebra a search runs on.
//!
//! The engine has no built-in notion of numbers. Every search receives a
//! [`CostAlgebra`]: a zero, a positive-infinity sentinel, and a sum function.
//! Ordering comes from `PartialOrd` on the cost type. Incomparable values
//! (such as `NaN`) are treated as equal wherever an ordering is required.
//!
//! A total that reaches positive infinity is never admissible, whatever the
//! `max_cost` of the search. The built-in sums saturate instead of wrapping,
//! so an overflowing path lands on infinity and is dropped.
//!
//! ```rust
//! use arcpath::CostAlgebra;
//!
//! let ints = CostAlgebra::<u32>::additive();
//! assert_eq!(ints.sum(&2, &3), 5);
//! assert_eq!(ints.sum(&u32::MAX, &1), u32::MAX);
//!
//! let floats = CostAlgebra::with_infinity(f64::INFINITY).unwrap();
//! assert_eq!(*floats.positive_infinity(), f64::INFINITY);
//!
//! let saturating = CostAlgebra::new(0u8, u8::MAX, |a: &u8, b: &u8| a.saturating_add(*b)).unwrap();
//! assert_eq!(saturating.sum(&200, &100), 255);
//! ```

use core::cmp::Ordering;
use core::fmt::Debug;
use num_traits::{Bounded, SaturatingAdd, Zero};

use crate::error::{Result, SearchError};

/// The sum function used by [`CostAlgebra::additive`] and [`CostAlgebra::with_infinity`].
pub type AddFn<C> = fn(&C, &C) -> C;

/// Zero, positive infinity and a sum function for cost type `C`.
///
/// Built only through validating constructors:
/// - zero must satisfy [`Zero::is_zero`]
/// - positive infinity must not compare below zero
#[derive(Clone)]
pub struct CostAlgebra<C, S = AddFn<C>> {
    zero: C,
    positive_infinity: C,
    sum: S,
}

impl<C, S> CostAlgebra<C, S>
where
    C: Zero + PartialOrd + Debug,
    S: Fn(&C, &C) -> C,
{
    /// Creates a cost algebra from explicit values.
    ///
    /// # Errors
    /// [`SearchError::InvalidZero`] if `zero` is not zero,
    /// [`SearchError::InfinityBelowZero`] if `positive_infinity < zero`.
    pub fn new(zero: C, positive_infinity: C, sum: S) -> Result<Self> {
        if !zero.is_zero() {
            return Err(SearchError::InvalidZero {
                zero: format!("{zero:?}"),
            });
        }
        if positive_infinity < zero {
            return Err(SearchError::InfinityBelowZero {
                positive_infinity: format!("{positive_infinity:?}"),
                zero: format!("{zero:?}"),
            });
        }
        Ok(Self {
            zero,
            positive_infinity,
            sum,
        })
    }
}

impl<C, S> CostAlgebra<C, S> {
    /// The zero cost. Every root back link carries this cost.
    #[inline]
    pub fn zero(&self) -> &C {
        &self.zero
    }

    /// The cost assumed for vertices that have not been reached yet.
    #[inline]
    pub fn positive_infinity(&self) -> &C {
        &self.positive_infinity
    }

    /// Adds two costs with the configured sum function.
    #[inline]
    pub fn sum(&self, a: &C, b: &C) -> C
    where
        S: Fn(&C, &C) -> C,
    {
        (self.sum)(a, b)
    }

    /// Returns `true` if a path of cost `total` may be extended under `max_cost`.
    ///
    /// `max_cost` is inclusive; positive infinity is not.
    #[inline]
    pub fn admits(&self, total: &C, max_cost: &C) -> bool
    where
        C: PartialOrd,
    {
        total <= max_cost && *total < self.positive_infinity
    }
}

/// Addition that stops at the bounds of the type instead of wrapping.
///
/// Integers saturate at `max_value()`; floats already overflow to infinity.
pub trait SaturatingCost: Sized {
    /// `self + other`, clamped to the representable range.
    fn saturating_sum(&self, other: &Self) -> Self;
}

macro_rules! saturating_int_cost {
    ($($t:ty),*) => {
        $(
            impl SaturatingCost for $t {
                #[inline]
                fn saturating_sum(&self, other: &Self) -> Self {
                    SaturatingAdd::saturating_add(self, other)
                }
            }
        )*
    };
}

saturating_int_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_cost {
    ($($t:ty),*) => {
        $(
            impl SaturatingCost for $t {
                #[inline]
                fn saturating_sum(&self, other: &Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

float_cost!(f32, f64);

impl<C> CostAlgebra<C, AddFn<C>>
where
    C: Zero + Bounded + SaturatingCost + PartialOrd + Debug,
{
    /// The usual algebra: `C::zero()`, `C::max_value()` as infinity, and a
    /// saturating `+`.
    pub fn additive() -> Self {
        Self {
            zero: C::zero(),
            positive_infinity: C::max_value(),
            sum: C::saturating_sum,
        }
    }
}

impl<C> CostAlgebra<C, AddFn<C>>
where
    C: Zero + SaturatingCost + PartialOrd + Debug,
{
    /// Like [`CostAlgebra::additive`], with an explicit infinity sentinel.
    ///
    /// # Errors
    /// [`SearchError::InfinityBelowZero`] if `positive_infinity < 0`.
    pub fn with_infinity(positive_infinity: C) -> Result<Self> {
        Self::new(C::zero(), positive_infinity, C::saturating_sum)
    }
}

impl<C: Debug, S> Debug for CostAlgebra<C, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CostAlgebra")
            .field("zero", &self.zero)
            .field("positive_infinity", &self.positive_infinity)
            .finish_non_exhaustive()
    }
}

/// Total order over partially ordered costs. Incomparable pairs are equal.
#[inline]
pub(crate) fn compare<C: PartialOrd>(a: &C, b: &C) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
