//! Numeric capabilities behind `sum`, `average`, `min` and `max`.
//!
//! Integer sums are checked and fail with `Overflow`; float sums never fail.
//! Averages over integers accumulate in 128 bits and produce an `f64`.

/// Element types `sum` can add.
pub trait Summable: Copy {
    const ZERO: Self;

    /// `None` when the sum is not representable.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

/// Element types `average` can divide.
pub trait Averageable: Copy {
    /// Running total.
    type Acc: Copy;
    /// Result of the division.
    type Mean;

    const ACC_ZERO: Self::Acc;

    fn accumulate(acc: Self::Acc, item: Self) -> Option<Self::Acc>;

    fn mean(acc: Self::Acc, count: u64) -> Self::Mean;
}

/// Pairwise extremum used by `min`/`max`.
///
/// For floats a NaN on either side wins, so any NaN in the source makes the
/// result NaN.
pub trait Extremum: Copy {
    fn min_of(self, other: Self) -> Self;
    fn max_of(self, other: Self) -> Self;
}

macro_rules! integer_numeric {
    ($acc:ty => $($t:ty),* $(,)?) => {$(
        impl Summable for $t {
            const ZERO: Self = 0;

            fn checked_sum(self, other: Self) -> Option<Self> {
                self.checked_add(other)
            }
        }

        impl Averageable for $t {
            type Acc = $acc;
            type Mean = f64;

            const ACC_ZERO: $acc = 0;

            fn accumulate(acc: $acc, item: Self) -> Option<$acc> {
                acc.checked_add(item as $acc)
            }

            fn mean(acc: $acc, count: u64) -> f64 {
                acc as f64 / count as f64
            }
        }

        impl Extremum for $t {
            fn min_of(self, other: Self) -> Self {
                Ord::min(self, other)
            }

            fn max_of(self, other: Self) -> Self {
                Ord::max(self, other)
            }
        }
    )*};
}

integer_numeric!(i128 => i8, i16, i32, i64, i128, isize);
integer_numeric!(u128 => u8, u16, u32, u64, u128, usize);

macro_rules! float_numeric {
    ($($t:ty => $mean:ty),* $(,)?) => {$(
        impl Summable for $t {
            const ZERO: Self = 0.0;

            fn checked_sum(self, other: Self) -> Option<Self> {
                Some(self + other)
            }
        }

        impl Averageable for $t {
            type Acc = f64;
            type Mean = $mean;

            const ACC_ZERO: f64 = 0.0;

            fn accumulate(acc: f64, item: Self) -> Option<f64> {
                Some(acc + f64::from(item))
            }

            fn mean(acc: f64, count: u64) -> $mean {
                (acc / count as f64) as $mean
            }
        }

        impl Extremum for $t {
            fn min_of(self, other: Self) -> Self {
                if self.is_nan() || other.is_nan() {
                    <$t>::NAN
                } else if other < self {
                    other
                } else {
                    self
                }
            }

            fn max_of(self, other: Self) -> Self {
                if self.is_nan() || other.is_nan() {
                    <$t>::NAN
                } else if other > self {
                    other
                } else {
                    self
                }
            }
        }
    )*};
}

float_numeric!(f32 => f32, f64 => f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_sum_is_checked() {
        assert_eq!(i32::MAX.checked_sum(1), None);
        assert_eq!(2u8.checked_sum(3), Some(5));
    }

    #[test]
    fn test_average_widens() {
        let acc = <i64 as Averageable>::accumulate(0, i64::MAX).and_then(|a| i64::accumulate(a, i64::MAX));
        assert!(acc.is_some());
        assert_eq!(<i64 as Averageable>::mean(acc.unwrap_or_default(), 2), i64::MAX as f64);
    }

    #[test]
    fn test_float_extremum_propagates_nan() {
        assert!(1.0f64.min_of(f64::NAN).is_nan());
        assert!(f32::NAN.max_of(2.0).is_nan());
        assert_eq!(1.5f64.max_of(-2.0), 1.5);
    }
}
