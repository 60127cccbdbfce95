//! Leveled assertions.
//!
//! Simple assertions guard the [`Subproblem`](crate::branching::Subproblem) contract and are
//! always enabled; the more expensive levels (e.g. walking the whole active list) only run in
//! tests or with the `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const BNB_ASSERT_LEVEL_DEFINITION: u8 = BNB_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const BNB_ASSERT_LEVEL_DEFINITION: u8 = BNB_ASSERT_MODERATE;

pub const BNB_ASSERT_SIMPLE: u8 = 1;
pub const BNB_ASSERT_MODERATE: u8 = 2;
pub const BNB_ASSERT_ADVANCED: u8 = 3;
pub const BNB_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! bnb_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::BNB_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BNB_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! bnb_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::BNB_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BNB_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! bnb_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::BNB_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BNB_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! bnb_assert_eq_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::BNB_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BNB_ASSERT_MODERATE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! bnb_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::BNB_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BNB_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! bnb_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::BNB_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BNB_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
