//! Declarative macros for call sites that prefer the statement form
//! `set_bit!(num, 3)` over reassigning the result of a function.
//!
//! The bit macros go through the checked functions in [`crate::bit_field`], so
//! an out-of-range index comes back as an `Err` and the place is not written.

/// Forces bit `$index` of the integer place `$place` to 1. Evaluates to `Result<()>`.
#[macro_export]
macro_rules! set_bit {
    ($place:expr, $index:expr) => {{
        let index = $index;
        let place = &mut $place;
        $crate::bit_field::set_bit(*place, index).map(|value| *place = value)
    }};
}

/// Forces bit `$index` of `$place` to 0. Evaluates to `Result<()>`.
#[macro_export]
macro_rules! clear_bit {
    ($place:expr, $index:expr) => {{
        let index = $index;
        let place = &mut $place;
        $crate::bit_field::clear_bit(*place, index).map(|value| *place = value)
    }};
}

/// Flips bit `$index` of `$place`. Evaluates to `Result<()>`.
#[macro_export]
macro_rules! toggle_bit {
    ($place:expr, $index:expr) => {{
        let index = $index;
        let place = &mut $place;
        $crate::bit_field::toggle_bit(*place, index).map(|value| *place = value)
    }};
}

#[macro_export]
macro_rules! test_bit {
    ($value:expr, $index:expr) => {
        $crate::bit_field::test_bit($value, $index)
    };
}

/// `$x * $x`, with `$x` evaluated once.
#[macro_export]
macro_rules! square {
    ($x:expr) => {{
        let x = $x;
        x * x
    }};
}

/// The larger of two values. Each argument is evaluated once; ties return `$b`.
#[macro_export]
macro_rules! max {
    ($a:expr, $b:expr) => {{
        let a = $a;
        let b = $b;
        if a > b {
            a
        } else {
            b
        }
    }};
}

/// Debug output that is switched on and off by the log level.
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)+) => {
        $crate::__log::debug!($($arg)+)
    };
}

#[macro_export]
macro_rules! define_const {
    ($vis:vis $name:ident : $ty:ty = $value:expr) => {
        $vis const $name: $ty = $value;
    };
}
