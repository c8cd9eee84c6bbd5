use std::{fmt, mem::size_of};

use log::trace;
use num::PrimInt;
use strum_macros::{AsRefStr, EnumIter};

use crate::{Error, Result};

/// Number of addressable bits in `T`.
pub fn width<T>() -> usize {
    size_of::<T>() * 8
}

fn mask<T: PrimInt>(index: usize) -> Result<T> {
    let width = width::<T>();
    if index >= width {
        return Err(Error::from_index(index, width));
    }
    Ok(T::one() << index)
}

/// Returns `value` with bit `index` forced to 1.
///
/// # Errors
/// `BitIndexOutOfRange` if `index` is not below the width of `T`. The same
/// holds for [`clear_bit`], [`toggle_bit`] and [`test_bit`].
pub fn set_bit<T: PrimInt>(value: T, index: usize) -> Result<T> {
    Ok(value | mask(index)?)
}

/// Returns `value` with bit `index` forced to 0.
pub fn clear_bit<T: PrimInt>(value: T, index: usize) -> Result<T> {
    Ok(value & !mask(index)?)
}

/// Returns `value` with bit `index` flipped.
pub fn toggle_bit<T: PrimInt>(value: T, index: usize) -> Result<T> {
    Ok(value ^ mask(index)?)
}

/// Whether bit `index` of `value` is 1. Errors like [`set_bit`].
pub fn test_bit<T: PrimInt>(value: T, index: usize) -> Result<bool> {
    Ok(value & mask(index)? != T::zero())
}

/// The single-bit operations that write to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
pub enum BitOp {
    Set,
    Clear,
    Toggle,
}

impl BitOp {
    pub fn apply<T: PrimInt>(self, value: T, index: usize) -> Result<T> {
        match self {
            BitOp::Set => set_bit(value, index),
            BitOp::Clear => clear_bit(value, index),
            BitOp::Toggle => toggle_bit(value, index),
        }
    }
}

/// An integer treated as an indexed sequence of bits.
///
/// Treats least significant bit as index 0. Any index at or past the width
/// of `T` is rejected with [`Error::BitIndexOutOfRange`] and the stored value
/// is left as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitField<T>(T);

impl<T: PrimInt> BitField<T> {
    pub fn new() -> Self {
        Self(T::zero())
    }

    pub fn value(&self) -> T {
        self.0
    }

    pub fn width(&self) -> usize {
        width::<T>()
    }

    pub fn set_bit(&mut self, index: usize) -> Result<()> {
        self.apply(BitOp::Set, index)
    }

    pub fn clear_bit(&mut self, index: usize) -> Result<()> {
        self.apply(BitOp::Clear, index)
    }

    pub fn toggle_bit(&mut self, index: usize) -> Result<()> {
        self.apply(BitOp::Toggle, index)
    }

    pub fn test_bit(&self, index: usize) -> Result<bool> {
        test_bit(self.0, index)
    }

    pub fn apply(&mut self, op: BitOp, index: usize) -> Result<()> {
        self.0 = op.apply(self.0, index)?;
        trace!("{} bit {}", op.as_ref(), index);
        Ok(())
    }
}

impl<T> From<T> for BitField<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: fmt::Display> fmt::Display for BitField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: fmt::Binary> fmt::Binary for BitField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
