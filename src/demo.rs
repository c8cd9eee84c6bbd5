use std::io::Write;

use log::debug;

use crate::bit_field::{BitField, BitOp};
use crate::debug_print;
use crate::ternary::ternary_demo;
use crate::Result;

pub const START_VALUE: u32 = 0b10001;

/// Values observed after each step of [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoReport {
    pub after_set: u32,
    pub after_clear: u32,
    pub after_toggle: u32,
    pub ternary: i32,
}

fn step(field: &mut BitField<u32>, op: BitOp, index: usize) -> Result<u32> {
    field.apply(op, index)?;
    debug_print!("{} bit {} -> {} ({:#b})", op.as_ref(), index, field, field);
    Ok(field.value())
}

/// Runs the fixed set/clear/toggle sequence on [`START_VALUE`], then the
/// ternary demo.
///
/// Only the value after the set and the ternary result are written, back to
/// back, so a complete run writes `252`.
pub fn run<W: Write>(out: &mut W) -> Result<DemoReport> {
    let mut num = BitField::from(START_VALUE);
    debug!("starting from {} ({:#b})", num, num);

    let after_set = step(&mut num, BitOp::Set, 3)?;
    write!(out, "{}", num)?;

    let after_clear = step(&mut num, BitOp::Clear, 7)?;
    let after_toggle = step(&mut num, BitOp::Toggle, 15)?;

    let ternary = ternary_demo(out)?;

    Ok(DemoReport {
        after_set,
        after_clear,
        after_toggle,
        ternary,
    })
}
