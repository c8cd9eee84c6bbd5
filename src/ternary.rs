use std::io::Write;

use log::debug;

use crate::Result;

/// Inputs the demo feeds to [`select`] as `(a, b, c, d)`.
pub const DEFAULT_INPUTS: (i32, i32, i32, i32) = (2, 4, 8, 7);

/// Chained conditional: 1 if `a > b`, otherwise 2 if `c > d`, otherwise 5.
///
/// `c > d` is only looked at once `a > b` has failed.
pub fn select(a: i32, b: i32, c: i32, d: i32) -> i32 {
    if a > b {
        1
    } else if c > d {
        2
    } else {
        5
    }
}

/// Evaluates [`select`] over [`DEFAULT_INPUTS`] and writes the result with no separator.
pub fn ternary_demo<W: Write>(out: &mut W) -> Result<i32> {
    let (a, b, c, d) = DEFAULT_INPUTS;
    let f = select(a, b, c, d);
    debug!("select({}, {}, {}, {}) = {}", a, b, c, d, f);

    write!(out, "{}", f)?;
    Ok(f)
}
