//! Unit names.
//!
//! [`Unit`] implements [`Display`](fmt::Display) by reading, for every base quantity, its exponent and the prefix
//! implied by the slot ratio (the `|e|`-th root of the ratio), then looking both up in fixed tables:
//!
//! | slot        | symbol | notes                                              |
//! |-------------|--------|----------------------------------------------------|
//! | length      | `m`    | `Å` for `10^-10` at power 1, `l` for `dm^3`         |
//! | mass        | `g`    | prefix shifted by `10^3` because `kg` is the base  |
//! | time        | `s`    | `min`, `h`, `d`, `yr` for 60, 3600, 86400, 31536000 |
//! | current     | `A`    |                                                    |
//! | temperature | `K`    |                                                    |
//! | amount      | `mol`  |                                                    |
//! | luminous    | `cd`   |                                                    |
//! | angle       | `rad`  |                                                    |
//! | currency    | `cur`  |                                                    |
//! | information | `bit`  |                                                    |
//! | count       | `ct`   |                                                    |
//!
//! Pieces are concatenated without separator and carry `^e` when `e != 1`, so metres per second print as `ms^-1`.
//! A slot ratio without a prefix symbol is printed in brackets (`[1/3]m`). A non-unity global scale or real factor
//! is printed in front, joined with `×`.
//!
//! ```rust
//! use dimty_core::{Dimension, Rational, Unit};
//!
//! let km = Unit::base(Dimension::LENGTH, Rational::KILO);
//! let h = Unit::base(Dimension::TIME, Rational::integer(3600));
//! assert_eq!(km.div(&h).to_string(), "kmh^-1");
//! ```

use crate::dimension::{BaseDim, ExtraDim, SiDim};
use crate::rational::Rational;
use crate::unit::Unit;
use core::fmt::{self, Write};

const PREFIXES: [(Rational, &str); 12] = [
    (Rational::FEMTO, "f"),
    (Rational::PICO, "p"),
    (Rational::NANO, "n"),
    (Rational::MICRO, "u"),
    (Rational::MILLI, "m"),
    (Rational::CENTI, "c"),
    (Rational::DECI, "d"),
    (Rational::ONE, ""),
    (Rational::KILO, "k"),
    (Rational::MEGA, "M"),
    (Rational::GIGA, "G"),
    (Rational::TERA, "T"),
];

const TIME_NAMES: [(i64, &str); 4] = [(60, "min"), (3_600, "h"), (86_400, "d"), (31_536_000, "yr")];

const ANGSTROM: Rational = Rational::new(1, 10_000_000_000);

/// SI prefix symbol for `ratio`, if it is one of the supported powers of ten.
pub fn prefix_symbol(ratio: Rational) -> Option<&'static str> {
    PREFIXES
        .iter()
        .find(|(r, _)| *r == ratio)
        .map(|(_, symbol)| *symbol)
}

/// Symbol of the coherent unit of a base quantity (`g` for mass).
pub const fn base_symbol(base: BaseDim) -> &'static str {
    match base {
        BaseDim::Si(SiDim::Length) => "m",
        BaseDim::Si(SiDim::Mass) => "g",
        BaseDim::Si(SiDim::Time) => "s",
        BaseDim::Si(SiDim::Current) => "A",
        BaseDim::Si(SiDim::Temperature) => "K",
        BaseDim::Si(SiDim::Amount) => "mol",
        BaseDim::Si(SiDim::Luminous) => "cd",
        BaseDim::Extra(ExtraDim::Angle) => "rad",
        BaseDim::Extra(ExtraDim::Currency) => "cur",
        BaseDim::Extra(ExtraDim::Information) => "bit",
        BaseDim::Extra(ExtraDim::Count) => "ct",
    }
}

/// Largest `r` with `r^n <= x`, returned only when the root is exact.
fn exact_root(x: u64, n: u32) -> Option<u64> {
    if n == 1 || x < 2 {
        return Some(x);
    }
    let (mut lo, mut hi) = (1u64, x);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match mid.checked_pow(n) {
            Some(p) if p == x => return Some(mid),
            Some(p) if p < x => lo = mid + 1,
            _ => hi = mid - 1,
        }
    }
    None
}

/// The per-unit prefix behind a slot ratio: `ratio^(1/exponent)`, when that root is rational.
///
/// ```rust
/// use dimty_core::format::slot_prefix;
/// use dimty_core::Rational;
///
/// // cm^-2 stores 10^4 in the length slot.
/// assert_eq!(slot_prefix(Rational::integer(10_000), -2), Some(Rational::CENTI));
/// assert_eq!(slot_prefix(Rational::integer(2), 2), None);
/// ```
pub fn slot_prefix(ratio: Rational, exponent: i32) -> Option<Rational> {
    if exponent == 0 || ratio.num() <= 0 {
        return None;
    }
    let ratio = if exponent < 0 { ratio.try_recip().ok()? } else { ratio };
    let n = exponent.unsigned_abs();
    let num = exact_root(ratio.num().unsigned_abs(), n)?;
    let den = exact_root(ratio.den().unsigned_abs(), n)?;
    Rational::try_new(i64::try_from(num).ok()?, i64::try_from(den).ok()?).ok()
}

fn write_exponent(f: &mut fmt::Formatter<'_>, exponent: i32) -> fmt::Result {
    if exponent != 1 {
        write!(f, "^{exponent}")?;
    }
    Ok(())
}

fn write_slot(f: &mut fmt::Formatter<'_>, base: BaseDim, exponent: i32, ratio: Rational) -> fmt::Result {
    let Some(prefix) = slot_prefix(ratio, exponent) else {
        write!(f, "[{ratio}]{}", base_symbol(base))?;
        return write_exponent(f, exponent);
    };

    match base {
        BaseDim::Si(SiDim::Time) => {
            if let Some((_, name)) = TIME_NAMES
                .iter()
                .find(|(secs, _)| prefix == Rational::integer(*secs))
            {
                f.write_str(name)?;
                return write_exponent(f, exponent);
            }
        }
        BaseDim::Si(SiDim::Length) => {
            // Named only at the plain power: `Å^-1` stays `[1/10000000000]m^-1`, `l^-1` stays `dm^-3`.
            if prefix == ANGSTROM && exponent == 1 {
                return f.write_str("Å");
            }
            if prefix == Rational::DECI && exponent == 3 {
                return f.write_str("l");
            }
        }
        _ => {}
    }

    let lookup = match base {
        BaseDim::Si(SiDim::Mass) => prefix.try_mul(Rational::KILO).ok(),
        _ => Some(prefix),
    };
    match lookup.and_then(prefix_symbol) {
        Some(symbol) => write!(f, "{symbol}{}", base_symbol(base))?,
        None => write!(f, "[{prefix}]{}", base_symbol(base))?,
    }
    write_exponent(f, exponent)
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = self.dim();
        let ratio = self.ratio();

        // Ratios parked in slots whose exponent cancelled out still scale the unit.
        let mut coefficient = Some(self.global());
        for base in BaseDim::ALL {
            if dim.exponent(base) == 0 {
                coefficient = coefficient.and_then(|c| c.try_mul(ratio.get(base)).ok());
            }
        }

        let mut leading = false;
        if self.is_real() && self.factor() != 1.0 {
            write!(f, "{}", self.factor())?;
            leading = true;
        }
        match coefficient {
            Some(c) if c.is_one() => {}
            Some(c) => {
                if leading {
                    f.write_str("×")?;
                }
                write!(f, "{c}")?;
                leading = true;
            }
            None => {
                if leading {
                    f.write_str("×")?;
                }
                write!(f, "{}", self.scale() / self.factor())?;
                leading = true;
            }
        }

        if dim.is_dimensionless() {
            return Ok(());
        }
        if leading {
            f.write_str("×")?;
        }
        for base in BaseDim::ALL {
            let e = dim.exponent(base);
            if e != 0 {
                write_slot(f, base, e, ratio.get(base))?;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Allocation-free comparisons of formatted output
// ─────────────────────────────────────────────────────────────────────────────

struct Matcher<'a> {
    rest: &'a str,
    ok: bool,
}

impl Write for Matcher<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.rest.strip_prefix(s) {
            Some(rest) if self.ok => self.rest = rest,
            _ => self.ok = false,
        }
        Ok(())
    }
}

/// `true` when `value` formats exactly as `expected`.
pub(crate) fn renders_as(value: &impl fmt::Display, expected: &str) -> bool {
    let mut m = Matcher {
        rest: expected,
        ok: true,
    };
    write!(m, "{value}").is_ok() && m.ok && m.rest.is_empty()
}
