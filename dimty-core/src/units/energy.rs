//! Energy units, including the thermochemical calorie and molar energies.
//!
//! The calorie is a real unit (`1 cal = 4.184 J`). Molar energies such as [`KcalPerMol`] are plain quotients, and
//! energy gradients such as [`KcalPerMolPerAngstrom`] nest further:
//!
//! ```rust
//! use dimty_core::energy::{Calories, Joule, KcalPerMolPerAngstrom, KcalsPerMol};
//! use dimty_core::length::{Angstrom, Angstroms};
//! use dimty_core::Quantity;
//!
//! assert!((Calories::new(1.0).to::<Joule>().value() - 4.184).abs() < 1e-12);
//!
//! let barrier = KcalsPerMol::new(12.0);
//! let gradient: Quantity<KcalPerMolPerAngstrom> = barrier / Angstroms::new(3.0);
//! assert!((gradient.value() - 4.0).abs() < 1e-12);
//! ```

use crate::amount::Mole;
use crate::force::Newton;
use crate::length::{Angstrom, Meter};
use crate::{Prod, Quantity, Quot, Rational};
use dimty_derive::UnitMarker;

/// Joules per thermochemical calorie.
pub const JOULES_PER_CALORIE: f64 = 4.184;

/// Joule (`N·m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "J", from = Prod<Newton, Meter>)]
pub struct Joule;
/// A quantity measured in joules.
pub type Joules = Quantity<Joule>;

/// Kilojoule (`1e3 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "kJ", from = Joule, global = Rational::KILO)]
pub struct Kilojoule;
/// A quantity measured in kilojoules.
pub type Kilojoules = Quantity<Kilojoule>;

/// Megajoule (`1e6 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "MJ", from = Joule, global = Rational::MEGA)]
pub struct Megajoule;
/// A quantity measured in megajoules.
pub type Megajoules = Quantity<Megajoule>;

/// Gigajoule (`1e9 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "GJ", from = Joule, global = Rational::GIGA)]
pub struct Gigajoule;
/// A quantity measured in gigajoules.
pub type Gigajoules = Quantity<Gigajoule>;

/// Thermochemical calorie (`4.184 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "cal", from = Joule, factor = JOULES_PER_CALORIE)]
pub struct Calorie;
/// A quantity measured in calories.
pub type Calories = Quantity<Calorie>;

/// Kilocalorie (`4184 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "kcal", from = Calorie, global = Rational::KILO)]
pub struct Kilocalorie;
/// Type alias shorthand for [`Kilocalorie`].
pub type Kcal = Kilocalorie;
/// A quantity measured in kilocalories.
pub type Kilocalories = Quantity<Kcal>;

crate::impl_unit_conversions!(Joule, Kilojoule, Megajoule, Gigajoule, Calorie, Kilocalorie);

// ─────────────────────────────────────────────────────────────────────────────
// Molar energies
// ─────────────────────────────────────────────────────────────────────────────

/// Kilocalorie per mole.
pub type KcalPerMol = Quot<Kilocalorie, Mole>;
/// A quantity measured in kilocalories per mole.
pub type KcalsPerMol = Quantity<KcalPerMol>;

/// Kilojoule per mole.
pub type KjPerMol = Quot<Kilojoule, Mole>;
/// A quantity measured in kilojoules per mole.
pub type KjsPerMol = Quantity<KjPerMol>;

/// Kilocalorie per mole per ångström.
pub type KcalPerMolPerAngstrom = Quot<KcalPerMol, Angstrom>;

crate::impl_unit_conversions!(KcalPerMol, KjPerMol);
