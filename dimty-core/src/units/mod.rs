//! Predefined unit modules grouped by dimension.
//!
//! `dimty-core` ships its built-in units so that conversions and formatting work out of the box without downstream
//! crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`length`]: metre ladder, ångström, area and volume (litre).
//! - [`mass`]: kilogram ladder, tonne, atomic mass unit.
//! - [`time`]: second ladder plus minute, hour, day and year.
//! - [`current`], [`temperature`], [`amount`], [`luminous`]: SI ladders of the remaining base units.
//! - [`angle`]: radian and degree.
//! - [`velocity`]: velocity and acceleration quotients, speed of light.
//! - [`force`], [`energy`], [`power`]: derived SI units, calories and molar energies.
//! - [`unitless`]: plain ratios, percent and ppm.

pub mod amount;
pub mod angle;
pub mod current;
pub mod energy;
pub mod force;
pub mod length;
pub mod luminous;
pub mod mass;
pub mod power;
pub mod temperature;
pub mod time;
pub mod unitless;
pub mod velocity;
