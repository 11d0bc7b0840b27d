//! How `add_common` chooses the unit of a mixed-unit sum.
//!
//! Run with: cargo run --example common_unit

use dimty::{Calories, Centimeters, Joules, Kilometers, Meters, Milliseconds, Minutes, UnitMarker};

fn main() {
    // Per base quantity the finer unit wins.
    let a = Kilometers::new(1.2).add_common(Centimeters::new(35.0));
    println!("1.2 km + 35 cm = {a}");

    let b = Minutes::new(1.0).add_common(Milliseconds::new(250.0));
    println!("1 min + 250 ms = {b}");

    // A unit with a real factor never replaces an exact one.
    let c = Calories::new(1.0).add_common(Joules::new(1.0));
    println!("1 cal + 1 J = {c:.3}");

    // Both operands are the same unit: nothing changes.
    let d = Meters::new(1.0).add_common(Meters::new(2.0));
    println!("1 m + 2 m = {d}");

    println!(
        "common unit of km and cm is real: {}",
        <dimty::Common<dimty::Kilometer, dimty::Centimeter>>::UNIT.is_real()
    );
}
