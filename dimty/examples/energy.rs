//! Derived units: force, energy and power built from the base units, plus molar energies.
//!
//! Run with: cargo run --example energy

use dimty::{
    quantity_cast, Joule, Joules, Kcal, KcalsPerMol, Kilocalories, Kilograms, KjPerMol, MetersPerSecondSquared,
    Meters, Newton, Seconds, Watt,
};

fn main() {
    // F = m·a
    let mass = Kilograms::new(80.0);
    let accel = MetersPerSecondSquared::new(9.81);
    let weight = mass * accel;
    println!("weight:   {:.1} ({:.1})", weight, weight.to::<Newton>());

    // W = F·d
    let climb = Meters::new(3.0);
    let work: Joules = (weight * climb).to();
    println!("work:     {:.1}", work);

    // P = W/t
    let power = work / Seconds::new(4.0);
    println!("power:    {:.1}", power.to::<Watt>());

    // Food energy
    let snack = Kilocalories::new(250.0);
    println!("snack:    {} = {:.0}", snack, snack.to::<Joule>());
    println!("flights:  {:.0}", quantity_cast(snack, work));
    println!("per step: {:.3}", work.to::<Kcal>());

    // Molar energies carry the calorie factor through the quotient.
    let barrier = KcalsPerMol::new(20.0);
    println!("barrier:  {} = {:.2} kJ/mol", barrier, barrier.to::<KjPerMol>().value());
}
