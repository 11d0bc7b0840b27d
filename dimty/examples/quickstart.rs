//! Minimal end-to-end example: convert lengths and compute a velocity (length / time).

use dimty::{Centimeter, Hours, KilometerPerHour, Kilometers, MeterPerSecond, Meters};

fn main() {
    let d = Kilometers::new(1.5);
    let cm = d.to::<Centimeter>();
    assert!((cm.value() - 150_000.0).abs() < 1e-6);
    println!("{d} = {cm}");

    let v = Kilometers::new(144.0) / Hours::new(2.0);
    let kmh = v.to::<KilometerPerHour>();
    let ms = v.to::<MeterPerSecond>();
    assert!((ms.value() - 20.0).abs() < 1e-9);
    println!("{kmh:.1} = {ms:.1}");

    let total = Meters::new(2.0).add_common(d);
    println!("2 m + {d} = {total}");
}
