//! Example demonstrating the serde_with_unit helper module.
//!
//! `#[serde(with = "dimty::serde_with_unit")]` writes `{ "value": .., "unit": ".." }` for a single field and checks
//! the unit again when reading it back. Fields without the attribute serialize as the bare number.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use dimty::{Kilograms, Kilometers, Seconds};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct Delivery {
        id: String,

        #[serde(with = "dimty::serde_with_unit")]
        distance: Kilometers,

        #[serde(with = "dimty::serde_with_unit")]
        payload: Kilograms,

        elapsed: Seconds,
    }

    let delivery = Delivery {
        id: "D-42".to_string(),
        distance: Kilometers::new(12.5),
        payload: Kilograms::new(3.2),
        elapsed: Seconds::new(1800.0),
    };

    let json = serde_json::to_string_pretty(&delivery).unwrap();
    println!("Serialized:\n{}\n", json);

    let restored: Delivery = serde_json::from_str(&json).unwrap();
    println!("Deserialized:");
    println!("  distance: {}", restored.distance);
    println!("  payload:  {}", restored.payload);
    println!("  elapsed:  {}\n", restored.elapsed);

    let wrong = r#"{ "id": "D-43", "distance": { "value": 12.5, "unit": "m" },
                     "payload": { "value": 3.2, "unit": "kg" }, "elapsed": 60.0 }"#;
    match serde_json::from_str::<Delivery>(wrong) {
        Ok(_) => println!("unexpectedly accepted a metre distance"),
        Err(err) => println!("Rejected: {}", err),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
