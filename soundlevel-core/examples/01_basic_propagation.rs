//! Basic Propagation Example
//!
//! Computes the pressure level of a ground-mounted unit at a neighbour's
//! window and the distances at which the regional day and night limits are
//! met.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_propagation
//! ```

use soundlevel_core::{
    compute_pressure, generate_contours, AcousticParams, InputError, PropagationModel,
    ThresholdDefinition,
};

fn main() {
    println!("SoundLevel Basic Propagation Example");
    println!("====================================\n");

    let limits = [
        ThresholdDefinition::new(45.0, "Dag (45dB)"),
        ThresholdDefinition::new(35.0, "Nacht (35dB)"),
    ];

    // Raw input as it would come from a form; the last two are refused
    let inputs = [(60.0, 5.0), (75.0, 12.0), (60.0, 0.0), (f64::NAN, 3.0)];

    for (sound_power, distance) in inputs {
        let params = match AcousticParams::validated(sound_power, distance) {
            Ok(params) => params,
            Err(InputError::NonPositiveDistance { distance }) => {
                println!("Skipping distance {distance} m: must be > 0\n");
                continue;
            }
            Err(e) => {
                println!("Skipping input: {e}\n");
                continue;
            }
        };

        for model in [PropagationModel::Hemispherical, PropagationModel::Spherical] {
            let lp = compute_pressure(&params, model);
            println!(
                "Lw = {} dB at {} m ({:?}, -{} dB): Lp = {} dB",
                params.sound_power,
                params.distance,
                model,
                model.correction_db(),
                lp
            );

            for ring in generate_contours(params.sound_power, &limits, model) {
                println!("  {:<14} reached at {:>8.3} m", ring.caption(), ring.radius);
            }
        }
        println!();
    }
}
