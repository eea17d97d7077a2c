//! Tonic spiking of a single Izhikevich cell.

use hivp::prelude::*;

fn main() {
    let cell = Izhikevich::builder().build();
    let settings = Settings::builder().nsteps(20_000).build();

    match simulate(&cell, &[-30.0, 0.0], &settings) {
        Ok(sol) => {
            println!("Final status: {:?}", sol.status);
            println!("Number of samples: {}", sol.len());
            println!("Number of function evaluations: {}", sol.nfev);
            println!("Number of resets applied: {}", sol.nreset);
            println!("Number of spikes localized: {}", sol.nevent);

            for (t, y) in sol.iter().step_by(1_000) {
                println!("t = {:>8.4}, v = {:>9.4}, u = {:>9.4}", t, y[0], y[1]);
            }
            if let Some((t, y)) = sol.last() {
                println!("Final state: t = {:.4}, y = {:?}", t, y);
            }
        }
        Err(err) => eprintln!("Integration failed: {}", err),
    }
}
