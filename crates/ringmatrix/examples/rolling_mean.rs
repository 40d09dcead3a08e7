//! Rolling mean over a stream of two-column rows.
//!
//! Pushes a noisy sine and cosine series through a 20-row window and prints
//! the windowed mean and standard deviation of each column every ten steps.

use ringmatrix::prelude::*;

fn main() -> Result<(), RingMatrixError> {
    let mut window = RingMatrix::new()
        .rows(20)
        .columns(2)
        .build_window::<f64>()?;

    println!(
        "{:>6} {:>12} {:>12} {:>12} {:>12}",
        "step", "mean_sin", "sd_sin", "mean_cos", "sd_cos"
    );
    println!("{}", "-".repeat(58));

    for step in 0..100 {
        let t = step as f64 * 0.1;
        let jitter = ((step * 7919) % 13) as f64 / 130.0 - 0.05;
        window.push_row(&[t.sin() + jitter, t.cos() - jitter])?;

        if step % 10 == 9 {
            let sd = |c| window.column_variance(c).map(f64::sqrt).unwrap_or(f64::NAN);
            println!(
                "{:>6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                step,
                window.column_mean(0).unwrap_or(f64::NAN),
                sd(0),
                window.column_mean(1).unwrap_or(f64::NAN),
                sd(1),
            );
        }
    }

    Ok(())
}
