// File: crates/simplify-examples/src/bin/spike.rs
// Summary: Minimal example that simplifies a flat signal with one spike.

use simplify_core::{simplify, Point, SimplifyOptions};

fn main() {
    // Flat baseline with a single spike at x = 10
    let data: Vec<Point> = (0..=20)
        .map(|i| Point::new(i as f64, if i == 10 { 10.0 } else { 0.0 }))
        .collect();

    for opts in [SimplifyOptions::precise(8.0), SimplifyOptions::precise(0.5), SimplifyOptions::fast(8.0)] {
        match simplify(&data, &opts) {
            Ok(out) => {
                let xy: Vec<(f64, f64)> = out.iter().map(|p| p.to_xy()).collect();
                println!("tolerance {} ({}): {} -> {} points {:?}", opts.tolerance, opts.quality, data.len(), out.len(), xy);
            }
            Err(e) => eprintln!("simplify failed: {e}"),
        }
    }
}
