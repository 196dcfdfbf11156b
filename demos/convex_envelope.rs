//! Convex Envelope Example
//!
//! This example computes the convex meet of two convex penalties: the
//! greatest convex function lying below both of them.
//!
//! h = conv(min(f, g))

use pwlinear::prelude::*;

fn main() {
    println!("=== Convex Meet ===\n");

    // Two absolute-value penalties centred at different targets.
    let f = PiecewiseLinearFunction::new(vec![0.0_f64], vec![0.0], -1.0, 1.0).expect("valid penalty");
    let g = PiecewiseLinearFunction::new(vec![4.0_f64], vec![1.0], -1.0, 1.0).expect("valid penalty");

    let pointwise = f.min(&g);
    let meet = f.convex_meet(&g).expect("meet is bounded below");

    println!("min(f, g) is convex: {}", pointwise.is_convex());
    println!("meet is convex:      {}\n", meet.is_convex());

    println!("{:>6} {:>10} {:>10} {:>10}", "t", "f", "g", "meet");
    for i in -2..=6 {
        let t = i as f64;
        println!(
            "{:>6.1} {:>10.3} {:>10.3} {:>10.3}",
            t,
            f.evaluate(t),
            g.evaluate(t),
            meet.evaluate(t)
        );
    }

    println!("\nMeet breakpoints:");
    for (x, y) in meet.breakpoints() {
        println!("  ({:.3}, {:.3})", x, y);
    }
    println!(
        "  left slope = {:.3}, right slope = {:.3}",
        meet.left_slope(),
        meet.right_slope()
    );

    // A steeper operand makes the envelope unbounded below.
    let steep = PiecewiseLinearFunction::affine(2.0, 0.0);
    match f.convex_meet(&steep) {
        Ok(h) => println!("\nUnexpected meet: {:?}", h),
        Err(e) => println!("\nMeet with a slope-2 line: {}", e),
    }
}
