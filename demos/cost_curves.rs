//! Cost Curves Example
//!
//! This example builds two piecewise-linear production cost curves and
//! combines them:
//!
//! total(q)    = a(q) + b(q)
//! cheapest(q) = min(a(q), b(q))
//! taxed(q)    = tax(total(q))

use pwlinear::prelude::*;

fn main() {
    println!("=== Piecewise-Linear Cost Curves ===\n");

    // Plant A: cheap up to 10 units, then overtime.
    let a = PiecewiseLinearFunction::new(vec![0.0_f64, 10.0, 20.0], vec![5.0, 25.0, 65.0], 2.0, 6.0)
        .expect("valid cost curve");
    // Plant B: higher fixed cost, flat marginal cost.
    let b = PiecewiseLinearFunction::new(vec![0.0_f64, 20.0], vec![15.0, 75.0], 3.0, 3.0)
        .expect("valid cost curve");

    println!("Plant A: {} breakpoints, {:?}", a.len(), a.curvature());
    println!("Plant B: {} breakpoints, {:?}\n", b.len(), b.curvature());

    let total = &a + &b;
    let cheapest = a.min(&b);

    // Progressive tax on total cost: 10% up to 50, 30% above.
    let tax = PiecewiseLinearFunction::new(vec![50.0_f64], vec![55.0], 1.1, 1.3)
        .expect("valid tax schedule");
    let taxed = tax.compose(&total);

    println!("{:>6} {:>10} {:>10} {:>10} {:>10}", "q", "A", "B", "min", "taxed");
    for q in [0.0, 5.0, 10.0, 15.0, 20.0, 25.0] {
        println!(
            "{:>6.1} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            q,
            a.evaluate(q),
            b.evaluate(q),
            cheapest.evaluate(q),
            taxed.evaluate(q)
        );
    }

    println!("\nCheapest-plant breakpoints:");
    for (q, c) in cheapest.breakpoints() {
        println!("  q = {:>7.3}  cost = {:>8.3}", q, c);
    }
    println!("  cheapest is convex: {}", cheapest.is_convex());

    println!("\nTaxed total cost breakpoints:");
    for (q, c) in taxed.breakpoints() {
        println!("  q = {:>7.3}  cost = {:>8.3}", q, c);
    }
}
