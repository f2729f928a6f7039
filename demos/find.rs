//! One-shot search on a random map, printed as text.
//!
//! Run: cargo run --bin find

use gridstar_demos::{DemoConfig, LEGEND, render, setup};

fn main() {
    if let Err(e) = run(&DemoConfig::default()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut demo = setup(config)?;
    println!("Unpassable percentage: {:.6}.", demo.rule.blocked_pct);
    println!("{LEGEND}");
    demo.grid.find();
    print!("{}", render(&demo.grid));
    Ok(())
}
