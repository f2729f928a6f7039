//! Step-by-step search on a random map, redrawn in the terminal after every
//! expansion.
//!
//! Run: cargo run --bin animate

use std::io::{self, Write};
use std::thread;

use crossterm::{cursor, execute, terminal};
use gridstar_demos::{DemoConfig, LEGEND, render, setup};

fn main() {
    if let Err(e) = run(&DemoConfig::default()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut demo = setup(config)?;
    let mut stdout = io::stdout();

    demo.grid.begin();
    loop {
        let done = demo.grid.step().is_done();
        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        writeln!(stdout, "Unpassable percentage: {:.6}.", demo.rule.blocked_pct)?;
        writeln!(stdout, "{LEGEND}")?;
        write!(stdout, "{}", render(&demo.grid))?;
        stdout.flush()?;
        if done {
            break;
        }
        thread::sleep(config.frame_delay);
    }
    Ok(())
}
