//! Parse measurements from the command line and show them in every unit.
//!
//! Run with: RUST_LOG=pagesizes=debug cargo run --example measure --features tracing -- "12.5 mm" A4

use pagesizes::{LengthUnit, parse_measurement, sizes};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        args = vec!["12.34 mm".into(), "5\"".into(), "10μm".into(), "A4".into()];
    }

    for arg in &args {
        if let Some(paper) = sizes::lookup(arg) {
            let size = paper.to_pt();
            println!("{}: {}", paper.name, paper.size());
            println!("  {}", size);
            println!("  {}", size.inch());
            continue;
        }

        match parse_measurement(arg) {
            Ok(unit) => {
                println!("{arg}: {unit}");
                for target in LengthUnit::ALL {
                    println!("  {:>12.4} {}", unit.convert(target).value(), target);
                }
            }
            Err(e) => eprintln!("{:?}", miette::Report::new(e)),
        }
    }
}
