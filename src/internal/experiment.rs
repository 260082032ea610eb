#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use std::io::{self, BufRead, Write};

use plotters::prelude::*;
use probemap::prime;
use probemap::stats::{ExperimentReport, ProbeExperiment};

// The standard experiment: 100 names per trial, tables sized for 1.5 probes
// per unsuccessful search, secondary prime 19.
const STANDARD_NAMES: usize = 100;
const STANDARD_MISS_COST: f64 = 1.5;
const STANDARD_PRIME: usize = 19;
const TRIALS: usize = 1_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("*** Linear Probing vs. Double Hashing Experiment ***");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_menu();
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        match line?.trim() {
            "1" => run_standard_experiment()?,
            "2" => sweep_secondary_primes()?,
            "3" => plot_probe_distribution()?,
            "4" => print_description(),
            "0" => break,
            other => println!("'{other}' is not a valid option."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("Choose from the following options:");
    println!("1. Run the standard experiment at three search sizes.");
    println!("2. Sweep secondary primes for the double-hashing table.");
    println!("3. Plot per-trial probe totals (writes probe_distribution.png).");
    println!("4. Program description.");
    println!("0. Quit");
    print!("Choose an option 0-4: ");
}

fn run_standard_experiment() -> Result<(), Box<dyn std::error::Error>> {
    println!("********* Standard Experiment *********");
    let mut experiment = ProbeExperiment::new(STANDARD_NAMES, STANDARD_MISS_COST, STANDARD_PRIME)?;
    for searches in [100, 1_000, 10_000] {
        let report = experiment.run(TRIALS, STANDARD_NAMES, searches)?;
        print_report(&report);
    }
    println!("********* End Standard Experiment *********");
    Ok(())
}

fn print_report(report: &ExperimentReport) {
    let searches = report.searches as f64;
    println!();
    println!(
        "{} trials, {} names added and {} unsuccessful searches per trial:",
        report.trials, report.names_added, report.searches
    );
    println!(
        "  Linear probing:  table {} slots, load factor {:.4}",
        report.linear.table_len, report.linear.load_factor
    );
    println!(
        "  Double hashing:  table {} slots, load factor {:.4}",
        report.double_hash.table_len, report.double_hash.load_factor
    );
    println!(
        "  Linear probing:  mean {:.3} probes ({:.3} per search), std dev {:.3} ({:.3} per search)",
        report.linear.mean,
        report.linear.mean / searches,
        report.linear.std_dev,
        report.linear.std_dev / searches
    );
    println!(
        "  Double hashing:  mean {:.3} probes ({:.3} per search), std dev {:.3} ({:.3} per search)",
        report.double_hash.mean,
        report.double_hash.mean / searches,
        report.double_hash.std_dev,
        report.double_hash.std_dev / searches
    );
}

// Re-runs a smaller experiment for every prime from 5 to 293, so any
// secondary prime that interacts badly with the 307-slot table shows up as
// a spike in the per-search average.
fn sweep_secondary_primes() -> Result<(), Box<dyn std::error::Error>> {
    println!("********* Secondary Prime Sweep *********");
    println!("Tables sized for 1.485 probes per unsuccessful search (307 slots).");
    println!();

    let mut secondary_prime = 5;
    while secondary_prime <= 293 {
        let mut experiment = ProbeExperiment::new(STANDARD_NAMES, 1.485, secondary_prime)?;
        let report = experiment.run(TRIALS, STANDARD_NAMES, 100)?;
        println!(
            "Prime {:>3}: double hashing averaged {:.3} probes per search",
            secondary_prime,
            report.double_hash.mean / report.searches as f64
        );
        secondary_prime = prime::next_prime(secondary_prime + 1);
    }

    println!();
    println!("********* End Secondary Prime Sweep *********");
    Ok(())
}

fn plot_probe_distribution() -> Result<(), Box<dyn std::error::Error>> {
    let mut experiment = ProbeExperiment::new(STANDARD_NAMES, STANDARD_MISS_COST, STANDARD_PRIME)?;
    let report = experiment.run(TRIALS, STANDARD_NAMES, 1_000)?;

    let mut linear_sorted = report.linear.samples.clone();
    let mut double_sorted = report.double_hash.samples.clone();
    linear_sorted.sort_unstable();
    double_sorted.sort_unstable();

    let low = linear_sorted
        .iter()
        .chain(double_sorted.iter())
        .min()
        .copied()
        .unwrap_or(0) as f64;
    let high = linear_sorted
        .iter()
        .chain(double_sorted.iter())
        .max()
        .copied()
        .unwrap_or(0) as f64;

    let root = BitMapBackend::new("probe_distribution.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Probe totals per trial (1,000 unsuccessful searches)",
            ("sans-serif", 35),
        )
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..report.trials, (low * 0.95)..(high * 1.05))?;

    chart
        .configure_mesh()
        .x_desc("Trial (sorted by probe total)")
        .y_desc("Probes per trial")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    let linear_style = ShapeStyle::from(&RGBColor(220, 50, 50)).stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            linear_sorted.iter().enumerate().map(|(i, &probes)| (i, probes as f64)),
            linear_style,
        ))?
        .label("Linear probing")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], linear_style));

    let double_style = ShapeStyle::from(&RGBColor(50, 90, 220)).stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            double_sorted.iter().enumerate().map(|(i, &probes)| (i, probes as f64)),
            double_style,
        ))?
        .label("Double hashing")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], double_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    println!("Wrote probe_distribution.png");
    Ok(())
}

fn print_description() {
    println!(
        "Runs randomized unsuccessful-search experiments against two \
         open-addressing dictionaries, one resolving collisions with linear \
         probing and one with double hashing, and reports the probe counts \
         each variant accumulated."
    );
}
