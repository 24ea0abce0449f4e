//! Runs the GA with the fixed parameter set and prints the summary report.

use bitga::{Chromosome, GaConfig, Polynomial, Report, runner::Experiment};
use log::info;

fn main() {
    env_logger::init();

    let config = GaConfig::default();

    let mut experiment =
        Experiment::<Chromosome, _>::new(config.clone(), Polynomial).unwrap_or_else(|e| {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        });

    let results = experiment.run();

    if let Some(best) = results.best() {
        let (x1, x2) = best.fittest.decode(&experiment.encoding());
        info!(
            "Best run {}: fitness {} at x1={}, x2={}",
            best.run, best.fitness, x1, x2
        );
    }

    let Some(summary) = results.summary() else {
        eprintln!("No runs were recorded");
        std::process::exit(1);
    };

    print!("{}", Report::new(config, summary));
}
