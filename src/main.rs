use std::{
    error::Error,
    io::{self, BufWriter, Write},
};

use clap::{App, AppSettings, Arg, ArgMatches};

use se_solver::{
    batch::{self, Strategy},
    coefficients,
    config::{self, SolverConfig},
    error::ConfigError,
};

fn cli() -> App<'static, 'static> {
    App::new("se_solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves quadratic equations a*x^2 + b*x + c = 0, one per coefficient triple")
        // negative coefficients must not be mistaken for flags
        .setting(AppSettings::AllowLeadingHyphen)
        // non UTF-8 coefficients are reported like any other invalid token
        .setting(AppSettings::AllowInvalidUtf8)
        .arg(
            Arg::with_name("precision")
                .long("precision")
                .value_name("DIGITS")
                .takes_value(true)
                .validator(|v| config::parse_precision(&v).map(|_| ()).map_err(|e| e.to_string()))
                .help("Significant digits printed per number [default: 15]"),
        )
        .arg(
            Arg::with_name("jobs")
                .long("jobs")
                .value_name("N")
                .takes_value(true)
                .validator(|v| config::parse_jobs(&v).map(|_| ()).map_err(|e| e.to_string()))
                .help("Worker threads used to solve the batch [default: available cores - 2]"),
        )
        .arg(
            Arg::with_name("sequential")
                .long("sequential")
                .conflicts_with("jobs")
                .help("Solve every equation on the main thread"),
        )
        .arg(
            Arg::with_name("coefficients")
                .value_name("COEFFICIENT")
                .multiple(true)
                .help("Space separated triples a b c, eg: 1 -2 -3 2 4 2"),
        )
}

fn config_from(matches: &ArgMatches) -> Result<SolverConfig, ConfigError> {
    let mut config = SolverConfig::default();

    if let Some(precision) = matches.value_of("precision") {
        config.precision = config::parse_precision(precision)?;
    }

    if matches.is_present("sequential") {
        config.strategy = Strategy::Sequential;
    } else if let Some(jobs) = matches.value_of("jobs") {
        config.strategy = Strategy::Parallel {
            jobs: config::parse_jobs(jobs)?,
        };
    }

    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let matches = cli().get_matches();
    let config = config_from(&matches)?;

    let grouping = coefficients::group(
        matches
            .values_of_os("coefficients")
            .into_iter()
            .flatten()
            .map(|token| token.to_string_lossy()),
    );
    for diagnostic in &grouping.diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }

    let solutions = batch::solve_all(&grouping.triples, config.strategy).or_else(|err| {
        eprintln!("Warning: {}, solving sequentially", err);
        batch::solve_all(&grouping.triples, Strategy::Sequential)
    })?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for solution in &solutions {
        writeln!(out, "{:.*}", config.precision, solution)?;
    }
    out.flush()?;

    Ok(())
}
