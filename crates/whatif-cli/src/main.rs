use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use whatif_cli::args::{add_individual_from_spec, add_structural_from_spec};
use whatif_cli::render::{self, add_outcome_line};
use whatif_cli::{init_logging, repl, OutputFormat, Plan, WhatIfConfig};
use whatif_core::query::{individual_results_with, structural_results_with};
use whatif_core::{Dataset, EmployeeFilter, ResultTable, Session, UnitFilter};

fn cli() -> Command {
    Command::new("whatif")
        .version(whatif_cli::VERSION)
        .about("What-if scenarios for employee attrition risk")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("CSV dataset (overrides data_path in the config)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter when RUST_LOG is unset, e.g. info or debug"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
        .subcommand(Command::new("units").about("List units with their climate scores"))
        .subcommand(
            Command::new("employees")
                .about("List employees")
                .arg(
                    Arg::new("unit")
                        .long("unit")
                        .default_value("all")
                        .help("Unit name or 'all'"),
                ),
        )
        .subcommand(
            Command::new("individual")
                .about("Salary / promotion scenarios")
                .arg(
                    Arg::new("unit")
                        .long("unit")
                        .default_value("all")
                        .help("Unit name or 'all'"),
                )
                .arg(
                    Arg::new("employee")
                        .long("employee")
                        .default_value("all")
                        .help("Employee name or 'all'"),
                )
                .arg(
                    Arg::new("scenario")
                        .long("scenario")
                        .short('s')
                        .action(ArgAction::Append)
                        .required(true)
                        .help("Scenario as promotion=yes,salary=10 (repeatable, at most 5)"),
                ),
        )
        .subcommand(
            Command::new("structural")
                .about("Climate-score scenarios")
                .arg(
                    Arg::new("unit")
                        .long("unit")
                        .default_value("all")
                        .help("Unit name or 'all'"),
                )
                .arg(
                    Arg::new("scenario")
                        .long("scenario")
                        .short('s')
                        .action(ArgAction::Append)
                        .required(true)
                        .help("Scenario as leadership=4,compensation=3.5,training=3 (repeatable, at most 5)"),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Run a TOML plan file")
                .arg(
                    Arg::new("plan")
                        .long("plan")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Plan file"),
                ),
        )
        .subcommand(Command::new("interactive").about("Start an interactive session on stdin"))
}

fn load_config(matches: &ArgMatches) -> Result<WhatIfConfig> {
    let config = WhatIfConfig::load_or_default(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
    )?
    .with_data_path(matches.get_one::<PathBuf>("data").cloned())
    .with_log_level(matches.get_one::<String>("log-level").cloned())
    .with_json(matches.get_flag("json"));
    Ok(config)
}

fn load_dataset(config: &WhatIfConfig) -> Result<Dataset> {
    let path = config.require_data_path()?;
    whatif_ingest::load_path(path)
        .with_context(|| format!("failed to load dataset {}", path.display()))
}

fn arg_str<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map_or("all", String::as_str)
}

fn select(session: &mut Session<'_>, args: &ArgMatches, with_employee: bool) -> Result<()> {
    let unit: UnitFilter = arg_str(args, "unit").parse()?;
    session.select_unit(unit)?;
    if with_employee {
        let employee: EmployeeFilter = arg_str(args, "employee").parse()?;
        session.select_employee(employee)?;
    }
    Ok(())
}

fn emit(table: Option<ResultTable>, config: &WhatIfConfig) -> Result<()> {
    match table {
        None => println!("No results: nothing selected or no scenarios."),
        Some(table) => match config.output {
            OutputFormat::Text => print!("{}", render::render_table(&table)),
            OutputFormat::Json => println!("{}", render::render_json(&table)?),
        },
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    init_logging(&config.log_level);

    let dataset = load_dataset(&config)?;
    let mut session = Session::new(&dataset).with_individual_default(config.defaults);

    match matches.subcommand() {
        Some(("units", _)) => print!("{}", render::render_units(&dataset)),
        Some(("employees", args)) => {
            select(&mut session, args, false)?;
            print!("{}", render::render_employees(&session));
        }
        Some(("individual", args)) => {
            select(&mut session, args, true)?;
            for spec in args.get_many::<String>("scenario").into_iter().flatten() {
                let outcome = add_individual_from_spec(&mut session, spec)?;
                if outcome.is_rejected() {
                    eprintln!("{}", add_outcome_line("individual", outcome));
                }
            }
            emit(individual_results_with(&session, &config.severity), &config)?;
        }
        Some(("structural", args)) => {
            select(&mut session, args, false)?;
            for spec in args.get_many::<String>("scenario").into_iter().flatten() {
                let outcome = add_structural_from_spec(&mut session, spec)?;
                if outcome.is_rejected() {
                    eprintln!("{}", add_outcome_line("structural", outcome));
                }
            }
            emit(structural_results_with(&session, &config.severity), &config)?;
        }
        Some(("run", args)) => {
            let path = args
                .get_one::<PathBuf>("plan")
                .context("missing --plan")?;
            let plan = Plan::load(path)?;
            let report = plan.apply(&mut session)?;
            if report.has_rejections() {
                eprintln!(
                    "{} ({} individual, {} structural entries skipped)",
                    render::capacity_warning(),
                    report.individual_rejected,
                    report.structural_rejected
                );
            }
            if report.individual_added > 0 {
                emit(individual_results_with(&session, &config.severity), &config)?;
            }
            if report.structural_added > 0 {
                emit(structural_results_with(&session, &config.severity), &config)?;
            }
        }
        Some(("interactive", _)) => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            repl::run(&mut session, &config, stdin.lock(), stdout.lock())?;
        }
        _ => {}
    }
    Ok(())
}

fn main() {
    let matches = cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
