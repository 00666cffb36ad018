use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use loancalc::chart::render_bars;
use loancalc::export::{export_to_path, write_schedule, ExportFormat};
use loancalc::inr::parse_amount;
use loancalc::prompt::{parse_term, prompt_loan_input};
use loancalc::report::{render_table, RenderOptions};
use loancalc::theme::{apply_color_choice, Theme};
use loancalc::{LoanInput, Result};
use log::{debug, LevelFilter};
use simple_logger::SimpleLogger;
use std::io;
use std::path::PathBuf;
use std::process;

/// Equal-principal loan schedule with Indian digit grouping
#[derive(Parser, Debug)]
#[command(
    name = "loancalc",
    version,
    about = "Equal-principal loan amortization schedule",
    long_about = "Computes an equal-principal amortization schedule (constant principal, \
                  interest on the declining balance) and prints it with Indian digit grouping. \
                  Missing loan arguments are asked for interactively."
)]
struct Cli {
    /// Loan amount; grouping commas are allowed
    #[arg(long, allow_hyphen_values = true)]
    principal: Option<String>,

    /// Term in months
    #[arg(long, allow_hyphen_values = true)]
    term: Option<String>,

    /// Annual interest rate in percent
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,

    /// Date of the first installment (YYYY-MM-DD); adds a due date column
    #[arg(long)]
    first_payment: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// What to print on stdout
    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Also write the unformatted schedule to this file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Format of the exported file; guessed from the extension if omitted
    #[arg(long, value_enum, requires = "export")]
    export_format: Option<ExportFormat>,

    /// Print a bar chart of principal and interest per installment
    #[arg(long)]
    chart: bool,

    #[arg(long, default_value_t = 50)]
    chart_width: usize,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("{}: logger unavailable: {}", "warning".yellow().bold(), e);
    }

    apply_color_choice(atty::is(atty::Stream::Stdout));

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = loan_input(cli)?;
    let schedule = input.schedule()?;
    debug!("{}", schedule.totals());

    match cli.output {
        OutputFormat::Table => {
            let options = RenderOptions {
                theme: cli.theme,
                first_payment: cli.first_payment,
            };
            println!("{}", render_table(&schedule, &options));
        }
        OutputFormat::Csv => write_schedule(&schedule, io::stdout().lock(), ExportFormat::Csv)?,
        OutputFormat::Json => write_schedule(&schedule, io::stdout().lock(), ExportFormat::Json)?,
    }

    if cli.chart {
        println!("{}", render_bars(&schedule, cli.chart_width, &cli.theme.palette()));
    }

    if let Some(path) = &cli.export {
        let format = cli
            .export_format
            .unwrap_or_else(|| ExportFormat::from_path(path));
        export_to_path(&schedule, path, format)?;
        eprintln!("Data exported to {}", path.display());
    }

    Ok(())
}

// all three on the command line, or prompt for all three
fn loan_input(cli: &Cli) -> Result<LoanInput> {
    match (&cli.principal, &cli.term, &cli.rate) {
        (Some(principal), Some(term), Some(rate)) => LoanInput::new(
            parse_amount("loan amount", principal)?,
            parse_term(term)?,
            parse_amount("interest rate", rate)?,
        ),
        _ => prompt_loan_input(&mut io::stdin().lock(), &mut io::stdout().lock()),
    }
}

// verifies that types can implement the gated traits below
#[allow(dead_code)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<loancalc::Schedule>();
    is_normal::<loancalc::LoanInput>();
}

#[test]
fn cli_arguments() {
    use clap::CommandFactory;
    Cli::command().debug_assert();

    let cli = Cli::try_parse_from([
        "loancalc", "--principal", "1,20,000", "--term", "12", "--rate", "10", "--theme", "dark",
    ])
    .unwrap();
    let input = loan_input(&cli).unwrap();
    assert_eq!(input.term_months(), 12);
    assert_eq!(cli.theme, Theme::Dark);

    let cli = Cli::try_parse_from([
        "loancalc", "--principal", "-5", "--term", "12", "--rate", "10",
    ])
    .unwrap();
    assert!(matches!(
        loan_input(&cli),
        Err(loancalc::LoanError::InvalidPrincipal(_))
    ));

    let cli = Cli::try_parse_from([
        "loancalc",
        "--principal",
        "100000000000000000000",
        "--term",
        "12",
        "--rate",
        "100000000000000000000",
    ])
    .unwrap();
    assert!(matches!(
        loan_input(&cli).unwrap().schedule(),
        Err(loancalc::LoanError::Overflow(_))
    ));

    let cli = Cli::try_parse_from([
        "loancalc", "--principal", "1000", "--term", "4294967295", "--rate", "5",
    ])
    .unwrap();
    assert!(matches!(
        loan_input(&cli),
        Err(loancalc::LoanError::InvalidTerm(4294967295))
    ));
}
