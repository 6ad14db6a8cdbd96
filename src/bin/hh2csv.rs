//! hh2csv: fetch HH.ru vacancies and convert JSON to delimited text
//!
//! Usage:
//!   # Fetch one page of Rust vacancies
//!   hh2csv fetch --text rust --output rust.json
//!
//!   # Fetch specific pages, skipping any that fail
//!   hh2csv fetch --text rust --pages 0 1 2 --output rust.json
//!
//!   # Fetch everything the search returns
//!   hh2csv fetch --text rust --all-pages --output rust.json
//!
//!   # Convert with discovered columns
//!   hh2csv convert rust.json --all -o rust.csv
//!
//!   # Convert selected fields, semicolon-delimited
//!   hh2csv convert rust.json -f name salary.from -d ';' -o rust.csv

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hh2csv::fetch::{
    Currency, EmploymentForm, Experience, Label, Period, SearchField, SearchParams, VacancyClient,
    WorkFormat, WorkSchedule, WorkingHours,
};
use hh2csv::tabulate::{tabulate, FieldSelection, TableWriter, TabulateConfig};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "hh2csv")]
#[command(about = "Fetch HH.ru vacancies and convert JSON to delimited text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch vacancy listings from the HH.ru search API
    Fetch(FetchArgs),
    /// Convert a JSON document to delimited text
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
struct FetchArgs {
    /// Search text for vacancies
    #[arg(long)]
    text: Option<String>,

    /// Vacancy attributes to match the search text against
    #[arg(long = "search-fields", value_enum, num_args = 1..)]
    search_fields: Vec<SearchField>,

    /// Only show vacancies with a published salary
    #[arg(long)]
    only_with_salary: bool,

    /// Minimum salary amount (requires --currency)
    #[arg(long, requires = "currency")]
    salary: Option<u32>,

    /// Salary currency
    #[arg(long, value_enum)]
    currency: Option<Currency>,

    /// Required experience levels
    #[arg(long, value_enum, num_args = 1..)]
    experience: Vec<Experience>,

    /// Employment forms
    #[arg(long = "employment-form", value_enum, num_args = 1..)]
    employment_form: Vec<EmploymentForm>,

    /// Accept temporary work
    #[arg(long)]
    accept_temporary: bool,

    /// Special vacancy labels
    #[arg(long = "label", value_enum, num_args = 1..)]
    labels: Vec<Label>,

    /// Work schedules by days
    #[arg(long = "work-schedule", value_enum, num_args = 1..)]
    work_schedule: Vec<WorkSchedule>,

    /// Working hours per shift
    #[arg(long = "working-hours", value_enum, num_args = 1..)]
    working_hours: Vec<WorkingHours>,

    /// Work formats
    #[arg(long = "work-format", value_enum, num_args = 1..)]
    work_format: Vec<WorkFormat>,

    /// Vacancy freshness in days
    #[arg(long, value_enum)]
    period: Option<Period>,

    /// Specific page number to fetch (0-based)
    #[arg(long)]
    page: Option<u32>,

    /// Specific pages to fetch (0-based); failed pages are skipped
    #[arg(long, num_args = 1..)]
    pages: Vec<u32>,

    /// Vacancies per page
    #[arg(long = "per-page")]
    per_page: Option<u32>,

    /// Fetch every page the search reports
    #[arg(long = "all-pages")]
    all_pages: bool,

    /// Output JSON file name
    #[arg(long, default_value = "output.json")]
    output: String,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Input JSON file path
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file path
    #[arg(short, long, default_value = "output.csv")]
    output: String,

    /// Extract all fields discovered from the first record
    #[arg(short, long)]
    all: bool,

    /// Specific fields to extract (dot notation for nested values)
    #[arg(short, long, num_args = 1..)]
    fields: Vec<String>,

    /// Column delimiter character
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Keep nested structures as compact JSON instead of flattening
    #[arg(long = "no-flatten")]
    no_flatten: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Fetch(args) => run_fetch(args),
        Command::Convert(args) => run_convert(args),
    }
}

fn run_fetch(args: FetchArgs) -> Result<()> {
    let params = build_params(&args);
    print_params(&params);

    let client = VacancyClient::new();

    // --pages wins over --page wins over --all-pages; none of them means
    // a single request exactly as addressed.
    let pages_to_fetch: Option<Vec<u32>> = if !args.pages.is_empty() {
        Some(args.pages.clone())
    } else if let Some(page) = args.page {
        Some(vec![page])
    } else if args.all_pages {
        let total = client.total_pages(&params)?;
        println!("Fetching all {total} pages...");
        Some((0..total as u32).collect())
    } else {
        None
    };

    let body = match &pages_to_fetch {
        Some(pages) => {
            let merged = client.fetch_pages(&params, pages);
            println!(
                "Fetched {} vacancies from {} pages",
                merged.items.len(),
                pages.len()
            );
            serde_json::to_value(&merged)?
        }
        None => {
            let body = client.fetch_page(&params)?;
            let count = body.get("items").and_then(Value::as_array).map_or(0, Vec::len);
            println!("Fetched {count} vacancies");
            body
        }
    };

    let json = serde_json::to_string_pretty(&body)?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output))?;
    println!("Saved to {}", args.output);
    Ok(())
}

fn build_params(args: &FetchArgs) -> SearchParams {
    let mut params = SearchParams::default();
    params.text = args.text.clone();
    params.search_fields = args.search_fields.clone();
    params.only_with_salary = args.only_with_salary;
    params.salary = args.salary;
    params.currency = args.currency;
    params.experience = args.experience.clone();
    params.employment_form = args.employment_form.clone();
    params.accept_temporary = args.accept_temporary;
    params.labels = args.labels.clone();
    params.work_schedule = args.work_schedule.clone();
    params.working_hours = args.working_hours.clone();
    params.work_format = args.work_format.clone();
    params.period = args.period;
    if let Some(page) = args.page {
        params.page = page;
    }
    if let Some(per_page) = args.per_page {
        params.per_page = per_page;
    }
    params
}

fn print_params(params: &SearchParams) {
    println!("Current parameters:");
    for (key, value) in params.to_query() {
        println!("  {key}: {value}");
    }
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    // Reject a run with no field-selection mode before touching input.
    let selection = FieldSelection::from_flags(args.all, args.fields.clone())?;
    let config = TabulateConfig::new(selection, !args.no_flatten, args.delimiter)?;

    let doc = read_json(&args.input)?;
    let table = tabulate(&doc, &config)?;

    TableWriter::new(config.delimiter).write_file(&table, &args.output)?;
    println!("Extracted {} rows to {}", table.rows.len(), args.output);
    Ok(())
}

/// Parse an input document, trying SIMD parsing first and falling back
/// to serde_json for input simd-json rejects.
fn read_json(path: &str) -> Result<Value> {
    let content =
        std::fs::read(path).with_context(|| format!("Failed to read {path}"))?;

    // simd-json parses in place, so give it its own buffer.
    let mut simd_buffer = content.clone();
    match simd_json::serde::from_slice::<Value>(&mut simd_buffer) {
        Ok(doc) => Ok(doc),
        Err(_) => serde_json::from_slice(&content)
            .with_context(|| format!("Failed to parse JSON in {path}")),
    }
}
