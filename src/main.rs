//! Prints the saved member details report as two tables.

use std::sync::Arc;

use gym_tracker::application::{LoadMemberDetailsHandler, LoadMemberDetailsQuery};
use gym_tracker::config::{AppConfig, LogFormat, LoggingConfig};
use gym_tracker::ports::MemberRow;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const REGULAR_HEADERS: [&str; 11] = [
    "ID", "Name", "Location", "Phone", "Email", "Gender", "DOB", "Start Date", "Plan", "Price",
    "Status",
];

const PREMIUM_HEADERS: [&str; 15] = [
    "ID",
    "Name",
    "Location",
    "Phone",
    "Email",
    "Gender",
    "DOB",
    "Start Date",
    "Trainer",
    "Charge",
    "Status",
    "Full Payment",
    "Paid",
    "Remaining",
    "Discount",
];

fn init_tracing(logging: &LoggingConfig) {
    let (json, pretty) = match logging.format {
        LogFormat::Json => (
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Pretty => (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        ),
    };

    tracing_subscriber::registry()
        .with(logging.env_filter())
        .with(json)
        .with(pretty)
        .init();
}

fn profile_cells(row: &MemberRow) -> Vec<String> {
    let p = &row.profile;
    vec![
        row.id.to_string(),
        p.name.clone(),
        p.location.clone(),
        p.phone.clone(),
        p.email.clone(),
        p.gender.clone(),
        p.date_of_birth.clone(),
        p.membership_start_date.clone(),
    ]
}

fn regular_cells(row: &MemberRow) -> Vec<String> {
    let mut cells = profile_cells(row);
    cells.extend([
        row.plan_or_trainer.clone(),
        row.price.to_string(),
        row.status_label().to_string(),
    ]);
    cells
}

fn premium_cells(row: &MemberRow) -> Vec<String> {
    let mut cells = profile_cells(row);
    cells.extend([
        row.plan_or_trainer.clone(),
        row.price.to_string(),
        row.status_label().to_string(),
    ]);
    match &row.settlement {
        Some(s) => cells.extend([
            if s.full_payment { "Yes" } else { "No" }.to_string(),
            s.paid_amount.to_string(),
            s.remaining_amount.to_string(),
            s.discount_amount.to_string(),
        ]),
        None => cells.extend(std::iter::repeat("N/A".to_string()).take(4)),
    }
    cells
}

fn print_table(title: &str, headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let rule = "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1));

    println!("{}", title);
    println!("{}", line(headers.to_vec()));
    println!("{}", rule);
    if rows.is_empty() {
        println!("(none)");
    }
    for row in rows {
        println!("{}", line(row.iter().map(String::as_str).collect()));
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    tracing::info!(
        environment = ?config.environment,
        path = %config.storage.member_details_path.display(),
        "Loading member details"
    );

    let store = Arc::new(config.storage.snapshot_store());
    let report = LoadMemberDetailsHandler::new(store)
        .handle(LoadMemberDetailsQuery)
        .await?;

    let regular: Vec<Vec<String>> = report.regular.iter().map(regular_cells).collect();
    let premium: Vec<Vec<String>> = report.premium.iter().map(premium_cells).collect();
    print_table("Regular Members", &REGULAR_HEADERS, &regular);
    print_table("Premium Members", &PREMIUM_HEADERS, &premium);

    Ok(())
}
