//! Read-only dashboard report command.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::Args;

use rota_ops_dashboard::{DashboardFilter, DashboardService, DateRange, ReportFormatter};
use rota_ops_data::{DatabaseClient, Repositories};

use crate::commands::load_config;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Start date (YYYY-MM-DD); with no complete range the current calendar
    /// month applies
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// Free-text filter on client name, order number, or id
    #[arg(long, default_value = "")]
    pub search: String,
}

/// Fetches, filters, aggregates, and prints the dashboard report.
///
/// # Errors
/// Returns an error if the database connection or any fetch fails.
pub async fn run_report(args: ReportArgs) -> Result<()> {
    let config = load_config();
    let db = DatabaseClient::from_config(&config.database).await?;
    let service = DashboardService::new(Repositories::new(db.pool()));

    let now = Utc::now();
    let range = match (args.start, args.end) {
        (Some(start), Some(end)) => DateRange { start, end },
        _ => DateRange::month_of(now.date_naive()),
    };
    let filter = DashboardFilter {
        range: Some(range),
        search: args.search,
    };

    let snapshot = service.snapshot(&filter, now).await?;
    println!("{}", ReportFormatter::format(&snapshot.data));

    if !snapshot.future_orders.is_empty() {
        println!(
            "Entregas futuras agendadas: {}",
            snapshot.future_orders.len()
        );
    }

    Ok(())
}
