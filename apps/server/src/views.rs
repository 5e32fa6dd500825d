//! # Views
//!
//! askama templates and the row models they render. Money is formatted
//! here so templates only ever print strings.

use askama::Template;
use chrono::{NaiveDateTime, Timelike};

use toolrent_core::{MonthlyCommission, RentalListing, Tool};

/// Dates at midnight print as plain dates.
fn display_date(dt: &NaiveDateTime) -> String {
    if dt.time().num_seconds_from_midnight() == 0 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M").to_string()
    }
}

// =============================================================================
// Tools
// =============================================================================

pub struct ToolRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub daily_rate: String,
    pub commission: String,
    pub available: bool,
}

impl From<&Tool> for ToolRow {
    fn from(tool: &Tool) -> Self {
        ToolRow {
            id: tool.id,
            name: tool.name.clone(),
            description: tool.description.clone().unwrap_or_default(),
            daily_rate: tool.daily_rate().to_string(),
            commission: tool.commission().to_string(),
            available: tool.available,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub tools: Vec<ToolRow>,
}

#[derive(Template)]
#[template(path = "new_tool.html")]
pub struct NewToolPage {}

#[derive(Template)]
#[template(path = "rent.html")]
pub struct RentPage {
    pub tool: ToolRow,
    pub today: String,
}

// =============================================================================
// Rentals
// =============================================================================

pub struct RentalRow {
    pub id: i64,
    pub tool_name: String,
    pub renter_name: String,
    pub start_date: String,
    pub end_date: String,
    pub days: i64,
    pub total: String,
    pub commission: String,
}

impl From<&RentalListing> for RentalRow {
    fn from(listing: &RentalListing) -> Self {
        let rental = &listing.rental;
        RentalRow {
            id: rental.id,
            tool_name: listing.tool_name.clone(),
            renter_name: rental.renter_name.clone(),
            start_date: display_date(&rental.start_date),
            end_date: display_date(&rental.end_date),
            days: rental.days(),
            total: rental.total().to_string(),
            commission: rental.commission().to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "rentals.html")]
pub struct RentalsPage {
    pub rentals: Vec<RentalRow>,
}

// =============================================================================
// Association report
// =============================================================================

pub struct MonthRow {
    pub month: String,
    pub rental_count: i64,
    pub total_commission: String,
}

impl From<&MonthlyCommission> for MonthRow {
    fn from(m: &MonthlyCommission) -> Self {
        MonthRow {
            month: m.month.clone(),
            rental_count: m.rental_count,
            total_commission: m.total_commission().to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "association.html")]
pub struct AssociationPage {
    pub months: Vec<MonthRow>,
    pub total_rentals: i64,
    pub total_commission: String,
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub status: u16,
    pub code: &'a str,
    pub message: &'a str,
}
