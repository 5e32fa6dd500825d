//! Rental form and ledger pages.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use chrono::Local;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiResult;
use crate::views::{RentPage, RentalRow, RentalsPage, ToolRow};
use crate::AppState;
use toolrent_core::{parse_rental_date, NewRental, RentalPeriod, ToolId, ValidationError};

/// `POST /rent/{id}` body.
#[derive(Debug, Deserialize)]
pub struct RentalForm {
    pub renter_name: String,
    pub start_date: String,
    pub end_date: String,
}

impl RentalForm {
    fn into_new_rental(self, tool_id: ToolId) -> Result<NewRental, ValidationError> {
        let start = parse_rental_date(&self.start_date).map_err(|e| e.for_field("start_date"))?;
        let end = parse_rental_date(&self.end_date).map_err(|e| e.for_field("end_date"))?;
        let period = RentalPeriod::new(start, end)?;

        NewRental::new(tool_id, &self.renter_name, period)
    }
}

/// `GET /rent/{id}`
pub async fn rent_form(
    State(state): State<AppState>,
    Path(id): Path<ToolId>,
) -> ApiResult<Html<String>> {
    let tool = state.db.tools().get(id).await?;
    let page = RentPage {
        tool: ToolRow::from(&tool),
        today: Local::now().format("%Y-%m-%d").to_string(),
    };
    Ok(Html(page.render()?))
}

/// `POST /rent/{id}`
pub async fn create_rental(
    State(state): State<AppState>,
    Path(id): Path<ToolId>,
    Form(form): Form<RentalForm>,
) -> ApiResult<Redirect> {
    let new_rental = form.into_new_rental(id)?;
    let rental = state.db.rentals().create(&new_rental).await?;

    info!(
        rental_id = rental.id,
        tool_id = rental.tool_id,
        total = %rental.total(),
        "Rental booked"
    );
    Ok(Redirect::to("/"))
}

/// `GET /rentals`
pub async fn list_rentals(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let rentals = state.db.rentals().list_with_tools().await?;
    let page = RentalsPage {
        rentals: rentals.iter().map(RentalRow::from).collect(),
    };
    Ok(Html(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, start: &str, end: &str) -> RentalForm {
        RentalForm {
            renter_name: name.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn test_form_builds_rental() {
        let rental = form("Ada", "2024-05-01", "2024-05-04").into_new_rental(3).unwrap();
        assert_eq!(rental.tool_id, 3);
        assert_eq!(rental.period.days(), 3);
    }

    #[test]
    fn test_form_names_bad_date_field() {
        let err = form("Ada", "2024-05-01", "soon").into_new_rental(1).unwrap_err();
        assert!(err.to_string().starts_with("end_date"));

        let err = form("Ada", "", "2024-05-04").into_new_rental(1).unwrap_err();
        assert_eq!(err.to_string(), "start_date is required");
    }

    #[test]
    fn test_form_rejects_inverted_period() {
        assert!(matches!(
            form("Ada", "2024-05-04", "2024-05-01").into_new_rental(1),
            Err(ValidationError::EndBeforeStart { .. })
        ));
    }
}
