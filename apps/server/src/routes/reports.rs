//! Commission report page.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::error::ApiResult;
use crate::views::{AssociationPage, MonthRow};
use crate::AppState;
use toolrent_core::Money;

/// `GET /association`
pub async fn association(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let months = state.db.reports().monthly_commission_summary().await?;

    let total_rentals = months.iter().map(|m| m.rental_count).sum();
    let total_commission: Money = months.iter().map(|m| m.total_commission()).sum();

    let page = AssociationPage {
        months: months.iter().map(MonthRow::from).collect(),
        total_rentals,
        total_commission: total_commission.to_string(),
    };
    Ok(Html(page.render()?))
}
