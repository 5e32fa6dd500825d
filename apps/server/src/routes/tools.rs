//! Tool catalog pages.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiResult;
use crate::views::{IndexPage, NewToolPage, ToolRow};
use crate::AppState;
use toolrent_core::{Money, NewTool, ValidationError};

/// `POST /tools` body.
#[derive(Debug, Deserialize)]
pub struct ToolForm {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub daily_rate: String,
}

impl ToolForm {
    fn into_new_tool(self) -> Result<NewTool, ValidationError> {
        let daily_rate: Money = self
            .daily_rate
            .parse()
            .map_err(|e: ValidationError| e.for_field("daily_rate"))?;

        NewTool::new(&self.name, self.description, daily_rate)
    }
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let tools = state.db.tools().list().await?;
    let page = IndexPage {
        tools: tools.iter().map(ToolRow::from).collect(),
    };
    Ok(Html(page.render()?))
}

/// `GET /tools/new`
pub async fn new_tool_form() -> ApiResult<Html<String>> {
    Ok(Html(NewToolPage {}.render()?))
}

/// `POST /tools`
pub async fn create_tool(
    State(state): State<AppState>,
    Form(form): Form<ToolForm>,
) -> ApiResult<Redirect> {
    let new_tool = form.into_new_tool()?;
    let tool = state.db.tools().create(&new_tool).await?;

    info!(tool_id = tool.id, name = %tool.name, "Tool added to catalog");
    Ok(Redirect::to("/"))
}
