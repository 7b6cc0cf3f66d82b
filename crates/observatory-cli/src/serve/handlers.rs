//! HTTP route handlers for the dashboard server.
//!
//! Handlers are kept thin, delegating to `observatory_core::Dashboard`.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};

use observatory_core::{ChartData, PlotSelection};

use super::models::{ClassList, ErrorResponse, SelectionQuery};
use super::templates;
use super::AppState;

// =============================================================================
// Page Handlers
// =============================================================================

/// GET `/` - Dashboard page.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(templates::render_dashboard_page(&state.dashboard))
}

// =============================================================================
// API Handlers
// =============================================================================

/// GET `/api/chart` - Sunburst arrays for Plotly.
///
/// Response format:
/// ```json
/// {"ids": ["schema:Thing", ...], "names": [...], "parents": ["", ...], "values": [29, ...]}
/// ```
pub async fn api_chart(State(state): State<Arc<AppState>>) -> Json<ChartData> {
    Json(state.dashboard.chart().clone())
}

/// GET `/api/classes` - Dropdown options and default selection.
pub async fn api_classes(State(state): State<Arc<AppState>>) -> Json<ClassList> {
    Json(ClassList {
        classes: state.dashboard.catalog().classes().to_vec(),
        default: state.dashboard.default_class().to_string(),
    })
}

/// GET `/api/selection?class=schema:Product` - Plot image for a class.
///
/// A malformed label is a `400`; there is no fallback image.
pub async fn api_selection(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionQuery>,
) -> Result<Json<PlotSelection>, (StatusCode, Json<ErrorResponse>)> {
    state
        .dashboard
        .select(&params.class)
        .map(Json)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))))
}

#[cfg(test)]
mod tests {
    use super::*;

    use observatory_core::{ClassCatalog, ClassHierarchy, Dashboard, PlotResolver};

    fn test_state() -> State<Arc<AppState>> {
        let hierarchy = ClassHierarchy::from_json(
            r#"{"@id":"schema:Thing","children":[{"@id":"schema:Product","value":4}]}"#,
        )
        .unwrap();
        let dashboard = Dashboard::new(
            ChartData::from_hierarchy(&hierarchy),
            ClassCatalog::fixed(),
            PlotResolver::default(),
            "schema:Product",
        )
        .unwrap();

        State(Arc::new(AppState {
            dashboard: Arc::new(dashboard),
        }))
    }

    #[tokio::test]
    async fn test_api_chart() {
        let Json(chart) = api_chart(test_state()).await;
        assert_eq!(chart.ids, vec!["schema:Thing", "schema:Product"]);
        assert_eq!(chart.parents, vec!["", "schema:Thing"]);
        assert_eq!(chart.values, vec![0, 4]);
    }

    #[tokio::test]
    async fn test_api_classes() {
        let Json(list) = api_classes(test_state()).await;
        assert_eq!(list.classes.len(), 20);
        assert_eq!(list.default, "schema:Product");
    }

    #[tokio::test]
    async fn test_api_selection() {
        let query = Query(SelectionQuery {
            class: "schema:Person".to_string(),
        });
        let Json(selection) = api_selection(test_state(), query).await.unwrap();
        assert_eq!(selection.class_name, "Person");
        assert_eq!(selection.image_path, "assets/plots/Person_plot.svg");
    }

    #[tokio::test]
    async fn test_api_selection_malformed_label() {
        let query = Query(SelectionQuery {
            class: "Person".to_string(),
        });
        let (status, Json(body)) = api_selection(test_state(), query).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("Person"));
    }

    #[tokio::test]
    async fn test_index_page() {
        let Html(page) = index(test_state()).await;
        assert!(page.contains("Schema.org structured data observatory"));
        assert!(page.contains(r#"<option value="schema:Product" selected>"#));
    }
}
