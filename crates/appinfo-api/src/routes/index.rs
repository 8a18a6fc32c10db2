//! Index route - Application details as JSON

use crate::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

/// Response body for `GET /`
///
/// Unset values serialize as empty strings, never null and never omitted.
#[derive(Debug, Serialize)]
pub struct AppDetails {
    pub name: String,
    pub description: String,
}

/// Return the configured application name and description
///
/// Reads nothing from the request; the values come from the configuration
/// loaded at startup.
pub async fn app_details(State(state): State<AppState>) -> Json<AppDetails> {
    let app = &state.config.app;

    Json(AppDetails {
        name: app.name.clone(),
        description: app.description.clone(),
    })
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use appinfo_config::Config;

    #[tokio::test]
    async fn test_app_details_reads_config() {
        let mut config = Config::default();
        config.app.name = "demo-app".to_string();
        config.app.description = "sample service".to_string();

        let Json(details) = app_details(State(AppState { config })).await;
        assert_eq!(details.name, "demo-app");
        assert_eq!(details.description, "sample service");
    }

    #[tokio::test]
    async fn test_app_details_empty_config() {
        let Json(details) = app_details(State(AppState {
            config: Config::default(),
        }))
        .await;
        assert_eq!(details.name, "");
        assert_eq!(details.description, "");
    }

    #[test]
    fn test_app_details_serialization() {
        let details = AppDetails {
            name: "demo-app".to_string(),
            description: "sample service".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&details).unwrap(),
            r#"{"name":"demo-app","description":"sample service"}"#
        );
    }
}
