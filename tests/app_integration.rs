use currate::core::CurrencyRegistry;
use currate::core::registry::AED;
use currate::{ErrorKind, PriceError};
use std::fs;
use tracing::info;

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const WIDGET_PATH: &str = "/v1/widget/tmp";

    pub async fn create_mock_server(
        item_id: &str,
        status_code: u16,
        mock_response: &str,
    ) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(WIDGET_PATH))
            .and(query_param("keys", item_id))
            .respond_with(ResponseTemplate::new(status_code).set_body_string(mock_response))
            .expect(1)
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn base_url(mock_server: &MockServer) -> String {
        format!("{}{}?keys=", mock_server.uri(), WIDGET_PATH)
    }
}

fn x_registry() -> CurrencyRegistry {
    CurrencyRegistry::new([("X ", "137206")]).unwrap()
}

#[test_log::test(tokio::test)]
async fn test_fetch_price_scenario_success() {
    let mock_server = test_utils::create_mock_server(
        "137206",
        200,
        r#"{"response":{"indicators":[{"item_id":137206,"p":"225310"}]}}"#,
    )
    .await;

    let price = currate::fetch_price("X ", &x_registry(), &test_utils::base_url(&mock_server))
        .await
        .unwrap();

    info!(%price, "Fetched price");
    assert_eq!(price, "225310");
}

#[test_log::test(tokio::test)]
async fn test_fetch_price_scenario_server_error() {
    let mock_server = test_utils::create_mock_server("137206", 500, "Server Error").await;

    let err = currate::fetch_price("X ", &x_registry(), &test_utils::base_url(&mock_server))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.to_string().contains("500"));
    assert!(err.to_string().contains("Server Error"));
}

#[test_log::test(tokio::test)]
async fn test_fetch_price_scenario_empty_indicators() {
    let mock_server =
        test_utils::create_mock_server("137206", 200, r#"{"response":{"indicators":[]}}"#).await;

    let err = currate::fetch_price("X ", &x_registry(), &test_utils::base_url(&mock_server))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResultNotFound);
    assert!(err.to_string().contains("137206"));
}

#[test_log::test(tokio::test)]
async fn test_default_registry_resolves_dirham() {
    let mock_server = test_utils::create_mock_server(
        "137206",
        200,
        r#"{"response":{"indicators":[{"item_id":137206,"p":"225310","title":"درهم امارات "}]}}"#,
    )
    .await;

    let registry = CurrencyRegistry::default();
    let base_url = test_utils::base_url(&mock_server);

    let price = currate::fetch_price(AED, &registry, &base_url).await.unwrap();
    assert_eq!(price, "225310");

    // Without the trailing space the name is unknown and no request is made.
    let err = currate::fetch_price(AED.trim_end(), &registry, &base_url)
        .await
        .unwrap_err();
    assert!(matches!(err, PriceError::ConfigurationNotFound { .. }));
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_server = test_utils::create_mock_server(
        "137206",
        200,
        r#"{"response":{"indicators":[{"item_id":137206,"p":"225310"}]}}"#,
    )
    .await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    let config_content = format!(
        r#"
        providers:
          tgju:
            base_url: "{}"
            timeout_secs: 5
    "#,
        test_utils::base_url(&mock_server)
    );
    fs::write(config_path, &config_content).expect("Failed to write config file");

    let result = currate::run_command(
        currate::AppCommand::Price { names: vec![] },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Main function failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_reports_failures() {
    let mock_server = test_utils::create_mock_server("137206", 503, "maintenance").await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_content = format!(
        "providers:\n  tgju:\n    base_url: \"{}\"\n",
        test_utils::base_url(&mock_server)
    );
    fs::write(config_file.path(), &config_content).expect("Failed to write config file");

    let result = currate::run_command(
        currate::AppCommand::Price {
            names: vec![AED.to_string()],
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "1 of 1 price lookups failed"
    );
}

#[test_log::test(tokio::test)]
async fn test_invalid_config_path() {
    let result = currate::run_command(
        currate::AppCommand::List,
        Some("/nonexistent/currate/config.yaml"),
    )
    .await;

    assert!(result.is_err());
}
