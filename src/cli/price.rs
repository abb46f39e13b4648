use super::ui;
use crate::core::{CurrencyRegistry, PriceError, PriceProvider};
use anyhow::{Result, bail};
use comfy_table::Cell;
use futures::future::join_all;
use tracing::warn;

struct PriceRow {
    name: String,
    identifier: Option<String>,
    result: Result<String, PriceError>,
}

fn render(rows: &[PriceRow]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Item ID"),
        ui::header_cell("Price"),
    ]);

    for row in rows {
        let price = match &row.result {
            Ok(price) => ui::price_cell(price),
            Err(e) => ui::error_cell(&e.to_string()),
        };
        table.add_row(vec![
            // Trailing whitespace is significant in names, so quote them.
            Cell::new(format!("{:?}", row.name)),
            ui::format_optional_cell(row.identifier.as_deref(), str::to_string),
            price,
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Prices", ui::StyleType::Title),
        table
    )
}

async fn fetch_all(
    provider: &dyn PriceProvider,
    registry: &CurrencyRegistry,
    names: &[String],
) -> Vec<PriceRow> {
    let pb = ui::new_progress_bar(names.len() as u64);
    pb.set_message("Fetching prices...");

    let price_futures = names.iter().map(|name| {
        let pb_clone = pb.clone();
        async move {
            let result = provider.fetch_price(name).await;
            pb_clone.inc(1);
            PriceRow {
                name: name.clone(),
                identifier: registry.resolve(name).ok().map(str::to_string),
                result,
            }
        }
    });

    let rows = join_all(price_futures).await;
    pb.finish_and_clear();
    rows
}

/// Fetches `names` (every registered currency when empty) and prints them as a table.
pub async fn run(
    provider: &dyn PriceProvider,
    registry: &CurrencyRegistry,
    names: &[String],
) -> Result<()> {
    let names: Vec<String> = if names.is_empty() {
        registry.names().map(str::to_string).collect()
    } else {
        names.to_vec()
    };

    if names.is_empty() {
        println!("No currencies to fetch.");
        return Ok(());
    }

    let rows = fetch_all(provider, registry, &names).await;
    println!("{}", render(&rows));

    let mut failed = 0;
    for row in &rows {
        if let Err(e) = &row.result {
            warn!(currency = %row.name, kind = ?e.kind(), error = ?e, "Price lookup failed");
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{} of {} price lookups failed", failed, rows.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct MockPriceProvider {
        registry: CurrencyRegistry,
    }

    #[async_trait]
    impl PriceProvider for MockPriceProvider {
        async fn fetch_price(&self, name: &str) -> Result<String, PriceError> {
            let id = self.registry.resolve(name)?;
            match id {
                "137206" => Ok("225310".to_string()),
                _ => Err(PriceError::PriceMissing { id: id.to_string() }),
            }
        }
    }

    fn registry() -> CurrencyRegistry {
        CurrencyRegistry::new([("X ", "137206"), ("Y", "42")]).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_all_keeps_order_and_errors() {
        let registry = registry();
        let provider = MockPriceProvider {
            registry: registry.clone(),
        };
        let names = vec!["Y".to_string(), "X ".to_string(), "Z".to_string()];

        let rows = fetch_all(&provider, &registry, &names).await;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "Y");
        assert!(matches!(rows[0].result, Err(PriceError::PriceMissing { .. })));
        assert_eq!(rows[1].result.as_deref().unwrap(), "225310");
        assert_eq!(rows[1].identifier.as_deref(), Some("137206"));
        assert!(rows[2].identifier.is_none());
        assert!(matches!(
            rows[2].result,
            Err(PriceError::ConfigurationNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_render_contains_prices_and_errors() {
        let registry = registry();
        let provider = MockPriceProvider {
            registry: registry.clone(),
        };
        let names = vec!["X ".to_string(), "Z".to_string()];

        let output = render(&fetch_all(&provider, &registry, &names).await);

        assert!(output.contains("225310"));
        assert!(output.contains("\"X \""));
        assert!(output.contains("currency 'Z' is not defined"));
    }

    #[tokio::test]
    async fn test_run_fails_when_any_lookup_fails() {
        let registry = registry();
        let provider = MockPriceProvider {
            registry: registry.clone(),
        };

        let result = run(&provider, &registry, &["X ".to_string()]).await;
        assert!(result.is_ok());

        let result = run(&provider, &registry, &[]).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "1 of 2 price lookups failed"
        );
    }
}
