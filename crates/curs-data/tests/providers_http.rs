//! Provider fetch tests against a local mock server.

use chrono::NaiveDate;
use curs_core::{CurrencyCode, HttpConfig, Rate, SourceKind, SourcesConfig};
use curs_data::{
    BnmProvider, DataError, HttpClient, MaibProvider, ProviderRegistry, RateProvider,
};
use mockito::Matcher;

const BNM_XML: &str = include_str!("fixtures/bnm.xml");
const MAIB_HTML: &str = include_str!("fixtures/maib.html");

fn http() -> HttpClient {
    HttpClient::new(&HttpConfig::default()).unwrap()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
}

#[tokio::test]
async fn test_bnm_fetch_sends_date_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/official_exchange_rates")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("get_xml".into(), "1".into()),
            Matcher::UrlEncoded("date".into(), "02.02.2026".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(BNM_XML)
        .create_async()
        .await;

    let provider = BnmProvider::with_url(format!("{}/official_exchange_rates", server.url()));
    let parsed = provider.fetch(&http(), date()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(parsed.published, Some(date()));
    assert_eq!(parsed.rates[&CurrencyCode::mdl()], Rate::Official(1.0));
    assert_eq!(
        parsed.rates[&CurrencyCode::parse("eur").unwrap()],
        Rate::Official(19.9487)
    );

    let report = provider.report(parsed.rates);
    assert_eq!(report.kind, SourceKind::Official);
}

#[tokio::test]
async fn test_html_fetch() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/maib")
        .with_status(200)
        .with_body(MAIB_HTML)
        .create_async()
        .await;

    let provider = MaibProvider::with_url(format!("{}/maib", server.url()));
    let parsed = provider.fetch(&http(), date()).await.unwrap();

    assert_eq!(parsed.rates.len(), 4);
    assert!(parsed.published.is_none());
}

#[tokio::test]
async fn test_status_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/maib")
        .with_status(503)
        .create_async()
        .await;

    let provider = MaibProvider::with_url(format!("{}/maib", server.url()));
    let err = provider.fetch(&http(), date()).await.unwrap_err();

    assert!(matches!(err, DataError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_empty_table_is_no_rates() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/maib")
        .with_status(200)
        .with_body(r#"<table class="currency-table"><tbody></tbody></table>"#)
        .create_async()
        .await;

    let provider = MaibProvider::with_url(format!("{}/maib", server.url()));
    let err = provider.fetch(&http(), date()).await.unwrap_err();

    assert!(matches!(err, DataError::NoRates { ref source_id } if source_id == "maib"));
}

#[tokio::test]
async fn test_registry_url_overrides_reach_the_server() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/maib")
        .with_status(200)
        .with_body(MAIB_HTML)
        .create_async()
        .await;

    let mut config = SourcesConfig {
        only: vec!["maib".into()],
        ..Default::default()
    };
    config
        .urls
        .insert("maib".into(), format!("{}/maib", server.url()));

    let registry = ProviderRegistry::from_config(&config);
    assert_eq!(registry.ids(), vec!["maib"]);

    let provider = registry.get("maib").unwrap();
    let parsed = provider.fetch(&http(), date()).await.unwrap();
    assert_eq!(parsed.rates.len(), 4);
}

#[tokio::test]
#[ignore] // live network
async fn test_bnm_live() {
    let provider = BnmProvider::new();
    let today = chrono::Local::now().date_naive();

    let parsed = provider.fetch(&http(), today).await.unwrap();
    assert!(parsed.rates.contains_key(&CurrencyCode::parse("eur").unwrap()));
}
