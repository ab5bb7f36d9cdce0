#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Serialization of URLs and deployment configuration
use serde::Deserialize;
use urlrender::{Deployment, Renderer, Url};

#[test]
fn test_url_serializes_as_string() {
    let url = Url::parse("http://example.com:8080/a/b?x=1#f").unwrap();
    let json = serde_json::to_string(&url).unwrap();
    assert_eq!(json, r#""http://example.com:8080/a/b?x=1#f""#);

    let back: Url = serde_json::from_str(&json).unwrap();
    assert_eq!(back, url);
}

#[test]
fn test_malformed_url_is_rejected() {
    let result = serde_json::from_str::<Url>(r#""http://host:port/""#);
    assert!(result.is_err());
}

#[test]
fn test_deployment_config() {
    let deployment: Deployment =
        serde_json::from_str(r#"{"context_path": "/shop", "filter_path": "app/"}"#).unwrap();
    assert_eq!(deployment, Deployment::new("/shop", "/app"));

    let json = serde_json::to_value(&deployment).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"context_path": "/shop", "filter_path": "/app"})
    );
}

#[test]
fn test_deployment_fields_default_to_root() {
    let deployment: Deployment = serde_json::from_str("{}").unwrap();
    assert_eq!(deployment, Deployment::root());
}

#[derive(Deserialize)]
struct PageConfig {
    base: Url,
    deployment: Deployment,
}

#[test]
fn test_renderer_from_config() {
    let config: PageConfig = serde_json::from_str(
        r#"{
            "base": "/shop/app/products/list",
            "deployment": {"context_path": "/shop", "filter_path": "/app"}
        }"#,
    )
    .unwrap();
    let renderer = Renderer::with_deployment(config.base, config.deployment);
    let target = Url::parse("/shop/app/cart").unwrap();
    assert_eq!(renderer.render_relative_url(&target), "../cart");
}
