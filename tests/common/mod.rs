#![allow(dead_code)]

use inpaint_proxy::{InpaintClient, UpstreamConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const UPSTREAM_PATH: &str = "/inpaint";

pub fn client_for(server: &MockServer, credential: Option<&str>) -> InpaintClient {
    InpaintClient::new(UpstreamConfig::new(
        Some(format!("{}{}", server.uri(), UPSTREAM_PATH)),
        credential.map(String::from),
    ))
}

pub fn full_request() -> Value {
    json!({
        "originalImage": "data:image/png;base64,T1JJRw==",
        "productImage": "https://cdn.example.com/product.png",
        "maskImage": "data:image/png;base64,TUFTSw=="
    })
}

pub fn request_without_product() -> Value {
    json!({
        "originalImage": "data:image/png;base64,T1JJRw==",
        "maskImage": "data:image/png;base64,TUFTSw=="
    })
}
