//! Wire types for both sides of the proxy.
//!
//! The caller sends a loosely-typed JSON object; [`InpaintRequest::from_body`]
//! turns it into a validated request which is also exactly the payload sent
//! upstream (`productImage` serializes as `null` when absent).
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InpaintRequest {
    pub original_image: String,
    pub product_image: Option<String>,
    pub mask_image: String,
}

/// Inbound shape before validation. Values stay untyped so that `null`,
/// numbers or a missing key all land in the same "not present" bucket.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInpaintRequest {
    #[serde(default)]
    original_image: Option<Value>,
    #[serde(default)]
    product_image: Option<Value>,
    #[serde(default)]
    mask_image: Option<Value>,
}

impl InpaintRequest {
    pub fn new(original_image: impl Into<String>, product_image: Option<String>, mask_image: impl Into<String>) -> Self {
        InpaintRequest {
            original_image: original_image.into(),
            product_image,
            mask_image: mask_image.into(),
        }
    }

    /// Parse and validate a raw request body.
    ///
    /// A body that is not a JSON object carries no fields, so it fails the
    /// same way as an object missing `originalImage` or `maskImage`.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let raw: RawInpaintRequest = match serde_json::from_slice::<Value>(body) {
            Ok(object @ Value::Object(_)) => serde_json::from_value(object).unwrap_or_default(),
            _ => RawInpaintRequest::default(),
        };
        let original_image = present(raw.original_image);
        let mask_image = present(raw.mask_image);
        match (original_image, mask_image) {
            (Some(original_image), Some(mask_image)) => Ok(InpaintRequest {
                original_image,
                product_image: present(raw.product_image),
                mask_image,
            }),
            _ => Err(AppError::MissingFields),
        }
    }
}

/// Present means a non-empty string.
fn present(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InpaintResponse {
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Pull a usable `output` out of an upstream JSON document.
pub fn extract_output(data: &Value) -> AppResult<String> {
    match data.get("output") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(AppError::NoOutput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: Value) -> AppResult<InpaintRequest> {
        InpaintRequest::from_body(v.to_string().as_bytes())
    }

    #[test]
    fn accepts_complete_request() {
        let req = parse(json!({
            "originalImage": "data:image/png;base64,AAA",
            "productImage": "https://cdn/product.png",
            "maskImage": "data:image/png;base64,BBB"
        }))
        .unwrap();
        assert_eq!(req.original_image, "data:image/png;base64,AAA");
        assert_eq!(req.product_image.as_deref(), Some("https://cdn/product.png"));
        assert_eq!(req.mask_image, "data:image/png;base64,BBB");
    }

    #[test]
    fn falsy_required_fields_are_missing() {
        let cases = [
            json!({ "maskImage": "m" }),
            json!({ "originalImage": "", "maskImage": "m" }),
            json!({ "originalImage": null, "maskImage": "m" }),
            json!({ "originalImage": "o" }),
            json!({ "originalImage": "o", "maskImage": "" }),
            json!({ "originalImage": "o", "maskImage": null }),
            json!({}),
            json!([]),
            json!("originalImage"),
            json!(["o", null, "m"]),
        ];
        for case in cases {
            assert!(matches!(parse(case.clone()), Err(AppError::MissingFields)), "case: {}", case);
        }
    }

    #[test]
    fn garbage_body_is_missing_fields() {
        assert!(matches!(InpaintRequest::from_body(b"not json"), Err(AppError::MissingFields)));
        assert!(matches!(InpaintRequest::from_body(b""), Err(AppError::MissingFields)));
    }

    #[test]
    fn empty_product_image_becomes_none() {
        let req = parse(json!({ "originalImage": "o", "productImage": "", "maskImage": "m" })).unwrap();
        assert_eq!(req.product_image, None);
    }

    #[test]
    fn absent_product_image_serializes_as_null() {
        let req = InpaintRequest::new("o", None, "m");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "originalImage": "o", "productImage": null, "maskImage": "m" })
        );
    }

    #[test]
    fn output_extraction() {
        assert_eq!(extract_output(&json!({ "output": "https://x/result.png" })).unwrap(), "https://x/result.png");
        assert!(matches!(extract_output(&json!({})), Err(AppError::NoOutput)));
        assert!(matches!(extract_output(&json!({ "output": "" })), Err(AppError::NoOutput)));
        assert!(matches!(extract_output(&json!({ "output": null })), Err(AppError::NoOutput)));
        assert!(matches!(extract_output(&json!(["output"])), Err(AppError::NoOutput)));
    }
}
