//! Composite reads: joining a parent record with children owned by a
//! sibling route module by calling both modules' own REST endpoints.
//!
//! The two sub-fetches run concurrently with both-or-fail semantics: if
//! either call fails the composite fails and no partial result is
//! surfaced. An upstream 404 maps to [`ApiError::NotFound`]; every other
//! upstream failure maps to [`ApiError::Upstream`].

use serde_json::{json, Value};
use tracing::instrument;
use uuid::Uuid;

use crate::errors::ApiError;

/// Route pair describing one composite read.
#[derive(Clone, Copy, Debug)]
pub struct CompositeRead {
    /// Endpoint serving the parent by uuid, e.g. `/hr/configuration`.
    pub parent_path: &'static str,
    /// Endpoint listing children by parent uuid, e.g.
    /// `/hr/configuration-entry/by`.
    pub children_path: &'static str,
    /// Field name the children array is merged under.
    pub children_field: &'static str,
}

impl CompositeRead {
    /// Fetch parent and children concurrently and merge them into one
    /// object.
    #[instrument(skip(self, client), fields(parent = self.parent_path, %parent_uuid))]
    pub async fn fetch(
        &self,
        client: &reqwest::Client,
        base_url: &str,
        parent_uuid: Uuid,
    ) -> Result<Value, ApiError> {
        let parent_url = format!("{base_url}{}/{parent_uuid}", self.parent_path);
        let children_url = format!("{base_url}{}/{parent_uuid}", self.children_path);

        let (parent, children) = tokio::try_join!(
            fetch_json(client, &parent_url),
            fetch_json(client, &children_url),
        )?;

        merge(parent, children, self.children_field)
    }
}

async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<Value, ApiError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| ApiError::Upstream(format!("request to {url} failed: {err}")))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(format!("upstream resource at {url}")));
    }
    if !status.is_success() {
        return Err(ApiError::Upstream(format!("{url} answered {status}")));
    }

    response
        .json()
        .await
        .map_err(|err| ApiError::Upstream(format!("{url} returned invalid JSON: {err}")))
}

/// Merge the parent envelope's data object with the children envelope's
/// data array: `{...parent.data, <field>: children.data or []}`.
fn merge(parent: Value, children: Value, field: &str) -> Result<Value, ApiError> {
    let mut data = parent.get("data").cloned().unwrap_or(Value::Null);

    let Some(object) = data.as_object_mut() else {
        return Err(ApiError::Upstream(
            "parent payload did not carry a data object".to_string(),
        ));
    };

    let children_data = match children.get("data") {
        Some(value) if !value.is_null() => value.clone(),
        _ => json!([]),
    };
    object.insert(field.to_string(), children_data);

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_spreads_parent_and_attaches_children() {
        let parent = json!({"toast": {}, "data": {"uuid": "x", "remarks": null}});
        let children = json!({"toast": {}, "data": [{"uuid": "c1"}]});

        let merged = merge(parent, children, "configuration_entry").unwrap();
        assert_eq!(merged["uuid"], "x");
        assert_eq!(merged["configuration_entry"], json!([{"uuid": "c1"}]));
    }

    #[test]
    fn merge_defaults_missing_children_to_empty_array() {
        let parent = json!({"data": {"uuid": "x"}});

        let merged = merge(parent.clone(), json!({"data": null}), "order").unwrap();
        assert_eq!(merged["order"], json!([]));

        let merged = merge(parent, json!({}), "order").unwrap();
        assert_eq!(merged["order"], json!([]));
    }

    #[test]
    fn merge_rejects_parent_without_data_object() {
        let err = merge(json!({"data": null}), json!({"data": []}), "order").unwrap_err();
        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::BAD_GATEWAY
        );
    }
}
