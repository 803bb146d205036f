use serde::de::DeserializeOwned;
use tracing::warn;

use crate::document::DocumentView;
use crate::error::{ChartError, ChartResult};

/// Parses one embedded payload body, tagging failures with the element id.
pub fn parse_payload<T: DeserializeOwned>(element_id: &str, text: &str) -> ChartResult<T> {
    serde_json::from_str(text).map_err(|err| ChartError::MalformedPayload {
        element_id: element_id.to_owned(),
        detail: err.to_string(),
    })
}

/// Reads and parses the embedded payload stored under `element_id`.
///
/// Returns `None` when the element is absent (the chart simply is not on this
/// page) and when its body is not valid JSON for `T`. The malformed case is
/// surfaced once as a `warn` diagnostic naming the element; it never escapes
/// to the caller, so rendering of the remaining charts is unaffected.
pub fn extract<T, D>(document: &D, element_id: &str) -> Option<T>
where
    T: DeserializeOwned,
    D: DocumentView + ?Sized,
{
    let text = document.embedded_text(element_id)?;
    match parse_payload(element_id, &text) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(element_id, error = %err, "discarding malformed chart payload");
            None
        }
    }
}
