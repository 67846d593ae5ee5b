//! API path construction.

use url::form_urlencoded;

/// `/{collection}/{id}` with `id` percent-encoded as a single segment.
pub fn resource_path(collection: &str, id: &str) -> String {
    format!("/{collection}/{}", urlencoding::encode(id))
}

/// A collection or finder path plus its query string.
///
/// Parameters whose value is `None` are left out.
pub fn query_path(path: &str, params: &[(&str, Option<String>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key, value);
        }
    }

    let query = serializer.finish();
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    }
}
