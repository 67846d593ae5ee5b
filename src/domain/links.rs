//! Link resolution for hypermedia resources.
//!
//! Pure functions: they only inspect a [`RawResource`] and never perform I/O.

use serde_json::Value;
use url::Url;

use crate::domain::raw::RawResource;
use crate::error::AppError;

/// A relation discovered on a raw resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub relation: String,
    pub href: String,
}

impl Link {
    pub fn new(relation: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            href: href.into(),
        }
    }
}

/// Returns the link for `relation` on `resource`.
///
/// Both the HAL encoding (`"_links": {"game": {"href": "/games/5"}}`) and the
/// plain one (`"links": {"game": "/games/5"}`) are understood.
///
/// # Errors
///
/// Returns [`AppError::MissingLink`] if the relation is absent or has no href.
/// A composite entity cannot be built without it, so this is never skipped.
pub fn resolve_link(resource: &RawResource, relation: &str) -> Result<Link, AppError> {
    href_of(resource, relation)
        .map(|href| Link::new(relation, href))
        .ok_or_else(|| AppError::missing_link(relation, resource.describe()))
}

pub(crate) fn href_of<'a>(resource: &'a RawResource, relation: &str) -> Option<&'a str> {
    ["_links", "links"]
        .into_iter()
        .filter_map(|key| resource.get(key))
        .find_map(|links| match links.get(relation)? {
            Value::String(href) => Some(href.as_str()),
            Value::Object(link) => link.get("href")?.as_str(),
            _ => None,
        })
        .filter(|href| !href.is_empty())
}

/// Turns an href into an absolute URL against the API base.
///
/// Absolute hrefs are returned unchanged. Relative ones are appended to the
/// base so a base path prefix such as `/api` survives, unlike
/// [`Url::join`] which would drop it for hrefs starting with `/`.
///
/// # Errors
///
/// Returns the parse error if the result is not a valid URL.
pub fn resolve_href(base: &Url, href: &str) -> Result<Url, url::ParseError> {
    match Url::parse(href) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let mut joined = base.as_str().trim_end_matches('/').to_owned();
            if !href.starts_with('/') {
                joined.push('/');
            }
            joined.push_str(href);
            Url::parse(&joined)
        }
        Err(e) => Err(e),
    }
}
