//! Page-to-entities transformation.

use std::future::Future;

use futures_util::future::try_join_all;

use crate::domain::entities::Page;
use crate::domain::raw::{RawPage, RawResource};
use crate::error::AppError;

/// Aggregates every item of a raw page concurrently.
///
/// Items keep their API order. The page is all-or-nothing: the first failing
/// item fails the whole transformation and the remaining item aggregations
/// are dropped.
///
/// # Errors
///
/// Returns the error of the first item whose aggregation fails.
pub async fn transform_page<E, F, Fut>(page: RawPage, aggregate: F) -> Result<Page<E>, AppError>
where
    F: FnMut(RawResource) -> Fut,
    Fut: Future<Output = Result<E, AppError>>,
{
    let RawPage { items, meta } = page;
    let entities = try_join_all(items.into_iter().map(aggregate)).await?;
    Ok(Page::new(entities, meta))
}
