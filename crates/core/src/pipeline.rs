//! The goods selection pipeline: filter stages, sorting, and pagination.
//!
//! Stages are pure functions applied in a fixed, documented order:
//! gender -> category -> type -> search -> list -> color/price/display ->
//! sort -> pagination. Later stages receive the working set produced by
//! earlier ones, with two deliberate exceptions carried over from the
//! original contract:
//!
//! - `search` resets to the full catalog, discarding prior filters.
//! - `list` resets to the full catalog and returns ids in reverse input
//!   order.
//!
//! A `gender` query without `category` short-circuits into a flat, shuffled
//! list of `top`-flagged items and skips every later stage. That early
//! return is preserved verbatim; whether it is intentional is a product
//! question, not an engineering one.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::catalog::{Catalog, Product};
use crate::error::DomainError;
use crate::query::{Count, GoodsQuery, SortDirection, SortKey};

/// Page size when no `count` is given and no gender default applies.
const DEFAULT_PAGE_SIZE: u32 = 12;
/// Page size default for `gender=all`.
const ALL_GENDERS_PAGE_SIZE: u32 = 4;
/// Page size default for a specific gender.
const SINGLE_GENDER_PAGE_SIZE: u32 = 8;

/// The pagination envelope returned for paged queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageEnvelope {
    pub goods: Vec<Product>,
    pub page: u32,
    pub pages: u32,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    /// Shuffled top items for the category, present only when the query
    /// asked for them (`category` + `top`).
    #[serde(rename = "topGoods", skip_serializing_if = "Option::is_none")]
    pub top_goods: Option<Vec<Product>>,
}

/// Result of a goods query: a pagination envelope, or a bare list for the
/// modes that bypass pagination (`count=all`, the gender-without-category
/// early return).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GoodsResult {
    Page(PageEnvelope),
    Flat(Vec<Product>),
}

/// Run the full selection pipeline for a parsed query.
///
/// The catalog is read-only; selected products are cloned into the result.
///
/// # Errors
///
/// Returns [`DomainError::MissingDependency`] when `category` is given
/// without `gender`.
pub fn select_goods(catalog: &Catalog, query: &GoodsQuery) -> Result<GoodsResult, DomainError> {
    select_goods_with(catalog, query, &mut rand::rng())
}

/// Pipeline body with an injectable RNG (shuffles are the only source of
/// nondeterminism).
fn select_goods_with<R: Rng>(
    catalog: &Catalog,
    query: &GoodsQuery,
    rng: &mut R,
) -> Result<GoodsResult, DomainError> {
    if query.category.is_some() && query.gender.is_none() {
        return Err(DomainError::MissingDependency {
            param: "category",
            requires: "gender",
        });
    }

    let mut working: Vec<Product> = catalog.goods.clone();
    let mut default_count = DEFAULT_PAGE_SIZE;
    let mut top_goods = None;

    if let Some(gender) = &query.gender {
        if gender == "all" {
            default_count = ALL_GENDERS_PAGE_SIZE;
        } else {
            working.retain(|p| p.gender.as_deref() == Some(gender));
            default_count = SINGLE_GENDER_PAGE_SIZE;
        }

        // Featured strip: without a category the response is a flat,
        // shuffled selection of top items and every later stage is skipped.
        if query.category.is_none() {
            let mut featured: Vec<Product> =
                working.iter().filter(|p| p.top).cloned().collect();
            featured.shuffle(rng);
            featured.truncate(page_size(query, default_count) as usize);
            return Ok(GoodsResult::Flat(featured));
        }
    }

    if let Some(category) = &query.category {
        if query.top {
            top_goods = Some(shuffled_top(&working, category, query.exclude.as_deref(), rng));
        }
        working.retain(|p| &p.category == category);
    }

    if let Some(kind) = &query.kind {
        working.retain(|p| p.kind.as_deref() == Some(kind));
    }

    if let Some(term) = &query.search {
        working = search_catalog(catalog, term);
    }

    if let Some(ids) = &query.list {
        working = list_by_ids(catalog, ids);
    }

    if let Some(color) = &query.color {
        working.retain(|p| p.color.as_deref() == Some(color));
    }
    if let Some(min) = query.min_price {
        working.retain(|p| p.price >= min);
    }
    if let Some(max) = query.max_price {
        working.retain(|p| p.price <= max);
    }
    if let Some(min) = query.min_display {
        working.retain(|p| p.display.is_some_and(|d| d >= min));
    }
    if let Some(max) = query.max_display {
        working.retain(|p| p.display.is_some_and(|d| d <= max));
    }

    if let Some(key) = query.sort {
        sort_products(&mut working, key, query.direction);
    }

    if query.count == Some(Count::All) {
        return Ok(GoodsResult::Flat(working));
    }

    let mut envelope = paginate(
        working,
        query.page.unwrap_or(1),
        page_size(query, default_count),
    );
    envelope.top_goods = top_goods;
    Ok(GoodsResult::Page(envelope))
}

/// Resolve the effective page size: explicit `count` wins over the default
/// the gender stage picked.
fn page_size(query: &GoodsQuery, default_count: u32) -> u32 {
    match query.count {
        Some(Count::Limit(n)) => n,
        _ => default_count,
    }
}

/// Slice one page out of the working set.
///
/// `start = (page-1)*count`, `pages = ceil(total/count)`. A page past the
/// end yields an empty `goods` list, not an error.
fn paginate(data: Vec<Product>, page: u32, per_page: u32) -> PageEnvelope {
    let total = data.len();
    let pages = u32::try_from(total.div_ceil(per_page as usize)).unwrap_or(u32::MAX);
    let start = (page as usize).saturating_sub(1).saturating_mul(per_page as usize);

    PageEnvelope {
        goods: data.into_iter().skip(start).take(per_page as usize).collect(),
        page,
        pages,
        total_count: total,
        top_goods: None,
    }
}

/// Case-insensitive substring search over title and description, always
/// against the full catalog.
fn search_catalog(catalog: &Catalog, term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    catalog
        .goods
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Resolve ids against the catalog in input order, then reverse. Ids with
/// no matching product are skipped.
fn list_by_ids(catalog: &Catalog, ids: &[String]) -> Vec<Product> {
    let mut selected: Vec<Product> = ids
        .iter()
        .filter_map(|id| catalog.find(id))
        .cloned()
        .collect();
    selected.reverse();
    selected
}

/// Top-flagged items of a category, minus the excluded id, shuffled.
/// The page size never bounds this sub-list; it only bounds the main page.
fn shuffled_top<R: Rng>(
    working: &[Product],
    category: &str,
    exclude: Option<&str>,
    rng: &mut R,
) -> Vec<Product> {
    let mut tops: Vec<Product> = working
        .iter()
        .filter(|p| p.category == category && p.top)
        .filter(|p| exclude != Some(p.id.as_str()))
        .cloned()
        .collect();
    tops.shuffle(rng);
    tops
}

/// Stable sort by the requested key; direction folded into the comparator
/// so equal elements keep their relative order either way.
fn sort_products(products: &mut [Product], key: SortKey, direction: SortDirection) {
    products.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Title => a.title.cmp(&b.title),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
