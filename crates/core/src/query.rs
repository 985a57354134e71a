//! Query-parameter parsing and allow-list validation for `/api/goods`.
//!
//! Parameters arrive as raw key/value pairs so unrecognized keys stay
//! observable. Which keys are accepted depends on the deployment's
//! [`ValidationMode`]:
//!
//! - [`ValidationMode::Strict`] accepts only the base key set and rejects
//!   everything else with `InvalidParams`.
//! - [`ValidationMode::Permissive`] additionally accepts the extended keys
//!   (color, price/display ranges, sorting) and silently ignores anything
//!   unrecognized.
//!
//! Values that fail to parse (e.g. `page=abc`, `count=0`) are rejected in
//! both modes.

use rust_decimal::Decimal;

use crate::DomainError;

/// How strictly unrecognized query parameters are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Reject any key outside the base allow-list.
    #[default]
    Strict,
    /// Accept the extended key set, ignore anything unrecognized.
    Permissive,
}

/// The `count` parameter: either a page size or `all` to bypass pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    All,
    Limit(u32),
}

/// Sortable product field (extended key set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Title,
}

/// Sort direction (extended key set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Parsed and validated query parameters for the goods listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoodsQuery {
    pub page: Option<u32>,
    pub count: Option<Count>,
    pub gender: Option<String>,
    pub category: Option<String>,
    /// The `type` parameter (exact-match filter on [`crate::Product::kind`]).
    pub kind: Option<String>,
    pub search: Option<String>,
    /// Ids from the `list` parameter. `Some(vec![])` when the key was present
    /// with an empty value; presence alone activates the list filter.
    pub list: Option<Vec<String>>,
    pub top: bool,
    pub exclude: Option<String>,
    pub color: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_display: Option<u32>,
    pub max_display: Option<u32>,
    pub sort: Option<SortKey>,
    pub direction: SortDirection,
}

impl GoodsQuery {
    /// Parse raw query pairs under the given validation mode.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParams`] for keys outside the strict
    /// allow-list (strict mode only) and for values that fail to parse in
    /// either mode.
    pub fn parse(
        pairs: &[(String, String)],
        mode: ValidationMode,
    ) -> Result<Self, DomainError> {
        let mut query = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => query.page = Some(parse_positive(key, value)?),
                "count" => {
                    query.count = Some(if value == "all" {
                        Count::All
                    } else {
                        Count::Limit(parse_positive(key, value)?)
                    });
                }
                "gender" => query.gender = Some(value.clone()),
                "category" => query.category = Some(value.clone()),
                "type" => query.kind = Some(value.clone()),
                "search" => query.search = Some(value.clone()),
                "list" => {
                    // Key presence matters even with an empty value.
                    query.list = Some(
                        value
                            .split(',')
                            .filter(|id| !id.is_empty())
                            .map(str::to_owned)
                            .collect(),
                    );
                }
                "top" => query.top = true,
                "exclude" => query.exclude = Some(value.clone()),
                extended if mode == ValidationMode::Strict => {
                    return Err(DomainError::InvalidParams(extended.to_owned()));
                }
                "color" => query.color = Some(value.clone()),
                "minprice" => query.min_price = Some(parse_decimal(key, value)?),
                "maxprice" => query.max_price = Some(parse_decimal(key, value)?),
                "mindisplay" => query.min_display = Some(parse_number(key, value)?),
                "maxdisplay" => query.max_display = Some(parse_number(key, value)?),
                "sort" => {
                    query.sort = Some(match value.as_str() {
                        "price" => SortKey::Price,
                        "title" => SortKey::Title,
                        _ => return Err(invalid(key, value)),
                    });
                }
                "direction" => {
                    query.direction = match value.as_str() {
                        "asc" => SortDirection::Ascending,
                        "desc" => SortDirection::Descending,
                        _ => return Err(invalid(key, value)),
                    };
                }
                _ => {} // permissive mode ignores unrecognized keys
            }
        }

        Ok(query)
    }
}

fn invalid(key: &str, value: &str) -> DomainError {
    DomainError::InvalidParams(format!("{key}={value}"))
}

fn parse_positive(key: &str, value: &str) -> Result<u32, DomainError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| invalid(key, value))
}

fn parse_number(key: &str, value: &str) -> Result<u32, DomainError> {
    value.parse::<u32>().map_err(|_| invalid(key, value))
}

fn parse_decimal(key: &str, value: &str) -> Result<Decimal, DomainError> {
    value.parse::<Decimal>().map_err(|_| invalid(key, value))
}
