//! Page request and page envelope primitives.
//!
//! Handlers parse raw query parameters into a [`PageParams`] value, validate
//! it into a [`PageRequest`], and hand that to a repository. Repositories
//! answer with a [`Page`], which serialises to the JSON envelope clients see:
//!
//! ```json
//! {
//!   "content": [],
//!   "number": 0,
//!   "size": 20,
//!   "totalElements": 0,
//!   "totalPages": 0,
//!   "numberOfElements": 0,
//!   "first": true,
//!   "last": true,
//!   "empty": true
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound applied when the caller does not configure one.
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 2000;

/// Validation failures raised while building a [`PageRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The requested page size was zero.
    #[error("page size must be at least 1")]
    ZeroSize,
    /// The requested page size exceeds the configured maximum.
    #[error("page size must not exceed {max}")]
    SizeTooLarge {
        /// Maximum permitted page size.
        max: u32,
    },
    /// The sort expression could not be parsed.
    #[error("sort must look like `property` or `property,asc|desc`: {value}")]
    InvalidSort {
        /// Raw sort expression supplied by the caller.
        value: String,
    },
    /// The sort property is not one the caller may order by.
    #[error("cannot sort by `{property}`")]
    UnsupportedSortProperty {
        /// Property the caller asked to sort by.
        property: String,
    },
}

impl PageRequestError {
    /// Name of the query parameter the failure relates to.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequestError;
    ///
    /// assert_eq!(PageRequestError::ZeroSize.field(), "size");
    /// ```
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ZeroSize | Self::SizeTooLarge { .. } => "size",
            Self::InvalidSort { .. } | Self::UnsupportedSortProperty { .. } => "sort",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smallest value first.
    #[default]
    Asc,
    /// Largest value first.
    Desc,
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(())
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// A single sort instruction: a property name and a direction.
///
/// # Examples
/// ```
/// use pagination::{Direction, SortOrder};
///
/// let order: SortOrder = "name,desc".parse().expect("valid sort");
/// assert_eq!(order.property(), "name");
/// assert_eq!(order.direction(), Direction::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortOrder {
    property: String,
    direction: Direction,
}

impl SortOrder {
    /// Build a sort order from its parts.
    pub fn new(property: impl Into<String>, direction: Direction) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }

    /// Property to order by.
    #[must_use]
    pub fn property(&self) -> &str {
        self.property.as_str()
    }

    /// Direction of the ordering.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

fn is_property_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

impl FromStr for SortOrder {
    type Err = PageRequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || PageRequestError::InvalidSort {
            value: value.to_owned(),
        };
        let mut parts = value.split(',').map(str::trim);
        let property = parts.next().filter(|p| is_property_name(p)).ok_or_else(invalid)?;
        let direction = match parts.next() {
            None => Direction::default(),
            Some(raw) => raw.parse().map_err(|()| invalid())?,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(property, direction))
    }
}

/// Validated request for one page of results.
///
/// ## Invariants
/// - `size` is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Option<SortOrder>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl PageRequest {
    /// Request the zero-based `page` holding `size` elements.
    ///
    /// # Errors
    /// Returns [`PageRequestError::ZeroSize`] when `size` is zero.
    pub const fn new(page: u32, size: u32) -> Result<Self, PageRequestError> {
        if size == 0 {
            return Err(PageRequestError::ZeroSize);
        }
        Ok(Self {
            page,
            size,
            sort: None,
        })
    }

    /// Attach a sort order.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Zero-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of elements on the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Requested ordering, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<&SortOrder> {
        self.sort.as_ref()
    }

    /// Number of elements preceding this page.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::new(3, 20).expect("valid request");
    /// assert_eq!(request.offset(), 60);
    /// ```
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// Raw paging query parameters as clients send them.
///
/// `?page=1&size=10&sort=name,desc`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageParams {
    /// Zero-based page number.
    pub page: Option<u32>,
    /// Requested page size.
    pub size: Option<u32>,
    /// Sort expression, `property[,asc|desc]`.
    pub sort: Option<String>,
}

impl PageParams {
    /// Validate the parameters, filling defaults for absent values.
    ///
    /// `sortable` lists the properties callers may order by.
    ///
    /// # Errors
    /// Returns a [`PageRequestError`] naming the first invalid parameter.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageParams, PageRequestError};
    ///
    /// let params = PageParams { page: None, size: Some(5000), sort: None };
    /// let err = params.into_request(2000, &["id"]).expect_err("too large");
    /// assert_eq!(err, PageRequestError::SizeTooLarge { max: 2000 });
    /// ```
    pub fn into_request(
        self,
        max_size: u32,
        sortable: &[&str],
    ) -> Result<PageRequest, PageRequestError> {
        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size > max_size {
            return Err(PageRequestError::SizeTooLarge { max: max_size });
        }
        let request = PageRequest::new(self.page.unwrap_or(0), size)?;
        match self.sort.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
            None => Ok(request),
            Some(raw) => {
                let order: SortOrder = raw.parse()?;
                if !sortable.contains(&order.property()) {
                    return Err(PageRequestError::UnsupportedSortProperty {
                        property: order.property().to_owned(),
                    });
                }
                Ok(request.with_sort(order))
            }
        }
    }
}

/// One page of results plus the metadata needed to walk the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Elements on this page.
    pub content: Vec<T>,
    /// Zero-based page number.
    pub number: u32,
    /// Requested page size.
    pub size: u32,
    /// Number of elements across all pages.
    pub total_elements: u64,
    /// Number of pages needed to hold every element.
    pub total_pages: u64,
    /// Number of elements on this page.
    pub number_of_elements: usize,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether no page follows this one.
    pub last: bool,
    /// Whether this page holds no elements.
    pub empty: bool,
}

impl<T> Page<T> {
    /// Assemble a page from its content and the request that produced it.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageRequest};
    ///
    /// let request = PageRequest::new(0, 2).expect("valid request");
    /// let page = Page::new(vec!["a", "b"], &request, 5);
    /// assert_eq!(page.total_pages, 3);
    /// assert!(page.first);
    /// assert!(!page.last);
    /// ```
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(u64::from(request.size()));
        let number = request.page();
        let number_of_elements = content.len();
        Self {
            empty: content.is_empty(),
            content,
            number,
            size: request.size(),
            total_elements,
            total_pages,
            number_of_elements,
            first: number == 0,
            last: u64::from(number) + 1 >= total_pages,
        }
    }

    /// Transform every element while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for request validation and envelope metadata.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("name", "name", Direction::Asc)]
    #[case("name,desc", "name", Direction::Desc)]
    #[case("id, ASC", "id", Direction::Asc)]
    fn sort_order_parses(
        #[case] raw: &str,
        #[case] property: &str,
        #[case] direction: Direction,
    ) {
        let order: SortOrder = raw.parse().expect("valid sort");
        assert_eq!(order, SortOrder::new(property, direction));
    }

    #[rstest]
    #[case(",asc")]
    #[case("name,sideways")]
    #[case("name,asc,extra")]
    #[case("na-me")]
    fn sort_order_rejects_malformed_input(#[case] raw: &str) {
        let err = raw.parse::<SortOrder>().expect_err("malformed sort");
        assert!(matches!(err, PageRequestError::InvalidSort { .. }));
        assert_eq!(err.field(), "sort");
    }

    #[rstest]
    fn params_default_to_first_page_of_twenty() {
        let request = PageParams::default()
            .into_request(DEFAULT_MAX_PAGE_SIZE, &["id"])
            .expect("defaults are valid");
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.offset(), 0);
    }

    #[rstest]
    fn params_reject_zero_size() {
        let params = PageParams {
            size: Some(0),
            ..PageParams::default()
        };
        let err = params
            .into_request(DEFAULT_MAX_PAGE_SIZE, &["id"])
            .expect_err("zero size");
        assert_eq!(err, PageRequestError::ZeroSize);
    }

    #[rstest]
    fn params_reject_unknown_sort_property() {
        let params = PageParams {
            sort: Some("rating,desc".to_owned()),
            ..PageParams::default()
        };
        let err = params
            .into_request(DEFAULT_MAX_PAGE_SIZE, &["id", "name"])
            .expect_err("unsupported property");
        assert_eq!(
            err,
            PageRequestError::UnsupportedSortProperty {
                property: "rating".to_owned()
            }
        );
    }

    #[rstest]
    fn blank_sort_is_ignored() {
        let params = PageParams {
            sort: Some("  ".to_owned()),
            ..PageParams::default()
        };
        let request = params
            .into_request(DEFAULT_MAX_PAGE_SIZE, &["id"])
            .expect("blank sort is ignored");
        assert!(request.sort().is_none());
    }

    #[rstest]
    #[case(0, 10, 25, 3, true, false)]
    #[case(2, 10, 25, 3, false, true)]
    #[case(0, 10, 0, 0, true, true)]
    #[case(5, 10, 25, 3, false, true)]
    fn page_metadata_reflects_position(
        #[case] page: u32,
        #[case] size: u32,
        #[case] total: u64,
        #[case] total_pages: u64,
        #[case] first: bool,
        #[case] last: bool,
    ) {
        let request = PageRequest::new(page, size).expect("valid request");
        let page = Page::new(Vec::<u8>::new(), &request, total);
        assert_eq!(page.total_pages, total_pages);
        assert_eq!(page.first, first);
        assert_eq!(page.last, last);
        assert!(page.empty);
    }

    #[rstest]
    fn page_serialises_camel_case_envelope() {
        let request = PageRequest::new(0, 2).expect("valid request");
        let page = Page::new(vec![1, 2], &request, 3).map(|n| n * 10);
        let value = serde_json::to_value(&page).expect("serialise page");
        assert_eq!(value["content"], serde_json::json!([10, 20]));
        assert_eq!(value["totalElements"], 3);
        assert_eq!(value["totalPages"], 2);
        assert_eq!(value["numberOfElements"], 2);
        assert_eq!(value["last"], false);
    }
}
