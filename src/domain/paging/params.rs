//! Paging parameters

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::PagingError;

pub const DEFAULT_PAGING_PAGE: u64 = 1;
pub const DEFAULT_PAGING_LIMIT: u64 = 10;

/// Largest row offset or limit a page query may carry. SQL drivers bind
/// both as signed 64-bit integers.
pub const MAX_PAGING_OFFSET: u64 = i64::MAX as u64;

/// Sort direction of a [`SortClause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One ordering clause: a column and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortClause<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C> SortClause<C> {
    pub fn asc(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }
}

impl<C: FromStr> SortClause<C> {
    /// Parse `"column"`, `"column asc"` or `"column desc"`.
    pub fn parse(clause: &str) -> Result<Self, PagingError> {
        let mut parts = clause.split_whitespace();

        let column = parts
            .next()
            .and_then(|name| C::from_str(name).ok())
            .ok_or_else(|| PagingError::invalid_sort(clause))?;

        let direction = match parts.next() {
            None => SortDirection::Asc,
            Some(dir) if dir.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(_) => return Err(PagingError::invalid_sort(clause)),
        };

        if parts.next().is_some() {
            return Err(PagingError::invalid_sort(clause));
        }

        Ok(Self { column, direction })
    }
}

/// Input to the paging executor.
///
/// `C` is the ordering clause type understood by the page source.
#[derive(Debug, Clone)]
pub struct PagingParams<C> {
    /// Requested page (1-based); values below 1 become 1
    pub page: u64,
    /// Rows per page; 0 becomes [`DEFAULT_PAGING_LIMIT`]
    pub limit: u64,
    /// Ordering clauses, applied in order
    pub order_by: Vec<C>,
    /// Log the generated statements at info level
    pub show_sql: bool,
}

impl<C> Default for PagingParams<C> {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGING_PAGE,
            limit: DEFAULT_PAGING_LIMIT,
            order_by: Vec::new(),
            show_sql: false,
        }
    }
}

impl<C> PagingParams<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn order_by(mut self, clause: C) -> Self {
        self.order_by.push(clause);
        self
    }

    pub fn show_sql(mut self, show_sql: bool) -> Self {
        self.show_sql = show_sql;
        self
    }

    /// Replace out-of-range page and limit values.
    ///
    /// Page 0 and limit 0 take their defaults. Larger values are capped so
    /// that neither the limit nor the resulting offset exceeds
    /// [`MAX_PAGING_OFFSET`].
    pub fn normalized(mut self) -> Self {
        if self.page < 1 {
            self.page = DEFAULT_PAGING_PAGE;
        }
        if self.limit == 0 {
            self.limit = DEFAULT_PAGING_LIMIT;
        }
        self.limit = self.limit.min(MAX_PAGING_OFFSET);
        self.page = self.page.min(MAX_PAGING_OFFSET / self.limit + 1);
        self
    }

    /// Rows to skip for the requested page.
    pub fn offset(&self) -> u64 {
        if self.page <= 1 {
            0
        } else {
            (self.page - 1).saturating_mul(self.limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Col {
        Id,
        Title,
    }

    impl FromStr for Col {
        type Err = ();

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "id" => Ok(Col::Id),
                "title" => Ok(Col::Title),
                _ => Err(()),
            }
        }
    }

    #[test]
    fn test_defaults_are_applied() {
        let params = PagingParams::<()>::new().page(0).limit(0).normalized();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, DEFAULT_PAGING_LIMIT);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_huge_values_are_capped() {
        let params = PagingParams::<()>::new().page(u64::MAX).limit(2).normalized();
        assert_eq!(params.page, MAX_PAGING_OFFSET / 2 + 1);
        assert!(params.offset() <= MAX_PAGING_OFFSET);

        let params = PagingParams::<()>::new().page(3).limit(u64::MAX).normalized();
        assert_eq!(params.limit, MAX_PAGING_OFFSET);
        assert_eq!(params.page, 2);
        assert_eq!(params.offset(), MAX_PAGING_OFFSET);
    }

    #[test]
    fn test_offset() {
        let params = PagingParams::<()>::new().page(1).limit(25);
        assert_eq!(params.offset(), 0);

        let params = PagingParams::<()>::new().page(4).limit(25);
        assert_eq!(params.offset(), 75);
    }

    #[test]
    fn test_builder_keeps_clause_order() {
        let params = PagingParams::new()
            .order_by(SortClause::desc(Col::Title))
            .order_by(SortClause::asc(Col::Id))
            .show_sql(true);
        assert_eq!(
            params.order_by,
            vec![SortClause::desc(Col::Title), SortClause::asc(Col::Id)]
        );
        assert!(params.show_sql);
    }

    #[test]
    fn test_parse_sort_clause() {
        assert_eq!(SortClause::<Col>::parse("id").unwrap(), SortClause::asc(Col::Id));
        assert_eq!(
            SortClause::<Col>::parse("title DESC").unwrap(),
            SortClause::desc(Col::Title)
        );
        assert_eq!(
            SortClause::<Col>::parse("  title   asc ").unwrap(),
            SortClause::asc(Col::Title)
        );
    }

    #[test]
    fn test_parse_sort_clause_rejects_garbage() {
        for clause in ["", "name", "id sideways", "id asc extra"] {
            let err = SortClause::<Col>::parse(clause).unwrap_err();
            assert!(matches!(err, PagingError::InvalidSortClause(_)), "{clause}");
        }
    }
}
