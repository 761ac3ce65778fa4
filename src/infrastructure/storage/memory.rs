//! In-memory page source for development and testing

use std::cmp::Ordering;

use async_trait::async_trait;

use crate::domain::paging::PageSource;
use crate::shared::PagingError;

/// Ordering clause for [`MemorySource`]: a comparator over two records.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Ascending comparator on a derived key.
pub fn order_asc<T, K, F>(key: F) -> Comparator<T>
where
    T: 'static,
    K: Ord,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    Box::new(move |a, b| key(a).cmp(&key(b)))
}

/// Descending comparator on a derived key.
pub fn order_desc<T, K, F>(key: F) -> Comparator<T>
where
    T: 'static,
    K: Ord,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    Box::new(move |a, b| key(b).cmp(&key(a)))
}

/// Pages over a `Vec` held in memory.
pub struct MemorySource<T> {
    records: Vec<T>,
    ordering: Vec<Comparator<T>>,
    filter: Option<Filter<T>>,
}

impl<T> MemorySource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            ordering: Vec::new(),
            filter: None,
        }
    }

    /// Keep only records matching `filter`, for both count and fetch.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    fn matching(&self) -> impl Iterator<Item = &T> {
        self.records
            .iter()
            .filter(move |record| self.filter.as_ref().map_or(true, |f| f(*record)))
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.ordering
            .iter()
            .map(|cmp| cmp(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl<T> Default for MemorySource<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl<T> PageSource for MemorySource<T>
where
    T: Clone + Send + Sync,
{
    type Record = T;
    type Clause = Comparator<T>;

    fn apply_order(&mut self, clause: Self::Clause) {
        self.ordering.push(clause);
    }

    async fn count(&self) -> Result<u64, PagingError> {
        Ok(self.matching().count() as u64)
    }

    async fn fetch(&self, limit: u64, offset: u64) -> Result<Vec<T>, PagingError> {
        let mut rows: Vec<&T> = self.matching().collect();
        if !self.ordering.is_empty() {
            rows.sort_by(|a, b| self.compare(a, b));
        }

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(rows.into_iter().skip(offset).take(limit).cloned().collect())
    }

    fn describe(&self, limit: u64, offset: u64) -> Option<String> {
        Some(format!(
            "memory: {} records, {} order clauses, LIMIT {} OFFSET {}",
            self.records.len(),
            self.ordering.len(),
            limit,
            offset
        ))
    }

    fn describe_count(&self) -> Option<String> {
        Some(format!(
            "memory: COUNT over {} records (filtered: {})",
            self.records.len(),
            self.filter.is_some()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_slices_in_insertion_order() {
        let source = MemorySource::new(vec!["a", "b", "c", "d"]);
        assert_eq!(source.count().await.unwrap(), 4);
        assert_eq!(source.fetch(2, 1).await.unwrap(), vec!["b", "c"]);
        assert!(source.fetch(2, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ordering_is_stable() {
        let mut source = MemorySource::new(vec![(1, "x"), (0, "y"), (1, "a"), (0, "b")]);
        source.apply_order(order_asc(|r: &(i32, &str)| r.0));

        let rows = source.fetch(10, 0).await.unwrap();
        assert_eq!(rows, vec![(0, "y"), (0, "b"), (1, "x"), (1, "a")]);
    }

    #[tokio::test]
    async fn test_filter() {
        let source = MemorySource::new((1..=10).collect::<Vec<u32>>()).with_filter(|n| *n > 7);
        assert_eq!(source.count().await.unwrap(), 3);
        assert_eq!(source.fetch(10, 0).await.unwrap(), vec![8, 9, 10]);
    }

    #[test]
    fn test_describe() {
        let source = MemorySource::<u8>::default();
        assert_eq!(
            source.describe(10, 20).as_deref(),
            Some("memory: 0 records, 0 order clauses, LIMIT 10 OFFSET 20")
        );
        assert_eq!(
            source.describe_count().as_deref(),
            Some("memory: COUNT over 0 records (filtered: false)")
        );
    }
}
