//! SeaORM page source
//!
//! Adapts a SeaORM `Select<E>` plus a connection to [`PageSource`]. The
//! select carries whatever filters the caller applied; count and fetch both
//! run against it.

use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, Query};
use sea_orm::{
    ConnectionTrait, EntityTrait, FromQueryResult, Order, PaginatorTrait, QueryOrder,
    QuerySelect, QueryTrait, Select,
};

use crate::domain::paging::{PageSource, SortClause, SortDirection};
use crate::shared::PagingError;

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

pub struct SeaOrmSource<'db, E, C>
where
    E: EntityTrait,
{
    db: &'db C,
    select: Select<E>,
}

impl<'db, E, C> SeaOrmSource<'db, E, C>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    pub fn new(db: &'db C, select: Select<E>) -> Self {
        Self { db, select }
    }

    /// Source over every row of `E`.
    pub fn all(db: &'db C) -> Self {
        Self::new(db, E::find())
    }

    fn page_select(&self, limit: u64, offset: u64) -> Select<E> {
        self.select.clone().limit(limit).offset(offset)
    }
}

#[async_trait]
impl<'db, E, C> PageSource for SeaOrmSource<'db, E, C>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync + 'db,
    C: ConnectionTrait + Send + Sync,
{
    type Record = E::Model;
    type Clause = SortClause<E::Column>;

    fn apply_order(&mut self, clause: Self::Clause) {
        self.select = self
            .select
            .clone()
            .order_by(clause.column, clause.direction.into());
    }

    async fn count(&self) -> Result<u64, PagingError> {
        Ok(self.select.clone().count(self.db).await?)
    }

    async fn fetch(&self, limit: u64, offset: u64) -> Result<Vec<E::Model>, PagingError> {
        Ok(self.page_select(limit, offset).all(self.db).await?)
    }

    fn describe(&self, limit: u64, offset: u64) -> Option<String> {
        Some(
            self.page_select(limit, offset)
                .build(self.db.get_database_backend())
                .to_string(),
        )
    }

    fn describe_count(&self) -> Option<String> {
        let stmt = Query::select()
            .expr(Expr::cust("COUNT(*) AS num_items"))
            .from_subquery(self.select.clone().into_query(), Alias::new("sub_query"))
            .to_owned();
        Some(self.db.get_database_backend().build(&stmt).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::paging::{paging, PagingParams};
    use crate::infrastructure::database::entities::article;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use chrono::{Duration, TimeZone, Utc};
    use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
    use sea_orm_migration::MigratorTrait;

    async fn seeded_db(rows: usize) -> DatabaseConnection {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let models: Vec<article::ActiveModel> = (1..=rows)
            .map(|i| article::ActiveModel {
                title: Set(format!("Article {i:02}")),
                author: Set(if i % 2 == 0 { "ann" } else { "bob" }.to_string()),
                published_at: Set(base + Duration::days(i as i64)),
                ..Default::default()
            })
            .collect();
        article::Entity::insert_many(models).exec(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_paging_over_sqlite() {
        let db = seeded_db(23).await;
        let source = SeaOrmSource::<article::Entity, _>::all(&db);
        let params = PagingParams::new()
            .page(3)
            .limit(10)
            .order_by(SortClause::asc(article::Column::Id));

        let result = paging(source, params).await.unwrap();
        assert_eq!(result.total_records, 23);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.offset, 20);
        assert_eq!(result.prev_page, 2);
        assert_eq!(result.next_page, 3);

        let ids: Vec<i32> = result.records.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![21, 22, 23]);
    }

    #[tokio::test]
    async fn test_sort_clauses_apply_in_order() {
        let db = seeded_db(6).await;
        let params = PagingParams::new()
            .limit(6)
            .order_by(SortClause::parse("author").unwrap())
            .order_by(SortClause::parse("published_at desc").unwrap());

        let result = paging(SeaOrmSource::<article::Entity, _>::all(&db), params)
            .await
            .unwrap();
        let ids: Vec<i32> = result.records.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![6, 4, 2, 5, 3, 1]);
    }

    #[tokio::test]
    async fn test_filtered_select() {
        let db = seeded_db(9).await;
        let select = article::Entity::find().filter(article::Column::Author.eq("ann"));
        let params = PagingParams::new()
            .limit(3)
            .order_by(SortClause::desc(article::Column::Id));

        let result = paging(SeaOrmSource::new(&db, select), params).await.unwrap();
        assert_eq!(result.total_records, 4);
        assert_eq!(result.total_pages, 2);
        let ids: Vec<i32> = result.records.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![8, 6, 4]);
    }

    #[tokio::test]
    async fn test_describe_renders_limit_and_offset() {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        let source = SeaOrmSource::<article::Entity, _>::all(&db);
        let sql = source.describe(10, 20).unwrap();
        assert!(sql.contains("LIMIT 10"), "{sql}");
        assert!(sql.contains("OFFSET 20"), "{sql}");

        let count_sql = source.describe_count().unwrap();
        assert!(count_sql.starts_with("SELECT COUNT(*)"), "{count_sql}");
        assert!(count_sql.contains("\"articles\""), "{count_sql}");
    }

    #[tokio::test]
    async fn test_missing_table_surfaces_error() {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        let err = paging(
            SeaOrmSource::<article::Entity, _>::all(&db),
            PagingParams::new(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, PagingError::Database(_)));
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let err = SortClause::<article::Column>::parse("nope desc").unwrap_err();
        assert!(matches!(err, PagingError::InvalidSortClause(_)));
    }
}
