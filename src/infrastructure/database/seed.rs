//! Demo data for the article listing

use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use super::entities::article;

const AUTHORS: [&str; 4] = ["Ann Lee", "Bob Stone", "Cara Diaz", "Dan Wu"];

/// Insert `count` demo articles when the table is empty.
///
/// Returns the number of rows inserted, 0 when the table already had data.
pub async fn seed_demo_articles<C>(db: &C, count: u32) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let existing = article::Entity::find().count(db).await?;
    if existing > 0 || count == 0 {
        return Ok(0);
    }

    let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).single().unwrap_or_else(Utc::now);
    let rows: Vec<article::ActiveModel> = (1..=count)
        .map(|i| article::ActiveModel {
            title: Set(format!("Article {i:03}")),
            author: Set(AUTHORS[(i as usize - 1) % AUTHORS.len()].to_string()),
            published_at: Set(base + Duration::hours(i64::from(i) * 6)),
            ..Default::default()
        })
        .collect();

    article::Entity::insert_many(rows).exec(db).await?;
    info!("Seeded {} demo articles", count);
    Ok(u64::from(count))
}
