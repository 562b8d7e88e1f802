use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::customer;
use crate::db::{connect_with_config, DatabaseConfig};
use crate::errors::ModelError;

/// Fresh in-memory database with the schema applied. A single pooled
/// connection keeps the in-memory store alive for the test's duration.
async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout: Duration::from_secs(10),
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn sample_row(firstname: &str, lastname: &str) -> customer::Model {
    customer::Model {
        id: 0,
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        street: "Am Köpfen 124".to_string(),
        postcode: "21451".to_string(),
        city: "Hamburg".to_string(),
        country: "de".to_string(),
    }
}

#[tokio::test]
async fn test_customer_insert_assigns_ids() -> Result<()> {
    let db = setup_test_db().await?;

    let first = customer::insert(&db, sample_row("Horst", "Hrubesch")).await?;
    assert!(first.id > 0);
    assert_eq!(first.firstname, "Horst");

    let second = customer::insert(&db, sample_row("Monika", "Musterfrau")).await?;
    assert!(second.id > first.id);

    let found = customer::find_by_id(&db, first.id).await?;
    assert_eq!(found, Some(first));

    Ok(())
}

#[tokio::test]
async fn test_customer_full_row_update() -> Result<()> {
    let db = setup_test_db().await?;

    let created = customer::insert(&db, sample_row("Horst", "Hrubesch")).await?;
    let changed = customer::Model { firstname: "Monika".to_string(), city: "Bremen".to_string(), ..created.clone() };

    let updated = customer::update(&db, changed.clone()).await?;
    assert_eq!(updated, changed);

    let found = customer::find_by_id(&db, created.id).await?.unwrap();
    assert_eq!(found.firstname, "Monika");
    assert_eq!(found.city, "Bremen");
    assert_eq!(found.id, created.id);

    Ok(())
}

#[tokio::test]
async fn test_customer_update_missing_row_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;

    let ghost = customer::Model { id: 4711, ..sample_row("Horst", "Hrubesch") };
    let err = customer::update(&db, ghost).await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound));

    Ok(())
}

#[tokio::test]
async fn test_customer_list_ordered_by_lastname_then_firstname() -> Result<()> {
    let db = setup_test_db().await?;

    customer::insert(&db, sample_row("Horst", "Hrubesch")).await?;
    customer::insert(&db, sample_row("Berta", "Abt")).await?;
    customer::insert(&db, sample_row("Anna", "Abt")).await?;

    let all = customer::find_all_ordered(&db).await?;
    let names: Vec<(String, String)> = all.into_iter().map(|c| (c.lastname, c.firstname)).collect();
    assert_eq!(
        names,
        vec![
            ("Abt".to_string(), "Anna".to_string()),
            ("Abt".to_string(), "Berta".to_string()),
            ("Hrubesch".to_string(), "Horst".to_string()),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_customer_delete_reports_match() -> Result<()> {
    let db = setup_test_db().await?;

    let created = customer::insert(&db, sample_row("Horst", "Hrubesch")).await?;

    assert!(customer::delete_by_id(&db, created.id).await?);
    assert_eq!(customer::find_by_id(&db, created.id).await?, None);

    // Deleting the same id again is a miss, not an error
    assert!(!customer::delete_by_id(&db, created.id).await?);

    Ok(())
}
