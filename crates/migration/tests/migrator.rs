use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm_migration::sea_orm::{ConnectOptions, Database, DatabaseConnection};

const TABLES: [&str; 7] = [
    "semesters",
    "departments",
    "categories",
    "teachers",
    "courses",
    "course_categories",
    "course_teachers",
];

async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    Database::connect(opts).await.unwrap()
}

#[tokio::test]
async fn up_creates_every_table() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(manager.has_table(table).await.unwrap(), "missing {table}");
    }
    assert!(
        manager
            .has_index("courses", "uq_courses_code_main_teacher")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn down_removes_every_table() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();
    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(!manager.has_table(table).await.unwrap(), "leftover {table}");
    }
}
