use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Initializes the global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and ensures the schema exists.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with the three tables present
/// - `Err(AppError::DbErr)` - Failed to connect or to create a table
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    ensure_schema(&db).await?;

    Ok(db)
}

/// Creates the module, student and exam tables when they are missing.
///
/// Tables are derived from the entities, including the UNIQUE constraints on
/// `modules.codice` and `students.email`. Existing tables are left untouched.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    create_table_if_missing(db, entity::prelude::Module).await?;
    create_table_if_missing(db, entity::prelude::Student).await?;
    create_table_if_missing(db, entity::prelude::Exam).await?;

    Ok(())
}

async fn create_table_if_missing<E: EntityTrait>(
    db: &DatabaseConnection,
    entity: E,
) -> Result<(), AppError> {
    let schema = Schema::new(db.get_database_backend());
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(&stmt).await?;

    Ok(())
}
