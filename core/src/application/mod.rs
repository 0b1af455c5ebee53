use crate::{
    domain::common::{NutriLensConfig, services::Service},
    infrastructure::{
        daily_summary::repositories::daily_summary_repository::PostgresDailySummaryRepository,
        db::postgres::Postgres,
        food_entry::repositories::food_entry_repository::PostgresFoodEntryRepository,
        goal::repositories::goal_repository::PostgresGoalRepository,
        inference::InferenceBackend,
        object_storage::minio::MinioObjectStorage,
        profile::repositories::profile_repository::PostgresProfileRepository,
    },
};

pub type NutriLensService = Service<
    PostgresFoodEntryRepository,
    PostgresDailySummaryRepository,
    PostgresProfileRepository,
    PostgresGoalRepository,
    InferenceBackend,
    MinioObjectStorage,
>;

pub async fn create_service(config: NutriLensConfig) -> Result<NutriLensService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    let inference = InferenceBackend::from_config(&config.inference)?;
    let object_storage = MinioObjectStorage::new(config.object_storage);

    Ok(Service::new(
        PostgresFoodEntryRepository::new(db.clone()),
        PostgresDailySummaryRepository::new(db.clone()),
        PostgresProfileRepository::new(db.clone()),
        PostgresGoalRepository::new(db),
        inference,
        object_storage,
        config.pipeline,
    ))
}
