use crate::services::bibliography::BibliographyService;
use crate::services::catalog::CatalogService;
use crate::services::loader::LoaderService;
use crate::services::path::PathService;
use crate::services::records::CourseRecordService;
use crate::services::user::UserService;
use crate::storage::repository::{
    BibliographyRepository, CourseRecordRepository, UserRepository,
};
use crate::storage::surrealdb::SurrealPool;
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SurrealPool,
    /// User repository for profile documents
    pub user_repository: Arc<UserRepository>,
    /// Course record repository for catalog documents
    pub record_repository: Arc<CourseRecordRepository>,
    /// Bibliography repository for reading material documents
    pub bibliography_repository: Arc<BibliographyRepository>,
    /// Catalog service for graph nodes and edges
    pub catalog_service: Arc<dyn CatalogService>,
    /// Path service for graph traversal and recommendations
    pub path_service: Arc<dyn PathService>,
    /// Loader service for bulk branch and taxonomy ingest
    pub loader_service: Arc<dyn LoaderService>,
    /// User service for profile business logic
    pub user_service: Arc<dyn UserService>,
    /// Course record service for catalog business logic
    pub record_service: Arc<dyn CourseRecordService>,
    /// Bibliography service for reading material business logic
    pub bibliography_service: Arc<dyn BibliographyService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db_pool", &"SurrealPool")
            .field("user_repository", &"Arc<UserRepository>")
            .field("record_repository", &"Arc<CourseRecordRepository>")
            .field("bibliography_repository", &"Arc<BibliographyRepository>")
            .field("catalog_service", &"Arc<dyn CatalogService>")
            .field("path_service", &"Arc<dyn PathService>")
            .field("loader_service", &"Arc<dyn LoaderService>")
            .field("user_service", &"Arc<dyn UserService>")
            .field("record_service", &"Arc<dyn CourseRecordService>")
            .field("bibliography_service", &"Arc<dyn BibliographyService>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        db_pool: SurrealPool,
        user_repository: UserRepository,
        record_repository: CourseRecordRepository,
        bibliography_repository: BibliographyRepository,
        catalog_service: Box<dyn CatalogService>,
        path_service: Box<dyn PathService>,
        loader_service: Box<dyn LoaderService>,
        user_service: Box<dyn UserService>,
        record_service: Box<dyn CourseRecordService>,
        bibliography_service: Box<dyn BibliographyService>,
    ) -> Self {
        Self {
            db_pool,
            user_repository: Arc::new(user_repository),
            record_repository: Arc::new(record_repository),
            bibliography_repository: Arc::new(bibliography_repository),
            catalog_service: Arc::from(catalog_service),
            path_service: Arc::from(path_service),
            loader_service: Arc::from(loader_service),
            user_service: Arc::from(user_service),
            record_service: Arc::from(record_service),
            bibliography_service: Arc::from(bibliography_service),
        }
    }
}
