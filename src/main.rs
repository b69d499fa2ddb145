use pathways::api::{self, app_state::AppState};
use pathways::config::loader::ConfigLoader;
use pathways::observability::{ObservabilityState, create_observability_router, init_tracing};
use pathways::services::{
    create_bibliography_service, create_catalog_service, create_course_record_service,
    create_loader_service, create_path_service, create_user_service,
};
use pathways::storage::graph::{CourseGraph, SurrealCourseGraph};
use pathways::storage::repository::{
    BibliographyRepository, CourseRecordRepository, UserRepository,
};
use pathways::storage::surrealdb::SurrealPool;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("pathways");

    info!("Starting Pathways...");

    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;
    info!("Configuration loaded successfully");

    let db_pool = SurrealPool::new(config.database.clone()).await?;
    info!("Database connection pool initialized");

    let db = db_pool.inner().await;
    let user_repository = UserRepository::new(db.clone());
    let record_repository = CourseRecordRepository::new(db.clone());
    let bibliography_repository = BibliographyRepository::new(db.clone());
    info!("Repositories initialized");

    let graph: Arc<dyn CourseGraph> = Arc::new(SurrealCourseGraph::new(db));
    info!("Course graph initialized");

    let catalog_service = create_catalog_service(graph.clone());
    let path_service = create_path_service(graph.clone(), &config.path);
    let loader_service = create_loader_service(graph.clone());
    let user_service = create_user_service(Arc::new(user_repository.clone()), graph.clone());
    let record_service = create_course_record_service(Arc::new(record_repository.clone()));
    let bibliography_service = create_bibliography_service(
        Arc::new(bibliography_repository.clone()),
        Arc::new(record_repository.clone()),
    );
    info!("Services initialized");

    let app_state = AppState::new(
        db_pool.clone(),
        user_repository,
        record_repository,
        bibliography_repository,
        catalog_service,
        path_service,
        loader_service,
        user_service,
        record_service,
        bibliography_service,
    );
    info!("Application state created");

    // 创建可观测性状态并集成路由
    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
    ));
    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
