//! 服务模块

pub mod bibliography;
pub mod catalog;
pub mod loader;
pub mod path;
pub mod records;
pub mod user;

pub use bibliography::{BibliographyService, create_bibliography_service};
pub use catalog::{CatalogService, create_catalog_service};
pub use loader::{LoaderService, create_loader_service};
pub use path::{PathService, build_prerequisite_forest, create_path_service};
pub use records::{CourseRecordService, create_course_record_service};
pub use user::{UserService, create_user_service};
