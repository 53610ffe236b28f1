//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod archive_repo;
pub mod good_repo;
pub mod project_repo;

pub use archive_repo::ArchiveRepo;
pub use good_repo::GoodRepo;
pub use project_repo::ProjectRepo;
