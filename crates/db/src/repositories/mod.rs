mod contact_repo;
mod post_repo;
mod project_repo;

pub use contact_repo::ContactRepo;
pub use post_repo::PostRepo;
pub use project_repo::ProjectRepo;
