pub mod contact;
pub mod post;
pub mod project;
