pub mod contact;
pub mod home_page;
pub mod not_found;
pub mod project_edit;
pub mod projects;
