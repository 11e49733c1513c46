pub mod profile_file;
pub mod tag_file;
