pub mod description;
pub mod monkey;
