pub mod brand;
pub mod db;
pub mod errors;
pub mod motorcycle;
pub mod specification;
