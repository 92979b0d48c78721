pub mod brand_service;
pub mod errors;
pub mod motorcycle_service;
pub mod pagination;
pub mod specification_service;

#[cfg(test)]
mod test_support;
