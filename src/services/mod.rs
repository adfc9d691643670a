pub mod enrichment;
pub mod filtering;
pub mod freshness;
pub mod render;
pub mod sales_service;
pub mod wishlist;

#[cfg(test)]
pub(crate) mod testing;
