pub mod product_detail_queries;
pub mod product_queries;
