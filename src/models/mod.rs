mod product;
mod product_detail;

pub use product::*;
pub use product_detail::*;
