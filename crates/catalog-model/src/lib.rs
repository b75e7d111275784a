pub mod batch;
pub mod product;
pub mod unit;

pub use batch::{BatchPayload, ProductBatch};
pub use product::CanonicalProduct;
pub use unit::UnitType;
