pub mod product;

pub use product::{PayoffType, ProductConfig, ProductDraft, ProductKind};
