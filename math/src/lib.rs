pub mod error;
pub mod field_element;
pub mod poly;
pub mod prelude;

pub use field_element::{FieldElement, PrimeField};
pub use poly::Polynomial;
