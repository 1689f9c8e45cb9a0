pub use crate::{
    error::FieldError,
    field_element::{FieldElement, PrimeField},
    poly::Polynomial,
};
