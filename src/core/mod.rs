pub mod calculator;
pub mod form;

pub use form::{Calculation, FormState};
