pub mod error;
pub mod option;
