//! Nested definition parsing adapters

mod sub_element;

pub use sub_element::SubElementParser;
