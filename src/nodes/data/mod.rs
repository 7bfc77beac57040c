//! Value source nodes

pub mod number_source;

pub use number_source::{NumberSourceModel, NumberSourceNodeFactory};
