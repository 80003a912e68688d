//! Reference dataset - categorical value enumeration

mod reader;

pub use reader::{ReferenceDataset, MANUFACTURER_COLUMN, PRODUCT_TYPE_COLUMN};
