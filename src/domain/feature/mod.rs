//! Feature domain - model input vectors and their construction

mod builder;
mod schema;
mod vector;

pub use builder::{generated_column_names, one_hot_column, FeatureVectorBuilder};
pub use schema::{SchemaPolicy, SchemaReport};
pub use vector::FeatureVector;

pub const INCHES_COLUMN: &str = "Inches";
pub const RAM_COLUMN: &str = "Ram";
pub const WEIGHT_COLUMN: &str = "Weight";
pub const TOUCHSCREEN_COLUMN: &str = "Touchscreen";
pub const IPS_PANEL_COLUMN: &str = "IPS_Panel";
pub const PIXELS_COLUMN: &str = "Pixels";
pub const STORAGE_SIZE_COLUMN: &str = "Storage_Size_GB";

pub const MANUFACTURER_PREFIX: &str = "Company";
pub const PRODUCT_TYPE_PREFIX: &str = "TypeName";
pub const STORAGE_TYPE_PREFIX: &str = "Storage_Type";
