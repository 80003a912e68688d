//! Laptop domain - user-facing specification, option lists, and validation

mod catalog;
mod entity;
mod validation;

pub use catalog::CategoryCatalog;
pub use entity::{LaptopSpec, Resolution};
pub use validation::{validate_laptop_spec, LaptopValidationError};

/// Standard screen diagonals offered by the form, in inches
pub const SCREEN_INCHES_OPTIONS: [f64; 9] = [11.6, 12.0, 12.5, 13.3, 14.0, 15.0, 15.6, 16.0, 17.3];

/// RAM sizes offered by the form, in gigabytes
pub const RAM_OPTIONS_GB: [u32; 5] = [4, 8, 16, 32, 64];

/// Common screen resolutions offered by the form
pub const RESOLUTION_OPTIONS: [Resolution; 8] = [
    Resolution::new(1366, 768),
    Resolution::new(1600, 900),
    Resolution::new(1920, 1080),
    Resolution::new(2560, 1440),
    Resolution::new(2560, 1600),
    Resolution::new(2880, 1800),
    Resolution::new(3200, 1800),
    Resolution::new(3840, 2160),
];

/// Storage technologies in form display order (not the encoding order)
pub const STORAGE_TYPES: [&str; 4] = ["SSD", "HDD", "Flash Storage", "Hybrid"];

pub const MIN_WEIGHT_KG: f64 = 0.5;
pub const MAX_WEIGHT_KG: f64 = 5.0;

pub const MIN_STORAGE_SIZE_GB: u32 = 32;
pub const MAX_STORAGE_SIZE_GB: u32 = 2000;

pub const DEFAULT_SCREEN_INCHES: f64 = 15.6;
pub const DEFAULT_WEIGHT_KG: f64 = 2.0;
pub const DEFAULT_STORAGE_SIZE_GB: u32 = 256;
