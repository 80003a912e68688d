//! Laptop specification entity and related types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::LaptopValidationError;

/// Screen resolution in pixels, written as `<width>x<height>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count (`width * height`)
    pub fn pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl FromStr for Resolution {
    type Err = LaptopValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LaptopValidationError::InvalidResolution {
            value: s.to_string(),
        };

        let (width, height) = s.split_once('x').ok_or_else(invalid)?;
        let width = width.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = height.trim().parse::<u32>().map_err(|_| invalid())?;

        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }
}

impl TryFrom<String> for Resolution {
    type Error = LaptopValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Resolution> for String {
    fn from(resolution: Resolution) -> Self {
        resolution.to_string()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Laptop specification submitted for a single price prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaptopSpec {
    /// Manufacturer name, e.g. "Apple"
    pub manufacturer: String,

    /// Product type, e.g. "Ultrabook"
    pub product_type: String,

    /// Screen diagonal in inches
    pub screen_inches: f64,

    /// Installed RAM in gigabytes
    pub ram_gb: u32,

    /// Weight in kilograms
    pub weight_kg: f64,

    #[serde(default)]
    pub touchscreen: bool,

    #[serde(default)]
    pub ips_panel: bool,

    pub resolution: Resolution,

    /// Primary storage capacity in gigabytes
    pub storage_size_gb: u32,

    /// Primary storage technology, e.g. "SSD"
    pub storage_type: String,
}

impl LaptopSpec {
    pub fn new(
        manufacturer: impl Into<String>,
        product_type: impl Into<String>,
        resolution: Resolution,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            product_type: product_type.into(),
            screen_inches: super::DEFAULT_SCREEN_INCHES,
            ram_gb: super::RAM_OPTIONS_GB[1],
            weight_kg: super::DEFAULT_WEIGHT_KG,
            touchscreen: false,
            ips_panel: false,
            resolution,
            storage_size_gb: super::DEFAULT_STORAGE_SIZE_GB,
            storage_type: super::STORAGE_TYPES[0].to_string(),
        }
    }

    pub fn with_screen_inches(mut self, inches: f64) -> Self {
        self.screen_inches = inches;
        self
    }

    pub fn with_ram_gb(mut self, ram_gb: u32) -> Self {
        self.ram_gb = ram_gb;
        self
    }

    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    pub fn with_touchscreen(mut self, touchscreen: bool) -> Self {
        self.touchscreen = touchscreen;
        self
    }

    pub fn with_ips_panel(mut self, ips_panel: bool) -> Self {
        self.ips_panel = ips_panel;
        self
    }

    pub fn with_storage(mut self, size_gb: u32, storage_type: impl Into<String>) -> Self {
        self.storage_size_gb = size_gb;
        self.storage_type = storage_type.into();
        self
    }

    /// Derived pixel count of the chosen resolution
    pub fn pixels(&self) -> u64 {
        self.resolution.pixels()
    }
}
