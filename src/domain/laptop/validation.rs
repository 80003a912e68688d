//! Laptop specification validation

use thiserror::Error;

use super::{
    CategoryCatalog, LaptopSpec, MAX_STORAGE_SIZE_GB, MAX_WEIGHT_KG, MIN_STORAGE_SIZE_GB,
    MIN_WEIGHT_KG, RAM_OPTIONS_GB, RESOLUTION_OPTIONS, SCREEN_INCHES_OPTIONS,
};
use crate::domain::DomainError;

/// Screen sizes are compared with this tolerance to absorb float formatting
const INCHES_TOLERANCE: f64 = 1e-6;

/// Laptop specification validation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LaptopValidationError {
    #[error("Unknown manufacturer '{0}'")]
    UnknownManufacturer(String),

    #[error("Unknown product type '{0}'")]
    UnknownProductType(String),

    #[error("Unknown storage type '{0}'")]
    UnknownStorageType(String),

    #[error("Unsupported screen size {0} inches")]
    UnsupportedScreenSize(f64),

    #[error("Unsupported RAM size {0} GB")]
    UnsupportedRam(u32),

    #[error("Invalid resolution '{value}': expected <width>x<height>")]
    InvalidResolution { value: String },

    #[error("Unsupported resolution '{0}'")]
    UnsupportedResolution(String),

    #[error("Invalid weight {value} kg: must be between {min} and {max}")]
    InvalidWeight { value: f64, min: f64, max: f64 },

    #[error("Invalid storage size {value} GB: must be between {min} and {max}")]
    InvalidStorageSize { value: u32, min: u32, max: u32 },
}

impl From<LaptopValidationError> for DomainError {
    fn from(err: LaptopValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Validate a weight in kilograms (inclusive bounds)
pub fn validate_weight(weight_kg: f64) -> Result<(), LaptopValidationError> {
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(LaptopValidationError::InvalidWeight {
            value: weight_kg,
            min: MIN_WEIGHT_KG,
            max: MAX_WEIGHT_KG,
        });
    }

    Ok(())
}

/// Validate a storage size in gigabytes (inclusive bounds)
pub fn validate_storage_size(size_gb: u32) -> Result<(), LaptopValidationError> {
    if !(MIN_STORAGE_SIZE_GB..=MAX_STORAGE_SIZE_GB).contains(&size_gb) {
        return Err(LaptopValidationError::InvalidStorageSize {
            value: size_gb,
            min: MIN_STORAGE_SIZE_GB,
            max: MAX_STORAGE_SIZE_GB,
        });
    }

    Ok(())
}

pub fn validate_screen_inches(inches: f64) -> Result<(), LaptopValidationError> {
    let supported = SCREEN_INCHES_OPTIONS
        .iter()
        .any(|option| (option - inches).abs() < INCHES_TOLERANCE);

    if !supported {
        return Err(LaptopValidationError::UnsupportedScreenSize(inches));
    }

    Ok(())
}

pub fn validate_ram(ram_gb: u32) -> Result<(), LaptopValidationError> {
    if !RAM_OPTIONS_GB.contains(&ram_gb) {
        return Err(LaptopValidationError::UnsupportedRam(ram_gb));
    }

    Ok(())
}

/// Validate a complete LaptopSpec against the option lists and catalog
pub fn validate_laptop_spec(
    spec: &LaptopSpec,
    catalog: &CategoryCatalog,
) -> Result<(), LaptopValidationError> {
    if !catalog.has_manufacturer(&spec.manufacturer) {
        return Err(LaptopValidationError::UnknownManufacturer(
            spec.manufacturer.clone(),
        ));
    }

    if !catalog.has_product_type(&spec.product_type) {
        return Err(LaptopValidationError::UnknownProductType(
            spec.product_type.clone(),
        ));
    }

    if !catalog.has_storage_type(&spec.storage_type) {
        return Err(LaptopValidationError::UnknownStorageType(
            spec.storage_type.clone(),
        ));
    }

    validate_screen_inches(spec.screen_inches)?;
    validate_ram(spec.ram_gb)?;
    validate_weight(spec.weight_kg)?;
    validate_storage_size(spec.storage_size_gb)?;

    if !RESOLUTION_OPTIONS.contains(&spec.resolution) {
        return Err(LaptopValidationError::UnsupportedResolution(
            spec.resolution.to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::laptop::Resolution;

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::new(["Apple", "Dell"], ["Notebook", "Ultrabook"])
    }

    fn valid_spec() -> LaptopSpec {
        LaptopSpec::new("Apple", "Ultrabook", Resolution::new(2560, 1600))
            .with_screen_inches(13.3)
            .with_ram_gb(8)
            .with_weight_kg(1.3)
            .with_storage(256, "SSD")
    }

    #[test]
    fn test_valid_spec() {
        assert!(validate_laptop_spec(&valid_spec(), &catalog()).is_ok());
    }

    #[test]
    fn test_weight_bounds_inclusive() {
        assert!(validate_weight(0.5).is_ok());
        assert!(validate_weight(5.0).is_ok());
        assert!(validate_weight(2.0).is_ok());

        assert!(validate_weight(0.49).is_err());
        assert!(validate_weight(5.01).is_err());
        assert!(validate_weight(f64::NAN).is_err());
    }

    #[test]
    fn test_storage_bounds_inclusive() {
        assert!(validate_storage_size(32).is_ok());
        assert!(validate_storage_size(2000).is_ok());

        assert!(matches!(
            validate_storage_size(31),
            Err(LaptopValidationError::InvalidStorageSize { .. })
        ));
        assert!(validate_storage_size(2001).is_err());
    }

    #[test]
    fn test_boundary_specs_accepted() {
        let light = valid_spec().with_weight_kg(0.5).with_storage(32, "Flash Storage");
        let heavy = valid_spec().with_weight_kg(5.0).with_storage(2000, "HDD");

        assert!(validate_laptop_spec(&light, &catalog()).is_ok());
        assert!(validate_laptop_spec(&heavy, &catalog()).is_ok());
    }

    #[test]
    fn test_screen_and_ram_options() {
        assert!(validate_screen_inches(15.6).is_ok());
        assert!(validate_screen_inches(17.3).is_ok());
        assert!(validate_screen_inches(10.1).is_err());

        assert!(validate_ram(64).is_ok());
        assert!(matches!(
            validate_ram(12),
            Err(LaptopValidationError::UnsupportedRam(12))
        ));
    }

    #[test]
    fn test_unknown_categories() {
        let mut spec = valid_spec();
        spec.manufacturer = "Commodore".to_string();
        assert!(matches!(
            validate_laptop_spec(&spec, &catalog()),
            Err(LaptopValidationError::UnknownManufacturer(_))
        ));

        let mut spec = valid_spec();
        spec.product_type = "Tablet".to_string();
        assert!(matches!(
            validate_laptop_spec(&spec, &catalog()),
            Err(LaptopValidationError::UnknownProductType(_))
        ));

        let spec = valid_spec().with_storage(256, "Tape");
        assert!(matches!(
            validate_laptop_spec(&spec, &catalog()),
            Err(LaptopValidationError::UnknownStorageType(_))
        ));
    }

    #[test]
    fn test_unsupported_resolution() {
        let mut spec = valid_spec();
        spec.resolution = Resolution::new(1024, 768);

        assert_eq!(
            validate_laptop_spec(&spec, &catalog()),
            Err(LaptopValidationError::UnsupportedResolution(
                "1024x768".to_string()
            ))
        );
    }

    #[test]
    fn test_conversion_to_domain_error() {
        let err: DomainError = LaptopValidationError::UnsupportedRam(3).into();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Validation error: Unsupported RAM size 3 GB");
    }
}
