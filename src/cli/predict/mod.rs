//! Predict command - scores one laptop and prints the price breakdown

use clap::Args;

use super::load_config;
use crate::api::types::format_price;
use crate::config::PredictionConfig;
use crate::domain::laptop::{
    DEFAULT_SCREEN_INCHES, DEFAULT_STORAGE_SIZE_GB, DEFAULT_WEIGHT_KG,
};
use crate::domain::{LaptopSpec, PredictionResult, Resolution};
use crate::infrastructure::logging::{self, LoggingConfig};

/// Arguments for the predict command
#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    /// Manufacturer, e.g. Apple
    #[arg(long)]
    pub manufacturer: String,

    /// Product type, e.g. Ultrabook
    #[arg(long = "type")]
    pub product_type: String,

    /// Screen diagonal in inches
    #[arg(long, default_value_t = DEFAULT_SCREEN_INCHES)]
    pub screen_inches: f64,

    /// RAM in GB
    #[arg(long, default_value_t = 8)]
    pub ram: u32,

    /// Weight in kg
    #[arg(long, default_value_t = DEFAULT_WEIGHT_KG)]
    pub weight: f64,

    #[arg(long)]
    pub touchscreen: bool,

    #[arg(long)]
    pub ips: bool,

    /// Resolution as WIDTHxHEIGHT
    #[arg(long, default_value = "1920x1080")]
    pub resolution: Resolution,

    /// Primary storage size in GB
    #[arg(long, default_value_t = DEFAULT_STORAGE_SIZE_GB)]
    pub storage_size: u32,

    #[arg(long, default_value = "SSD")]
    pub storage_type: String,

    /// Contributions to print (defaults to the configured limit)
    #[arg(long)]
    pub limit: Option<usize>,
}

impl PredictArgs {
    pub fn to_spec(&self) -> LaptopSpec {
        LaptopSpec::new(
            self.manufacturer.clone(),
            self.product_type.clone(),
            self.resolution,
        )
        .with_screen_inches(self.screen_inches)
        .with_ram_gb(self.ram)
        .with_weight_kg(self.weight)
        .with_touchscreen(self.touchscreen)
        .with_ips_panel(self.ips)
        .with_storage(self.storage_size, self.storage_type.clone())
    }
}

/// Run a single prediction
pub fn run(args: PredictArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    logging::init_logging(&LoggingConfig {
        level: "warn".to_string(),
        format: config.logging.format.clone(),
    });

    let service = crate::create_prediction_service(&config)?;
    let result = service.predict(&args.to_spec())?;
    let limit = args.limit.unwrap_or(config.prediction.contributions_limit);

    print!("{}", render_report(&result, limit, &config.prediction));
    Ok(())
}

/// Price line followed by the largest contributions
pub fn render_report(result: &PredictionResult, limit: usize, settings: &PredictionConfig) -> String {
    let mut out = format!(
        "Predicted price: {}\n",
        format_price(result.price, &settings.currency_symbol)
    );

    let top = result.top_contributions(limit);
    if top.is_empty() {
        return out;
    }

    let width = top.iter().map(|c| c.feature.len()).max().unwrap_or(0);
    out.push_str(&format!(
        "\nTop {} of {} contributions:\n",
        top.len(),
        result.contributions.len()
    ));
    for contribution in top {
        out.push_str(&format!(
            "  {:<width$}  {:>+12.2}\n",
            contribution.feature,
            contribution.value,
            width = width
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};
    use crate::domain::Contribution;

    #[test]
    fn test_parse_predict_args() {
        let cli = Cli::try_parse_from([
            "laptop-price",
            "predict",
            "--manufacturer",
            "Apple",
            "--type",
            "Ultrabook",
            "--screen-inches",
            "13.3",
            "--resolution",
            "2560x1600",
            "--ips",
        ])
        .unwrap();

        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        let spec = args.to_spec();

        assert_eq!(spec.manufacturer, "Apple");
        assert_eq!(spec.resolution, Resolution::new(2560, 1600));
        assert!(spec.ips_panel);
        assert!(!spec.touchscreen);
        assert_eq!(spec.ram_gb, 8);
        assert_eq!(spec.storage_type, "SSD");
    }

    #[test]
    fn test_bad_resolution_is_rejected() {
        let result = Cli::try_parse_from([
            "laptop-price",
            "predict",
            "--manufacturer",
            "Apple",
            "--type",
            "Ultrabook",
            "--resolution",
            "wide",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_render_report() {
        let result = PredictionResult::new(
            1499.5,
            vec![
                Contribution::new("Ram", 120.0),
                Contribution::new("Weight", -30.25),
                Contribution::new("Pixels", 80.0),
            ],
        );

        let report = render_report(&result, 2, &PredictionConfig::default());

        assert!(report.starts_with("Predicted price: €1499.50\n"));
        assert!(report.contains("Top 2 of 3 contributions:"));
        assert!(report.contains("Ram"));
        assert!(report.contains("+120.00"));
        assert!(!report.contains("Weight"));
    }

    #[test]
    fn test_render_report_without_contributions() {
        let result = PredictionResult::new(-12.0, vec![Contribution::new("Ram", 1.0)]);

        let report = render_report(&result, 0, &PredictionConfig::default());
        assert_eq!(report, "Predicted price: -€12.00\n");
    }
}
