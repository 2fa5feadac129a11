use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, StayError};
use crate::importer::load_bookings;
use crate::reports::{analyze, Analysis};
use crate::settings::Settings;

/// Everything one analysis run depends on. Built per invocation, never shared.
#[derive(Debug, Clone)]
pub struct Session {
    input: PathBuf,
    settings: Settings,
    fee_override: Option<f64>,
}

impl Session {
    pub fn new(input: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            input: input.into(),
            settings,
            fee_override: None,
        }
    }

    pub fn with_fee(mut self, fee: Option<f64>) -> Self {
        self.fee_override = fee;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn kurtaxe_fee(&self) -> f64 {
        self.fee_override.unwrap_or(self.settings.kurtaxe_fee)
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency
    }

    /// Load the input file and run the full pipeline over it.
    pub fn analyze(&self) -> Result<Analysis> {
        let fee = self.kurtaxe_fee();
        if !fee.is_finite() || fee < 0.0 {
            return Err(StayError::Settings(format!(
                "Kurtaxe fee must be a non-negative number, got {fee}"
            )));
        }
        let dataset = load_bookings(&self.input, &self.settings.columns)?;
        info!(fee, "analyzing bookings");
        analyze(&dataset, fee)
    }
}
