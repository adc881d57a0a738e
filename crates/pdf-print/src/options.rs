use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed prepress measurements shared by every order.
///
/// One value is built per deployment and passed explicitly to the
/// calculators; orders never override it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintConstants {
    pub points_per_inch: f32,
    pub bleed_inches: f32,
    pub safe_zone_inches: f32,
    /// Space between the end of a crop mark and the trim line (points)
    pub crop_mark_gap_pt: f32,
    /// Stroke width of crop marks (points)
    pub crop_mark_width_pt: f32,
}

impl Default for PrintConstants {
    fn default() -> Self {
        Self {
            points_per_inch: POINTS_PER_INCH,
            bleed_inches: DEFAULT_BLEED_INCHES,
            safe_zone_inches: DEFAULT_SAFE_ZONE_INCHES,
            crop_mark_gap_pt: DEFAULT_CROP_MARK_GAP_PT,
            crop_mark_width_pt: DEFAULT_CROP_MARK_WIDTH_PT,
        }
    }
}

impl PrintConstants {
    /// Convert inches to points at this configuration's resolution
    pub fn to_points(&self, inches: f32) -> f32 {
        inches * self.points_per_inch
    }

    pub fn bleed_pts(&self) -> f32 {
        self.to_points(self.bleed_inches)
    }

    pub fn safe_zone_pts(&self) -> f32 {
        self.to_points(self.safe_zone_inches)
    }
}

/// Document composition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComposeOptions {
    pub constants: PrintConstants,
    /// Written to the PDF Producer entry
    pub producer: String,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            constants: PrintConstants::default(),
            producer: DEFAULT_PRODUCER.to_string(),
        }
    }
}

impl ComposeOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PrintError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PrintError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let c = &self.constants;

        if c.points_per_inch <= 0.0 {
            return Err(PrintError::Config(
                "Points per inch must be positive".to_string(),
            ));
        }

        if c.bleed_inches < 0.0 || c.safe_zone_inches < 0.0 {
            return Err(PrintError::Config(
                "Bleed and safe zone must not be negative".to_string(),
            ));
        }

        if c.crop_mark_gap_pt < 0.0 || c.crop_mark_gap_pt > c.bleed_pts() {
            return Err(PrintError::Config(format!(
                "Crop mark gap {}pt must lie within the {}pt bleed",
                c.crop_mark_gap_pt,
                c.bleed_pts()
            )));
        }

        if c.crop_mark_width_pt <= 0.0 {
            return Err(PrintError::Config(
                "Crop mark width must be positive".to_string(),
            ));
        }

        if self.producer.trim().is_empty() {
            return Err(PrintError::Config("Producer must not be empty".to_string()));
        }

        Ok(())
    }
}
