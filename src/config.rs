//! Configuration for cell indexing.
//!
//! A [`Config`] fixes the precision cells are produced at, either directly in
//! bits or derived from a search radius, and the metric used for distances.

use crate::distance::DistanceMetric;
use crate::hash::MAX_HASH_BITS;
use crate::precision::needed_precision;
use serde::de::Error;

/// Indexing configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Hash precision in bits, used when no radius is configured.
    #[serde(default = "Config::default_precision")]
    pub precision: u8,

    /// Search radius in kilometers; takes precedence over `precision`.
    #[serde(default)]
    pub radius_km: Option<f64>,

    #[serde(default)]
    pub distance_metric: DistanceMetric,
}

impl Config {
    const fn default_precision() -> u8 {
        30
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        if precision > MAX_HASH_BITS {
            log::warn!(
                "Precision of {} bits exceeds the {} bit maximum and will be clamped",
                precision,
                MAX_HASH_BITS
            );
        }
        self.precision = precision.min(MAX_HASH_BITS);
        self
    }

    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        assert!(
            radius_km.is_finite() && radius_km > 0.0,
            "Radius must be a positive number of kilometers"
        );
        self.radius_km = Some(radius_km);
        self
    }

    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    /// The precision cells are produced at, never above [`MAX_HASH_BITS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell::Config;
    ///
    /// assert_eq!(Config::default().effective_precision(), 30);
    /// assert_eq!(Config::default().with_radius_km(1.0).effective_precision(), 24);
    /// ```
    pub fn effective_precision(&self) -> u8 {
        let Some(radius_km) = self.radius_km else {
            return self.precision.min(MAX_HASH_BITS);
        };

        let needed = needed_precision(radius_km);
        if needed > MAX_HASH_BITS {
            log::warn!(
                "A radius of {} km needs {} bits; using the {} bit maximum",
                radius_km,
                needed,
                MAX_HASH_BITS
            );
        }
        needed.min(MAX_HASH_BITS)
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(radius_km) = self.radius_km
            && !(radius_km.is_finite() && radius_km > 0.0)
        {
            return Err(format!(
                "Radius must be a positive number of kilometers, got {}",
                radius_km
            ));
        }

        if self.precision > MAX_HASH_BITS {
            return Err(format!(
                "Precision must be at most {} bits, got {}",
                MAX_HASH_BITS, self.precision
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
            radius_km: None,
            distance_metric: DistanceMetric::default(),
        }
    }
}
