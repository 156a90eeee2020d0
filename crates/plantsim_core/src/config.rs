//! Configuration management for plant and game parameters.
//!
//! Every constant the growth model uses lives here so tests and players can
//! run the game with other tunings. The structures map onto `config.toml`.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command line arguments (override the `[game]` table)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [game]
//! name = "Plant simulation"
//! max_time_period = 20
//! max_plant_size = 10.0
//!
//! [plant]
//! initial_size = 1.0
//!
//! [plant.resources.water]
//! consumption_rate = 100.0
//! growth_rate = 0.01
//! growth_coefficient = 0.33
//! tolerance_range = [-0.5, 0.5]
//! ```

use plantsim_data::{PerResource, Resource};
use serde::{Deserialize, Deserializer, Serialize};

/// Name used when the player leaves the game unnamed.
pub const FALLBACK_GAME_NAME: &str = "Plant";
pub const DEFAULT_GAME_NAME: &str = "Plant simulation";
pub const DEFAULT_MAX_TIME_PERIOD: i64 = 20;
pub const DEFAULT_MAX_PLANT_SIZE: f64 = 10.0;

/// Growth parameters for one resource.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ResourceParams {
    /// Units needed per inch of plant per round.
    pub consumption_rate: f64,
    /// Inches gained per unit consumed.
    pub growth_rate: f64,
    /// Weight of this resource in the growth sum, in `[0, 1]`.
    pub growth_coefficient: f64,
    /// `(low, high)` fractions of last round's need the delta must stay within.
    pub tolerance_range: (f64, f64),
}

impl ResourceParams {
    #[must_use]
    pub fn default_for(resource: Resource) -> Self {
        let (consumption_rate, growth_rate) = match resource {
            Resource::Water => (100.0, 0.01),
            Resource::Light => (10.0, 0.1),
            Resource::Nutrients => (5.0, 0.2),
        };
        Self {
            consumption_rate,
            growth_rate,
            growth_coefficient: 0.33,
            tolerance_range: (-0.5, 0.5),
        }
    }
}

/// Fields given in one `[plant.resources.*]` table; the rest stay default.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ResourceOverrides {
    consumption_rate: Option<f64>,
    growth_rate: Option<f64>,
    growth_coefficient: Option<f64>,
    tolerance_range: Option<(f64, f64)>,
}

impl ResourceOverrides {
    fn apply(&self, base: ResourceParams) -> ResourceParams {
        ResourceParams {
            consumption_rate: self.consumption_rate.unwrap_or(base.consumption_rate),
            growth_rate: self.growth_rate.unwrap_or(base.growth_rate),
            growth_coefficient: self.growth_coefficient.unwrap_or(base.growth_coefficient),
            tolerance_range: self.tolerance_range.unwrap_or(base.tolerance_range),
        }
    }
}

fn resources_over_defaults<'de, D>(
    deserializer: D,
) -> Result<PerResource<ResourceParams>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = PerResource::<Option<ResourceOverrides>>::deserialize(deserializer)?;
    Ok(PerResource::from_fn(|resource| {
        let base = ResourceParams::default_for(resource);
        overrides[resource]
            .as_ref()
            .map_or(base, |table| table.apply(base))
    }))
}

/// Everything a [`Plant`](crate::plant::Plant) is built from.
///
/// Missing keys, and missing resource tables, take the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlantConfig {
    /// Size in inches at the start of the game.
    pub initial_size: f64,
    #[serde(deserialize_with = "resources_over_defaults")]
    pub resources: PerResource<ResourceParams>,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            initial_size: 1.0,
            resources: PerResource::from_fn(ResourceParams::default_for),
        }
    }
}

/// Game name and limits as supplied by the player.
///
/// Non-positive limits are legal input; [`GameConfig::normalized`] swaps them
/// for the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub name: String,
    pub max_time_period: i64,
    pub max_plant_size: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_GAME_NAME.to_string(),
            max_time_period: DEFAULT_MAX_TIME_PERIOD,
            max_plant_size: DEFAULT_MAX_PLANT_SIZE,
        }
    }
}

impl GameConfig {
    pub fn new(name: impl Into<String>, max_time_period: i64, max_plant_size: f64) -> Self {
        Self {
            name: name.into(),
            max_time_period,
            max_plant_size,
        }
    }

    /// Applies the fallbacks for an empty name and non-positive limits.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let name = if self.name.trim().is_empty() {
            FALLBACK_GAME_NAME.to_string()
        } else {
            self.name.clone()
        };
        let max_time_period = if self.max_time_period > 0 {
            self.max_time_period
        } else {
            DEFAULT_MAX_TIME_PERIOD
        };
        // NaN falls through to the default as well.
        let max_plant_size = if self.max_plant_size > 0.0 {
            self.max_plant_size
        } else {
            DEFAULT_MAX_PLANT_SIZE
        };
        Self {
            name,
            max_time_period,
            max_plant_size,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub plant: PlantConfig,
}

impl AppConfig {
    /// Validates the plant parameters.
    ///
    /// Game limits are not checked here: non-positive values are replaced by
    /// defaults when the game starts.
    ///
    /// # Validation Rules
    /// - Initial size must be positive and finite
    /// - Consumption and growth rates must be positive
    /// - Growth coefficients must be in `[0.0, 1.0]`
    /// - Tolerance ranges must satisfy `low <= high`
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.plant.initial_size.is_finite() && self.plant.initial_size > 0.0,
            "Initial plant size must be positive"
        );

        for (resource, params) in self.plant.resources.iter() {
            anyhow::ensure!(
                params.consumption_rate > 0.0,
                "{} consumption rate must be positive",
                resource
            );
            anyhow::ensure!(
                params.growth_rate > 0.0,
                "{} growth rate must be positive",
                resource
            );
            anyhow::ensure!(
                (0.0..=1.0).contains(&params.growth_coefficient),
                "{} growth coefficient must be in [0.0, 1.0]",
                resource
            );
            let (low, high) = params.tolerance_range;
            anyhow::ensure!(
                low.is_finite() && high.is_finite() && low <= high,
                "{} tolerance range must be ordered (low <= high)",
                resource
            );
        }

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// SHA-256 of the plant tuning, hex encoded.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.plant).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plant_constants() {
        let plant = PlantConfig::default();
        assert_eq!(plant.initial_size, 1.0);
        assert_eq!(plant.resources.water.consumption_rate, 100.0);
        assert_eq!(plant.resources.light.consumption_rate, 10.0);
        assert_eq!(plant.resources.nutrients.consumption_rate, 5.0);
        assert_eq!(plant.resources.water.growth_rate, 0.01);
        assert_eq!(plant.resources.light.growth_rate, 0.1);
        assert_eq!(plant.resources.nutrients.growth_rate, 0.2);
        for (_, params) in plant.resources.iter() {
            assert_eq!(params.growth_coefficient, 0.33);
            assert_eq!(params.tolerance_range, (-0.5, 0.5));
        }
    }

    #[test]
    fn test_normalized_replaces_non_positive_limits() {
        let config = GameConfig::new("", 0, -3.0).normalized();
        assert_eq!(config.name, FALLBACK_GAME_NAME);
        assert_eq!(config.max_time_period, DEFAULT_MAX_TIME_PERIOD);
        assert_eq!(config.max_plant_size, DEFAULT_MAX_PLANT_SIZE);

        let kept = GameConfig::new("Fern", 7, 2.5).normalized();
        assert_eq!(kept, GameConfig::new("Fern", 7, 2.5));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let mut config = AppConfig::default();
        config.plant.resources.light.growth_coefficient = 1.5;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.plant.resources.water.tolerance_range = (0.5, -0.5);
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.plant.resources.nutrients.consumption_rate = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.plant.initial_size = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_partial_file_keeps_plant_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [game]
            max_time_period = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.game.max_time_period, 5);
        assert_eq!(config.game.name, DEFAULT_GAME_NAME);
        assert_eq!(config.plant, PlantConfig::default());
    }

    #[test]
    fn test_partial_plant_table_keeps_resource_defaults() {
        let config = AppConfig::from_toml("[plant]\ninitial_size = 2.0\n").unwrap();
        assert_eq!(config.plant.initial_size, 2.0);
        assert_eq!(config.plant.resources, PlantConfig::default().resources);
    }

    #[test]
    fn test_partial_resource_table_overrides_given_keys_only() {
        let config =
            AppConfig::from_toml("[plant.resources.water]\nconsumption_rate = 50.0\n").unwrap();
        let water = config.plant.resources.water;
        assert_eq!(water.consumption_rate, 50.0);
        assert_eq!(water.growth_rate, 0.01);
        assert_eq!(water.growth_coefficient, 0.33);
        assert_eq!(water.tolerance_range, (-0.5, 0.5));
        assert_eq!(config.plant.initial_size, 1.0);
        assert_eq!(
            config.plant.resources.light,
            ResourceParams::default_for(Resource::Light)
        );
        assert_eq!(
            config.plant.resources.nutrients,
            ResourceParams::default_for(Resource::Nutrients)
        );
    }

    #[test]
    fn test_partial_resource_table_is_still_validated() {
        let err =
            AppConfig::from_toml("[plant.resources.nutrients]\ngrowth_coefficient = 2.0\n")
                .unwrap_err();
        assert!(err.to_string().contains("nutrients growth coefficient"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        let err = AppConfig::from_toml(
            r#"
            [plant]
            initial_size = 1.0

            [plant.resources.water]
            consumption_rate = 100.0
            growth_rate = 0.01
            growth_coefficient = 0.33
            tolerance_range = [-0.5, 0.5]

            [plant.resources.light]
            consumption_rate = -10.0
            growth_rate = 0.1
            growth_coefficient = 0.33
            tolerance_range = [-0.5, 0.5]

            [plant.resources.nutrients]
            consumption_rate = 5.0
            growth_rate = 0.2
            growth_coefficient = 0.33
            tolerance_range = [-0.5, 0.5]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("light consumption rate"));
    }

    #[test]
    fn test_fingerprint_tracks_plant_tuning() {
        let base = AppConfig::default();
        let mut renamed = base.clone();
        renamed.game.name = "Other".to_string();
        assert_eq!(base.fingerprint(), renamed.fingerprint());

        let mut tuned = base.clone();
        tuned.plant.resources.water.growth_rate = 0.02;
        assert_ne!(base.fingerprint(), tuned.fingerprint());
        assert_eq!(base.fingerprint().len(), 64);
    }
}
