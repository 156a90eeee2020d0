use crate::config::{PlantConfig, ResourceParams};
use plantsim_data::{Health, PerResource, Resource};

/// Separator between reasons when several tolerance bands are violated.
pub const REASON_SEPARATOR: &str = ", ";

/// The plant being grown.
///
/// Needs scale linearly with size. Each round the game records how far the
/// supplied amounts were from those needs and the plant dies if any delta
/// falls outside its tolerance band.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    size: f64,
    params: PerResource<ResourceParams>,
    delta_need: PerResource<f64>,
}

impl Default for Plant {
    fn default() -> Self {
        Self::new(&PlantConfig::default())
    }
}

impl Plant {
    #[must_use]
    pub fn new(config: &PlantConfig) -> Self {
        Self {
            size: config.initial_size,
            params: config.resources,
            delta_need: PerResource::default(),
        }
    }

    /// Current size in inches.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Deltas recorded by the last calls to [`Plant::record_delta`].
    #[must_use]
    pub fn delta_need(&self) -> PerResource<f64> {
        self.delta_need
    }

    /// Amount of `resource` the plant needs this round at its current size.
    #[must_use]
    pub fn needed(&self, resource: Resource) -> f64 {
        self.size * self.params[resource].consumption_rate
    }

    /// Amount actually consumed: never more than is available or needed.
    #[must_use]
    pub fn consumption(&self, resource: Resource, available: f64) -> f64 {
        available.min(self.needed(resource))
    }

    /// Stores `available - needed` for the health check that follows growth.
    pub fn record_delta(&mut self, resource: Resource, available: f64) {
        self.delta_need[resource] = available - self.needed(resource);
    }

    /// Inches gained from the consumed amounts.
    #[must_use]
    pub fn growth_increment(&self, consumed: &PerResource<f64>) -> f64 {
        consumed
            .iter()
            .map(|(resource, amount)| {
                let params = &self.params[resource];
                params.growth_coefficient * (amount * params.growth_rate)
            })
            .sum()
    }

    pub fn grow(&mut self, increment: f64) {
        self.size = (self.size + increment).max(0.0);
    }

    /// Judges the recorded deltas against bands sized from the pre-growth need.
    ///
    /// Must be called after [`Plant::grow`] with the same increment: the size
    /// before growth is rebuilt as `size - growth`. When that comes out zero or
    /// negative the bands collapse or invert and the check is applied as is.
    #[must_use]
    pub fn evaluate_health(&self, growth: f64) -> Health {
        let previous_size = self.size - growth;
        let mut reasons = Vec::new();

        for resource in Resource::ALL {
            let params = &self.params[resource];
            let previous_need = previous_size * params.consumption_rate;
            let (low_frac, high_frac) = params.tolerance_range;
            let low = low_frac * previous_need;
            let high = high_frac * previous_need;
            let delta = self.delta_need[resource];

            if delta < low {
                reasons.push(format!("not enough {resource}"));
            }
            if delta > high {
                reasons.push(format!("too much {resource}"));
            }
        }

        if reasons.is_empty() {
            Health::Alive
        } else {
            Health::Dead {
                reason: reasons.join(REASON_SEPARATOR),
            }
        }
    }
}
