//! Dense evaluation of the acceleration model over a square grid.

use crate::body::FieldConfig;
use crate::error::FieldError;
use crate::field::Field;
use crate::grid::Grid;
use crate::model::acceleration_relative_batch;
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Default multiple of the farthest body distance covered by the grid.
pub const DEFAULT_LIMIT_FACTOR: f64 = 1.5;
/// Default number of samples per axis.
pub const DEFAULT_RESOLUTION: usize = 500;

/// How densely and how far out the field is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Grid half-width as a multiple of the farthest body's distance from
    /// the origin. `1.0` stops exactly at that body.
    pub limit_factor: f64,
    /// Samples per axis; the field holds `resolution²` vectors.
    pub resolution: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            limit_factor: DEFAULT_LIMIT_FACTOR,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl SamplingParams {
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.resolution == 0 {
            return Err(FieldError::InvalidResolution);
        }
        if !self.limit_factor.is_finite() || self.limit_factor <= 0.0 {
            return Err(FieldError::InvalidLimitFactor(self.limit_factor));
        }
        Ok(())
    }
}

/// The acceleration field of a [`FieldConfig`] sampled on a square grid.
///
/// Built once; the grid and field are never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FieldSampler {
    config: FieldConfig,
    params: SamplingParams,
    extent: f64,
    grid: Grid,
    field: Field,
}

impl FieldSampler {
    /// Validates the inputs, builds the grid and evaluates the model at
    /// every grid point.
    ///
    /// The grid spans `±limit_factor · max|position|`. When all bodies sit at
    /// the origin the largest radius is used in place of the distance.
    ///
    /// Samples that hit a zero-radius body exactly come out as NaN; they are
    /// kept in the field and counted by [`FieldSampler::non_finite_count`].
    pub fn new(config: FieldConfig, params: SamplingParams) -> Result<Self, FieldError> {
        config.validate()?;
        params.validate()?;

        let reach = match config.max_distance() {
            d if d > 0.0 => d,
            _ => config.max_radius(),
        };
        let extent = params.limit_factor * reach;
        let grid = Grid::symmetric(extent, params.resolution)?;

        let n = params.resolution;
        log::debug!(
            "sampling {} bodies on a {n}x{n} grid, extent {extent:e}",
            config.bodies.len()
        );

        let data = acceleration_relative_batch(
            &config.bodies,
            config.angular_velocity,
            &grid.points(),
        );
        let field = Field::from_data(n, n, data)?;

        let bad = field.non_finite_count();
        if bad > 0 {
            log::warn!(
                "{bad} of {} samples are not finite (point-mass singularity)",
                n * n
            );
        }

        Ok(Self {
            config,
            params,
            extent,
            grid,
            field,
        })
    }

    /// Builds a sampler from a scenario's bodies and sampling parameters.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, FieldError> {
        Self::new(scenario.field_config(), scenario.sampling_params())
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn params(&self) -> SamplingParams {
        self.params
    }

    /// Half-width of the sampled square.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// X coordinates of the grid columns.
    pub fn x(&self) -> &[f64] {
        self.grid.x()
    }

    /// Y coordinates of the grid rows.
    pub fn y(&self) -> &[f64] {
        self.grid.y()
    }

    /// The sampled accelerations; `field().get(i, j)` is the value at
    /// `(x()[i], y()[j])`.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Element-wise magnitude of the field.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.field.magnitudes()
    }

    pub fn non_finite_count(&self) -> usize {
        self.field.non_finite_count()
    }

    /// Sampling parameters and field statistics as a JSON object.
    pub fn summary(&self) -> Value {
        json!({
            "bodies": self.config.bodies.len(),
            "angular_velocity": self.config.angular_velocity,
            "resolution": self.params.resolution,
            "limit_factor": self.params.limit_factor,
            "extent": self.extent,
            "min_magnitude": self.field.min_magnitude(),
            "max_magnitude": self.field.max_magnitude(),
            "mean_magnitude": self.field.mean_magnitude(),
            "non_finite": self.field.non_finite_count(),
        })
    }
}
