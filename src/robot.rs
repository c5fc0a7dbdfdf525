//! Circular, blind robot whose rotation is perturbed by noise
//!
//! The robot owns its configuration space (installed by a wall), a
//! rotation noise model, and a movement model. `advance` is the only
//! state transition: on success the position is overwritten, on failure
//! it is left untouched and the reason is returned.

use log::debug;
use rand_distr::{Distribution, Uniform};

use crate::common::error::{SpaceError, SpaceResult};
use crate::common::traits::ConfigurationGeometry;
use crate::common::types::Point2D;
use crate::geometry::ConfigurationSpace;
use crate::models::{LinearMovementModel, RotationModel};
use crate::utils::{colors, PointStyle, Visualizer};

#[derive(Debug)]
pub struct Robot<D: Distribution<f64> = Uniform<f64>> {
    radius: f64,
    position: Point2D,
    configuration_space: Option<ConfigurationSpace>,
    rotation_model: RotationModel<D>,
    movement_model: LinearMovementModel,
}

impl Robot<Uniform<f64>> {
    /// Robot with the given radius and uniform rotation noise
    pub fn new(radius: f64, max_rotation_error: f64) -> Self {
        Self::with_rotation_model(radius, RotationModel::new(max_rotation_error))
    }

    /// Robot with seeded rotation noise, for reproducible runs
    pub fn with_seed(radius: f64, max_rotation_error: f64, seed: u64) -> Self {
        Self::with_rotation_model(radius, RotationModel::with_seed(max_rotation_error, seed))
    }
}

impl<D: Distribution<f64>> Robot<D> {
    /// Robot with a caller-supplied rotation model
    pub fn with_rotation_model(radius: f64, rotation_model: RotationModel<D>) -> Self {
        Self {
            radius,
            position: Point2D::origin(),
            configuration_space: None,
            rotation_model,
            movement_model: LinearMovementModel::new(),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn position(&self) -> Point2D {
        self.position
    }

    pub fn configuration_space(&self) -> Option<&ConfigurationSpace> {
        self.configuration_space.as_ref()
    }

    pub fn rotation_model(&self) -> &RotationModel<D> {
        &self.rotation_model
    }

    /// Install a configuration space; called by the wall that derived it
    ///
    /// Set once per environment change. The current position is not
    /// revalidated here; `advance` rejects an origin off the boundary.
    pub fn set_configuration_space(&mut self, space: ConfigurationSpace) {
        self.configuration_space = Some(space);
    }

    /// Place the robot, validating that the point is on the
    /// configuration-space boundary
    pub fn set_position(&mut self, position: Point2D) -> SpaceResult<()> {
        let space = self
            .configuration_space
            .as_ref()
            .ok_or(SpaceError::MissingConfigurationSpace)?;
        if !space.contains_on_boundary(position) {
            return Err(SpaceError::InvalidOrigin);
        }
        self.position = position;
        Ok(())
    }

    /// Attempt a move along `angle`, after rotation noise is applied
    ///
    /// On success the position is updated and the new point returned.
    /// On failure the position is unchanged; callers must inspect the
    /// return value rather than compare positions, since the error
    /// carries the reason the move was rejected.
    pub fn advance(&mut self, angle: f64) -> SpaceResult<Point2D> {
        let noisy_heading = self.rotation_model.sample(angle);
        let space = self
            .configuration_space
            .as_ref()
            .ok_or(SpaceError::MissingConfigurationSpace)?;

        let next = self
            .movement_model
            .next_position(self.position, noisy_heading, space)?;
        debug!(
            "robot moved from {:?} to {:?} (heading {} -> {})",
            self.position, next, angle, noisy_heading
        );
        self.position = next;
        Ok(next)
    }

    /// Draw the robot and its configuration space into a visualizer
    pub fn render(&self, vis: &mut Visualizer) {
        if let Some(space) = &self.configuration_space {
            space.render(vis);
        }
        vis.plot_point(self.position, &PointStyle::new(colors::ROBOT, "Robot"));
    }
}
