//! Scroll-driven camera choreography.
//!
//! [`CameraChoreographer`] owns the camera pose between two endpoint poses. Wheel input only
//! changes its internal state; the render camera is written from [`CameraChoreographer::advance`],
//! once per frame, followed by a projection refresh.
//!
//! Besides `direction`/`progress` the choreographer tracks `path`, the position of the
//! current pose along the initial → final segment in `[0, 1]`. Both policies keep it in
//! sync so that switching policy mid-scroll continues from where the camera is.

use crate::camera::CameraRig;
use crate::constants::{ACCUMULATE_STEP, TRANSITION_STEP};
use crate::pose::{lerp_clamped, lerp_field, Pose, FINAL_POSE, INITIAL_POSE};
use crate::scroll::{Direction, ScrollCommand, ScrollInputTranslator, ScrollPolicy};

#[derive(Clone, Debug)]
pub struct ChoreographyParams {
    pub policy: ScrollPolicy,
    pub accumulate_step: f32,
    pub transition_step: f32,
    pub initial: Pose,
    pub final_pose: Pose,
}

impl Default for ChoreographyParams {
    fn default() -> Self {
        Self {
            policy: ScrollPolicy::default(),
            accumulate_step: ACCUMULATE_STEP,
            transition_step: TRANSITION_STEP,
            initial: INITIAL_POSE,
            final_pose: FINAL_POSE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraChoreographer {
    initial: Pose,
    final_pose: Pose,
    translator: ScrollInputTranslator,
    transition_step: f32,

    current: Pose,
    direction: Direction,
    progress: f32,
    path: f32,
    // Where the running transition started.
    origin: Pose,
    origin_path: f32,
    // Set when `current` changed outside of `advance` and the camera hasn't seen it yet.
    pending_sync: bool,
}

impl Default for CameraChoreographer {
    fn default() -> Self {
        Self::new(ChoreographyParams::default())
    }
}

impl CameraChoreographer {
    pub fn new(params: ChoreographyParams) -> Self {
        let step = params.transition_step;
        let transition_step = if step.is_finite() && step > 0.0 {
            step
        } else {
            TRANSITION_STEP
        };
        Self {
            initial: params.initial,
            final_pose: params.final_pose,
            translator: ScrollInputTranslator::new(params.policy)
                .with_step(params.accumulate_step),
            transition_step,
            current: params.initial,
            direction: Direction::Idle,
            progress: 0.0,
            path: 0.0,
            origin: params.initial,
            origin_path: 0.0,
            pending_sync: false,
        }
    }

    pub fn current(&self) -> &Pose {
        &self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn path(&self) -> f32 {
        self.path
    }

    pub fn policy(&self) -> ScrollPolicy {
        self.translator.policy
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle
    }

    pub fn endpoints(&self) -> (&Pose, &Pose) {
        (&self.initial, &self.final_pose)
    }

    /// Switch policy. A running transition stops where it is.
    pub fn set_policy(&mut self, policy: ScrollPolicy) {
        if self.translator.policy == policy {
            return;
        }
        self.stop();
        self.translator.policy = policy;
        log::info!("[camera] scroll policy -> {}", policy);
    }

    /// Feed one wheel event. Never writes to a camera.
    pub fn handle_input(&mut self, delta_y: Option<f32>) {
        match self.translator.translate(delta_y) {
            ScrollCommand::Ignore => {}
            ScrollCommand::Nudge(amount) => self.nudge(amount),
            ScrollCommand::Retarget(direction) => self.retarget(direction),
        }
    }

    /// Per-frame update. Returns true when the camera was written.
    pub fn advance<C: CameraRig + ?Sized>(&mut self, camera: &mut C) -> bool {
        let Some(target_path) = self.direction.target_path() else {
            if !self.pending_sync {
                return false;
            }
            self.sync(camera);
            return true;
        };

        self.progress = (self.progress + self.transition_step).min(1.0);
        let target = self.endpoint(target_path);
        if self.progress >= 1.0 {
            self.current = target;
            self.path = target_path;
            self.direction = Direction::Idle;
            self.progress = 0.0;
            log::debug!("[camera] transition reached path={:.0}", target_path);
        } else {
            self.current = lerp_clamped(&self.origin, &target, self.progress);
            self.path = lerp_field(self.origin_path, target_path, self.progress);
        }
        self.sync(camera);
        true
    }

    fn sync<C: CameraRig + ?Sized>(&mut self, camera: &mut C) {
        camera.apply_pose(&self.current);
        camera.refresh_projection();
        self.pending_sync = false;
    }

    fn endpoint(&self, path: f32) -> Pose {
        if path >= 1.0 {
            self.final_pose
        } else {
            self.initial
        }
    }

    fn stop(&mut self) {
        self.direction = Direction::Idle;
        self.progress = 0.0;
    }

    fn nudge(&mut self, amount: f32) {
        if !self.is_idle() {
            self.stop();
        }
        let next = (self.path + amount).clamp(0.0, 1.0);
        if next == self.path {
            return;
        }
        self.path = next;
        self.current = lerp_clamped(&self.initial, &self.final_pose, next);
        self.pending_sync = true;
    }

    fn retarget(&mut self, direction: Direction) {
        let Some(target_path) = direction.target_path() else {
            return;
        };
        if self.path == target_path {
            self.stop();
            return;
        }
        if self.direction != direction {
            log::debug!(
                "[camera] transition {:?} from path={:.3}",
                direction,
                self.path
            );
        }
        self.direction = direction;
        self.progress = 0.0;
        self.origin = self.current;
        self.origin_path = self.path;
    }
}
