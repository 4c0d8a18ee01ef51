//! The per-tick controller.
//!
//! `Controller` owns every piece of cross-tick state (shot memory, path
//! cache, action queue) and turns one host frame into one control tuple.
//! It never fails: anything it cannot use yields the neutral output.

use std::path::Path;

use serde::{Deserialize, Serialize};

use fuzzifier_core::config::{ConfigError, FuzzyConfig};
use fuzzifier_core::constants::*;
use fuzzifier_core::control::ControlOutput;
use fuzzifier_core::enums::ActionKind;
use fuzzifier_core::records::GameFrame;
use fuzzifier_core::views::FrameView;
use fuzzifier_core::AsteroidId;
use fuzzifier_threat::{ThreatReport, ThreatScorer};

use crate::actions::{Action, ActionQueue, PushOutcome};
use crate::arbiter::{merge, TurnMerge};
use crate::cone::asteroids_in_cone;
use crate::dodge::{DodgePlanner, DodgeResponse, DodgeTarget};
use crate::path::PathPredictor;
use crate::shoot::{ShootPlanner, ShotMemory};

/// Runtime tuning for the controller. Missing JSON fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Seconds per host tick.
    pub tick_delta: f64,
    /// Asteroids within this distance enter the proximity set.
    pub proximity_range: f64,
    /// Asteroids within this distance may be dodged.
    pub dodge_range: f64,
    /// A dodge jumps the queue when impact is predicted within this many seconds.
    pub urgent_impact_secs: f64,
    pub turn_merge: TurnMerge,
    /// Asteroid count at which scoring runs in parallel.
    pub parallel_threshold: usize,
    /// Steer away from the nearest mine when no asteroid needs dodging.
    pub evade_mines: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            tick_delta: DT,
            proximity_range: PROXIMITY_RANGE,
            dodge_range: DODGE_RANGE,
            urgent_impact_secs: URGENT_IMPACT_SECS,
            turn_merge: TurnMerge::default(),
            parallel_threshold: PARALLEL_SCORING_THRESHOLD,
            evade_mines: true,
        }
    }
}

impl ControllerSettings {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

pub struct Controller {
    settings: ControllerSettings,
    scorer: ThreatScorer,
    shoot: ShootPlanner,
    dodge: DodgePlanner,
    queue: ActionQueue,
    ticks: u64,
}

impl Controller {
    /// Build a controller from a fuzzy configuration, which must be valid.
    pub fn new(config: FuzzyConfig, settings: ControllerSettings) -> Result<Self, ConfigError> {
        config.validate()?;
        let scorer = ThreatScorer::new(config)
            .with_proximity_range(settings.proximity_range)
            .with_parallel_threshold(settings.parallel_threshold);
        let dodge = DodgePlanner::new().with_range(settings.dodge_range);
        Ok(Self {
            settings,
            scorer,
            shoot: ShootPlanner::new(),
            dodge,
            queue: ActionQueue::new(),
            ticks: 0,
        })
    }

    /// Load the fuzzy configuration file and build a controller from it.
    pub fn from_config_file(
        path: impl AsRef<Path>,
        settings: ControllerSettings,
    ) -> Result<Self, ConfigError> {
        Self::new(FuzzyConfig::load(path)?, settings)
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn shot_memory(&self) -> &ShotMemory {
        self.shoot.memory()
    }

    pub fn paths(&self) -> &PathPredictor {
        self.dodge.paths()
    }

    /// Number of frames handled so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Decide this tick's controls.
    pub fn actions(&mut self, frame: &GameFrame) -> ControlOutput {
        self.ticks += 1;

        if let Err(err) = frame.validate() {
            log::warn!("tick {}: rejected frame: {err}", self.ticks);
            self.shoot.advance(self.settings.tick_delta);
            return ControlOutput::default();
        }

        // Step 1: Views and threat scores
        let view = FrameView::new(frame);
        let report = self.scorer.score(&view.asteroids);

        // Step 2: Keep the queue pointing at asteroids that still exist
        let stale = self.queue.retire_stale(view.asteroids.len());
        if stale > 0 {
            log::warn!("tick {}: retired {stale} stale actions", self.ticks);
        }
        if self.queue.is_empty() {
            if let Some(target) = self.shoot_candidate(&view, &report) {
                self.queue.push(Action::shoot(target), false);
            }
        }

        // Step 3: Planner proposals
        let head = self.queue.current().copied();
        let shot = head.and_then(|action| {
            let asteroid = view.asteroids.get(action.target)?;
            self.shoot.plan(&view.ship, asteroid, action.target)
        });
        let dodge = self
            .dodge
            .plan(&view.ship, &view.asteroids, &report)
            .or_else(|| self.evade_mine(&view));

        // Step 4: Merge
        let output = merge(self.settings.turn_merge, shot.as_ref(), dodge.as_ref());

        // Step 5: Retire finished work, then queue the dodge
        self.retire_finished(head, &output, dodge.as_ref());
        if let Some(DodgeResponse {
            target: DodgeTarget::Asteroid(id),
            time_to_impact,
            ..
        }) = dodge
        {
            let urgent = time_to_impact.is_some_and(|t| t <= self.settings.urgent_impact_secs);
            if let PushOutcome::Queued(position) = self.queue.push(Action::dodge(id), urgent) {
                log::debug!("tick {}: queued dodge {id} at {position} (urgent={urgent})", self.ticks);
            }
        }

        // Step 6: Advance in-flight shots
        self.shoot.advance(self.settings.tick_delta);

        log::debug!(
            "tick {}: thrust {:.1} turn {:.1} fire {} queue {}",
            self.ticks,
            output.thrust,
            output.turn_rate,
            output.fire,
            self.queue.len()
        );
        output
    }

    /// Nearest asteroid in proximity, else the first in the firing cone,
    /// else the nearest overall.
    fn shoot_candidate(&self, view: &FrameView, report: &ThreatReport) -> Option<AsteroidId> {
        report
            .proximity
            .nearest()
            .map(|(id, _)| id)
            .or_else(|| asteroids_in_cone(&view.ship, &view.asteroids).first().copied())
            .or_else(|| report.nearest.map(|(id, _)| id))
    }

    fn evade_mine(&self, view: &FrameView) -> Option<DodgeResponse> {
        if !self.settings.evade_mines {
            return None;
        }
        let mine = view.nearest_mine()?;
        self.dodge
            .plan_mine(&view.ship, mine, self.scorer.score_mine(mine))
    }

    /// Pop the head once it has done its job: a shot was fired at it, or the
    /// dodge planner has moved on from its target.
    fn retire_finished(
        &mut self,
        head: Option<Action>,
        output: &ControlOutput,
        dodge: Option<&DodgeResponse>,
    ) {
        let Some(head) = head else {
            return;
        };
        let done = match head.kind {
            ActionKind::Shoot => output.fire,
            ActionKind::Dodge => {
                !matches!(dodge, Some(d) if d.target == DodgeTarget::Asteroid(head.target))
            }
        };
        if done {
            self.queue.finish_current();
        }
    }
}
