//! Checkpoint and resume of engine run state.
//!
//! A checkpoint captures where a run is (current state and history), never
//! the automaton definition itself. Resuming pairs a checkpoint with a
//! configuration and refuses any checkpoint that could not have been
//! produced by that configuration.

use crate::core::{Config, State, StateHistory, Symbol};
use crate::engine::Engine;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an engine's run state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct Checkpoint<S: State> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the automaton
    pub initial_state: S,

    /// Current state of the run
    pub current_state: S,

    /// States visited since the last reset
    pub history: StateHistory<S>,
}

impl<S: State + Serialize + DeserializeOwned> Checkpoint<S> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<S: State, I: Symbol> Engine<S, I> {
    /// Capture the current run state.
    pub fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: self.config().initial_state.clone(),
            current_state: self.current_state().clone(),
            history: self.history().clone(),
        }
    }

    /// Build an engine from `config` and continue the run recorded in
    /// `checkpoint`.
    pub fn resume(
        config: Config<S, I>,
        checkpoint: Checkpoint<S>,
    ) -> Result<Self, CheckpointError> {
        let engine = Engine::new(config)
            .map_err(|errors| CheckpointError::InvalidConfig(errors.to_string()))?;

        verify(engine.config(), &checkpoint)?;

        tracing::debug!(
            id = %checkpoint.id,
            steps = checkpoint.history.steps(),
            current = ?checkpoint.current_state,
            "resumed run from checkpoint"
        );

        Ok(engine.with_history(checkpoint.history))
    }
}

fn verify<S: State, I: Symbol>(
    config: &Config<S, I>,
    checkpoint: &Checkpoint<S>,
) -> Result<(), CheckpointError> {
    if checkpoint.version != CHECKPOINT_VERSION {
        return Err(CheckpointError::UnsupportedVersion {
            found: checkpoint.version,
            supported: CHECKPOINT_VERSION,
        });
    }

    let history = &checkpoint.history;

    if checkpoint.initial_state != config.initial_state
        || history.initial() != &config.initial_state
    {
        return Err(CheckpointError::ValidationFailed(format!(
            "run does not start at initial state {:?}",
            config.initial_state
        )));
    }

    if history.last() != &checkpoint.current_state {
        return Err(CheckpointError::ValidationFailed(format!(
            "current state {:?} does not match end of history {:?}",
            checkpoint.current_state,
            history.last()
        )));
    }

    // Every transition target is a declared state, so a path that starts at
    // the initial state and follows transitions never leaves the state set.
    for (step, pair) in history.path().windows(2).enumerate() {
        let reachable = config
            .transitions
            .get(&pair[0])
            .is_some_and(|row| row.values().any(|to| *to == pair[1]));
        if !reachable {
            return Err(CheckpointError::ValidationFailed(format!(
                "no transition from {:?} to {:?} at step {step}",
                pair[0], pair[1]
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Phase {
        Idle,
        Running,
        Done,
    }

    fn workflow() -> Config<Phase, char> {
        let mut config = Config::new(
            vec![Phase::Idle, Phase::Running, Phase::Done],
            vec!['s', 'f'],
            Phase::Idle,
        );
        config.final_states = vec![Phase::Done];
        config.add_transition(Phase::Idle, 's', Phase::Running);
        config.add_transition(Phase::Running, 'f', Phase::Done);
        config
    }

    fn running_engine() -> Engine<Phase, char> {
        let mut engine = Engine::new(workflow()).unwrap();
        engine.transition('s').unwrap();
        engine
    }

    #[test]
    fn checkpoint_captures_run_state() {
        let checkpoint = running_engine().checkpoint();

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.initial_state, Phase::Idle);
        assert_eq!(checkpoint.current_state, Phase::Running);
        assert_eq!(checkpoint.history.path(), &[Phase::Idle, Phase::Running]);
        assert!(uuid::Uuid::parse_str(&checkpoint.id).is_ok());
    }

    #[test]
    fn checkpoints_get_unique_ids() {
        let engine = running_engine();
        assert_ne!(engine.checkpoint().id, engine.checkpoint().id);
    }

    #[test]
    fn resume_continues_the_run() {
        let checkpoint = running_engine().checkpoint();

        let mut engine = Engine::resume(workflow(), checkpoint).unwrap();
        assert_eq!(engine.current_state(), &Phase::Running);

        engine.transition('f').unwrap();
        assert!(engine.is_in_final_state());
        assert_eq!(
            engine.state_history(),
            vec![Phase::Idle, Phase::Running, Phase::Done]
        );
    }

    #[test]
    fn json_round_trip_resumes() {
        let json = running_engine().checkpoint().to_json().unwrap();

        let restored = Checkpoint::<Phase>::from_json(&json).unwrap();
        let engine = Engine::resume(workflow(), restored).unwrap();

        assert_eq!(engine.current_state(), &Phase::Running);
    }

    #[test]
    fn binary_round_trip_preserves_checkpoint() {
        let checkpoint = running_engine().checkpoint();

        let bytes = checkpoint.to_binary().unwrap();
        let restored = Checkpoint::<Phase>::from_binary(&bytes).unwrap();

        assert_eq!(restored, checkpoint);
    }

    #[test]
    fn garbage_fails_to_deserialize() {
        let result = Checkpoint::<Phase>::from_json("{not json");
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));

        let result = Checkpoint::<Phase>::from_binary(&[1, 2, 3]);
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn resume_rejects_unknown_version() {
        let mut checkpoint = running_engine().checkpoint();
        checkpoint.version = 99;

        let result = Engine::resume(workflow(), checkpoint);
        assert_eq!(
            result.unwrap_err(),
            CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            }
        );
    }

    #[test]
    fn resume_rejects_mismatched_current_state() {
        let mut checkpoint = running_engine().checkpoint();
        checkpoint.current_state = Phase::Done;

        let result = Engine::resume(workflow(), checkpoint);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn resume_rejects_impossible_history() {
        let mut checkpoint = running_engine().checkpoint();
        let path = vec![Phase::Idle, Phase::Done];
        checkpoint.history = StateHistory::from_path(path).unwrap();
        checkpoint.current_state = Phase::Done;

        let result = Engine::resume(workflow(), checkpoint);
        match result {
            Err(CheckpointError::ValidationFailed(message)) => {
                assert!(message.contains("no transition from Idle to Done"));
            }
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn resume_rejects_history_through_undeclared_state() {
        let mut narrow = Config::new(vec![Phase::Idle, Phase::Running], vec!['s'], Phase::Idle);
        narrow.add_transition(Phase::Idle, 's', Phase::Running);

        let mut checkpoint = running_engine().checkpoint();
        let path = vec![Phase::Idle, Phase::Running, Phase::Done];
        checkpoint.history = StateHistory::from_path(path).unwrap();
        checkpoint.current_state = Phase::Done;

        match Engine::resume(narrow, checkpoint) {
            Err(CheckpointError::ValidationFailed(message)) => {
                assert!(message.contains("no transition from Running to Done"));
            }
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn resume_rejects_foreign_initial_state() {
        let mut config = workflow();
        config.initial_state = Phase::Running;

        let result = Engine::resume(config, running_engine().checkpoint());
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn resume_rejects_invalid_config() {
        let mut config = workflow();
        config.states.clear();

        let result = Engine::resume(config, running_engine().checkpoint());
        assert!(matches!(result, Err(CheckpointError::InvalidConfig(_))));
    }
}
