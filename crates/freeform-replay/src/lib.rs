//! Freeform Replay
//!
//! Headless host for the freeform canvas engine. A replay loads a scene (the
//! container size, engine config and initial elements) and a script of input
//! steps, runs the steps through a [`CanvasEngine`] and reports the resulting
//! element list.
//!
//! ## Script format
//!
//! ```json
//! [
//!   { "type": "pointer_down", "x": 150, "y": 80, "element": "<uuid>" },
//!   { "type": "pointer_move", "x": 160, "y": 90 },
//!   { "type": "pointer_up", "x": 160, "y": 90 },
//!   { "type": "key", "key": "ArrowRight", "shift": true },
//!   { "type": "focus", "focused": false }
//! ]
//! ```

pub mod error;
pub mod host;
pub mod scene;
pub mod script;

pub use error::{ReplayError, ReplayResult};
pub use host::ReplayHost;
pub use scene::{Container, Scene};
pub use script::{Step, load_script};

use freeform_core::{CanvasEngine, Element};
use std::path::Path;

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    /// Final element list.
    pub elements: Vec<Element>,
    /// Number of steps the engine consumed.
    pub handled: usize,
    /// Number of element lists committed to the host.
    pub changes: usize,
    /// Listeners still held after teardown. Always zero for a correct engine.
    pub leaked_subscriptions: usize,
}

/// Run a script against a scene.
pub fn run(scene: Scene, steps: &[Step]) -> Replay {
    let host = ReplayHost::new(scene.elements);
    let live = host.live_counter();
    let mut engine = CanvasEngine::new(host, scene.config, scene.container.size());
    let mut handled = 0;

    for (index, step) in steps.iter().enumerate() {
        let consumed = match step {
            Step::Focus { focused } => {
                engine.host_mut().set_focused(*focused);
                true
            }
            Step::EditText { element, text } => {
                let elements = engine.host().elements().to_vec();
                engine.edit_text(&elements, *element, text)
            }
            _ => match step.to_event() {
                Some(event) => {
                    let elements = engine.host().elements().to_vec();
                    engine.handle_event(&elements, &event)
                }
                None => false,
            },
        };
        if consumed {
            handled += 1;
        } else {
            log::debug!("Step {} not handled: {:?}", index, step);
        }
    }

    let host = engine.unmount();
    let changes = host.change_count();
    let leaked_subscriptions = live.get();
    if leaked_subscriptions > 0 {
        log::warn!("{} subscriptions still live after teardown", leaked_subscriptions);
    }
    Replay {
        elements: host.into_elements(),
        handled,
        changes,
        leaked_subscriptions,
    }
}

/// Load a scene and a script from disk and run them.
pub fn run_files(scene: impl AsRef<Path>, script: impl AsRef<Path>) -> ReplayResult<Replay> {
    let scene = Scene::load(scene)?;
    let steps = load_script(script)?;
    log::info!(
        "Replaying {} steps over {} elements",
        steps.len(),
        scene.elements.len()
    );
    Ok(run(scene, &steps))
}
