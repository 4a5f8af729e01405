//! Freeform Core Library
//!
//! Platform-agnostic layout engine for a free-form design canvas. Elements are
//! stored in container percentages and manipulated in pixels; the engine turns
//! pointer and keyboard input into new element lists for the host to persist.

pub mod canvas;
pub mod config;
pub mod element;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod keyboard;
pub mod selection;
pub mod snap;
pub mod state;

pub use canvas::{ElementRect, layout};
pub use config::EngineConfig;
pub use element::{Element, ElementId, ElementKind, Placement};
pub use engine::{CanvasEngine, HostBinding, Subscription};
pub use geometry::{clamp_rect, to_percent, to_pixel};
pub use gesture::{Context, Transition, reduce};
pub use input::{CanvasEvent, Key, KeyEvent, Modifiers, PointerEvent, PointerId, PointerTarget};
pub use selection::{Corner, DragState, Handle};
pub use snap::{GuideIndicator, Guides, SNAP_THRESHOLD, SnapResult, collect_guides, snap_rect};
pub use state::UiState;
