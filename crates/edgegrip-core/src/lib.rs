//! EdgeGrip Core Library
//!
//! Toolkit-agnostic right-edge resize handle: a draggable grip bound to a
//! rectangular scene item, turning pointer gestures into constrained live
//! size updates with start/end lifecycle notifications.
//!
//! The host owns the items (in a [`Scene`] registry), routes its pointer
//! events through [`EdgeResizer::handle_pointer_event`], pumps geometry
//! events back in, and drains [`ResizerEvent`]s. Everything runs
//! synchronously on the host's event thread.

pub mod constraint;
pub mod input;
pub mod resizer;
pub mod scene;

pub use constraint::{RATIO_EPSILON, clamp_size};
pub use input::{MouseButton, PointerEvent};
pub use resizer::{
    DEFAULT_HANDLE_SIZE, EdgeResizer, HANDLE_HIT_TOLERANCE, Handle, ResizerEvent,
};
pub use scene::{GeometryEvent, ItemId, Scene, SceneError, SceneItem, SceneResult, WatchId};
