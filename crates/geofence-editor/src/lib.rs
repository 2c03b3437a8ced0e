//! # Geofence Editor
//!
//! The shape-editing state machine behind the interactive geofence
//! editor. An [`EditorSession`] mediates between freehand draw events, a
//! draggable position marker, and manual coordinate/radius text fields,
//! keeping them synchronized into one canonical
//! [`geofence_core::Shape`]; on submit it produces the create/update
//! payload for the persistence collaborator.
//!
//! The session is synchronous and single-owner: every interaction is one
//! [`EditorEvent`] applied at a time, so the synchronization rules are
//! testable without any rendering surface.

pub mod session;

pub use session::{EditorEvent, EditorSession, EditorState, SubmitAction, SubmitError};
