//! JSON-RPC 2.0 bridge between the showcase engine and its host page.
//!
//! The DOM panels (info overlay, project description, layout toggle) live in
//! the page and talk to the engine through `postMessage`.
//!
//! ## Message Flow
//!
//! ```text
//! Page (parent or same window)  <──postMessage──>  Bevy canvas
//!        │                                              │
//!        ├─ Request (with ID) ────────────────────────> │
//!        │                                              ├─ Dispatch as engine event
//!        │ <─────────────────────── Response (with ID) ─┤
//!        │                                              │
//!        │ <──────────────────── Notification (no ID) ──┤
//! ```
//!
//! Requests without an ID are executed but never answered.
//!
//! ## Methods
//!
//! - `set_layout_mode { mode: "grid" | "overview" }`: request a layout change
//! - `toggle_info { open?: bool }`: open, close or flip the blurred info overlay
//! - `open_project { model }` / `close_project`: show or hide a project's detail view
//! - `slider_step { step }`: move the open project's slider
//! - `get_state`: snapshot of layout mode, camera, overlays and device class
//!
//! ## Notifications
//!
//! - `catalog_loaded { count }`, `loading_failed { message }`
//! - `layout_mode_changed { mode }`
//! - `project_hovered { model | null }`
//! - `project_opened { model, title, category, description, slides }`, `project_closed { model }`
//!
//! ## Error Handling
//!
//! - `-32601`: Method not found
//! - `-32602`: Invalid params

/// Message queueing, decoding, dispatch and notification relay.
pub mod web_rpc;
