//! Interactive product showcase rendered with Bevy.
//!
//! Project photos are laid out on a pannable canvas in a grid or a masonry
//! overview; opening one shows its photo slider over the scene. The host page
//! drives overlays and layout through the JSON-RPC bridge in [`rpc`].

pub mod engine;
pub mod rpc;

pub use engine::core::app_setup::create_app;
