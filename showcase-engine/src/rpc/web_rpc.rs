use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::events::{
    InfoPanelToggle, LayoutModeChangedEvent, LayoutModeRequest, ProjectCloseRequest,
    ProjectOpenRequest, SliderStepEvent, TileHoverEvent,
};
use crate::engine::state::{LayoutMode, ShowcaseState};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure. Requests without an `id` are notifications.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Resource queuing notifications and responses for the page.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    /// Notifications queued since the last flush.
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }

    pub fn pending_responses(&self) -> &[RpcResponse] {
        &self.outgoing_responses
    }
}

/// A page request decoded into engine terms.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcCommand {
    SetLayoutMode(LayoutMode),
    /// `None` flips the current state.
    ToggleInfo(Option<bool>),
    OpenProject(String),
    CloseProject,
    SliderStep(i32),
    GetState,
}

impl RpcCommand {
    /// Decode `method` and `params`. Returns `None` for unknown methods.
    pub fn parse(method: &str, params: &serde_json::Value) -> Option<Result<Self, RpcError>> {
        #[derive(Deserialize)]
        struct ModeParams {
            mode: String,
        }

        #[derive(Deserialize, Default)]
        struct InfoParams {
            open: Option<bool>,
        }

        #[derive(Deserialize)]
        struct ModelParams {
            model: String,
        }

        #[derive(Deserialize)]
        struct StepParams {
            step: i32,
        }

        let command = match method {
            "set_layout_mode" => serde_json::from_value::<ModeParams>(params.clone())
                .map_err(|_| RpcError::invalid_params("Expected 'mode' parameter"))
                .and_then(|p| {
                    LayoutMode::from_string(&p.mode)
                        .map(RpcCommand::SetLayoutMode)
                        .ok_or_else(|| {
                            RpcError::invalid_params(&format!("Unknown layout mode: {}", p.mode))
                        })
                }),
            "toggle_info" => {
                let parsed = if params.is_null() {
                    Ok(InfoParams::default())
                } else {
                    serde_json::from_value::<InfoParams>(params.clone())
                        .map_err(|_| RpcError::invalid_params("Expected boolean 'open' parameter"))
                };
                parsed.map(|p| RpcCommand::ToggleInfo(p.open))
            }
            "open_project" => serde_json::from_value::<ModelParams>(params.clone())
                .map(|p| RpcCommand::OpenProject(p.model))
                .map_err(|_| RpcError::invalid_params("Expected 'model' parameter")),
            "close_project" => Ok(RpcCommand::CloseProject),
            "slider_step" => serde_json::from_value::<StepParams>(params.clone())
                .map(|p| RpcCommand::SliderStep(p.step))
                .map_err(|_| RpcError::invalid_params("Expected integer 'step' parameter")),
            "get_state" => Ok(RpcCommand::GetState),
            _ => return None,
        };

        Some(command)
    }
}

/// Event writers for every command the page can issue.
#[derive(SystemParam)]
pub struct RpcCommandWriters<'w> {
    layout: EventWriter<'w, LayoutModeRequest>,
    info: EventWriter<'w, InfoPanelToggle>,
    opens: EventWriter<'w, ProjectOpenRequest>,
    closes: EventWriter<'w, ProjectCloseRequest>,
    slider: EventWriter<'w, SliderStepEvent>,
}

/// Snapshot of the state store for `get_state`.
pub fn state_snapshot(state: &ShowcaseState) -> serde_json::Value {
    let camera = state.camera();
    serde_json::json!({
        "layout_mode": state.layout_mode().as_str(),
        "transitioning": state.is_transitioning(),
        "camera": { "x": camera.x, "y": camera.y },
        "info_open": state.info_open(),
        "opened_project": state.opened_project(),
        "mobile": state.is_mobile(),
    })
}

fn dispatch(
    command: RpcCommand,
    state: &ShowcaseState,
    writers: &mut RpcCommandWriters,
) -> serde_json::Value {
    match command {
        RpcCommand::SetLayoutMode(mode) => {
            writers.layout.write(LayoutModeRequest { mode });
            serde_json::json!({ "requested": mode.as_str() })
        }
        RpcCommand::ToggleInfo(open) => {
            let open = open.unwrap_or(!state.info_open());
            writers.info.write(InfoPanelToggle { open });
            serde_json::json!({ "info_open": open })
        }
        RpcCommand::OpenProject(model) => {
            writers.opens.write(ProjectOpenRequest {
                model: model.clone(),
            });
            serde_json::json!({ "requested": model })
        }
        RpcCommand::CloseProject => {
            writers.closes.write(ProjectCloseRequest);
            serde_json::json!({ "success": true })
        }
        RpcCommand::SliderStep(step) => {
            writers.slider.write(SliderStepEvent { step });
            serde_json::json!({ "step": step })
        }
        RpcCommand::GetState => state_snapshot(state),
    }
}

/// Plugin establishing the postMessage bridge between the page and the engine.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                PreUpdate,
                (process_incoming_messages, handle_rpc_messages).chain(),
            )
            .add_systems(
                PostUpdate,
                (forward_scene_notifications, send_outgoing_messages).chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        let data = event.data();
        // Pages may post either a JSON string or a plain object.
        let message_str: Option<String> = match data.dyn_ref::<js_sys::JsString>() {
            Some(text) => Some(text.into()),
            None => js_sys::JSON::stringify(&data).ok().map(String::from),
        };

        if let Some(message_str) = message_str {
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw message received from the page.
#[derive(Event)]
pub struct IncomingRpcMessage {
    pub content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Decode page messages and dispatch them as engine events.
///
/// Known methods run whether or not they carry an id; only requests with an
/// id get a response. Unknown notifications are dropped, which also covers
/// our own notifications echoing back when the page is not framed.
pub fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    state: Res<ShowcaseState>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut writers: RpcCommandWriters,
) {
    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                debug!("Ignoring non-request message: {}", parse_error);
                continue;
            }
        };

        let outcome = match RpcCommand::parse(&request.method, &request.params) {
            Some(Ok(command)) => {
                info!("RPC {}", request.method);
                Ok(dispatch(command, &state, &mut writers))
            }
            Some(Err(error)) => {
                warn!("RPC {} rejected: {}", request.method, error.message);
                Err(error)
            }
            None if request.id.is_some() => {
                warn!("Unknown RPC method: {}", request.method);
                Err(RpcError::method_not_found(&request.method))
            }
            None => {
                debug!("Ignoring notification {}", request.method);
                continue;
            }
        };

        let Some(id) = request.id else {
            continue;
        };

        let response = match outcome {
            Ok(result) => RpcResponse {
                jsonrpc: "2.0".to_string(),
                result: Some(result),
                error: None,
                id: Some(id),
            },
            Err(error) => RpcResponse {
                jsonrpc: "2.0".to_string(),
                result: None,
                error: Some(error),
                id: Some(id),
            },
        };
        rpc_interface.queue_response(response);
    }
}

/// Relay scene events the page panels react to.
pub fn forward_scene_notifications(
    mut hovers: EventReader<TileHoverEvent>,
    mut changes: EventReader<LayoutModeChangedEvent>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for change in changes.read() {
        rpc_interface.send_notification(
            "layout_mode_changed",
            serde_json::json!({ "mode": change.mode.as_str() }),
        );
    }

    for hover in hovers.read() {
        rpc_interface.send_notification(
            "project_hovered",
            serde_json::json!({ "model": hover.model }),
        );
    }
}

/// Send queued notifications and responses to the page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Post a serialized message to the parent window, or to this window when not framed.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    let target = window.parent().ok().flatten().unwrap_or(window);
                    if let Err(e) = target.post_message(&JsValue::from_str(&json), "*") {
                        error!("Failed to post message to page: {:?}", e);
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No page to talk to natively.
        let _ = message;
    }
}
