use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::card::material::QuiltMaterial;
use crate::engine::card::spawn::{CardQuilt, QuiltCard};
use crate::engine::quilt::sampler::{edge_fade, select_views};
use crate::tools::arrange::ResetLayoutEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
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

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the embedding
/// frontend and the engine. Handles both request-response patterns and
/// notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the frontend without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the frontend.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the RPC communication layer for iframe-based
/// deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
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
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Attempt JSON parsing to validate RPC format before queuing.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .expect("Failed to register message listener");
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing an incoming RPC message from the frontend.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
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

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut reset_events: EventWriter<ResetLayoutEvent>,
    cards: Query<(&Name, &CardQuilt, &MeshMaterial3d<QuiltMaterial>), With<QuiltCard>>,
    materials: Res<Assets<QuiltMaterial>>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) = handle_rpc_request(
                    &request,
                    &diagnostics,
                    &mut reset_events,
                    &cards,
                    &materials,
                ) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Discarding unparseable RPC message: {parse_error}");
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
fn handle_rpc_request(
    request: &RpcRequest,
    diagnostics: &DiagnosticsStore,
    reset_events: &mut EventWriter<ResetLayoutEvent>,
    cards: &Query<(&Name, &CardQuilt, &MeshMaterial3d<QuiltMaterial>), With<QuiltCard>>,
    materials: &Assets<QuiltMaterial>,
) -> Option<RpcResponse> {
    // Only generate responses for requests with IDs (notifications have no ID).
    let id = request.id.clone()?;

    let result = match request.method.as_str() {
        "get_fps" => handle_get_fps(diagnostics),
        "get_card_views" => handle_get_card_views(&request.params, cards, materials),
        "reset_layout" => {
            reset_events.write(ResetLayoutEvent);
            Ok(serde_json::json!({ "success": true }))
        }
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

/// Report each card's currently resolved quilt view, via the CPU mirror of
/// the shader's cell selection. Accepts an optional `name` filter.
fn handle_get_card_views(
    params: &serde_json::Value,
    cards: &Query<(&Name, &CardQuilt, &MeshMaterial3d<QuiltMaterial>), With<QuiltCard>>,
    materials: &Assets<QuiltMaterial>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize, Default)]
    struct CardViewParams {
        name: Option<String>,
    }

    let filter = if params.is_null() {
        CardViewParams::default()
    } else {
        serde_json::from_value::<CardViewParams>(params.clone())
            .map_err(|_| RpcError::invalid_params("Expected optional 'name' parameter"))?
    };

    let views: Vec<serde_json::Value> = cards
        .iter()
        .filter(|(name, _, _)| {
            filter
                .name
                .as_deref()
                .is_none_or(|wanted| wanted == name.as_str())
        })
        .filter_map(|(name, quilt, material_handle)| {
            let material = materials.get(&material_handle.0)?;
            let angle = material.params.relative_angle;
            let blend = select_views(angle, &quilt.0);
            Some(serde_json::json!({
                "name": name.as_str(),
                "relative_angle": angle,
                "current_view": blend.current,
                "next_view": blend.next,
                "blend": blend.fraction,
                "fade": edge_fade(angle, &quilt.0),
            }))
        })
        .collect();

    Ok(serde_json::json!({ "cards": views }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32;

    Ok(serde_json::json!({
        "fps": fps
    }))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the frontend.
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

/// Send serialized message to the parent window (embedding frontend).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
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
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_request_parses_with_and_without_id() {
        let with_id: RpcRequest = serde_json::from_str(
            r#"{"jsonrpc":"2.0","method":"get_fps","params":{},"id":1}"#,
        )
        .unwrap();
        assert_eq!(with_id.method, "get_fps");
        assert!(with_id.id.is_some());

        let notification: RpcRequest = serde_json::from_str(
            r#"{"jsonrpc":"2.0","method":"reset_layout","params":{},"id":null}"#,
        )
        .unwrap();
        assert!(notification.id.as_ref().is_some_and(|id| id.is_null()) || notification.id.is_none());
    }

    #[test]
    fn notifications_serialise_as_jsonrpc() {
        let mut interface = WebRpcInterface::default();
        interface.send_notification("fps_update", serde_json::json!({ "fps": 60.0 }));
        let json = serde_json::to_string(&interface.outgoing_notifications[0]).unwrap();
        assert!(json.contains(r#""jsonrpc":"2.0""#));
        assert!(json.contains("fps_update"));
    }
}
