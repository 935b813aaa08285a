/// JSON-RPC 2.0 bridge between the engine and an embedding web frontend.
pub mod web_rpc;
