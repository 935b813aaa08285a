//! Runtime asset handles and resolved card configurations.

/// Resolved cards awaiting spawn plus their quilt texture handles.
pub mod card_assets;
