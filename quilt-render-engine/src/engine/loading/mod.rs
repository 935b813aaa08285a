//! Startup loading chain: deck manifest, quilt textures, sampler
//! configuration, then card spawning. Each step runs once and flips its
//! flag in [`progress::LoadingProgress`]; the state machine in
//! `core::app_state` watches the flags.

/// Deck manifest asset and its resolution into card configs.
pub mod deck_loader;

/// Quilt texture load-state polling with per-texture progress.
pub mod texture_loader;

/// Sampler configuration for loaded quilt atlases.
pub mod texture_config;

/// Card spawning once every quilt texture is ready.
pub mod card_creator;

/// Loading progress flags shared across the chain.
pub mod progress;
