/// Light-field quilt card shader material
use bevy::render::render_resource::ShaderType;
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};
use constants::quilt::EDGE_FADE_LIMIT;

use crate::engine::quilt::layout::QuiltLayout;

/// Uniform block consumed by `assets/shaders/quilt_card.wgsl`. The static
/// fields are written once at card creation; `relative_angle` is rewritten
/// every frame by the angle update system.
#[derive(Debug, Clone, Copy, ShaderType)]
#[repr(C)]
pub struct QuiltParams {
    pub relative_angle: f32,
    pub viewing_cone_degrees: f32,
    pub columns: f32,
    pub rows: f32,
    pub total_views: f32,
    pub edge_fade_limit: f32,
    pub _padding: Vec2,
}

impl QuiltParams {
    /// Static shader parameters for a layout, starting head-on.
    pub fn for_layout(layout: &QuiltLayout) -> Self {
        Self {
            relative_angle: 0.0,
            viewing_cone_degrees: layout.viewing_cone_degrees(),
            columns: layout.columns() as f32,
            rows: layout.rows() as f32,
            total_views: layout.total_cells() as f32,
            edge_fade_limit: EDGE_FADE_LIMIT,
            _padding: Vec2::ZERO,
        }
    }
}

/// Card face material: one quilt atlas texture plus the viewing parameters.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct QuiltMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub quilt_texture: Handle<Image>,

    #[uniform(2)]
    pub params: QuiltParams,
}

impl Material for QuiltMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/quilt_card.wgsl".into()
    }
}
