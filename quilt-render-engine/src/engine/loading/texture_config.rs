use bevy::prelude::*;

use crate::engine::assets::card_assets::CardAssets;
use crate::engine::loading::progress::LoadingProgress;

// Configure sampling on the loaded quilt atlases
pub fn configure_loaded_textures(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<CardAssets>,
    mut images: ResMut<Assets<Image>>,
) {
    if loading_progress.textures_configured || !loading_progress.textures_loaded {
        return;
    }

    configure_texture_sampling(&mut images, &assets);

    info!("✓ Quilt texture samplers configured");
    loading_progress.textures_configured = true;
}

// Linear filtering for smooth blending inside a cell; clamp-to-edge so an
// edge view never wraps around to the opposite side of the atlas
fn configure_texture_sampling(images: &mut ResMut<Assets<Image>>, assets: &CardAssets) {
    use bevy::image::{ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor};

    let sampler_config = ImageSampler::Descriptor(ImageSamplerDescriptor {
        mag_filter: ImageFilterMode::Linear,
        min_filter: ImageFilterMode::Linear,
        address_mode_u: ImageAddressMode::ClampToEdge,
        address_mode_v: ImageAddressMode::ClampToEdge,
        ..default()
    });

    for pending in &assets.pending {
        if let Some(image) = images.get_mut(&pending.texture) {
            image.sampler = sampler_config.clone();
        }
    }
}
