use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{PREVIEW_CAMERA_DISTANCE, PREVIEW_FOV_DEGREES};

// Crate engine modules
use crate::engine::assets::card_assets::CardAssets;
use crate::engine::camera::orbit_camera::{OrbitCamera, PointerCapture, camera_controller};
use crate::engine::card::material::QuiltMaterial;
use crate::engine::core::app_state::{
    AppState, transition_to_assets_loaded, transition_to_running, update_loading_frontend,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::card_creator::create_cards_when_ready;
use crate::engine::loading::deck_loader::{CardDeck, DeckLoader, load_deck_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::texture_config::configure_loaded_textures;
use crate::engine::loading::texture_loader::check_texture_loading;
use crate::engine::scene::environment::{spawn_environment, spawn_lighting, toggle_environment};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::relative_angle::update_relative_angles;

// Crate tools modules
use crate::tools::{
    arrange::{ResetLayoutEvent, apply_reset_layout, handle_reset_shortcut},
    grab::{GrabState, grab_card_system, hover_highlight_system},
};

// Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::view_debug::{ViewDebugText, view_debug_update_system};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<QuiltMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers CardDeck as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<CardDeck>::new(&["json"]))
        .add_plugins(WebRpcPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<DeckLoader>()
        .init_resource::<CardAssets>()
        .init_resource::<OrbitCamera>()
        .init_resource::<PointerCapture>()
        .init_resource::<GrabState>()
        .add_event::<ResetLayoutEvent>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_deck_system,
                check_texture_loading,
                configure_loaded_textures,
                create_cards_when_ready,
                transition_to_assets_loaded,
                update_loading_frontend,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            transition_to_running.run_if(in_state(AppState::AssetsLoaded)),
        );

    // Base runtime systems that run on all platforms.
    let runtime_systems = (
        camera_controller,
        // The render-hook seam: every card's angle uniform refreshes after
        // any camera or grab movement this frame.
        update_relative_angles,
        hover_highlight_system,
        grab_card_system,
        handle_reset_shortcut,
        apply_reset_layout,
        toggle_environment,
        fps_notification_system,
    );

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    // Native-only overlays.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            (fps_text_update_system, view_debug_update_system)
                .run_if(in_state(AppState::Running)),
        );
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_lighting(&mut commands);
    create_preview_camera(&mut commands);
    spawn_environment(&mut commands, &mut meshes, &mut materials);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

/// Narrow-FOV preview camera starting on the orbit the controller drives.
fn create_preview_camera(commands: &mut Commands) {
    let focus = OrbitCamera::default().focus_point;
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: PREVIEW_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(focus + Vec3::Z * PREVIEW_CAMERA_DISTANCE)
            .looking_at(focus, Vec3::Y),
    ));
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    use crate::engine::core::app_state::FpsText;

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                ViewDebugText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
