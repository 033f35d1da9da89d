//! Rendering plugin - camera, shake, and gizmo drawing.
//!
//! Everything is drawn with immediate-mode gizmos; there are no sprites or meshes.

use bevy::prelude::*;
use rand::Rng;

use super::draw;
use crate::combat::CombatResolver;

/// Rendering plugin - draws fighters, attacks, projectiles and effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        let config = RenderConfig::default();
        app.insert_resource(ClearColor(config.background))
            .insert_resource(config)
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                (
                    draw::draw_arena,
                    draw::draw_fighters,
                    draw::draw_attacks,
                    draw::draw_projectiles,
                    draw::draw_effects,
                    shake_camera,
                ),
            );
    }
}

/// Colours and sizes for the debug view.
#[derive(Resource, Debug, Clone)]
pub struct RenderConfig {
    pub background: Color,
    pub ground: Color,
    /// Outline colour of live attack hitboxes
    pub hitbox: Color,
    pub health_bar: Color,
    pub stamina_bar: Color,
    pub bar_background: Color,
    /// Width and height of the bars above each fighter
    pub bar_size: Vec2,
    /// Show attack hitboxes while they are active
    pub show_hitboxes: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::srgb(0.94, 0.94, 0.96),
            ground: Color::srgb(0.2, 0.2, 0.2),
            hitbox: Color::srgb(1.0, 0.3, 0.3),
            health_bar: Color::srgb(0.0, 0.8, 0.0),
            stamina_bar: Color::srgb(0.2, 0.5, 0.9),
            bar_background: Color::srgb(0.8, 0.8, 0.8),
            bar_size: Vec2::new(60.0, 6.0),
            show_hitboxes: true,
        }
    }
}

/// Marker for the camera that follows screen shake.
#[derive(Component)]
pub struct ShakeCamera;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, ShakeCamera));
}

/// Jitter the camera by up to the current shake in each axis.
fn shake_camera(
    resolver: Res<CombatResolver>,
    mut cameras: Query<&mut Transform, With<ShakeCamera>>,
) {
    let shake = resolver.effects().screen_shake();
    let mut rng = rand::thread_rng();

    for mut transform in cameras.iter_mut() {
        let offset = if shake > 0.0 {
            Vec2::new(rng.gen_range(-shake..=shake), rng.gen_range(-shake..=shake))
        } else {
            Vec2::ZERO
        };
        transform.translation.x = offset.x;
        transform.translation.y = offset.y;
    }
}
