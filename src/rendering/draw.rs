//! Gizmo drawing for the arena, fighters, attacks, projectiles and effects.

use bevy::prelude::*;

use super::plugin::RenderConfig;
use crate::combat::{ActiveAttack, CombatResolver, Dead, Health, Projectile, Stamina, WeaponTrail};
use crate::fighters::{Fighter, FighterConfig, FighterMotion};

/// Alpha applied to knocked-out fighters.
const DEAD_ALPHA: f32 = 0.35;

pub fn draw_arena(
    mut gizmos: Gizmos,
    fighter_config: Res<FighterConfig>,
    config: Res<RenderConfig>,
) {
    // Fighter centres rest on ground_y, so the floor sits half a body below.
    let floor = fighter_config.ground_y - fighter_config.body_size.y / 2.0;
    let half_width = fighter_config.arena_half_width;
    gizmos.line_2d(
        Vec2::new(-half_width, floor),
        Vec2::new(half_width, floor),
        config.ground,
    );
}

/// Stick figure plus health and stamina bars for every fighter.
pub fn draw_fighters(
    mut gizmos: Gizmos,
    config: Res<RenderConfig>,
    fighters: Query<(
        &Transform,
        &Fighter,
        &FighterMotion,
        &Health,
        &Stamina,
        Has<Dead>,
    )>,
) {
    for (transform, fighter, motion, health, stamina, dead) in fighters.iter() {
        let position = transform.translation.truncate();
        let color = if dead {
            fighter.color().with_alpha(DEAD_ALPHA)
        } else {
            fighter.color()
        };

        draw_stick_figure(&mut gizmos, position, motion.facing, color);

        let bar_origin = position + Vec2::new(0.0, 55.0);
        draw_bar(&mut gizmos, &config, bar_origin, health.percentage(), config.health_bar);
        draw_bar(
            &mut gizmos,
            &config,
            bar_origin - Vec2::new(0.0, config.bar_size.y + 2.0),
            stamina.current / stamina.maximum,
            config.stamina_bar,
        );
    }
}

fn draw_stick_figure(gizmos: &mut Gizmos, position: Vec2, facing: f32, color: Color) {
    let neck = position + Vec2::new(0.0, 10.0);
    let hip = position + Vec2::new(0.0, -15.0);
    let shoulder = position;

    gizmos.circle_2d(position + Vec2::new(0.0, 25.0), 15.0, color);
    gizmos.line_2d(neck, hip, color);
    gizmos.line_2d(shoulder, shoulder + Vec2::new(facing * 18.0, -18.0), color);
    gizmos.line_2d(hip, hip + Vec2::new(-15.0, -25.0), color);
    gizmos.line_2d(hip, hip + Vec2::new(15.0, -25.0), color);
}

/// Horizontal bar centred on `center`, filled left to right by `fraction`.
fn draw_bar(
    gizmos: &mut Gizmos,
    config: &RenderConfig,
    center: Vec2,
    fraction: f32,
    color: Color,
) {
    let size = config.bar_size;
    gizmos.rect_2d(center, size, config.bar_background);

    let fill = size.x * fraction.clamp(0.0, 1.0);
    if fill <= 0.0 {
        return;
    }
    let left = center.x - size.x / 2.0;
    let rows = size.y.max(1.0) as u32;
    for row in 0..rows {
        let y = center.y - size.y / 2.0 + row as f32 + 0.5;
        gizmos.line_2d(Vec2::new(left, y), Vec2::new(left + fill, y), color);
    }
}

pub fn draw_attacks(
    mut gizmos: Gizmos,
    config: Res<RenderConfig>,
    attacks: Query<&ActiveAttack>,
) {
    if !config.show_hitboxes {
        return;
    }
    for attack in attacks.iter() {
        gizmos.rect_2d(attack.hitbox.center(), attack.hitbox.size(), config.hitbox);
    }
}

pub fn draw_projectiles(mut gizmos: Gizmos, projectiles: Query<(&Transform, &Projectile)>) {
    for (transform, projectile) in projectiles.iter() {
        let hitbox = projectile.hitbox_at(transform.translation.truncate());
        gizmos.rect_2d(hitbox.center(), hitbox.size(), projectile.kind.color());
    }
}

/// Live sparks and fading weapon trails from the resolver's effect buffer.
pub fn draw_effects(mut gizmos: Gizmos, resolver: Res<CombatResolver>) {
    let effects = resolver.effects();

    for trail in effects.trails() {
        let fade = trail.lifetime as f32 / WeaponTrail::LIFETIME as f32;
        gizmos.line_2d(trail.start, trail.end, trail.color.with_alpha(fade));
    }

    for spark in effects.sparks() {
        gizmos.circle_2d(spark.position, spark.size / 2.0, spark.color);
    }
}
