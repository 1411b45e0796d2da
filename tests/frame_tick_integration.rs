//! Frame tick integration tests for intent, movement, animation, camera,
//! scenery draw lists and the loop-control observers.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use bear_country::components::draworder::DrawOrder;
use bear_country::components::mapposition::MapPosition;
use bear_country::components::player::Player;
use bear_country::components::sprite::Sprite;
use bear_country::events::quit::{QuitEvent, QuitReason, quit_observer};
use bear_country::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use bear_country::game::{spawn_player, spawn_scenery, world_layout};
use bear_country::resources::camera::{PlayerCamera, ScreenRect};
use bear_country::resources::debugmode::DebugMode;
use bear_country::resources::gameconfig::GameConfig;
use bear_country::resources::input::InputState;
use bear_country::resources::loopstate::LoopState;
use bear_country::resources::movementintent::MovementIntent;
use bear_country::resources::screensize::ScreenSize;
use bear_country::resources::worldtime::WorldTime;
use bear_country::systems::animation::player_animation;
use bear_country::systems::camera::update_camera;
use bear_country::systems::inputintent::update_movement_intent;
use bear_country::systems::movement::movement;
use bear_country::systems::render::scenery_draw_list;
use bear_country::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> (World, Entity) {
    let mut world = World::new();
    let screen = ScreenSize { w: 1080, h: 720 };
    let config = GameConfig::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(MovementIntent::default());
    world.insert_resource(screen);
    world.insert_resource(PlayerCamera::new(screen));
    let player = spawn_player(&mut world, &config);
    world.insert_resource(config);
    (world, player)
}

/// Everything the frame schedule runs except hardware polling and drawing.
fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            update_movement_intent,
            movement,
            player_animation,
            update_camera,
        )
            .chain(),
    );
    schedule.run(world);
}

fn press(world: &mut World, f: impl FnOnce(&mut InputState)) {
    let mut input = world.resource_mut::<InputState>();
    *input = InputState::default();
    f(&mut *input);
}

fn player_pos(world: &World, player: Entity) -> Vector2 {
    world.get::<MapPosition>(player).unwrap().pos
}

/// Scaled 16x16 sprites are 128x128 on screen.
const SPRITE_PX: i32 = 128;

fn draw_list(world: &mut World) -> Vec<(Sprite, ScreenRect)> {
    let camera = *world.resource::<PlayerCamera>();
    let screen = *world.resource::<ScreenSize>();
    let mut query = world.query::<(&Sprite, &MapPosition, &DrawOrder)>();
    scenery_draw_list(query.iter(world), &camera, screen, |_| {
        Some((SPRITE_PX, SPRITE_PX))
    })
}

fn place_player(world: &mut World, player: Entity, x: f32, y: f32) {
    world.get_mut::<MapPosition>(player).unwrap().pos = Vector2 { x, y };
    press(world, |_| {});
    tick(world, 0.0);
}

#[derive(Component)]
struct Lantern;

#[test]
fn right_for_one_second_moves_350_and_faces_right() {
    let (mut world, player) = make_world();
    press(&mut world, |i| i.maindirection_right.active = true);

    tick(&mut world, 1.0);

    let pos = player_pos(&world, player);
    assert!(approx_eq(pos.x, 350.0));
    assert!(approx_eq(pos.y, 0.0));
    assert!(world.get::<Player>(player).unwrap().facing_right);
}

#[test]
fn up_left_diagonal_keeps_axial_speed() {
    let (mut world, player) = make_world();
    press(&mut world, |i| {
        i.secondarydirection_up.active = true;
        i.secondarydirection_left.active = true;
    });

    tick(&mut world, 1.0);

    let pos = player_pos(&world, player);
    let expected = -350.0 / 2.0_f32.sqrt();
    assert!(approx_eq(pos.x, expected));
    assert!(approx_eq(pos.y, expected));
    assert!(approx_eq(pos.x, -247.487));
    assert!(approx_eq(pos.x.hypot(pos.y), 350.0));
    assert!(!world.get::<Player>(player).unwrap().facing_right);
}

#[test]
fn movement_uses_configured_speed() {
    let (mut world, player) = make_world();
    world.resource_mut::<GameConfig>().player_speed = 100.0;
    press(&mut world, |i| i.maindirection_down.active = true);

    tick(&mut world, 0.5);

    let pos = player_pos(&world, player);
    assert!(approx_eq(pos.x, 0.0));
    assert!(approx_eq(pos.y, 50.0));
}

#[test]
fn idle_frame_does_not_move() {
    let (mut world, player) = make_world();
    press(&mut world, |_| {});

    tick(&mut world, 1.0);

    let pos = player_pos(&world, player);
    assert_eq!((pos.x, pos.y), (0.0, 0.0));
    assert!(!world.resource::<MovementIntent>().is_moving());
}

#[test]
fn walk_cycle_advances_then_resets_when_idle() {
    let (mut world, player) = make_world();
    press(&mut world, |i| i.maindirection_left.active = true);

    // 60 Hz frames: 8 frames = 133.3 ms -> one frame change
    for _ in 0..8 {
        tick(&mut world, 1.0 / 60.0);
    }
    {
        let p = world.get::<Player>(player).unwrap();
        assert_eq!(p.frame_index, 1);
        assert!(p.anim_timer_ms < p.anim_delay_ms);
        assert!(approx_eq(p.anim_timer_ms, 8000.0 / 60.0 - 120.0));
    }

    press(&mut world, |_| {});
    tick(&mut world, 1.0 / 60.0);

    let p = world.get::<Player>(player).unwrap();
    assert_eq!(p.frame_index, 0);
    assert_eq!(p.anim_timer_ms, 0.0);
    assert_eq!(p.current_image().sprite_id, 1);
}

#[test]
fn vertical_movement_keeps_facing() {
    let (mut world, player) = make_world();
    press(&mut world, |i| i.maindirection_right.active = true);
    tick(&mut world, 0.1);
    press(&mut world, |i| i.maindirection_up.active = true);
    tick(&mut world, 0.1);

    assert!(world.get::<Player>(player).unwrap().facing_right);
}

#[test]
fn camera_keeps_player_centered() {
    let (mut world, player) = make_world();
    spawn_scenery(&mut world, &world_layout());
    press(&mut world, |i| {
        i.maindirection_right.active = true;
        i.maindirection_down.active = true;
    });

    for _ in 0..37 {
        tick(&mut world, 1.0 / 60.0);
        let pos = player_pos(&world, player);
        let camera = world.resource::<PlayerCamera>();
        assert_eq!(camera.world_to_screen(pos), (540, 360));
        assert_eq!(camera.player_screen(), (540, 360));
    }
}

#[test]
fn scenery_scrolls_opposite_to_player() {
    let (mut world, _player) = make_world();
    let tree = world.spawn(MapPosition::new(300.0, 0.0)).id();
    press(&mut world, |i| i.maindirection_right.active = true);

    tick(&mut world, 1.0);

    let tree_pos = world.get::<MapPosition>(tree).unwrap().pos;
    let camera = world.resource::<PlayerCamera>();
    // Player at x=350 -> tree is 50 px left of center
    assert_eq!(camera.world_to_screen(tree_pos), (490, 360));
}

#[test]
fn quit_event_terminates_loop() {
    let mut world = World::new();
    world.insert_resource(LoopState::new());
    world.spawn(Observer::new(quit_observer));
    world.flush();

    world.trigger(QuitEvent {
        reason: QuitReason::BackPressed,
    });
    world.flush();

    assert!(!world.resource::<LoopState>().is_running());

    // A second request is harmless
    world.trigger(QuitEvent {
        reason: QuitReason::WindowClosed,
    });
    world.flush();
    assert!(!world.resource::<LoopState>().is_running());
}

#[test]
fn switch_debug_toggles_overlay_resource() {
    let mut world = World::new();
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(world.contains_resource::<DebugMode>());

    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(!world.contains_resource::<DebugMode>());
}

#[test]
fn draw_list_follows_insertion_order_across_archetypes() {
    let (mut world, _player) = make_world();
    world.spawn((Sprite::new(13), MapPosition::new(40.0, 0.0), DrawOrder(2), Lantern));
    world.spawn((Sprite::new(12), MapPosition::new(0.0, 0.0), DrawOrder(0)));
    world.spawn((Sprite::new(14), MapPosition::new(-40.0, 0.0), DrawOrder(1), Lantern));

    let ids: Vec<u32> = draw_list(&mut world)
        .iter()
        .map(|(sprite, _)| sprite.sprite_id)
        .collect();
    assert_eq!(ids, vec![12, 14, 13]);
}

#[test]
fn draw_list_skips_objects_without_texture() {
    let (mut world, _player) = make_world();
    world.spawn((Sprite::new(12), MapPosition::new(0.0, 0.0), DrawOrder(0)));
    world.spawn((Sprite::new(99), MapPosition::new(0.0, 0.0), DrawOrder(1)));
    let camera = *world.resource::<PlayerCamera>();
    let screen = *world.resource::<ScreenSize>();
    let mut query = world.query::<(&Sprite, &MapPosition, &DrawOrder)>();

    let list = scenery_draw_list(query.iter(&world), &camera, screen, |id| {
        (id != 99).then_some((SPRITE_PX, SPRITE_PX))
    });

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].0.sprite_id, 12);
}

#[test]
fn first_tree_leaving_screen_drops_only_that_entry() {
    let (mut world, player) = make_world();
    spawn_scenery(&mut world, &world_layout());

    // Tree 0 at x=300 still covers the leftmost pixels
    place_player(&mut world, player, 900.0, 0.0);
    let before = draw_list(&mut world);
    assert_eq!(before.len(), 5);
    assert_eq!(before[0].1, ScreenRect::centered((-60, 360), SPRITE_PX, SPRITE_PX));

    // 10 px further and its right edge is off screen
    place_player(&mut world, player, 910.0, 0.0);
    let after = draw_list(&mut world);

    let shifted: Vec<(Sprite, ScreenRect)> = before[1..]
        .iter()
        .map(|(sprite, rect)| (*sprite, ScreenRect { x: rect.x - 10, ..*rect }))
        .collect();
    assert_eq!(after, shifted);
}

#[test]
fn culling_keeps_visible_objects_in_layout_order() {
    let (mut world, player) = make_world();
    let layout = world_layout();
    spawn_scenery(&mut world, &layout);
    let screen = *world.resource::<ScreenSize>();

    let spots = [
        (0.0, 0.0),
        (500.0, 400.0),
        (-400.0, -450.0),
        (1200.0, 0.0),
        (2600.0, 100.0),
        (5200.0, -80.0),
        (-3000.0, 0.0),
    ];
    for (x, y) in spots {
        place_player(&mut world, player, x, y);
        let camera = *world.resource::<PlayerCamera>();

        // Every layout object, unculled, in insertion order
        let all: Vec<(Sprite, ScreenRect)> = layout
            .iter()
            .map(|p| {
                let center = camera.world_to_screen(Vector2 { x: p.x, y: p.y });
                (
                    Sprite::new(p.sprite_id),
                    ScreenRect::centered(center, SPRITE_PX, SPRITE_PX),
                )
            })
            .collect();
        let visible: Vec<(Sprite, ScreenRect)> = all
            .iter()
            .copied()
            .filter(|(_, rect)| rect.overlaps(screen))
            .collect();

        assert_eq!(draw_list(&mut world), visible, "player at ({x}, {y})");
    }
}
