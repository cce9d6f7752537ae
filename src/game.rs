//! World assembly and the per-tick schedule.
//!
//! - [`register_prefabs`] builds the prefab templates from [`GameConfig`].
//! - [`init_world`] inserts every resource and observer the systems need.
//! - [`spawn_demo_scene`] populates a small level: one player, two enemies
//!   bouncing between walls, a speed pickup and a trigger-zone spawner.
//! - [`build_tick_schedule`] chains the systems in tick order and [`step`]
//!   runs one tick.
//!
//! The schedule must be built once and reused: message readers keep their
//! cursor inside the schedule, so a fresh schedule would re-read the
//! requests of the previous tick.

use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::motionstate::MotionState;
use crate::components::pickup::Pickup;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::spawner::BoundedSpawner;
use crate::components::statblock::StatBlock;
use crate::components::tag::Tag;
use crate::events::spawn::{DestroyRequest, ImpulseRequest, SpawnRequest};
use crate::resources::contacts::ActiveContacts;
use crate::resources::gameconfig::{ENEMY_PREFAB, GameConfig, PICKUP_PREFAB};
use crate::resources::input::InputState;
use crate::resources::prefabstore::{Prefab, PrefabStore};
use crate::resources::worldtime::WorldTime;
use crate::systems::bounce::bounce_observer;
use crate::systems::collision::collision_detector;
use crate::systems::input::{clear_input_edges, emit_input_events};
use crate::systems::locomotion::{motion_system, player_locomotion};
use crate::systems::movement::{apply_impulses, integrate_bodies};
use crate::systems::pickup::pickup_observer;
use crate::systems::player::player_action_observer;
use crate::systems::spawn::{apply_destroy_requests, apply_spawn_requests, update_request_queues};
use crate::systems::spawner::spawner_trigger_observer;
use crate::systems::time::update_world_time;

const ACTOR_SIZE: f32 = 1.0;
const WALL_HEIGHT: f32 = 20.0;
const ZONE_SIZE: f32 = 2.0;

/// Entities created by [`spawn_demo_scene`].
#[derive(Debug, Clone, Copy)]
pub struct DemoScene {
    pub player: Entity,
    pub enemies: [Entity; 2],
    pub pickup: Entity,
    pub spawner: Entity,
}

/// Prefab templates for the enemy and the speed pickup.
pub fn register_prefabs(config: &GameConfig) -> PrefabStore {
    let mut prefabs = PrefabStore::new();
    prefabs.insert(
        ENEMY_PREFAB,
        Prefab::new(Tag::Enemy)
            .with_collider(BoxCollider::new(ACTOR_SIZE, ACTOR_SIZE))
            .with_motion(MotionState::horizontal(config.enemy.speed))
            .bouncing()
            .with_body(RigidBody::new()),
    );
    prefabs.insert(
        PICKUP_PREFAB,
        Prefab::new(Tag::Pickup)
            .with_collider(BoxCollider::new(ACTOR_SIZE, ACTOR_SIZE))
            .with_pickup(Pickup::new(config.pickup.boost_amount))
            .with_body(RigidBody::new()),
    );
    prefabs
}

/// Create a world with all resources, message queues and observers.
pub fn init_world(config: GameConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(register_prefabs(&config));
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(ActiveContacts::default());
    world.init_resource::<Messages<SpawnRequest>>();
    world.init_resource::<Messages<DestroyRequest>>();
    world.init_resource::<Messages<ImpulseRequest>>();

    world.add_observer(bounce_observer);
    world.add_observer(pickup_observer);
    world.add_observer(spawner_trigger_observer);
    world.add_observer(player_action_observer);
    world
}

/// Spawn the player.
pub fn spawn_player(world: &mut World, position: Vec2) -> Entity {
    let player = world.resource::<GameConfig>().player.clone();
    world
        .spawn((
            Tag::Player,
            MapPosition::from_vec(position),
            Rotation::IDENTITY,
            BoxCollider::new(ACTOR_SIZE, ACTOR_SIZE),
            RigidBody::with_mass(player.mass, 1.0),
            StatBlock::new(player.base_speed, player.jump_force, player.sprint_bonus),
            PlayerControlled::new(player.enemy_prefab, player.enemy_spawn_offset),
        ))
        .id()
}

/// Spawn a solid, untagged wall that enemies bounce off.
pub fn spawn_wall(world: &mut World, x: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(x, 0.0),
            BoxCollider::new(ACTOR_SIZE, WALL_HEIGHT),
        ))
        .id()
}

/// Spawn a trigger zone that fires the configured spawner prefab.
pub fn spawn_trigger_zone(world: &mut World, position: Vec2) -> Entity {
    let spawner = world.resource::<GameConfig>().spawner.clone();
    world
        .spawn((
            Tag::TriggerZone,
            MapPosition::from_vec(position),
            BoxCollider::trigger(ZONE_SIZE, ZONE_SIZE),
            BoundedSpawner::new(spawner.prefab, position, spawner.offset_y, spawner.count),
        ))
        .id()
}

/// Instantiate a registered prefab right away, outside the tick.
fn spawn_prefab(world: &mut World, id: &str, position: Vec2) -> Option<Entity> {
    let prefab = world.resource::<PrefabStore>().get(id).cloned()?;
    let entity = {
        let mut commands = world.commands();
        prefab.spawn(&mut commands, position, Rotation::IDENTITY)
    };
    world.flush();
    Some(entity)
}

/// Populate the demo level. Returns `None` if a required prefab is missing.
pub fn spawn_demo_scene(world: &mut World) -> Option<DemoScene> {
    spawn_wall(world, -12.0);
    spawn_wall(world, 14.0);

    let player = spawn_player(world, Vec2::ZERO);
    let enemies = [
        spawn_prefab(world, ENEMY_PREFAB, Vec2::new(8.0, 0.0))?,
        spawn_prefab(world, ENEMY_PREFAB, Vec2::new(-8.0, 0.0))?,
    ];
    let pickup = spawn_prefab(world, PICKUP_PREFAB, Vec2::new(-3.0, 0.0))?;
    let spawner = spawn_trigger_zone(world, Vec2::new(4.0, 0.0));

    info!(
        "Demo scene ready: player {:?}, enemies {:?}, pickup {:?}, spawner {:?}",
        player, enemies, pickup, spawner
    );
    Some(DemoScene {
        player,
        enemies,
        pickup,
        spawner,
    })
}

/// Systems of one tick, in order.
pub fn build_tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            emit_input_events,
            apply_impulses,
            player_locomotion,
            motion_system,
            integrate_bodies,
            collision_detector,
            apply_spawn_requests,
            apply_destroy_requests,
            clear_input_edges,
            update_request_queues,
        )
            .chain(),
    );
    schedule
}

/// Advance the world by one tick of `dt` seconds.
pub fn step(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}
