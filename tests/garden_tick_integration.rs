//! Garden tick integration tests: tool selection, the brush, water flow,
//! clear-all, and the garden file, driven by simulated mouse frames.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use courtyard::components::gardenpiece::GardenPiece;
use courtyard::components::mapposition::MapPosition;
use courtyard::components::plant::Plant;
use courtyard::components::rock::Rock;
use courtyard::components::stroke::{ActiveStroke, RakeStroke};
use courtyard::components::watercourse::{WaterCourse, WaterDrop};
use courtyard::events::audio::AudioCmd;
use courtyard::events::garden::{ClearGardenEvent, clear_garden_observer};
use courtyard::resources::gameconfig::GameConfig;
use courtyard::resources::input::InputState;
use courtyard::resources::mouse::MouseState;
use courtyard::resources::toolbox::{Tool, ToolBox};
use courtyard::resources::worldsignals::WorldSignals;
use courtyard::resources::worldtime::WorldTime;
use courtyard::systems::brush::garden_brush;
use courtyard::systems::gardenfile::{garden_load, garden_save};
use courtyard::systems::time::update_world_time;
use courtyard::systems::toolselect::tool_select;
use courtyard::systems::waterflow::water_flow;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(MouseState::default());
    world.insert_resource(ToolBox::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(GameConfig::new());
    world.init_resource::<Messages<AudioCmd>>();
    world.spawn(Observer::new(clear_garden_observer));
    world.flush();
    world
}

/// One simulated frame with the headless garden system order.
fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(tool_select);
    schedule.add_systems(garden_brush.after(tool_select));
    schedule.add_systems(water_flow.after(garden_brush));
    schedule.add_systems(garden_save.after(garden_brush));
    schedule.add_systems(garden_load.after(garden_save));
    schedule.run(world);
    // One-shot key flags are consumed by the frame
    let mut input = world.resource_mut::<InputState>();
    input.tool_rake.just_pressed = false;
    input.tool_rock.just_pressed = false;
    input.tool_plant.just_pressed = false;
    input.tool_water.just_pressed = false;
    input.garden_clear.just_pressed = false;
    input.garden_save.just_pressed = false;
    input.garden_load.just_pressed = false;
}

fn pick_tool(world: &mut World, tool: Tool) {
    let mut input = world.resource_mut::<InputState>();
    match tool {
        Tool::Rake => input.tool_rake.just_pressed = true,
        Tool::Rock => input.tool_rock.just_pressed = true,
        Tool::Plant => input.tool_plant.just_pressed = true,
        Tool::Water => input.tool_water.just_pressed = true,
    }
}

fn press_at(world: &mut World, x: f32, y: f32) {
    let mut mouse = world.resource_mut::<MouseState>();
    mouse.delta = Vector2 {
        x: x - mouse.position.x,
        y: y - mouse.position.y,
    };
    mouse.position = Vector2 { x, y };
    mouse.left.refresh(true, true, false);
}

fn drag_to(world: &mut World, x: f32, y: f32) {
    let mut mouse = world.resource_mut::<MouseState>();
    mouse.delta = Vector2 {
        x: x - mouse.position.x,
        y: y - mouse.position.y,
    };
    mouse.position = Vector2 { x, y };
    mouse.left.refresh(true, false, false);
}

fn release(world: &mut World) {
    let mut mouse = world.resource_mut::<MouseState>();
    mouse.delta = Vector2 { x: 0.0, y: 0.0 };
    mouse.left.refresh(false, false, true);
}

fn idle(world: &mut World) {
    let mut mouse = world.resource_mut::<MouseState>();
    mouse.delta = Vector2 { x: 0.0, y: 0.0 };
    mouse.left.refresh(false, false, false);
}

fn drain_audio(world: &mut World) -> Vec<AudioCmd> {
    world
        .resource_mut::<Messages<AudioCmd>>()
        .drain()
        .collect()
}

fn piece_count(world: &mut World) -> usize {
    let mut q = world.query::<&GardenPiece>();
    q.iter(world).count()
}

#[test]
fn tool_keys_switch_the_toolbox() {
    let mut world = make_world();
    assert_eq!(world.resource::<ToolBox>().current, Tool::Rake);

    pick_tool(&mut world, Tool::Water);
    idle(&mut world);
    tick(&mut world, 0.01);
    assert_eq!(world.resource::<ToolBox>().current, Tool::Water);

    pick_tool(&mut world, Tool::Plant);
    tick(&mut world, 0.01);
    assert_eq!(world.resource::<ToolBox>().current, Tool::Plant);
}

#[test]
fn rock_tool_stamps_a_rock_and_plays_its_sound() {
    let mut world = make_world();
    pick_tool(&mut world, Tool::Rock);
    idle(&mut world);
    tick(&mut world, 0.01);

    press_at(&mut world, 120.0, 80.0);
    tick(&mut world, 0.01);

    let mut q = world.query::<(&GardenPiece, &MapPosition, &Rock)>();
    let rocks: Vec<_> = q.iter(&world).collect();
    assert_eq!(rocks.len(), 1);
    let (piece, position, rock) = rocks[0];
    assert_eq!(piece.order, 0);
    assert_eq!(position.pos.x, 120.0);
    assert_eq!(position.pos.y, 80.0);
    assert!(rock.outline.len() >= 5 && rock.outline.len() <= 9);

    let cmds = drain_audio(&mut world);
    assert!(cmds
        .iter()
        .any(|cmd| matches!(cmd, AudioCmd::PlayFx { id } if id == "rock")));
    // The first effect latches the background music on
    assert!(cmds
        .iter()
        .any(|cmd| matches!(cmd, AudioCmd::PlayMusic { looped: true, .. })));
}

#[test]
fn plant_tool_stamps_a_plant() {
    let mut world = make_world();
    pick_tool(&mut world, Tool::Plant);
    idle(&mut world);
    tick(&mut world, 0.01);

    press_at(&mut world, 300.0, 200.0);
    tick(&mut world, 0.01);

    let mut q = world.query::<(&MapPosition, &Plant)>();
    assert_eq!(q.iter(&world).count(), 1);

    let cmds = drain_audio(&mut world);
    assert!(cmds
        .iter()
        .any(|cmd| matches!(cmd, AudioCmd::PlayFx { id } if id == "plant")));
}

#[test]
fn rake_stroke_follows_the_drag() {
    let mut world = make_world();
    // Rake is the default tool
    press_at(&mut world, 10.0, 10.0);
    tick(&mut world, 0.01);

    {
        let mut q = world.query::<(&RakeStroke, &ActiveStroke)>();
        let strokes: Vec<_> = q.iter(&world).collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].0.points.len(), 1);
        assert_eq!(strokes[0].0.grains.len(), RakeStroke::GRAINS_PER_POINT);
    }

    drag_to(&mut world, 20.0, 12.0);
    tick(&mut world, 0.01);
    drag_to(&mut world, 30.0, 15.0);
    tick(&mut world, 0.01);

    {
        let mut q = world.query::<&RakeStroke>();
        let stroke = q.iter(&world).next().unwrap();
        assert_eq!(stroke.points.len(), 3);
        assert_eq!(stroke.grains.len(), 3 * RakeStroke::GRAINS_PER_POINT);
    }

    release(&mut world);
    tick(&mut world, 0.01);

    let mut active = world.query::<&ActiveStroke>();
    assert_eq!(active.iter(&world).count(), 0);
    let mut strokes = world.query::<&RakeStroke>();
    assert_eq!(strokes.iter(&world).next().unwrap().points.len(), 3);
}

#[test]
fn stationary_hold_appends_nothing() {
    let mut world = make_world();
    press_at(&mut world, 10.0, 10.0);
    tick(&mut world, 0.01);

    // Button held, cursor not moving
    {
        let mut mouse = world.resource_mut::<MouseState>();
        mouse.delta = Vector2 { x: 0.0, y: 0.0 };
        mouse.left.refresh(true, false, false);
    }
    tick(&mut world, 0.01);
    tick(&mut world, 0.01);

    let mut q = world.query::<&RakeStroke>();
    assert_eq!(q.iter(&world).next().unwrap().points.len(), 1);
}

#[test]
fn brush_sounds_are_throttled_while_dragging() {
    let mut world = make_world();
    press_at(&mut world, 10.0, 10.0);
    tick(&mut world, 0.01);
    drain_audio(&mut world);

    // Two quick drags: only the first one may sound
    drag_to(&mut world, 20.0, 10.0);
    tick(&mut world, 0.01);
    drag_to(&mut world, 30.0, 10.0);
    tick(&mut world, 0.01);
    let rakes = drain_audio(&mut world)
        .iter()
        .filter(|cmd| matches!(cmd, AudioCmd::PlayFx { id } if id == "rake"))
        .count();
    assert_eq!(rakes, 1);

    // After the throttle window another drag sounds again
    drag_to(&mut world, 40.0, 10.0);
    tick(&mut world, 0.3);
    let rakes = drain_audio(&mut world)
        .iter()
        .filter(|cmd| matches!(cmd, AudioCmd::PlayFx { id } if id == "rake"))
        .count();
    assert_eq!(rakes, 1);
}

#[test]
fn water_course_spawns_and_advances_drops() {
    let mut world = make_world();
    pick_tool(&mut world, Tool::Water);
    idle(&mut world);
    tick(&mut world, 0.001);

    press_at(&mut world, 0.0, 0.0);
    tick(&mut world, 0.001);
    drag_to(&mut world, 100.0, 0.0);
    tick(&mut world, 0.001);
    drag_to(&mut world, 100.0, 100.0);
    tick(&mut world, 0.001);
    release(&mut world);

    // Accumulate one spawn period
    tick(&mut world, 0.05);
    {
        let mut q = world.query::<&WaterCourse>();
        let course = q.iter(&world).next().unwrap();
        assert_eq!(course.points.len(), 3);
        assert_eq!(course.drops.len(), 1);
        let drop = &course.drops[0];
        assert!(drop.speed >= 0.12 && drop.speed <= 0.30);
        assert_eq!(drop.segment, 0);
    }

    // And a second one
    tick(&mut world, 0.05);
    {
        let mut q = world.query::<&WaterCourse>();
        let course = q.iter(&world).next().unwrap();
        assert_eq!(course.drops.len(), 2);
        assert!(course.drops[0].progress > 0.0);
    }
}

#[test]
fn drops_loop_back_to_the_source() {
    let mut world = make_world();
    world.spawn((
        GardenPiece { order: 0 },
        WaterCourse {
            points: vec![
                Vector2 { x: 0.0, y: 0.0 },
                Vector2 { x: 50.0, y: 0.0 },
                Vector2 { x: 50.0, y: 50.0 },
            ],
            drops: vec![WaterDrop {
                segment: 1,
                progress: 0.95,
                speed: 2.0,
                radius: 1.5,
                alpha: 200,
            }],
            spawn_timer: 0.0,
        },
    ));
    idle(&mut world);

    // 0.95 + 2.0 * 0.04 crosses 1.0 on the last segment
    tick(&mut world, 0.04);

    let mut q = world.query::<&WaterCourse>();
    let course = q.iter(&world).next().unwrap();
    let looped = course
        .drops
        .iter()
        .find(|drop| drop.speed == 2.0)
        .unwrap();
    assert_eq!(looped.segment, 0);
    assert_eq!(looped.progress, 0.0);
}

#[test]
fn single_point_course_stays_still() {
    let mut world = make_world();
    pick_tool(&mut world, Tool::Water);
    idle(&mut world);
    tick(&mut world, 0.01);

    press_at(&mut world, 5.0, 5.0);
    tick(&mut world, 0.01);
    release(&mut world);

    for _ in 0..10 {
        tick(&mut world, 0.1);
    }

    let mut q = world.query::<&WaterCourse>();
    let course = q.iter(&world).next().unwrap();
    assert_eq!(course.points.len(), 1);
    assert!(course.drops.is_empty());
}

#[test]
fn clear_event_wipes_the_garden() {
    let mut world = make_world();
    pick_tool(&mut world, Tool::Rock);
    idle(&mut world);
    tick(&mut world, 0.01);
    press_at(&mut world, 10.0, 10.0);
    tick(&mut world, 0.01);
    release(&mut world);
    tick(&mut world, 0.01);
    press_at(&mut world, 90.0, 40.0);
    tick(&mut world, 0.01);
    assert_eq!(piece_count(&mut world), 2);
    drain_audio(&mut world);

    world.trigger(ClearGardenEvent {});
    world.flush();

    assert_eq!(piece_count(&mut world), 0);
    let cmds = drain_audio(&mut world);
    assert!(cmds
        .iter()
        .any(|cmd| matches!(cmd, AudioCmd::PlayFx { id } if id == "clear")));
}

#[test]
fn clear_key_triggers_the_event() {
    let mut world = make_world();
    pick_tool(&mut world, Tool::Plant);
    idle(&mut world);
    tick(&mut world, 0.01);
    press_at(&mut world, 10.0, 10.0);
    tick(&mut world, 0.01);
    assert_eq!(piece_count(&mut world), 1);

    release(&mut world);
    world.resource_mut::<InputState>().garden_clear.just_pressed = true;
    tick(&mut world, 0.01);

    assert_eq!(piece_count(&mut world), 0);
}

#[test]
fn garden_survives_a_save_load_roundtrip() {
    let path = std::env::temp_dir().join("courtyard_garden_roundtrip.json");
    let mut world = make_world();
    world.resource_mut::<GameConfig>().garden_file = path.clone();

    // One of each: rock, plant, rake stroke, water course
    pick_tool(&mut world, Tool::Rock);
    idle(&mut world);
    tick(&mut world, 0.01);
    press_at(&mut world, 10.0, 20.0);
    tick(&mut world, 0.01);
    release(&mut world);
    tick(&mut world, 0.01);

    pick_tool(&mut world, Tool::Plant);
    tick(&mut world, 0.01);
    press_at(&mut world, 30.0, 40.0);
    tick(&mut world, 0.01);
    release(&mut world);
    tick(&mut world, 0.01);

    pick_tool(&mut world, Tool::Rake);
    tick(&mut world, 0.01);
    press_at(&mut world, 50.0, 60.0);
    tick(&mut world, 0.01);
    drag_to(&mut world, 70.0, 60.0);
    tick(&mut world, 0.01);
    release(&mut world);
    tick(&mut world, 0.01);

    pick_tool(&mut world, Tool::Water);
    tick(&mut world, 0.01);
    press_at(&mut world, 80.0, 90.0);
    tick(&mut world, 0.01);
    drag_to(&mut world, 120.0, 90.0);
    tick(&mut world, 0.01);
    release(&mut world);
    tick(&mut world, 0.01);

    assert_eq!(piece_count(&mut world), 4);

    world.resource_mut::<InputState>().garden_save.just_pressed = true;
    tick(&mut world, 0.01);
    assert!(path.exists());

    // Wipe and reload
    world.trigger(ClearGardenEvent {});
    world.flush();
    assert_eq!(piece_count(&mut world), 0);

    world.resource_mut::<InputState>().garden_load.just_pressed = true;
    tick(&mut world, 0.01);

    assert_eq!(piece_count(&mut world), 4);
    {
        let mut rocks = world.query::<(&GardenPiece, &MapPosition, &Rock)>();
        let (piece, position, _) = rocks.iter(&world).next().unwrap();
        assert_eq!(piece.order, 0);
        assert_eq!(position.pos.x, 10.0);
        assert_eq!(position.pos.y, 20.0);
    }
    {
        let mut strokes = world.query::<&RakeStroke>();
        let stroke = strokes.iter(&world).next().unwrap();
        assert_eq!(stroke.points.len(), 2);
        assert_eq!(stroke.grains.len(), 2 * RakeStroke::GRAINS_PER_POINT);
    }
    {
        let mut courses = world.query::<&WaterCourse>();
        let course = courses.iter(&world).next().unwrap();
        assert_eq!(course.points.len(), 2);
        assert!(course.drops.is_empty());
    }
    // New pieces continue the insertion sequence
    assert_eq!(world.resource::<ToolBox>().next_order, 4);

    std::fs::remove_file(&path).ok();
}

#[test]
fn load_with_missing_file_keeps_the_garden() {
    let mut world = make_world();
    world.resource_mut::<GameConfig>().garden_file =
        std::env::temp_dir().join("courtyard_garden_never_written.json");

    pick_tool(&mut world, Tool::Rock);
    idle(&mut world);
    tick(&mut world, 0.01);
    press_at(&mut world, 10.0, 10.0);
    tick(&mut world, 0.01);
    release(&mut world);
    assert_eq!(piece_count(&mut world), 1);

    world.resource_mut::<InputState>().garden_load.just_pressed = true;
    tick(&mut world, 0.01);

    assert_eq!(piece_count(&mut world), 1);
}
