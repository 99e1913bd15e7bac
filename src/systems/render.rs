//! Drawing.
//!
//! One draw pass per toy, called from the main loop between
//! `begin_drawing`/`end_drawing` with the raylib handle temporarily pulled
//! out of the world. The pass queries the world and draws; it never mutates
//! simulation state.
//!
//! The garden redraws the whole object list every frame, oldest piece first,
//! so later placements layer on top; water drops draw above everything.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::gardenpiece::GardenPiece;
use crate::components::heading::Heading;
use crate::components::mapposition::MapPosition;
use crate::components::plant::{Plant, PlantKind};
use crate::components::prop::Prop;
use crate::components::rigidbody::RigidBody;
use crate::components::rock::Rock;
use crate::components::spaceposition::SpacePosition;
use crate::components::stroke::RakeStroke;
use crate::components::watercourse::WaterCourse;
use crate::resources::debugmode::DebugMode;
use crate::resources::followcam::FollowCamera;
use crate::resources::mouse::MouseState;
use crate::resources::toolbox::ToolBox;
use crate::resources::windowsize::WindowSize;
use crate::toys::Toy;

const GROUND: Color = Color::new(144, 238, 144, 255);
const SHIP_BODY: Color = Color::new(255, 107, 107, 255);
const SHIP_COCKPIT: Color = Color::new(255, 235, 59, 255);
const SHIP_WING: Color = Color::new(255, 152, 0, 255);
const SHIP_THRUSTER: Color = Color::new(255, 64, 129, 255);

const SAND: Color = Color::new(234, 231, 220, 255);
const GRAIN_SHADE: (u8, u8, u8) = (212, 207, 191);
const WATER: Color = Color::new(100, 150, 255, 76);
const ROCK_EDGE: Color = Color::new(138, 133, 133, 255);
const TRUNK: Color = Color::new(139, 90, 43, 255);
const BAMBOO_RING: Color = Color::new(0, 0, 0, 76);
const RIVER_WIDTH: f32 = 25.0;

/// Draw the active toy.
pub fn draw_frame(world: &mut World, d: &mut RaylibDrawHandle, toy: Toy) {
    match toy {
        Toy::Flyer => draw_flyer(world, d),
        Toy::Garden => draw_garden(world, d),
    }
}

// ---------------------------------------------------------------- flyer ----

fn draw_flyer(world: &mut World, d: &mut RaylibDrawHandle) {
    d.clear_background(Color::SKYBLUE);

    let cam = world.resource::<FollowCamera>().camera;
    {
        let mut d3 = d.begin_mode3D(cam);

        d3.draw_plane(
            Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            Vector2 { x: 50.0, y: 50.0 },
            GROUND,
        );

        let mut props = world.query::<(&SpacePosition, &Prop)>();
        for (position, prop) in props.iter(world) {
            d3.draw_cube(position.pos, prop.size, prop.size, prop.size, prop.color);
        }

        let mut avatars = world.query::<(&SpacePosition, &Heading)>();
        for (position, heading) in avatars.iter(world) {
            draw_ship(&mut d3, position.pos, heading.yaw_degrees);
        }
    }

    draw_flyer_debug(world, d);
}

/// Offset rotated about the Y axis by `yaw_degrees`, added to `base`.
fn yaw_offset(base: Vector3, offset: Vector3, yaw_degrees: f32) -> Vector3 {
    let (s, c) = yaw_degrees.to_radians().sin_cos();
    Vector3 {
        x: base.x + offset.x * c + offset.z * s,
        y: base.y + offset.y,
        z: base.z - offset.x * s + offset.z * c,
    }
}

/// Stylized ship: body sphere, cockpit, two wing cones, tail thruster.
/// Part offsets rotate with the heading; yaw 0 faces +Z.
fn draw_ship(d3: &mut RaylibMode3D<RaylibDrawHandle>, at: Vector3, yaw_degrees: f32) {
    let center = Vector3 {
        x: at.x,
        y: at.y + 0.3,
        z: at.z,
    };
    d3.draw_sphere(center, 0.3, SHIP_BODY);
    d3.draw_sphere(
        yaw_offset(
            center,
            Vector3 {
                x: 0.0,
                y: 0.15,
                z: 0.4,
            },
            yaw_degrees,
        ),
        0.15,
        SHIP_COCKPIT,
    );
    for side in [-1.0f32, 1.0f32] {
        d3.draw_cylinder(
            yaw_offset(
                center,
                Vector3 {
                    x: side * 0.4,
                    y: -0.15,
                    z: -0.1,
                },
                yaw_degrees,
            ),
            0.0,
            0.15,
            0.45,
            8,
            SHIP_WING,
        );
    }
    d3.draw_sphere(
        yaw_offset(
            center,
            Vector3 {
                x: 0.0,
                y: -0.1,
                z: -0.6,
            },
            yaw_degrees,
        ),
        0.1,
        SHIP_THRUSTER,
    );
}

fn draw_flyer_debug(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }

    let fps = d.get_fps();
    d.draw_text(
        &format!("DEBUG (F11 toggles) | FPS: {}", fps),
        10,
        10,
        10,
        Color::BLACK,
    );

    let mut avatars = world.query::<(&SpacePosition, &RigidBody)>();
    let mut line = 30;
    for (position, body) in avatars.iter(world) {
        let text = format!(
            "pos ({:.1}, {:.1}, {:.1}) vel ({:.1}, {:.1}, {:.1})",
            position.pos.x,
            position.pos.y,
            position.pos.z,
            body.velocity.x,
            body.velocity.y,
            body.velocity.z
        );
        d.draw_text(&text, 10, line, 10, Color::BLACK);
        line += 20;
    }
}

// --------------------------------------------------------------- garden ----

fn draw_garden(world: &mut World, d: &mut RaylibDrawHandle) {
    d.clear_background(SAND);

    // Insertion order, oldest first
    let mut pieces: Vec<(u32, Entity)> = {
        let mut q = world.query::<(Entity, &GardenPiece)>();
        q.iter(world).map(|(e, piece)| (piece.order, e)).collect()
    };
    pieces.sort_by_key(|&(order, _)| order);

    for &(_, entity) in &pieces {
        if let Some(stroke) = world.get::<RakeStroke>(entity) {
            draw_rake_stroke(d, stroke);
        } else if let Some(course) = world.get::<WaterCourse>(entity) {
            draw_river(d, course);
        } else if let Some(rock) = world.get::<Rock>(entity) {
            if let Some(position) = world.get::<MapPosition>(entity) {
                draw_rock(d, position.pos, rock);
            }
        } else if let Some(plant) = world.get::<Plant>(entity) {
            if let Some(position) = world.get::<MapPosition>(entity) {
                draw_plant(d, position.pos, plant);
            }
        }
    }

    // Drops flow above everything
    for &(_, entity) in &pieces {
        if let Some(course) = world.get::<WaterCourse>(entity) {
            for drop in &course.drops {
                if let Some(at) = course.drop_position(drop) {
                    d.draw_circle_v(at, drop.radius, Color::new(255, 255, 255, drop.alpha));
                }
            }
        }
    }

    draw_garden_debug(world, d, pieces.len());
}

fn draw_rake_stroke(d: &mut RaylibDrawHandle, stroke: &RakeStroke) {
    for grain in &stroke.grains {
        d.draw_rectangle(
            grain.pos.x as i32,
            grain.pos.y as i32,
            grain.size.ceil() as i32,
            grain.size.ceil() as i32,
            Color::new(GRAIN_SHADE.0, GRAIN_SHADE.1, GRAIN_SHADE.2, grain.alpha),
        );
    }
}

fn draw_river(d: &mut RaylibDrawHandle, course: &WaterCourse) {
    for pair in course.points.windows(2) {
        d.draw_line_ex(pair[0], pair[1], RIVER_WIDTH, WATER);
    }
    // Round caps and joins
    for &point in &course.points {
        d.draw_circle_v(point, RIVER_WIDTH / 2.0, WATER);
    }
}

/// Fan vertices for a rock polygon: center first, outline reversed so the
/// triangles wind counter-clockwise in screen space, then closed.
fn rock_fan(at: Vector2, rock: &Rock) -> Vec<Vector2> {
    let mut fan = Vec::with_capacity(rock.outline.len() + 2);
    fan.push(at);
    for v in rock.outline.iter().rev() {
        fan.push(Vector2 {
            x: at.x + v.x,
            y: at.y + v.y,
        });
    }
    if fan.len() > 1 {
        let first = fan[1];
        fan.push(first);
    }
    fan
}

fn draw_rock(d: &mut RaylibDrawHandle, at: Vector2, rock: &Rock) {
    // Underside shade offset a touch down-right, then the lit body on top
    let shade = rock_fan(
        Vector2 {
            x: at.x + 1.5,
            y: at.y + 2.5,
        },
        rock,
    );
    d.draw_triangle_fan(&shade, rock.dark);
    let body = rock_fan(at, rock);
    d.draw_triangle_fan(&body, rock.light);

    for pair in body[1..].windows(2) {
        d.draw_line_v(pair[0], pair[1], ROCK_EDGE);
    }
}

fn draw_plant(d: &mut RaylibDrawHandle, at: Vector2, plant: &Plant) {
    match &plant.kind {
        PlantKind::Tree {
            trunk_height,
            trunk_width,
            foliage_radius,
            canopy,
            canopy_shade,
        } => {
            d.draw_rectangle(
                (at.x - trunk_width / 2.0) as i32,
                (at.y - trunk_height) as i32,
                *trunk_width as i32,
                *trunk_height as i32,
                TRUNK,
            );
            d.draw_circle_v(
                Vector2 {
                    x: at.x,
                    y: at.y - trunk_height,
                },
                *foliage_radius,
                *canopy,
            );
            d.draw_circle_v(
                Vector2 {
                    x: at.x + 5.0,
                    y: at.y - trunk_height - 10.0,
                },
                foliage_radius * 0.8,
                *canopy_shade,
            );
        }
        PlantKind::Bamboo { stalks } => {
            for stalk in stalks {
                let x = at.x + stalk.x_offset;
                d.draw_line_ex(
                    Vector2 { x, y: at.y },
                    Vector2 {
                        x,
                        y: at.y - stalk.height,
                    },
                    stalk.width,
                    stalk.color,
                );
                let mut ring_y = at.y;
                while ring_y > at.y - stalk.height {
                    d.draw_line_v(
                        Vector2 {
                            x: x - 5.0,
                            y: ring_y,
                        },
                        Vector2 {
                            x: x + 5.0,
                            y: ring_y,
                        },
                        BAMBOO_RING,
                    );
                    ring_y -= 15.0;
                }
            }
        }
        PlantKind::Shrub { tufts } => {
            for tuft in tufts {
                d.draw_circle_v(
                    Vector2 {
                        x: at.x + tuft.offset.x,
                        y: at.y + tuft.offset.y,
                    },
                    tuft.radius,
                    tuft.color,
                );
            }
        }
    }
}

fn draw_garden_debug(world: &mut World, d: &mut RaylibDrawHandle, piece_count: usize) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }

    let fps = d.get_fps();
    d.draw_text(
        &format!("DEBUG (F11 toggles) | FPS: {}", fps),
        10,
        10,
        10,
        Color::BLACK,
    );

    let tool = world.resource::<ToolBox>().current;
    let mouse = world.resource::<MouseState>().position;
    let window = *world.resource::<WindowSize>();
    let mut drops = 0usize;
    let mut courses = world.query::<&WaterCourse>();
    for course in courses.iter(world) {
        drops += course.drops.len();
    }
    d.draw_text(
        &format!(
            "tool {:?} | pieces {} | drops {} | mouse ({:.0}, {:.0}) | window {}x{}",
            tool, piece_count, drops, mouse.x, mouse.y, window.w, window.h
        ),
        10,
        30,
        10,
        Color::BLACK,
    );
}
