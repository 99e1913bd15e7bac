//! Garden save/load.
//!
//! Serializes the garden object list to pretty JSON and back. Every piece
//! already stores its rolled randomness, so the file captures the garden
//! exactly; water drops are transient animation state and regrow after a
//! load. I/O and parse failures are logged and otherwise ignored.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::{Color, Vector2};
use serde::{Deserialize, Serialize};

use crate::components::gardenpiece::GardenPiece;
use crate::components::mapposition::MapPosition;
use crate::components::plant::{Plant, PlantKind, Stalk, Tuft};
use crate::components::rock::Rock;
use crate::components::stroke::{Grain, RakeStroke};
use crate::components::watercourse::WaterCourse;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::toolbox::ToolBox;

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct PointDoc {
    pub x: f32,
    pub y: f32,
}

impl From<Vector2> for PointDoc {
    fn from(v: Vector2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<PointDoc> for Vector2 {
    fn from(p: PointDoc) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ColorDoc {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color> for ColorDoc {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<ColorDoc> for Color {
    fn from(c: ColorDoc) -> Self {
        Color::new(c.r, c.g, c.b, c.a)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RockDoc {
    pub order: u32,
    pub at: PointDoc,
    pub radius: f32,
    pub outline: Vec<PointDoc>,
    pub light: ColorDoc,
    pub dark: ColorDoc,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StalkDoc {
    pub x_offset: f32,
    pub height: f32,
    pub width: f32,
    pub color: ColorDoc,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TuftDoc {
    pub at: PointDoc,
    pub radius: f32,
    pub color: ColorDoc,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlantKindDoc {
    Tree {
        trunk_height: f32,
        trunk_width: f32,
        foliage_radius: f32,
        canopy: ColorDoc,
        canopy_shade: ColorDoc,
    },
    Bamboo {
        stalks: Vec<StalkDoc>,
    },
    Shrub {
        tufts: Vec<TuftDoc>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlantDoc {
    pub order: u32,
    pub at: PointDoc,
    #[serde(flatten)]
    pub kind: PlantKindDoc,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GrainDoc {
    pub at: PointDoc,
    pub size: f32,
    pub alpha: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RakeDoc {
    pub order: u32,
    pub points: Vec<PointDoc>,
    pub grains: Vec<GrainDoc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WaterDoc {
    pub order: u32,
    pub points: Vec<PointDoc>,
}

/// On-disk mirror of the garden object list.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GardenDoc {
    pub rocks: Vec<RockDoc>,
    pub plants: Vec<PlantDoc>,
    pub rakes: Vec<RakeDoc>,
    pub waters: Vec<WaterDoc>,
}

impl GardenDoc {
    pub fn len(&self) -> usize {
        self.rocks.len() + self.plants.len() + self.rakes.len() + self.waters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highest insertion sequence stored in the document.
    pub fn max_order(&self) -> u32 {
        let orders = self
            .rocks
            .iter()
            .map(|r| r.order)
            .chain(self.plants.iter().map(|p| p.order))
            .chain(self.rakes.iter().map(|r| r.order))
            .chain(self.waters.iter().map(|w| w.order));
        orders.max().unwrap_or(0)
    }

    /// Spawn every stored piece into the world.
    pub fn spawn_into(&self, commands: &mut Commands) {
        for rock in &self.rocks {
            commands.spawn((
                GardenPiece { order: rock.order },
                MapPosition::new(rock.at.x, rock.at.y),
                Rock {
                    outline: rock.outline.iter().map(|&p| p.into()).collect(),
                    radius: rock.radius,
                    light: rock.light.into(),
                    dark: rock.dark.into(),
                },
            ));
        }
        for plant in &self.plants {
            let kind = match &plant.kind {
                PlantKindDoc::Tree {
                    trunk_height,
                    trunk_width,
                    foliage_radius,
                    canopy,
                    canopy_shade,
                } => PlantKind::Tree {
                    trunk_height: *trunk_height,
                    trunk_width: *trunk_width,
                    foliage_radius: *foliage_radius,
                    canopy: (*canopy).into(),
                    canopy_shade: (*canopy_shade).into(),
                },
                PlantKindDoc::Bamboo { stalks } => PlantKind::Bamboo {
                    stalks: stalks
                        .iter()
                        .map(|s| Stalk {
                            x_offset: s.x_offset,
                            height: s.height,
                            width: s.width,
                            color: s.color.into(),
                        })
                        .collect(),
                },
                PlantKindDoc::Shrub { tufts } => PlantKind::Shrub {
                    tufts: tufts
                        .iter()
                        .map(|t| Tuft {
                            offset: t.at.into(),
                            radius: t.radius,
                            color: t.color.into(),
                        })
                        .collect(),
                },
            };
            commands.spawn((
                GardenPiece { order: plant.order },
                MapPosition::new(plant.at.x, plant.at.y),
                Plant { kind },
            ));
        }
        for rake in &self.rakes {
            commands.spawn((
                GardenPiece { order: rake.order },
                RakeStroke {
                    points: rake.points.iter().map(|&p| p.into()).collect(),
                    grains: rake
                        .grains
                        .iter()
                        .map(|g| Grain {
                            pos: g.at.into(),
                            size: g.size,
                            alpha: g.alpha,
                        })
                        .collect(),
                },
            ));
        }
        for water in &self.waters {
            commands.spawn((
                GardenPiece { order: water.order },
                WaterCourse {
                    points: water.points.iter().map(|&p| p.into()).collect(),
                    drops: Vec::new(),
                    spawn_timer: 0.0,
                },
            ));
        }
    }
}

/// Write the garden to the configured JSON file when the save key fires.
pub fn garden_save(
    input: Res<InputState>,
    config: Res<GameConfig>,
    rocks: Query<(&GardenPiece, &MapPosition, &Rock)>,
    plants: Query<(&GardenPiece, &MapPosition, &Plant)>,
    rakes: Query<(&GardenPiece, &RakeStroke)>,
    waters: Query<(&GardenPiece, &WaterCourse)>,
) {
    if !input.garden_save.just_pressed {
        return;
    }

    let mut doc = GardenDoc::default();
    for (piece, position, rock) in rocks.iter() {
        doc.rocks.push(RockDoc {
            order: piece.order,
            at: position.pos.into(),
            radius: rock.radius,
            outline: rock.outline.iter().map(|&p| p.into()).collect(),
            light: rock.light.into(),
            dark: rock.dark.into(),
        });
    }
    for (piece, position, plant) in plants.iter() {
        let kind = match &plant.kind {
            PlantKind::Tree {
                trunk_height,
                trunk_width,
                foliage_radius,
                canopy,
                canopy_shade,
            } => PlantKindDoc::Tree {
                trunk_height: *trunk_height,
                trunk_width: *trunk_width,
                foliage_radius: *foliage_radius,
                canopy: (*canopy).into(),
                canopy_shade: (*canopy_shade).into(),
            },
            PlantKind::Bamboo { stalks } => PlantKindDoc::Bamboo {
                stalks: stalks
                    .iter()
                    .map(|s| StalkDoc {
                        x_offset: s.x_offset,
                        height: s.height,
                        width: s.width,
                        color: s.color.into(),
                    })
                    .collect(),
            },
            PlantKind::Shrub { tufts } => PlantKindDoc::Shrub {
                tufts: tufts
                    .iter()
                    .map(|t| TuftDoc {
                        at: t.offset.into(),
                        radius: t.radius,
                        color: t.color.into(),
                    })
                    .collect(),
            },
        };
        doc.plants.push(PlantDoc {
            order: piece.order,
            at: position.pos.into(),
            kind,
        });
    }
    for (piece, stroke) in rakes.iter() {
        doc.rakes.push(RakeDoc {
            order: piece.order,
            points: stroke.points.iter().map(|&p| p.into()).collect(),
            grains: stroke
                .grains
                .iter()
                .map(|g| GrainDoc {
                    at: g.pos.into(),
                    size: g.size,
                    alpha: g.alpha,
                })
                .collect(),
        });
    }
    for (piece, course) in waters.iter() {
        doc.waters.push(WaterDoc {
            order: piece.order,
            points: course.points.iter().map(|&p| p.into()).collect(),
        });
    }

    match serde_json::to_string_pretty(&doc) {
        Ok(json) => match std::fs::write(&config.garden_file, json) {
            Ok(()) => info!(
                "garden saved to {:?} ({} pieces)",
                config.garden_file,
                doc.len()
            ),
            Err(e) => warn!("garden save to {:?} failed: {}", config.garden_file, e),
        },
        Err(e) => warn!("garden serialize failed: {}", e),
    }
}

/// Replace the garden with the configured JSON file when the load key fires.
pub fn garden_load(
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut toolbox: ResMut<ToolBox>,
    pieces: Query<Entity, With<GardenPiece>>,
    mut commands: Commands,
) {
    if !input.garden_load.just_pressed {
        return;
    }

    let json = match std::fs::read_to_string(&config.garden_file) {
        Ok(json) => json,
        Err(e) => {
            warn!("garden load from {:?} failed: {}", config.garden_file, e);
            return;
        }
    };
    let doc: GardenDoc = match serde_json::from_str(&json) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("garden file {:?} did not parse: {}", config.garden_file, e);
            return;
        }
    };

    for entity in pieces.iter() {
        commands.entity(entity).try_despawn();
    }
    doc.spawn_into(&mut commands);
    toolbox.next_order = if doc.is_empty() { 0 } else { doc.max_order() + 1 };
    info!(
        "garden loaded from {:?} ({} pieces)",
        config.garden_file,
        doc.len()
    );
}
