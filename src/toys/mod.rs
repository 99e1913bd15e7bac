//! Toy scenes.
//!
//! Each toy is a single scene chosen at process start: the setup function
//! inserts its resources and spawns its entities, and `main` assembles the
//! matching schedule.

pub mod flyer;
pub mod garden;

/// Which toy the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Toy {
    /// Third-person movement playground: run, jump, chase camera.
    Flyer,
    /// Zen garden drawing toy: rake, rocks, plants, water.
    Garden,
}

impl std::fmt::Display for Toy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Toy::Flyer => write!(f, "flyer"),
            Toy::Garden => write!(f, "garden"),
        }
    }
}
