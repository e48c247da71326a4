#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod declutter;
pub mod error;
pub mod render;
pub mod scene;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{DeclutterConfig, load_config};
pub use declutter::{
    AnchorOutcome, LabelRect, PassReport, Placement, Point, Unplaceable, declutter, run_pass,
};
pub use error::SceneError;
pub use scene::{BoxExtent, LabelCandidate, Scene, load_scene, parse_scene, placements_json};
