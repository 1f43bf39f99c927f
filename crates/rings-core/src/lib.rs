pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod ease;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod object;
pub mod scene;
pub mod stage;
pub mod tween;

pub use camera::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use ease::*;
pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use object::*;
pub use scene::*;
pub use stage::*;
pub use tween::*;
