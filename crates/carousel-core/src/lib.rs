pub mod constants;
pub mod engine;
pub mod error;
pub mod guard;
pub mod input;
pub mod model;
pub mod page;
pub mod persistence;
pub mod sound;
pub mod view;

pub use engine::*;
pub use error::CarouselError;
pub use guard::ContentGuard;
pub use model::*;
pub use view::*;
