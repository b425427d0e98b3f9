//! Room domain entities.

pub mod kind;
pub mod model;

pub use kind::RoomType;
pub use model::Room;
