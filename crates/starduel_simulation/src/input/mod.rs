//! Player input module
//!
//! Два разных вида input за тик:
//!
//! ```text
//! level-sampled: HeldControls (какие клавиши зажаты сейчас) → movement
//! edge-triggered: InputEdge (нажатие Fire, Quit)            → fire / termination
//! ```
//!
//! Fire только по edge: зажатая клавиша не даёт непрерывную стрельбу.

pub mod events;
pub mod source;
pub mod systems;

pub use events::*;
pub use source::*;
pub use systems::*;
