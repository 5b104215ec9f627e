pub mod animation;
pub mod constants;
pub mod controller;
pub mod frame_gate;
pub mod hero;
pub mod layout;
pub mod parallax;
pub mod readiness;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod viewport;
pub mod waitlist;

pub use animation::*;
pub use controller::*;
pub use frame_gate::FrameGate;
pub use layout::*;
pub use parallax::*;
pub use readiness::*;
pub use reveal::*;
pub use scene::*;
pub use scroll::*;
pub use viewport::*;
pub use waitlist::*;
