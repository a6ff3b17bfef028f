pub mod constants;
pub mod controller;
pub mod cue;
pub mod envelope;
pub mod error;
pub mod gate;
pub mod mode;
pub mod source;
pub mod store;
pub mod synth;
pub mod testing;
pub mod timer;

pub use controller::*;
pub use cue::*;
pub use envelope::*;
pub use error::*;
pub use gate::*;
pub use mode::*;
pub use source::*;
pub use store::*;
pub use synth::*;
pub use timer::*;
