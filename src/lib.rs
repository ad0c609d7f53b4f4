//! cprintf - print formatted, optionally colored text portably.
//!
//! Build scripts and tooling use this to emit colored diagnostics without
//! knowing where their output lands: an ANSI terminal, a bare Windows
//! console, an HTML log viewer, or a plain file. One of four render back
//! ends is chosen per invocation, explicitly or by inspecting the
//! environment, and all formatting flows through a single [`Printer`].

pub mod cli;
pub mod emit;
pub mod escape;
pub mod mode;
pub mod render;
pub mod style;
pub mod version;

pub use emit::{EmitError, Printer};
pub use mode::Mode;
pub use render::{Backend, Engine, Stream};
pub use style::{Color, StyleOption, StyleSet};
