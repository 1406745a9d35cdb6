pub mod pointer;

pub use pointer::wire_background_inputs;
