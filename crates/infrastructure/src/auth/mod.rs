//! Loading of authorized security activations.

mod activation_file;

pub use activation_file::{load_activations, parse_activations};
