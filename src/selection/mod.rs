pub mod state;

pub use state::{AddonSelection, SelectionState};
