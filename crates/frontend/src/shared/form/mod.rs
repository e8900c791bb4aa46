pub mod component;
pub mod controller;
pub mod state;

pub use component::Form;
pub use controller::FormController;
pub use state::{FormSnapshot, FormState};
