pub mod components;
pub mod form;
pub mod icons;
pub mod localization;
