pub mod details;
pub mod preview;

pub use preview::CategoryFormsPreviewPage;
