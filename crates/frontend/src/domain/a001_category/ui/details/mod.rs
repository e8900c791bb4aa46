pub mod background_image;
pub mod general_info;
pub mod subcategories;

pub use background_image::CategoryBackgroundImage;
pub use general_info::CategoryGeneralInfo;
pub use subcategories::CategorySubcategories;
