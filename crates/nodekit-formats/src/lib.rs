pub mod catalog;
pub mod ext;

pub use catalog::{BAKED_VAE, CatalogError, FormatCatalog, ModelPathResolver, STILL_IMAGE_FORMATS};
pub use ext::{
    ACCEPTED_ANIMATED_IMAGE_EXTENSIONS, ACCEPTED_VIDEO_EXTENSIONS, extension, is_gif, is_video,
    is_webp,
};
