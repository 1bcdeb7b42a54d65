pub mod bulk;
pub mod cfg;
pub mod colors;
pub mod dispatch;
pub mod logger;
pub mod placeholders;
pub mod render;

pub use libcommon::ChatError;

#[cfg(test)]
mod colors_ut;

#[cfg(test)]
mod render_ut;
