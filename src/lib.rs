pub mod view;

#[cfg(feature = "backend")]
pub mod api;
#[cfg(feature = "backend")]
pub mod cli;
