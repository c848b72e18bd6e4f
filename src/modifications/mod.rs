pub mod sdk;
#[cfg(feature = "mod-ignore_window")] pub mod ignore_window;
#[cfg(feature = "mod-vertex_sets")]   pub mod vertex_sets;

pub use sdk::*;
#[cfg(feature = "mod-ignore_window")] pub use ignore_window::*;
#[cfg(feature = "mod-vertex_sets")]   pub use vertex_sets::*;
