// Module declarations
pub mod config;
pub mod geometry;
pub mod layout;
pub mod trace;

// Re-export commonly used types and functions
pub use geometry::scale::DEFAULT_SCALE_FACTOR;
pub use geometry::{Contour, IntPoint, Label, LayerId, PolyWithHoles};
pub use layout::{load_layout, Layout};
pub use trace::netname::NetName;
pub use trace::registry::NetRegistry;
pub use trace::{check_connectivity, LayerConnection, TraceResult};
