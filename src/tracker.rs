mod centroid_tracker;
mod contour;
mod detection;
mod draw;
mod rect;
mod track_state;

pub use centroid_tracker::CentroidTracker;
pub use contour::{Contour, Moments};
pub use detection::{Detection, MIN_CONTOUR_AREA};
pub use draw::DrawCommand;
pub use rect::Rect;
pub use track_state::TrackState;
