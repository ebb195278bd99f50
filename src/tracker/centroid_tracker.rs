//! Detection filtering and single-centroid track maintenance.

use crate::tracker::contour::Contour;
use crate::tracker::detection::Detection;
use crate::tracker::draw::DrawCommand;
use crate::tracker::track_state::TrackState;

/// Converts raw contours into filtered detections and maintains the
/// single-slot track across frames.
///
/// There is no detection-to-track matching, no track count, and no motion
/// model: the tracker remembers exactly one prior centroid and connects it to
/// each new detection with a line. See [`TrackState`] for the ordering caveat
/// when a frame contains more than one qualifying detection.
#[derive(Debug, Clone, Default)]
pub struct CentroidTracker {
    state: TrackState,
}

impl CentroidTracker {
    /// Create a tracker whose state starts at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker resuming from an existing track state.
    pub fn with_state(state: TrackState) -> Self {
        Self { state }
    }

    /// The current track state.
    pub fn state(&self) -> TrackState {
        self.state
    }

    /// Process one frame's contours and emit the overlay commands.
    ///
    /// Each qualifying, non-degenerate contour contributes exactly three
    /// commands in order: its bounding rectangle, its centroid marker, and a
    /// track line from the previously persisted centroid; the track state is
    /// then overwritten with the new centroid. Contours failing the area
    /// filter or with a zero zeroth moment contribute nothing and leave the
    /// state untouched. An empty or fully filtered frame yields an empty
    /// command sequence.
    pub fn update(&mut self, contours: &[Contour]) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        for contour in contours {
            let Some(detection) = Detection::from_contour(contour) else {
                continue;
            };
            let from = self.state.advance(detection.centroid);
            commands.push(DrawCommand::Rect(detection.bbox));
            commands.push(DrawCommand::Marker(detection.centroid));
            commands.push(DrawCommand::Line {
                from,
                to: detection.centroid,
            });
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::rect::Rect;
    use nalgebra::Point2;

    fn rect_contour(x: i32, y: i32, w: i32, h: i32) -> Contour {
        Contour::new(vec![
            Point2::new(x, y),
            Point2::new(x + w, y),
            Point2::new(x + w, y + h),
            Point2::new(x, y + h),
        ])
    }

    #[test]
    fn test_empty_frame() {
        let mut tracker = CentroidTracker::new();
        assert!(tracker.update(&[]).is_empty());
        assert_eq!(tracker.state().previous, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_noise_filtered_out() {
        let mut tracker = CentroidTracker::new();
        let commands = tracker.update(&[rect_contour(0, 0, 5, 10)]);
        assert!(commands.is_empty());
        assert_eq!(tracker.state().previous, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_command_triple_per_detection() {
        let mut tracker = CentroidTracker::new();
        let commands = tracker.update(&[rect_contour(4, 4, 12, 12)]);

        assert_eq!(
            commands,
            vec![
                DrawCommand::Rect(Rect::new(4.0, 4.0, 12.0, 12.0)),
                DrawCommand::Marker(Point2::new(10.0, 10.0)),
                DrawCommand::Line {
                    from: Point2::new(0.0, 0.0),
                    to: Point2::new(10.0, 10.0),
                },
            ]
        );
        assert_eq!(tracker.state().previous, Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_last_qualifying_contour_wins() {
        let mut tracker = CentroidTracker::new();
        let commands = tracker.update(&[
            rect_contour(14, 14, 12, 12), // centroid (20, 20)
            rect_contour(24, 24, 12, 12), // centroid (30, 30)
        ]);

        assert_eq!(commands.len(), 6);
        // The second triple's line starts where the first detection ended.
        assert_eq!(
            commands[5],
            DrawCommand::Line {
                from: Point2::new(20.0, 20.0),
                to: Point2::new(30.0, 30.0),
            }
        );
        assert_eq!(tracker.state().previous, Point2::new(30.0, 30.0));
    }

    #[test]
    fn test_degenerate_contour_leaves_state_unchanged() {
        let mut tracker = CentroidTracker::with_state(TrackState::new(Point2::new(10.0, 10.0)));
        let line = Contour::new(vec![
            Point2::new(0, 0),
            Point2::new(200, 0),
            Point2::new(400, 0),
        ]);
        assert!(tracker.update(&[line]).is_empty());
        assert_eq!(tracker.state().previous, Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_state_persists_across_frames() {
        let mut tracker = CentroidTracker::new();
        tracker.update(&[rect_contour(4, 4, 12, 12)]);

        // A frame with only noise must not disturb the track.
        tracker.update(&[rect_contour(0, 0, 5, 10)]);
        assert_eq!(tracker.state().previous, Point2::new(10.0, 10.0));

        let commands = tracker.update(&[rect_contour(24, 24, 12, 12)]);
        assert_eq!(
            commands[2],
            DrawCommand::Line {
                from: Point2::new(10.0, 10.0),
                to: Point2::new(30.0, 30.0),
            }
        );
    }
}
