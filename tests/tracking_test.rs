use nalgebra::Point2;

use motiontrack_rs::{CentroidTracker, Contour, ContourBuilder, DrawCommand, Rect};

fn square(x: i32, y: i32, side: i32) -> Contour {
    ContourBuilder::new().rect_outline(x, y, side, side).build()
}

#[test]
fn test_basic_tracking() {
    let mut tracker = CentroidTracker::new();

    // Frame 1: one qualifying contour (144 area units) centred on (10, 10).
    // The track starts at the origin, so the first line runs (0,0) -> (10,10).
    let commands1 = tracker.update(&[square(4, 4, 12)]);
    assert_eq!(
        commands1,
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

    // Frame 2: one contour of 50 area units. Filtered as noise; the track
    // does not move.
    let small = ContourBuilder::new()
        .points([(0, 0), (5, 0), (5, 10), (0, 10)])
        .build();
    let commands2 = tracker.update(&[small]);
    assert!(commands2.is_empty());
    assert_eq!(tracker.state().previous, Point2::new(10.0, 10.0));

    // Frame 3: two qualifying contours, centroids (20,20) then (30,30) in
    // input order. Both get full command triples; the later one wins the
    // track slot.
    let commands3 = tracker.update(&[square(14, 14, 12), square(24, 24, 12)]);
    assert_eq!(commands3.len(), 6);
    assert_eq!(
        commands3[0..3],
        [
            DrawCommand::Rect(Rect::new(14.0, 14.0, 12.0, 12.0)),
            DrawCommand::Marker(Point2::new(20.0, 20.0)),
            DrawCommand::Line {
                from: Point2::new(10.0, 10.0),
                to: Point2::new(20.0, 20.0),
            },
        ]
    );
    assert_eq!(
        commands3[3..6],
        [
            DrawCommand::Rect(Rect::new(24.0, 24.0, 12.0, 12.0)),
            DrawCommand::Marker(Point2::new(30.0, 30.0)),
            DrawCommand::Line {
                from: Point2::new(20.0, 20.0),
                to: Point2::new(30.0, 30.0),
            },
        ]
    );
    assert_eq!(tracker.state().previous, Point2::new(30.0, 30.0));
}

#[test]
fn test_empty_frames_never_disturb_the_track() {
    let mut tracker = CentroidTracker::new();
    tracker.update(&[square(4, 4, 12)]);

    for _ in 0..3 {
        assert!(tracker.update(&[]).is_empty());
    }
    assert_eq!(tracker.state().previous, Point2::new(10.0, 10.0));
}

#[test]
fn test_mixed_frame_emits_only_for_qualifying_contours() {
    let mut tracker = CentroidTracker::new();

    let noise = ContourBuilder::new()
        .points([(0, 0), (5, 0), (5, 10), (0, 10)])
        .build();
    let degenerate = ContourBuilder::new()
        .points([(0, 0), (200, 0), (400, 0)])
        .build();

    let commands = tracker.update(&[noise, degenerate, square(24, 24, 12)]);
    assert_eq!(commands.len(), 3);
    assert_eq!(
        commands[2],
        DrawCommand::Line {
            from: Point2::new(0.0, 0.0),
            to: Point2::new(30.0, 30.0),
        }
    );
    assert_eq!(tracker.state().previous, Point2::new(30.0, 30.0));
}
