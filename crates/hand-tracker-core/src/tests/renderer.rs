use crate::{
    Color, HandLabel, HandRenderer, Point,
    tests::support::{
        DrawOp, RecordingCanvas, hand_missing_world_landmark, sample_hand, truncated_hand,
    },
    topology::{HAND_CONNECTIONS, LABELED_LANDMARKS},
};

/// WHAT: A complete hand draws every bone, joint and label
/// WHY: The overlay mirrors the fixed hand topology
#[test]
fn given_complete_hand_when_rendering_then_full_skeleton_drawn() {
    // Given: A renderer and a 640x480 canvas
    let renderer = HandRenderer::default();
    let mut canvas = RecordingCanvas::new(640, 480);
    let hand = sample_hand(HandLabel::Right);

    // When: Rendering one hand
    let drawn = renderer.render(&mut canvas, &[hand]);

    // Then: Canvas cleared first, all segments, 21 joints, 6 labels
    assert_eq!(drawn, 1);
    assert_eq!(canvas.ops.first(), Some(&DrawOp::Clear));
    assert_eq!(canvas.lines(), HAND_CONNECTIONS.len());
    assert_eq!(canvas.circles().len(), 21);
    assert_eq!(canvas.labels(), vec!["0", "4", "8", "12", "16", "20"]);
    assert_eq!(LABELED_LANDMARKS.len(), 6);
}

/// WHAT: Landmarks are scaled to canvas pixels and the wrist is larger
/// WHY: Normalized detector output must line up with the video
#[test]
fn given_normalized_landmarks_when_rendering_then_scaled_to_canvas() {
    // Given: A hand whose wrist sits at (0.25, 0.5)
    let renderer = HandRenderer::default();
    let mut canvas = RecordingCanvas::new(640, 480);
    let hand = sample_hand(HandLabel::Left);

    // When: Rendering
    renderer.render(&mut canvas, &[hand]);

    // Then: Wrist marker at (160, 240) with radius 6, others radius 4
    let circles = canvas.circles();
    assert_eq!(circles[0], (Point::new(160.0, 240.0), 6.0));
    assert!(circles[1..].iter().all(|(_, radius)| *radius == 4.0));

    let wrist_label = canvas.ops.iter().find_map(|op| match op {
        DrawOp::Text { text, at, color } if text == "0" => Some((*at, *color)),
        _ => None,
    });
    assert_eq!(wrist_label, Some((Point::new(168.0, 232.0), Color::WHITE)));
}

/// WHAT: Hands without a full landmark set draw nothing
/// WHY: Missing landmark data is the renderer's only failure mode
#[test]
fn given_incomplete_hand_when_rendering_then_nothing_drawn() {
    // Given: A hand with only 10 landmarks
    let renderer = HandRenderer::default();
    let mut canvas = RecordingCanvas::new(640, 480);

    // When: Rendering it
    let drawn = renderer.render(&mut canvas, &[truncated_hand()]);

    // Then: Only the clear was issued
    assert_eq!(drawn, 0);
    assert_eq!(canvas.ops, vec![DrawOp::Clear]);
}

/// WHAT: Hands with an incomplete world landmark set draw nothing
/// WHY: A hand that cannot be recorded must not appear on the overlay
#[test]
fn given_hand_missing_world_landmark_when_rendering_then_nothing_drawn() {
    // Given: Full image landmarks, 20 world landmarks
    let renderer = HandRenderer::default();
    let mut canvas = RecordingCanvas::new(640, 480);

    // When: Rendering it
    let drawn = renderer.render(&mut canvas, &[hand_missing_world_landmark(HandLabel::Left)]);

    // Then: Only the clear was issued
    assert_eq!(drawn, 0);
    assert_eq!(canvas.ops, vec![DrawOp::Clear]);
}
