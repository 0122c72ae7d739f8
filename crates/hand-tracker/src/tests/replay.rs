use crate::{
    replay::{ReplayCamera, ReplayDetector, ReplayTrack},
    tests::support::{HEIGHT, WIDTH, capture_config, recorded_frame, sample_hand, write_replay},
};

use hand_tracker_core::{
    CameraAdapter, DetectorOptions, Frame, HandLabel, LandmarkDetector, TrackerError,
};

use std::{sync::mpsc, time::Duration};

fn frame(sequence: u64) -> Frame {
    Frame {
        sequence,
        width: WIDTH,
        height: HEIGHT,
        data: Vec::new(),
    }
}

/// WHAT: Loading maps pixel landmarks back to normalized image space
/// WHY: The detector contract speaks normalized coordinates
#[test]
fn given_exported_recording_when_loading_track_then_landmarks_normalized() {
    // Given: A recording with one right hand
    let dir = tempfile::tempdir().unwrap();
    let path = write_replay(
        dir.path(),
        &[recorded_frame(&[sample_hand(HandLabel::Right, 0.9)])],
    );
    let track = ReplayTrack::new();

    // When: Loading at the capture resolution
    let count = track.load(&path, WIDTH, HEIGHT).unwrap();

    // Then: Wrist is back at (0.25, 0.5) and world points survive
    assert_eq!(count, 1);
    let hands = track.hands_at(0);
    assert_eq!(hands.len(), 1);
    assert_eq!(hands[0].handedness.label, HandLabel::Right);
    assert!((hands[0].landmarks[0].x - 0.25).abs() < 1e-5);
    assert!((hands[0].landmarks[0].y - 0.5).abs() < 1e-5);
    assert!((hands[0].world_landmarks[20].x - 0.02).abs() < 1e-5);
    assert!(hands[0].is_complete());
}

/// WHAT: Sequence numbers past the end wrap around
/// WHY: Playback loops for as long as tracking stays online
#[test]
fn given_short_track_when_looking_up_later_frames_then_wraps() {
    // Given: Two frames, the second without hands
    let dir = tempfile::tempdir().unwrap();
    let path = write_replay(
        dir.path(),
        &[recorded_frame(&[sample_hand(HandLabel::Left, 0.9)]), recorded_frame(&[])],
    );
    let track = ReplayTrack::new();
    track.load(&path, WIDTH, HEIGHT).unwrap();

    // When/Then: Even sequences have a hand, odd ones do not
    assert_eq!(track.hands_at(2).len(), 1);
    assert!(track.hands_at(3).is_empty());
}

/// WHAT: Detector applies confidence threshold and hand limit
/// WHY: Configured thresholds behave like the real model's
#[test]
fn given_thresholds_when_detecting_then_weak_and_excess_hands_dropped() {
    // Given: Three hands, one below the detection confidence
    let dir = tempfile::tempdir().unwrap();
    let path = write_replay(
        dir.path(),
        &[recorded_frame(&[
            sample_hand(HandLabel::Left, 0.3),
            sample_hand(HandLabel::Right, 0.9),
            sample_hand(HandLabel::Left, 0.8),
        ])],
    );
    let track = ReplayTrack::new();
    track.load(&path, WIDTH, HEIGHT).unwrap();
    let options = DetectorOptions {
        max_num_hands: 1,
        ..DetectorOptions::default()
    };
    let detector = ReplayDetector::new(options, track);

    // When: Detecting
    let hands = detector.detect(&frame(0)).unwrap();

    // Then: Only the first confident hand
    assert_eq!(hands.len(), 1);
    assert_eq!(hands[0].handedness.label, HandLabel::Right);
}

/// WHAT: Starting without a replay source fails as a camera error
/// WHY: The session reports it as a camera permission problem
#[test]
fn given_no_source_when_starting_camera_then_camera_init_failed() {
    // Given: A camera without replay_path
    let mut camera = ReplayCamera::new(&capture_config(None, 30), ReplayTrack::new());

    // When: Starting
    let result = camera.start(Box::new(|_| {}));

    // Then: CameraInitFailed
    assert!(matches!(result, Err(TrackerError::CameraInitFailed { .. })));
}

/// WHAT: Unreadable and empty sources fail to start
/// WHY: A camera that can never deliver a frame must not report online
#[test]
fn given_missing_or_empty_source_when_starting_camera_then_camera_init_failed() {
    // Given: A path that does not exist and a recording with no frames
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let empty = write_replay(dir.path(), &[]);

    for path in [missing, empty] {
        let mut camera =
            ReplayCamera::new(&capture_config(Some(path), 30), ReplayTrack::new());

        // When: Starting
        let result = camera.start(Box::new(|_| {}));

        // Then: CameraInitFailed
        assert!(matches!(result, Err(TrackerError::CameraInitFailed { .. })));
    }
}

/// WHAT: Camera delivers numbered frames until stopped
/// WHY: No frame may arrive after stop returns
#[test]
fn given_started_camera_when_stopping_then_frames_cease() {
    // Given: A running camera at a high frame rate
    let dir = tempfile::tempdir().unwrap();
    let path = write_replay(
        dir.path(),
        &[recorded_frame(&[sample_hand(HandLabel::Right, 0.9)])],
    );
    let mut camera = ReplayCamera::new(&capture_config(Some(path), 200), ReplayTrack::new());
    let (frame_tx, frame_rx) = mpsc::channel();
    camera
        .start(Box::new(move |frame| {
            let _ = frame_tx.send(frame);
        }))
        .unwrap();

    // When: Three frames arrive, then the camera stops
    let sequences: Vec<u64> = (0..3)
        .map(|_| frame_rx.recv_timeout(Duration::from_secs(5)).unwrap().sequence)
        .collect();
    camera.stop();
    while frame_rx.try_recv().is_ok() {}
    std::thread::sleep(Duration::from_millis(50));

    // Then: Frames were in order at the capture resolution, and no more arrive
    assert_eq!(sequences, vec![0, 1, 2]);
    assert_eq!(camera.resolution(), (WIDTH, HEIGHT));
    assert!(frame_rx.try_recv().is_err());
}
