use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::detection::domain::detection_feed::{
    DetectionFeed, FeedEvent, MountError, TimedFeedEvent,
};
use crate::detection::domain::face::{DetectionEvent, Face, FrameInfo};

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scenario entry {index} must set exactly one of faces, rotation, mount_error")]
    Ambiguous { index: usize },
}

/// One JSON scenario entry. Exactly one of the three payload fields must
/// be present; `frame` optionally annotates a `faces` entry.
#[derive(Debug, Deserialize)]
struct ScriptEntry {
    at_ms: f64,
    #[serde(default)]
    faces: Option<Vec<Face>>,
    #[serde(default)]
    frame: Option<FrameInfo>,
    #[serde(default)]
    rotation: Option<f64>,
    #[serde(default)]
    mount_error: Option<String>,
}

#[derive(Debug)]
enum Step {
    Event(TimedFeedEvent),
    Mount { at_ms: f64, error: MountError },
}

/// Replays a pre-scripted sequence of camera-host callbacks.
///
/// Scenarios are JSON lists of timestamped entries; entries are sorted by
/// timestamp on load, so authors can group related events freely. A
/// `mount_error` entry reproduces a camera mount failure at that point in
/// the replay.
#[derive(Debug)]
pub struct ScriptedFeed {
    steps: VecDeque<Step>,
}

impl ScriptedFeed {
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let json = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let entries: Vec<ScriptEntry> = serde_json::from_str(json)?;
        let mut steps = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            steps.push(parse_entry(entry, index)?);
        }
        steps.sort_by(|a, b| {
            step_time(a)
                .partial_cmp(&step_time(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(Self {
            steps: steps.into(),
        })
    }

    /// Builds a feed directly from events, bypassing JSON. Mostly useful
    /// for driving the controller from code.
    pub fn from_events(events: Vec<TimedFeedEvent>) -> Self {
        let mut steps: Vec<Step> = events.into_iter().map(Step::Event).collect();
        steps.sort_by(|a, b| {
            step_time(a)
                .partial_cmp(&step_time(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self {
            steps: steps.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn parse_entry(entry: ScriptEntry, index: usize) -> Result<Step, ScriptError> {
    let at_ms = entry.at_ms;
    match (entry.faces, entry.rotation, entry.mount_error) {
        (Some(faces), None, None) => Ok(Step::Event(TimedFeedEvent {
            at_ms,
            event: FeedEvent::Detection(DetectionEvent::new(
                faces,
                entry.frame.unwrap_or_default(),
            )),
        })),
        (None, Some(rotation), None) => Ok(Step::Event(TimedFeedEvent {
            at_ms,
            event: FeedEvent::Rotation(rotation),
        })),
        (None, None, Some(message)) => Ok(Step::Mount {
            at_ms,
            error: MountError(message),
        }),
        _ => Err(ScriptError::Ambiguous { index }),
    }
}

fn step_time(step: &Step) -> f64 {
    match step {
        Step::Event(event) => event.at_ms,
        Step::Mount { at_ms, .. } => *at_ms,
    }
}

impl DetectionFeed for ScriptedFeed {
    fn next_event(&mut self) -> Result<Option<TimedFeedEvent>, Box<dyn std::error::Error>> {
        match self.steps.pop_front() {
            None => Ok(None),
            Some(Step::Event(event)) => Ok(Some(event)),
            Some(Step::Mount { error, .. }) => Err(Box::new(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(feed: &mut ScriptedFeed) -> Vec<TimedFeedEvent> {
        let mut events = Vec::new();
        while let Some(event) = feed.next_event().unwrap() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_parses_detection_and_rotation_entries() {
        let json = r#"[
            {"at_ms": 0.0, "faces": [{"bounds": {"x": 10.0, "y": 10.0, "width": 50.0, "height": 50.0}}]},
            {"at_ms": 80.0, "rotation": 90.0}
        ]"#;
        let mut feed = ScriptedFeed::from_json(json).unwrap();
        let events = drain(&mut feed);

        assert_eq!(events.len(), 2);
        match &events[0].event {
            FeedEvent::Detection(event) => {
                assert_eq!(event.faces.len(), 1);
                assert_eq!(event.faces[0].bounds.x, 10.0);
            }
            other => panic!("expected detection, got {other:?}"),
        }
        assert_eq!(events[1].event, FeedEvent::Rotation(90.0));
    }

    #[test]
    fn test_empty_faces_entry_is_allowed() {
        let json = r#"[{"at_ms": 5.0, "faces": []}]"#;
        let mut feed = ScriptedFeed::from_json(json).unwrap();
        let events = drain(&mut feed);

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].event,
            FeedEvent::Detection(DetectionEvent::empty())
        );
    }

    #[test]
    fn test_entries_sorted_by_timestamp() {
        let json = r#"[
            {"at_ms": 100.0, "rotation": 90.0},
            {"at_ms": 10.0, "faces": []}
        ]"#;
        let mut feed = ScriptedFeed::from_json(json).unwrap();
        let events = drain(&mut feed);

        assert_eq!(events[0].at_ms, 10.0);
        assert_eq!(events[1].at_ms, 100.0);
    }

    #[test]
    fn test_mount_error_surfaces_as_error() {
        let json = r#"[{"at_ms": 0.0, "mount_error": "no device"}]"#;
        let mut feed = ScriptedFeed::from_json(json).unwrap();

        let err = feed.next_event().unwrap_err();
        assert!(err.to_string().contains("no device"));
        // Feed is drained past the failure.
        assert!(feed.next_event().unwrap().is_none());
    }

    #[test]
    fn test_mount_error_replays_at_its_own_timestamp() {
        let json = r#"[
            {"at_ms": 500.0, "mount_error": "camera died"},
            {"at_ms": 10.0, "faces": []}
        ]"#;
        let mut feed = ScriptedFeed::from_json(json).unwrap();

        // The earlier detection is delivered before the failure.
        let first = feed.next_event().unwrap().unwrap();
        assert_eq!(first.at_ms, 10.0);

        let err = feed.next_event().unwrap_err();
        assert!(err.to_string().contains("camera died"));
    }

    #[test]
    fn test_len_tracks_remaining_entries() {
        let json = r#"[
            {"at_ms": 0.0, "faces": []},
            {"at_ms": 10.0, "rotation": 90.0}
        ]"#;
        let mut feed = ScriptedFeed::from_json(json).unwrap();
        assert_eq!(feed.len(), 2);
        assert!(!feed.is_empty());

        drain(&mut feed);
        assert!(feed.is_empty());
    }

    #[test]
    fn test_entry_with_two_payloads_is_rejected() {
        let json = r#"[{"at_ms": 0.0, "faces": [], "rotation": 90.0}]"#;
        let err = ScriptedFeed::from_json(json).unwrap_err();
        assert!(matches!(err, ScriptError::Ambiguous { index: 0 }));
    }

    #[test]
    fn test_entry_with_no_payload_is_rejected() {
        let json = r#"[{"at_ms": 0.0}]"#;
        assert!(matches!(
            ScriptedFeed::from_json(json),
            Err(ScriptError::Ambiguous { index: 0 })
        ));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        assert!(matches!(
            ScriptedFeed::from_json("not json"),
            Err(ScriptError::Parse(_))
        ));
    }

    #[test]
    fn test_frame_annotation_carried_through() {
        let json = r#"[{
            "at_ms": 0.0,
            "frame": {"width": 640, "height": 480, "index": 3},
            "faces": [{"bounds": {"x": 0.0, "y": 0.0, "width": 1.0, "height": 1.0}}]
        }]"#;
        let mut feed = ScriptedFeed::from_json(json).unwrap();
        let events = drain(&mut feed);

        match &events[0].event {
            FeedEvent::Detection(event) => {
                assert_eq!(event.frame.width, 640);
                assert_eq!(event.frame.index, 3);
            }
            other => panic!("expected detection, got {other:?}"),
        }
    }

    #[test]
    fn test_from_events_preserves_order() {
        let events = vec![
            TimedFeedEvent {
                at_ms: 50.0,
                event: FeedEvent::Rotation(180.0),
            },
            TimedFeedEvent {
                at_ms: 0.0,
                event: FeedEvent::Rotation(90.0),
            },
        ];
        let mut feed = ScriptedFeed::from_events(events);
        let drained = drain(&mut feed);

        assert_eq!(drained[0].event, FeedEvent::Rotation(90.0));
        assert_eq!(drained[1].event, FeedEvent::Rotation(180.0));
    }

    #[test]
    fn test_replay_drives_controller_to_final_transform() {
        use crate::overlay::controller::OverlayController;

        let json = r#"[
            {"at_ms": 0.0, "faces": [{"bounds": {"x": 10.0, "y": 10.0, "width": 50.0, "height": 50.0}}]},
            {"at_ms": 40.0, "faces": []},
            {"at_ms": 60.0, "rotation": 90.0}
        ]"#;
        let mut feed = ScriptedFeed::from_json(json).unwrap();
        let mut controller = OverlayController::with_duration(100.0);

        while let Some(timed) = feed.next_event().unwrap() {
            controller.apply(&timed.event, timed.at_ms);
        }

        let t = controller.transform_at(500.0);
        assert_eq!(t.x, 10.0);
        assert_eq!(t.width, 50.0);
        assert_eq!(t.rotation, 90.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScriptedFeed::from_path(Path::new("/nonexistent/scenario.json")).unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
    }
}
