use chrono::{DateTime, FixedOffset};
use geo_types::Point;

use crate::uint::UInt;

#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    // x is longitude, y is latitude
    pub point: Point<f64>,
    pub elevation: Option<f64>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Waypoint {
            point: Point::new(longitude, latitude),
            elevation: None,
            timestamp: None,
        }
    }

    pub fn with_time(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    pub fn time(&self) -> Option<DateTime<FixedOffset>> {
        self.timestamp
    }
}

/// A run of waypoints with no gap larger than the configured threshold.
/// Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackSegment {
    points: Vec<Waypoint>,
}

impl TrackSegment {
    pub(crate) fn new(points: Vec<Waypoint>) -> Self {
        debug_assert!(!points.is_empty());
        TrackSegment { points }
    }

    pub fn points(&self) -> &[Waypoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Waypoint> {
        self.points
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    number: UInt,
    name: String,
    comment: String,
    description: String,
    segments: Vec<TrackSegment>,
}

impl Track {
    pub(crate) fn new(
        number: UInt,
        name: String,
        comment: String,
        segments: Vec<TrackSegment>,
    ) -> Self {
        let description = format!(
            "{} segments; {} track points",
            segments.len(),
            segments.iter().map(TrackSegment::len).sum::<usize>()
        );
        Track {
            number,
            name,
            comment,
            description,
            segments,
        }
    }

    pub fn number(&self) -> UInt {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }

    /// All retained waypoints, in order.
    pub fn points(&self) -> impl Iterator<Item = &Waypoint> {
        self.segments.iter().flat_map(|s| s.points.iter())
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(TrackSegment::len).sum()
    }
}
