use std::mem;

use chrono::{DateTime, Duration, FixedOffset, Local};

use crate::config::SegmenterConfig;
use crate::track::{Track, TrackSegment, Waypoint};
use crate::uint::UInt;
use crate::utils::{self, effective_time, saturating_add};

pub const TRACK_NAME: &str = "Track 1";

/// Splits `points` into segments wherever two consecutive points are `gap`
/// or more apart, keeping only segments with at least `min_segment_size`
/// points. Returns `None` if nothing survives.
///
/// A point without a timestamp is treated as infinitely far from the point
/// before it, so it always starts a new segment.
pub fn segment<I>(points: I, config: &SegmenterConfig) -> Option<Track>
where
    I: IntoIterator<Item = Waypoint>,
    I::IntoIter: ExactSizeIterator,
{
    segment_at(points, config, Local::now().fixed_offset())
}

/// Same as [`segment`], with `now` standing in for missing start/end times in
/// the track comment.
pub fn segment_at<I>(
    points: I,
    config: &SegmenterConfig,
    now: DateTime<FixedOffset>,
) -> Option<Track>
where
    I: IntoIterator<Item = Waypoint>,
    I::IntoIter: ExactSizeIterator,
{
    let points = points.into_iter();
    if points.len() < config.min_segment_size() {
        debug!(
            "only {} points, need at least {}; no track",
            points.len(),
            config.min_segment_size()
        );
        return None;
    }
    points
        .fold(TrackCollector::new(config), TrackCollector::step)
        .finish_at(now)
}

/// Incremental form of [`segment`]: feed points one by one with `push`, then
/// call `finish`. Useful when the points come from a stream and should not
/// be buffered up front.
pub struct TrackCollector {
    gap: Duration,
    min_segment_size: usize,
    count: usize,
    // raw timestamps of the first and the latest point seen
    span: Option<(Option<DateTime<FixedOffset>>, Option<DateTime<FixedOffset>>)>,
    last: Option<DateTime<FixedOffset>>,
    current: Vec<Waypoint>,
    segments: Vec<TrackSegment>,
}

impl TrackCollector {
    pub fn new(config: &SegmenterConfig) -> Self {
        TrackCollector {
            gap: config.gap(),
            min_segment_size: config.min_segment_size(),
            count: 0,
            span: None,
            last: None,
            current: Vec::new(),
            segments: Vec::new(),
        }
    }

    pub fn collect(
        points: impl IntoIterator<Item = Waypoint>,
        config: &SegmenterConfig,
    ) -> Option<Track> {
        points
            .into_iter()
            .fold(TrackCollector::new(config), TrackCollector::step)
            .finish()
    }

    pub fn step(mut self, point: Waypoint) -> Self {
        self.push(point);
        self
    }

    pub fn push(&mut self, point: Waypoint) {
        let time = effective_time(&point);
        if let Some(last) = self.last {
            // within gap iff `last + gap` is strictly after `time`
            if saturating_add(last, self.gap) <= time {
                trace!("gap between {} and {}, starting new segment", last, time);
                self.close_current();
            }
        }

        self.span = match self.span {
            None => Some((point.time(), point.time())),
            Some((first, _)) => Some((first, point.time())),
        };
        self.last = Some(time);
        self.count += 1;
        self.current.push(point);
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn finish(self) -> Option<Track> {
        self.finish_at(Local::now().fixed_offset())
    }

    pub fn finish_at(mut self, now: DateTime<FixedOffset>) -> Option<Track> {
        if self.count < self.min_segment_size {
            return None;
        }
        self.close_current();
        if self.segments.is_empty() {
            debug!("no segment with at least {} points", self.min_segment_size);
            return None;
        }

        let (start, end) = self.span.unwrap_or_default();
        let comment = track_comment(start.unwrap_or(now), end.unwrap_or(now));
        let track = Track::new(
            UInt::from(1u32),
            TRACK_NAME.to_string(),
            comment,
            self.segments,
        );
        debug!(
            "built track from {} points: {}",
            self.count,
            track.description()
        );
        Some(track)
    }

    fn close_current(&mut self) {
        let points = mem::take(&mut self.current);
        if points.len() >= self.min_segment_size {
            self.segments.push(TrackSegment::new(points));
        } else if !points.is_empty() {
            debug!(
                "dropping segment of {} points (min {})",
                points.len(),
                self.min_segment_size
            );
        }
    }
}

fn track_comment(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> String {
    format!(
        "Track[start={}, end={}, duration={}]",
        start.to_rfc3339(),
        end.to_rfc3339(),
        utils::format_iso_duration(end - start)
    )
}
