use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use track_segmenter::Waypoint;

pub fn base_time() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2023, 10, 15, 6, 0, 0)
        .unwrap()
        .fixed_offset()
}

/// A waypoint `offset_sec` seconds after `base_time()`.
pub fn point_at(offset_sec: i64) -> Waypoint {
    Waypoint::new(30.2719716 + offset_sec as f64 * 1e-5, 120.163856)
        .with_time(base_time() + Duration::seconds(offset_sec))
}

pub fn point_without_time() -> Waypoint {
    Waypoint::new(30.2810050, 120.173011)
}

pub fn points_at(offsets_sec: &[i64]) -> Vec<Waypoint> {
    offsets_sec.iter().map(|&x| point_at(x)).collect()
}

pub fn load_waypoints_for_test() -> Vec<Waypoint> {
    let mut reader = csv::Reader::from_path("./tests/data/ride_with_stops.csv").unwrap();
    reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            let waypoint = Waypoint::new(
                record[0].parse::<f64>().unwrap(),
                record[1].parse::<f64>().unwrap(),
            );
            match &record[2] {
                "" => waypoint,
                time => waypoint.with_time(DateTime::parse_from_rfc3339(time).unwrap()),
            }
        })
        .collect()
}
