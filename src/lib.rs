#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod logs;
pub mod segmenter;
pub mod track;
pub mod uint;
pub mod utils;

pub use config::SegmenterConfig;
pub use segmenter::{segment, segment_at, TrackCollector};
pub use track::{Track, TrackSegment, Waypoint};
pub use uint::UInt;
