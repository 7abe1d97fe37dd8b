pub mod bounds;
pub mod derive;
pub mod series;
pub mod types;

pub use bounds::AxisBounds;
pub use derive::{pairwise_ratio, range_labels, ratio};
pub use series::{CategoryLabel, SeriesData};
pub use types::Viewport;
