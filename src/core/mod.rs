pub mod hover;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use hover::{nearest_index, nearest_sample};
pub use scale::LinearScale;
pub use series::{Dataset, Series};
pub use time_scale::TimeScale;
pub use types::{ChartLayout, Margins, Sample, Viewport};
pub use value_scale::ValueScale;
