//! telemetry_axis crate: y-axis ticks and value/pixel mapping for telemetry plots

pub mod axis;
pub mod data_types;
pub mod formats;
pub mod mapper;
pub mod math;
pub mod scales;
pub mod ticks;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use axis::YAxis;
pub use data_types::{AxisMode, DataExtent, PixelRange, Tick, ValueRange, YAxisConfig};
pub use formats::{FormatRegistry, NumberFormat, TickFormat, UtcFormat};
pub use mapper::LogAxisMapper;
pub use transform::AxisMapping;
