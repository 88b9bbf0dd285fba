// Pure figure builders. Each takes borrowed rows and returns a JSON-shaped
// description the page hands straight to the plotting library; nothing in
// here touches the network or mutates the table.

pub mod map;
pub mod table;
pub mod timeseries;

pub use map::{map_figure, MapFigure};
pub use table::{table_figure, TableFigure};
pub use timeseries::{time_series_figure, ChartFigure};
