//! Chart builders, mounted views and their supporting layout.

mod bar_chart;
mod chart_layout;
mod chart_spec;
mod chart_view;
mod json_contract;
mod render_frame_builder;
mod render_options;
mod snap_resolver;
mod tooltip;
mod trend_chart;

pub use bar_chart::bar_chart;
pub use chart_layout::{CHART_HEIGHT, ChartLayout, DEFAULT_WIDTH, PlotArea, XScale};
pub use chart_spec::{
    ChannelValue, ChartKind, ChartSpec, Margins, Mark, PointerRuleSpec, TooltipChannel, XAxisSpec,
    XScaleKind, YAxisSpec,
};
pub use chart_view::ChartView;
pub use json_contract::{CHART_SPEC_JSON_SCHEMA_V1, ChartSpecJsonContractV1, parse_series_json};
pub use render_options::RenderOptions;
pub use tooltip::{MISSING_VALUE, Tooltip, TooltipRow};
pub use trend_chart::trend_chart;
