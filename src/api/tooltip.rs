use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DataPoint;
use crate::core::format::{escape_markup, format_decimal, format_number, round_half_up};

use super::{ChannelValue, PointerRuleSpec, TooltipChannel};

/// Text shown for a channel whose value is missing at the resolved point.
pub const MISSING_VALUE: &str = "N/A";

const CHANNEL_DECIMALS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
}

/// Tooltip content for one resolved point.
///
/// Derived only from the point and the pointer spec, so the same point
/// always produces the same tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub headline: TooltipRow,
    pub rows: SmallVec<[TooltipRow; 6]>,
    pub font_size_px: u32,
    pub font_family: String,
}

impl Tooltip {
    #[must_use]
    pub fn for_point(spec: &PointerRuleSpec, point: &DataPoint) -> Self {
        let headline = TooltipRow {
            label: spec.headline.label.clone(),
            value: headline_value(&spec.headline, point),
        };
        let rows = spec
            .channels
            .values()
            .map(|channel| TooltipRow {
                label: channel.label.clone(),
                value: channel_value(channel, point),
            })
            .collect();

        Self {
            headline,
            rows,
            font_size_px: spec.font_size_px.round().max(1.0) as u32,
            font_family: spec.font_family.clone(),
        }
    }

    /// Headline followed by every channel row, as `label: value` lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(&self.headline)
            .chain(self.rows.iter())
            .map(|row| format!("{}: {}", row.label, row.value))
            .collect()
    }

    #[must_use]
    pub fn headline_text(&self) -> String {
        format!("{}: {}", self.headline.label, self.headline.value)
    }

    /// HTML body for hosts that render tooltips as markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            r#"<div style="font-family:{}; font-size:{}px;"><strong>{}:</strong> {}<br/></div>"#,
            escape_markup(&self.font_family),
            self.font_size_px,
            escape_markup(&self.headline.label),
            escape_markup(&self.headline.value),
        )
    }
}

fn headline_value(channel: &TooltipChannel, point: &DataPoint) -> String {
    match channel.value {
        ChannelValue::X => point.x.clone(),
        ChannelValue::Field(field) => field
            .value(point)
            .map(|value| format_number(round_half_up(value)))
            .unwrap_or_else(|| MISSING_VALUE.to_owned()),
    }
}

fn channel_value(channel: &TooltipChannel, point: &DataPoint) -> String {
    match channel.value {
        ChannelValue::X => point.x.clone(),
        ChannelValue::Field(field) => field
            .value(point)
            .map(|value| format_decimal(value, CHANNEL_DECIMALS))
            .unwrap_or_else(|| MISSING_VALUE.to_owned()),
    }
}
