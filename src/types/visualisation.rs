//! Plotly chart types for data visualisation
//!
//! Shared Plotly types used by the burn, summary and supply reports for
//! generating interactive charts compatible with Plotly.js.

use serde::Serialize;

/// Remaining-supply bars
pub const SUPPLY_COLOUR: &str = "#FF6B6B";
/// Burned-amount bars and burn-rate lines
pub const BURN_COLOUR: &str = "#4CAF50";
/// Moving-average overlays
pub const AVERAGE_COLOUR: &str = "#3498DB";
/// Locked-supply slice
pub const LOCKED_COLOUR: &str = "#95A5A6";

// ============================================================================
// Font and Styling Types
// ============================================================================

/// Plotly font configuration for annotations
#[derive(Debug, Clone, Serialize, Default)]
pub struct PlotlyFont {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Plotly legend configuration
#[derive(Debug, Clone, Serialize, Default)]
pub struct PlotlyLegend {
    /// Legend orientation: "v" (vertical) or "h" (horizontal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Horizontal anchor: "left", "center", "right", "auto"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
}

/// Plotly annotation for adding text boxes to charts
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyAnnotation {
    pub text: String,
    pub xref: String,
    pub yref: String,
    pub x: f64,
    pub y: f64,
    pub xanchor: String,
    pub yanchor: String,
    pub showarrow: bool,
    pub bgcolor: String,
    pub bordercolor: String,
    pub borderwidth: u32,
    pub borderpad: u32,
    pub font: PlotlyFont,
}

impl PlotlyAnnotation {
    /// Create a statistics box annotation in paper coordinates
    pub fn stats_box(text: &str, x: f64, y: f64) -> Self {
        Self {
            text: text.to_string(),
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            x,
            y,
            xanchor: "left".to_string(),
            yanchor: "bottom".to_string(),
            showarrow: false,
            bgcolor: "rgba(255, 255, 255, 0.8)".to_string(),
            bordercolor: "gray".to_string(),
            borderwidth: 1,
            borderpad: 4,
            font: PlotlyFont {
                family: Some("monospace".to_string()),
                size: Some(10),
            },
        }
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Complete Plotly chart data structure
///
/// Standard format expected by Plotly.js: `{data: [...], layout: {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyChart {
    pub data: Vec<PlotlyTrace>,
    pub layout: PlotlyLayout,
}

/// Plotly trace configuration
///
/// Represents a single data series in the chart.
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(rename = "type")]
    pub trace_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<PlotlyMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<PlotlyLine>,
    /// Per-point hover text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

/// Plotly marker configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyMarker {
    pub color: String,
}

/// Plotly line configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLine {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Plotly hover label configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyHoverLabel {
    /// -1 means show full name without truncation
    pub namelength: i32,
}

/// Plotly layout configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLayout {
    pub title: PlotlyTitle,
    pub xaxis: PlotlyAxis,
    pub yaxis: PlotlyAxis,
    pub hovermode: String,
    pub hoverlabel: PlotlyHoverLabel,
    /// Bar mode: "stack", "group", "overlay", "relative"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<PlotlyLegend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<PlotlyAnnotation>>,
}

/// Plotly title configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTitle {
    pub text: String,
}

/// Plotly axis configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyAxis {
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    /// Fixed axis range (e.g., [983_000_000, initial supply] for supply bars)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<f64>>,
    /// Suffix to append to tick labels (e.g., "%" for percentages)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticksuffix: Option<String>,
    /// Category values that receive custom labels from `ticktext`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<String>>,
}

impl PlotlyAxis {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            axis_type: None,
            tickangle: None,
            range: None,
            ticksuffix: None,
            tickvals: None,
            ticktext: None,
        }
    }

    /// Label category ticks with display text instead of the raw values
    pub fn set_tick_labels(&mut self, values: Vec<String>, labels: Vec<String>) {
        self.axis_type = Some("category".to_string());
        self.tickvals = Some(values);
        self.ticktext = Some(labels);
    }
}

impl PlotlyLayout {
    /// Create a basic layout with single y-axis
    pub fn basic(title: &str, x_title: &str, y_title: &str) -> Self {
        Self {
            title: PlotlyTitle {
                text: title.to_string(),
            },
            xaxis: PlotlyAxis::titled(x_title),
            yaxis: PlotlyAxis::titled(y_title),
            hovermode: "x unified".to_string(),
            hoverlabel: PlotlyHoverLabel { namelength: -1 },
            barmode: None,
            legend: None,
            annotations: None,
        }
    }

    /// Add legend configuration
    ///
    /// Standard positioning: `with_legend("h", 0.0, 1.1, "left")` for a legend above the plot
    pub fn with_legend(mut self, orientation: &str, x: f64, y: f64, xanchor: &str) -> Self {
        self.legend = Some(PlotlyLegend {
            orientation: Some(orientation.to_string()),
            x: Some(x),
            y: Some(y),
            xanchor: Some(xanchor.to_string()),
        });
        self
    }

    /// Add annotations to the layout
    pub fn with_annotations(mut self, annotations: Vec<PlotlyAnnotation>) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// Set how bars sharing an x value are combined
    pub fn with_barmode(mut self, barmode: &str) -> Self {
        self.barmode = Some(barmode.to_string());
        self
    }

}

impl PlotlyTrace {
    /// Create a bar trace
    pub fn bar(x: Vec<String>, y: Vec<f64>, name: &str, color: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            trace_type: "bar".to_string(),
            mode: None,
            marker: Some(PlotlyMarker {
                color: color.to_string(),
            }),
            line: None,
            text: None,
            hovertemplate: None,
        }
    }

    /// Create a line trace
    pub fn line(x: Vec<String>, y: Vec<f64>, name: &str, color: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            trace_type: "scatter".to_string(),
            mode: Some("lines+markers".to_string()),
            marker: None,
            line: Some(PlotlyLine {
                color: color.to_string(),
                width: None,
            }),
            text: None,
            hovertemplate: None,
        }
    }

    /// Attach per-point hover text rendered through `%{text}`
    pub fn with_hover_text(mut self, text: Vec<String>) -> Self {
        self.text = Some(text);
        self.hovertemplate = Some("%{text}<extra></extra>".to_string());
        self
    }
}

// ============================================================================
// Pie Chart Types
// ============================================================================

/// Plotly pie chart document
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyPieChart {
    pub data: Vec<PlotlyPieTrace>,
    pub layout: PlotlyPieLayout,
}

/// A single pie series
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyPieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: String,
    /// Fraction of the radius cut out for a donut; 0 for a full pie
    pub hole: f64,
    pub textinfo: String,
    pub marker: PlotlyPieMarker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlotlyPieMarker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlotlyPieLayout {
    pub title: PlotlyTitle,
    pub showlegend: bool,
    pub legend: PlotlyLegend,
}

impl PlotlyPieTrace {
    /// Create a pie trace from (label, value, colour) slices
    pub fn from_slices(slices: &[(String, f64, &str)]) -> Self {
        Self {
            labels: slices.iter().map(|(label, _, _)| label.clone()).collect(),
            values: slices.iter().map(|(_, value, _)| *value).collect(),
            trace_type: "pie".to_string(),
            hole: 0.0,
            textinfo: "percent".to_string(),
            marker: PlotlyPieMarker {
                colors: slices.iter().map(|(_, _, colour)| colour.to_string()).collect(),
            },
            text: None,
            hovertemplate: None,
        }
    }

    /// Attach per-slice hover text
    pub fn with_hover_text(mut self, text: Vec<String>) -> Self {
        self.text = Some(text);
        self.hovertemplate = Some("%{label}<br>%{text}<extra></extra>".to_string());
        self
    }
}

impl PlotlyPieLayout {
    /// Pie layout with a horizontal legend under the chart
    pub fn titled(title: &str) -> Self {
        Self {
            title: PlotlyTitle {
                text: title.to_string(),
            },
            showlegend: true,
            legend: PlotlyLegend {
                orientation: Some("h".to_string()),
                x: Some(0.5),
                y: Some(-0.1),
                xanchor: Some("center".to_string()),
            },
        }
    }
}
