// View-model derivation - pure display mappings for decoded telemetry
use ratatui::style::Color;

/// Status class applied to gauge fill and metric text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Warning,
    Danger,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Good => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Danger => Color::Red,
        }
    }
}

/// Discrete icon ramp shared by the battery and thermometer indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconLevel {
    Empty,
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

impl IconLevel {
    pub fn battery_glyph(self) -> &'static str {
        match self {
            IconLevel::Empty => "[    ]",
            IconLevel::Quarter => "[#   ]",
            IconLevel::Half => "[##  ]",
            IconLevel::ThreeQuarters => "[### ]",
            IconLevel::Full => "[####]",
        }
    }

    pub fn thermometer_glyph(self) -> &'static str {
        match self {
            IconLevel::Empty => "▁",
            IconLevel::Quarter => "▂",
            IconLevel::Half => "▄",
            IconLevel::ThreeQuarters => "▆",
            IconLevel::Full => "█",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryStatus {
    pub icon: IconLevel,
    pub severity: Severity,
}

/// Band boundaries are inclusive on the lower bound.
pub fn battery_status(voltage: f64) -> BatteryStatus {
    if voltage >= 3.0 {
        BatteryStatus { icon: IconLevel::Full, severity: Severity::Good }
    } else if voltage >= 2.7 {
        BatteryStatus { icon: IconLevel::ThreeQuarters, severity: Severity::Good }
    } else if voltage >= 2.5 {
        BatteryStatus { icon: IconLevel::Half, severity: Severity::Warning }
    } else if voltage >= 2.3 {
        BatteryStatus { icon: IconLevel::Quarter, severity: Severity::Warning }
    } else {
        BatteryStatus { icon: IconLevel::Empty, severity: Severity::Danger }
    }
}

pub fn temperature_icon(celsius: f64) -> IconLevel {
    if celsius < 0.0 {
        IconLevel::Empty
    } else if celsius < 10.0 {
        IconLevel::Quarter
    } else if celsius < 20.0 {
        IconLevel::Half
    } else if celsius < 30.0 {
        IconLevel::ThreeQuarters
    } else {
        IconLevel::Full
    }
}

/// Applied identically to the gauge color and the fill metric's text class.
pub fn fill_severity(percentage: f64) -> Severity {
    if percentage <= 10.0 {
        Severity::Danger
    } else if percentage <= 25.0 {
        Severity::Warning
    } else {
        Severity::Good
    }
}

/// Gauge height only; displayed numeric text keeps the true value.
pub fn clamped_fill_percent(percentage: f64) -> f64 {
    percentage.min(100.0)
}
