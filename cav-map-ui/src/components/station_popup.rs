//! Popup markup for data markers.
//!
//! Leaflet takes popup content as an HTML string, so this renders markup
//! directly instead of going through RSX.

use cav_data::PopupContent;
use cav_stations::Dataset;

pub fn render_station_popup(popup: &PopupContent) -> String {
    let elevation = match popup.elevation {
        Some(e) => format!("<br/>Elevation: {:.0} m", e),
        None => String::new(),
    };
    let units = popup.units();
    let value = match popup.value {
        Some(v) if popup.dataset == Dataset::Anomaly => format!("{:+.1} {}", v, units),
        Some(v) => format!("{:.1} {}", v, units),
        None => "n/a".to_string(),
    };
    let variable = popup
        .variable
        .map(|v| format!(" {}", v.label()))
        .unwrap_or_default();
    format!(
        "<div class=\"station-popup\"><strong>{}</strong><br/>{:.3}, {:.3}{}<br/>{}{}: {}</div>",
        escape_html(&popup.station_name),
        popup.position.lat,
        popup.position.lng,
        elevation,
        popup.dataset.label(),
        variable,
        value.trim_end(),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cav_stations::{LatLng, Variable};

    fn popup(dataset: Dataset, value: Option<f64>) -> PopupContent {
        PopupContent {
            station_name: "Hope <Slide>".to_string(),
            position: LatLng { lat: 49.2751, lng: -121.2361 },
            elevation: Some(673.0),
            dataset,
            value,
            variable: Some(Variable::Tmin),
        }
    }

    #[test]
    fn renders_anomaly_with_sign() {
        let html = render_station_popup(&popup(Dataset::Anomaly, Some(2.5)));
        assert!(html.contains("<strong>Hope &lt;Slide&gt;</strong>"));
        assert!(html.contains("49.275, -121.236"));
        assert!(html.contains("Elevation: 673 m"));
        assert!(html.contains("Anomaly Tmin: +2.5 °C"));
    }

    #[test]
    fn renders_missing_value() {
        let mut content = popup(Dataset::Monthly, None);
        content.elevation = None;
        content.variable = None;
        let html = render_station_popup(&content);
        assert!(html.contains("Monthly: n/a"));
        assert!(!html.contains("Elevation"));
    }
}
