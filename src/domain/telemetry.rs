// Telemetry result domain model - one decoded tank-sensor reading
use serde::Deserialize;

/// Raw accelerometer axis readings reported by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AccelerometerReading {
    pub x: f64,
    pub y: f64,
}

/// One detected amplitude maximum in the sensor's radio pulse.
/// `i` is the sample index; chart time derives from it as `i / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AdvertisementPeak {
    pub i: f64,
    pub a: f64,
}

/// Decoded payload for one sensor reading. Owned by the controller for the
/// duration of one display cycle and replaced wholesale on each submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TelemetryResult {
    pub is_empty: bool,
    #[serde(default)]
    pub level_cm: f64,
    #[serde(default)]
    pub level_inches: f64,
    /// Fill ratio in percent. Meaningful only when `is_empty` is false; may
    /// exceed 100 and is clamped for the gauge only, never for detail text.
    #[serde(default)]
    pub percentage: f64,
    pub battery_voltage: f64,
    pub temperature_c: f64,
    pub temperature_raw: f64,
    /// Time-of-flight of the ranging pulse, in seconds.
    pub tof: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub hardware_id: String,
    #[serde(deserialize_with = "number_or_string")]
    pub hardware_version: String,
    pub hardware_family: String,
    pub slow_update: bool,
    pub sync_pressed: bool,
    pub header: String,
    pub manufacturer_header: String,
    pub accelerometer: AccelerometerReading,
    pub battery_raw: f64,
    /// Insertion order is time order; never re-sorted by the client.
    #[serde(default)]
    pub advertisement_peaks: Vec<AdvertisementPeak>,
}

/// Device identity fields arrive from the decoder service as bare numbers;
/// normalize either wire shape to a string.
fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
pub(crate) fn sample_result() -> TelemetryResult {
    TelemetryResult {
        is_empty: false,
        level_cm: 45.67,
        level_inches: 17.98,
        percentage: 60.0,
        battery_voltage: 3.1,
        temperature_c: 22.4,
        temperature_raw: 38.0,
        tof: 0.00001234,
        hardware_id: "78".to_string(),
        hardware_version: "78".to_string(),
        hardware_family: "gen2".to_string(),
        slow_update: false,
        sync_pressed: true,
        header: "1aff".to_string(),
        manufacturer_header: "0d00".to_string(),
        accelerometer: AccelerometerReading { x: 1.0, y: -2.0 },
        battery_raw: 183.0,
        advertisement_peaks: vec![
            AdvertisementPeak { i: 0.0, a: 5.0 },
            AdvertisementPeak { i: 2.0, a: 9.0 },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let json = r#"{
            "is_empty": false,
            "level_cm": 45.67,
            "level_inches": 17.98,
            "percentage": 60,
            "battery_voltage": 3.1,
            "temperature_c": 22.4,
            "temperature_raw": 38,
            "tof": 0.00001234,
            "hardware_id": 78,
            "hardware_version": 78,
            "hardware_family": "gen2",
            "slow_update": false,
            "sync_pressed": true,
            "header": "1aff",
            "manufacturer_header": "0d00",
            "accelerometer": {"raw": 30, "x": 1, "y": -2},
            "battery_raw": 183,
            "advertisement_peaks": [{"i": 0, "a": 5}, {"i": 2, "a": 9}]
        }"#;

        let result: TelemetryResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_empty);
        assert_eq!(result.percentage, 60.0);
        assert_eq!(result.hardware_id, "78");
        assert_eq!(result.hardware_family, "gen2");
        assert_eq!(result.accelerometer, AccelerometerReading { x: 1.0, y: -2.0 });
        assert_eq!(result.advertisement_peaks.len(), 2);
        assert_eq!(result.advertisement_peaks[0], AdvertisementPeak { i: 0.0, a: 5.0 });
    }

    #[test]
    fn test_peak_order_is_preserved() {
        let json = r#"[{"i": 6, "a": 1}, {"i": 2, "a": 9}, {"i": 4, "a": 3}]"#;
        let peaks: Vec<AdvertisementPeak> = serde_json::from_str(json).unwrap();
        let indexes: Vec<f64> = peaks.iter().map(|p| p.i).collect();
        assert_eq!(indexes, vec![6.0, 2.0, 4.0]);
    }

    #[test]
    fn test_missing_peaks_default_to_empty() {
        let json = r#"{
            "is_empty": true,
            "percentage": 0,
            "battery_voltage": 2.9,
            "temperature_c": -40.0,
            "temperature_raw": 0,
            "tof": 0,
            "hardware_id": "70",
            "hardware_version": "70",
            "hardware_family": "xl",
            "slow_update": true,
            "sync_pressed": false,
            "header": "1aff",
            "manufacturer_header": "0d00",
            "accelerometer": {"x": 0, "y": 0},
            "battery_raw": 179
        }"#;

        let result: TelemetryResult = serde_json::from_str(json).unwrap();
        assert!(result.is_empty);
        assert!(result.advertisement_peaks.is_empty());
        assert_eq!(result.level_cm, 0.0);
    }
}
