use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub decoder: DecoderSettings,
    pub tank: TankSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DecoderSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TankSettings {
    /// Used when the height field is left blank or does not parse.
    /// 0.254 m is a standard 20-lb tank.
    pub default_height_m: f64,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("decoder.endpoint", "http://127.0.0.1:5000/parse")?
        .set_default("decoder.timeout_secs", 10)?
        .set_default("tank.default_height_m", 0.254)?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_dashboard_config() {
        let config = load_dashboard_config().unwrap();
        assert!(config.decoder.endpoint.ends_with("/parse"));
        assert!(config.decoder.timeout_secs > 0);
        assert!(config.tank.default_height_m > 0.0);
    }
}
