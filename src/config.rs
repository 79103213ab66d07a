use crate::bridge::resolve_resource_name;
use crate::statics;
use std::time::Duration;

/// Knobs the embedding host may override. `Default` matches the shipped panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Host resource name; intents go to `https://{resource_name}/{action}`.
    pub resource_name: String,
    pub toast_duration: Duration,
    pub min_poly_points: usize,
    /// Zero points the create form starts with.
    pub create_form_points: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            resource_name: statics::DEFAULT_RESOURCE_NAME.to_string(),
            toast_duration: statics::TOAST_DURATION,
            min_poly_points: statics::MIN_POLY_POINTS,
            create_form_points: statics::CREATE_FORM_POLY_POINTS,
        }
    }
}

impl PanelConfig {
    /// Default config with the resource name taken from a host-supplied lookup.
    pub fn from_host_lookup<F>(lookup: Option<F>) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        Self {
            resource_name: resolve_resource_name(lookup),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PanelConfig;

    #[test]
    fn host_lookup_overrides_resource_name_only() {
        let cfg = PanelConfig::from_host_lookup(Some(|| Some("ch_houses".to_string())));
        assert_eq!(cfg.resource_name, "ch_houses");
        assert_eq!(cfg.min_poly_points, 3);
        assert_eq!(cfg.create_form_points, 4);
        assert_eq!(cfg.toast_duration.as_millis(), 3500);
    }
}
