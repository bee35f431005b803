use rand::Rng;

use crate::api::DeployError;

/// Inclusive lower bound of generated ports.
pub const RANDOM_PORT_MIN: u16 = 3000;
/// Exclusive upper bound of generated ports.
pub const RANDOM_PORT_MAX: u16 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortMode {
    #[default]
    Random,
    Custom,
}

impl PortMode {
    pub fn id(self) -> &'static str {
        match self {
            PortMode::Random => "random",
            PortMode::Custom => "custom",
        }
    }

    /// Unknown or missing values fall back to `Random`.
    pub fn from_form(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()) {
            Some(v) if v == "custom" => PortMode::Custom,
            _ => PortMode::Random,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSelection {
    pub mode: PortMode,
    pub custom_port: String,
}

impl PortSelection {
    pub fn random() -> Self {
        Self::default()
    }

    pub fn custom(port: impl Into<String>) -> Self {
        Self { mode: PortMode::Custom, custom_port: port.into() }
    }

    /// False while custom mode is selected without a port entered.
    pub fn is_ready(&self) -> bool {
        !(self.mode == PortMode::Custom && self.custom_port.trim().is_empty())
    }

    /// Picks the port to deploy on. Random ports are drawn at call time.
    pub fn resolve(&self) -> Result<u16, DeployError> {
        match self.mode {
            PortMode::Random => Ok(random_port()),
            PortMode::Custom => {
                let raw = self.custom_port.trim();
                match raw.parse::<u16>() {
                    Ok(port) if port > 0 => Ok(port),
                    _ => Err(DeployError::InvalidPort(raw.to_string())),
                }
            }
        }
    }
}

pub fn random_port() -> u16 {
    rand::thread_rng().gen_range(RANDOM_PORT_MIN..RANDOM_PORT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_port_stays_in_range() {
        for _ in 0..10_000 {
            let port = random_port();
            assert!((RANDOM_PORT_MIN..RANDOM_PORT_MAX).contains(&port), "{port}");
        }
    }

    #[test]
    fn custom_port_is_used_verbatim() {
        assert_eq!(PortSelection::custom("8080").resolve().unwrap(), 8080);
        assert_eq!(PortSelection::custom(" 3000 ").resolve().unwrap(), 3000);
    }

    #[test]
    fn custom_port_must_be_a_port_number() {
        for bad in ["abc", "0", "70000", "-1", "80.5"] {
            assert!(matches!(
                PortSelection::custom(bad).resolve(),
                Err(DeployError::InvalidPort(_))
            ), "{bad}");
        }
    }

    #[test]
    fn empty_custom_port_is_not_ready() {
        assert!(PortSelection::random().is_ready());
        assert!(PortSelection::custom("3000").is_ready());
        assert!(!PortSelection::custom("").is_ready());
        assert!(!PortSelection::custom("  ").is_ready());
    }

    #[test]
    fn unknown_mode_defaults_to_random() {
        assert_eq!(PortMode::from_form(Some("custom")), PortMode::Custom);
        assert_eq!(PortMode::from_form(Some("fixed")), PortMode::Random);
        assert_eq!(PortMode::from_form(None), PortMode::Random);
    }
}
