//! Configured base values for font metadata.

/// Default family prefix.
pub const DEFAULT_BASE_NAME: &str = "RNX";

/// Default family suffix.
pub const DEFAULT_FAMILY: &str = "Pro";

/// Default weight / subfamily.
pub const DEFAULT_WEIGHT: &str = "Regular";

/// Default copyright holder, manufacturer and designer.
pub const DEFAULT_OWNER: &str = "Aurora Foundry";

/// Default vendor and designer URL.
pub const DEFAULT_URL: &str = "https://www.aurorafoundry.com";

/// Default copyright year.
pub const DEFAULT_YEAR: &str = "2025";

/// Default OS/2 vendor identifier.
pub const DEFAULT_VENDOR_ID: &str = "ARUR";

/// Base values every derived metadata string is composed from.
///
/// No value is validated; whatever is configured ends up in the font verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataConfig {
    pub base_name: String,
    pub family: String,
    pub weight: String,
    pub owner: String,
    pub url: String,
    pub year: String,
    pub vendor_id: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            family: DEFAULT_FAMILY.to_string(),
            weight: DEFAULT_WEIGHT.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            url: DEFAULT_URL.to_string(),
            year: DEFAULT_YEAR.to_string(),
            vendor_id: DEFAULT_VENDOR_ID.to_string(),
        }
    }
}

impl MetadataConfig {
    pub fn with_base_name(mut self, value: impl Into<String>) -> Self {
        self.base_name = value.into();
        self
    }

    pub fn with_family(mut self, value: impl Into<String>) -> Self {
        self.family = value.into();
        self
    }

    pub fn with_weight(mut self, value: impl Into<String>) -> Self {
        self.weight = value.into();
        self
    }

    pub fn with_owner(mut self, value: impl Into<String>) -> Self {
        self.owner = value.into();
        self
    }

    pub fn with_url(mut self, value: impl Into<String>) -> Self {
        self.url = value.into();
        self
    }

    pub fn with_year(mut self, value: impl Into<String>) -> Self {
        self.year = value.into();
        self
    }

    pub fn with_vendor_id(mut self, value: impl Into<String>) -> Self {
        self.vendor_id = value.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MetadataConfig::default();
        assert_eq!(config.base_name, "RNX");
        assert_eq!(config.family, "Pro");
        assert_eq!(config.weight, "Regular");
        assert_eq!(config.owner, "Aurora Foundry");
        assert_eq!(config.url, "https://www.aurorafoundry.com");
        assert_eq!(config.year, "2025");
        assert_eq!(config.vendor_id, "ARUR");
    }

    #[test]
    fn test_builder_overrides() {
        let config = MetadataConfig::default()
            .with_family("Sans")
            .with_year("2030");
        assert_eq!(config.family, "Sans");
        assert_eq!(config.year, "2030");
        assert_eq!(config.base_name, DEFAULT_BASE_NAME);
    }
}
