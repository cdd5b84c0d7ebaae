use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantNames};

/// Synthesis voices accepted by the speech service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum Voice {
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

impl Voice {
    /// Parse a voice name, listing the accepted names on failure
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not one of the known voices
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        value.parse().map_err(|_| {
            anyhow::anyhow!(
                "invalid voice `{value}`, expected one of: {}",
                Self::VARIANTS.join(", ")
            )
        })
    }

    /// Wire name of the voice
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
