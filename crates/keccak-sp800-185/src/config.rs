//! Describing a [`CShake`] instance as data.

use alloc::string::String;

use keccak_sponge::{Error, SpongeParams};
use tracing::debug;

use crate::cshake::CShake;

/// The rate/capacity split of an [`XofConfig`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// 168-byte rate, 256-bit capacity.
    #[default]
    Shake128,
    /// 136-byte rate, 512-bit capacity.
    Shake256,
    /// An explicit rate.
    Custom {
        /// The rate in bytes.
        rate: usize,
        /// The capacity in bits. If present it must equal
        /// `1600 - 8*rate`.
        #[cfg_attr(feature = "serde", serde(default))]
        capacity: Option<usize>,
    },
}

impl Variant {
    /// Returns the validated rate/capacity split.
    pub fn params(self) -> Result<SpongeParams, Error> {
        let params = match self {
            Self::Shake128 => SpongeParams::SHAKE128,
            Self::Shake256 => SpongeParams::SHAKE256,
            Self::Custom {
                rate,
                capacity: None,
            } => SpongeParams::new(rate)?,
            Self::Custom {
                rate,
                capacity: Some(capacity),
            } => SpongeParams::with_capacity(rate, capacity)?,
        };
        Ok(params)
    }
}

/// The construction parameters of a [`CShake`] instance.
///
/// With the `serde` feature this can be read from, for
/// example, JSON:
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use keccak_sp800_185::XofConfig;
///
/// let cfg: XofConfig = serde_json::from_str(r#"{
///     "variant": "shake256",
///     "output_length": 64,
///     "customization": "Email Signature"
/// }"#).unwrap();
/// let mut h = cfg.build().unwrap();
/// h.feed(&[0, 1, 2, 3]).unwrap();
/// assert_eq!(h.result().len(), 64);
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct XofConfig {
    /// The rate/capacity split.
    pub variant: Variant,
    /// The number of bytes returned per result.
    pub output_length: usize,
    /// The function name `N`.
    pub function_name: String,
    /// The customization string `S`.
    pub customization: String,
}

impl Default for XofConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            output_length: 32,
            function_name: String::new(),
            customization: String::new(),
        }
    }
}

impl XofConfig {
    /// Validates the configuration and creates a customized
    /// [`CShake`].
    pub fn build(&self) -> Result<CShake, Error> {
        let params = self.variant.params().inspect_err(|err| {
            debug!(variant = ?self.variant, %err, "invalid variant");
        })?;
        CShake::with_customization(
            params,
            self.output_length,
            self.function_name.as_bytes(),
            self.customization.as_bytes(),
        )
    }
}

#[cfg(test)]
mod tests {
    use keccak_sponge::{InvalidParameterError, Phase};

    use super::*;

    #[test]
    fn test_default() {
        let cfg = XofConfig::default();
        let h = cfg.build().unwrap();
        assert_eq!(h.params(), SpongeParams::SHAKE128);
        assert_eq!(h.output_length(), 32);
        assert_eq!(h.phase(), Phase::Customized);
    }

    #[test]
    fn test_custom_variant() {
        let v = Variant::Custom {
            rate: 72,
            capacity: Some(1024),
        };
        assert_eq!(v.params(), Ok(SpongeParams::SHA3_512));

        let v = Variant::Custom {
            rate: 72,
            capacity: Some(512),
        };
        assert_eq!(
            v.params(),
            Err(Error::InvalidParameter(
                InvalidParameterError::CapacityMismatch {
                    rate: 72,
                    capacity: 512
                }
            ))
        );

        let v = Variant::Custom {
            rate: 200,
            capacity: None,
        };
        assert_eq!(
            v.params(),
            Err(Error::InvalidParameter(
                InvalidParameterError::UnsupportedRate(200)
            ))
        );
    }

    #[test]
    fn test_zero_output_length() {
        let cfg = XofConfig {
            output_length: 0,
            ..XofConfig::default()
        };
        assert_eq!(
            cfg.build().map(|_| ()),
            Err(Error::InvalidParameter(
                InvalidParameterError::ZeroOutputLength
            ))
        );
    }
}
