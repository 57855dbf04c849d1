use serde::{Deserialize, Deserializer, Serialize};

/// Most decimal places a formatted size may carry.
pub const MAX_SIZE_PRECISION: usize = 10;

/// Presentation preferences applied while normalizing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplaySettings {
    /// Decimal places used for formatted sizes ("1.00 MB"), at most
    /// [`MAX_SIZE_PRECISION`].
    #[serde(
        default = "default_size_precision",
        deserialize_with = "deserialize_precision"
    )]
    pub size_precision: usize,
}

fn default_size_precision() -> usize {
    2
}

fn deserialize_precision<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(usize::deserialize(deserializer)?.min(MAX_SIZE_PRECISION))
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            size_precision: default_size_precision(),
        }
    }
}

impl DisplaySettings {
    /// Settings with the given precision, clamped to [`MAX_SIZE_PRECISION`].
    pub fn with_precision(precision: usize) -> Self {
        Self {
            size_precision: precision.min(MAX_SIZE_PRECISION),
        }
    }

    /// Precision actually used when formatting. The field is public, so it is
    /// clamped again here.
    pub fn precision(&self) -> usize {
        self.size_precision.min(MAX_SIZE_PRECISION)
    }
}
