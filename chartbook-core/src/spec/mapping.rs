//! Column → visual channel mapping.

use serde::{Deserialize, Serialize};

use super::SpecError;

/// A table column, by role. Observation tables are fixed-shape, so the
/// mapping names roles rather than arbitrary column strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Key,
    Value,
    Group,
}

/// Which columns feed which visual channels.
///
/// Position channels are mandatory; color and shape are optional and may
/// only encode the group column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMapping {
    pub x: Channel,
    pub y: Channel,
    pub color: Option<Channel>,
    pub shape: Option<Channel>,
}

impl ChannelMapping {
    /// Key on x, value on y, no grouping channels.
    pub fn xy() -> Self {
        Self {
            x: Channel::Key,
            y: Channel::Value,
            color: None,
            shape: None,
        }
    }

    /// Key on x, value on y, group encoded as color.
    pub fn xy_colored() -> Self {
        Self {
            color: Some(Channel::Group),
            ..Self::xy()
        }
    }

    /// Key on x, value on y, group encoded as color and shape.
    pub fn xy_colored_shaped() -> Self {
        Self {
            shape: Some(Channel::Group),
            ..Self::xy_colored()
        }
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if self.x != Channel::Key {
            return Err(SpecError::InvalidMapping {
                channel: "x",
                column: self.x,
            });
        }
        if self.y != Channel::Value {
            return Err(SpecError::InvalidMapping {
                channel: "y",
                column: self.y,
            });
        }
        if let Some(color) = self.color {
            if color != Channel::Group {
                return Err(SpecError::InvalidMapping {
                    channel: "color",
                    column: color,
                });
            }
        }
        if let Some(shape) = self.shape {
            if shape != Channel::Group {
                return Err(SpecError::InvalidMapping {
                    channel: "shape",
                    column: shape,
                });
            }
        }
        Ok(())
    }

    /// Whether series should be split per group.
    pub fn grouped(&self) -> bool {
        self.color.is_some() || self.shape.is_some()
    }
}
