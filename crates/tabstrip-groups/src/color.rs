//! Display color for a group
//!
//! Stored as four channels in `[0, 1]` so it survives a snapshot round trip
//! without depending on any platform color type. Serialized as the
//! `[r, g, b, a]` array; deserialization clamps like [`Color::new`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Color {
    /// Builds a color, clamping every channel into `[0, 1]`.
    /// NaN channels become 0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp_channel(a),
        }
    }

    /// Opaque color from three channels
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn red(&self) -> f64 {
        self.r
    }

    pub fn green(&self) -> f64 {
        self.g
    }

    pub fn blue(&self) -> f64 {
        self.b
    }

    pub fn alpha(&self) -> f64 {
        self.a
    }

    pub fn to_rgba_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parses the portable `[r, g, b, a]` encoding.
    ///
    /// Returns `None` unless the slice holds exactly four finite numbers.
    /// Finite values outside `[0, 1]` are clamped.
    pub fn from_rgba_slice(channels: &[f64]) -> Option<Self> {
        match channels {
            [r, g, b, a] if channels.iter().all(|c| c.is_finite()) => {
                Some(Self::new(*r, *g, *b, *a))
            }
            _ => None,
        }
    }
}

impl From<[f64; 4]> for Color {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [f64; 4] {
    fn from(color: Color) -> Self {
        color.to_rgba_array()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0.5, 0.5, 0.5)
    }
}

fn clamp_channel(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_are_clamped() {
        let color = Color::new(1.5, -0.2, 0.25, f64::NAN);
        assert_eq!(color.to_rgba_array(), [1.0, 0.0, 0.25, 0.0]);
    }

    #[test]
    fn test_from_rgba_slice() {
        let color = Color::from_rgba_slice(&[0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(color.red(), 0.1);
        assert_eq!(color.alpha(), 0.4);

        // Wrong arity and non-finite values are rejected
        assert!(Color::from_rgba_slice(&[0.1, 0.2, 0.3]).is_none());
        assert!(Color::from_rgba_slice(&[0.1, 0.2, 0.3, f64::INFINITY]).is_none());
    }

    #[test]
    fn test_deserialize_clamps_channels() {
        let color: Color = serde_json::from_str("[5.0, -3.0, 0.5, 1.0]").unwrap();
        assert_eq!(color.to_rgba_array(), [1.0, 0.0, 0.5, 1.0]);

        let json = serde_json::to_string(&Color::new(0.25, 0.5, 0.75, 1.0)).unwrap();
        assert_eq!(json, "[0.25,0.5,0.75,1.0]");

        assert!(serde_json::from_str::<Color>(r#"{"r":0.1,"g":0.2,"b":0.3,"a":0.4}"#).is_err());
    }

    #[test]
    fn test_default_is_opaque_gray() {
        assert_eq!(Color::default().to_rgba_array(), [0.5, 0.5, 0.5, 1.0]);
    }
}
