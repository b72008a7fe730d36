//! Geometry and spatial-resolution catalogue.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Named spatial axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpatialVariable {
    #[serde(rename = "x_n")]
    XN,
    #[serde(rename = "x_s")]
    XS,
    #[serde(rename = "x_p")]
    XP,
    #[serde(rename = "y")]
    Y,
    #[serde(rename = "z")]
    Z,
}

impl SpatialVariable {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::XN => "x_n",
            Self::XS => "x_s",
            Self::XP => "x_p",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for SpatialVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macroscale geometries, by current-collector dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    #[serde(rename = "1D macro")]
    OneDMacro,
    #[serde(rename = "1+1D macro")]
    OnePlusOneDMacro,
    #[serde(rename = "2+1D macro")]
    TwoPlusOneDMacro,
}

impl GeometryKind {
    /// Selects the geometry for a current-collector dimensionality.
    pub fn for_dimensionality(dimensionality: i64) -> Result<Self, ValidationError> {
        match dimensionality {
            0 => Ok(Self::OneDMacro),
            1 => Ok(Self::OnePlusOneDMacro),
            2 => Ok(Self::TwoPlusOneDMacro),
            other => Err(ValidationError::UnsupportedDimensionality {
                dimensionality: other,
            }),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OneDMacro => "1D macro",
            Self::OnePlusOneDMacro => "1+1D macro",
            Self::TwoPlusOneDMacro => "2+1D macro",
        }
    }

    /// Spatial axes spanned by this geometry.
    #[must_use]
    pub fn axes(&self) -> Vec<SpatialVariable> {
        let mut axes = vec![SpatialVariable::XN, SpatialVariable::XS, SpatialVariable::XP];
        match self {
            Self::OneDMacro => {}
            Self::OnePlusOneDMacro => axes.push(SpatialVariable::Z),
            Self::TwoPlusOneDMacro => axes.extend([SpatialVariable::Y, SpatialVariable::Z]),
        }
        axes
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A macroscale geometry and the axes it spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub kind: GeometryKind,
    pub axes: Vec<SpatialVariable>,
}

impl Geometry {
    #[must_use]
    pub fn new(kind: GeometryKind) -> Self {
        Self {
            kind,
            axes: kind.axes(),
        }
    }

    pub fn for_dimensionality(dimensionality: i64) -> Result<Self, ValidationError> {
        GeometryKind::for_dimensionality(dimensionality).map(Self::new)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Grid points per axis giving a uniform grid for the standard
/// lead-acid parameter values.
#[must_use]
pub fn default_var_pts() -> BTreeMap<SpatialVariable, usize> {
    BTreeMap::from([
        (SpatialVariable::XN, 25),
        (SpatialVariable::XS, 41),
        (SpatialVariable::XP, 34),
        (SpatialVariable::Y, 10),
        (SpatialVariable::Z, 10),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_by_dimensionality() {
        assert_eq!(Geometry::for_dimensionality(0).unwrap().label(), "1D macro");
        assert_eq!(Geometry::for_dimensionality(1).unwrap().label(), "1+1D macro");
        assert_eq!(Geometry::for_dimensionality(2).unwrap().label(), "2+1D macro");
    }

    #[test]
    fn test_unsupported_dimensionality() {
        for dim in [-1, 3, 10] {
            assert_eq!(
                Geometry::for_dimensionality(dim).unwrap_err(),
                ValidationError::UnsupportedDimensionality { dimensionality: dim }
            );
        }
    }

    #[test]
    fn test_geometry_axes() {
        assert_eq!(Geometry::new(GeometryKind::OneDMacro).axes.len(), 3);
        assert!(Geometry::new(GeometryKind::OnePlusOneDMacro)
            .axes
            .contains(&SpatialVariable::Z));
        let full = Geometry::new(GeometryKind::TwoPlusOneDMacro);
        assert!(full.axes.contains(&SpatialVariable::Y));
        assert!(full.axes.contains(&SpatialVariable::Z));
    }

    #[test]
    fn test_default_var_pts() {
        let pts = default_var_pts();
        assert_eq!(pts[&SpatialVariable::XN], 25);
        assert_eq!(pts[&SpatialVariable::XS], 41);
        assert_eq!(pts[&SpatialVariable::XP], 34);
        assert_eq!(pts[&SpatialVariable::Y], 10);
        assert_eq!(pts[&SpatialVariable::Z], 10);
    }

    #[test]
    fn test_geometry_serialization() {
        let json = serde_json::to_string(&GeometryKind::OnePlusOneDMacro).unwrap();
        assert_eq!(json, "\"1+1D macro\"");
        assert_eq!(SpatialVariable::XS.to_string(), "x_s");
    }
}
