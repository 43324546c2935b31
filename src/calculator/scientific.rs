//! Single-argument scientific functions and their domain rules.

use super::CalcError;
use std::fmt;

/// The ten function keys. Trigonometric arguments are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Square,
    Log,
    Ln,
    Exp,
    Reciprocal,
    CubeRoot,
}

impl ScientificFn {
    pub const ALL: [ScientificFn; 10] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Square,
        Self::Log,
        Self::Ln,
        Self::Exp,
        Self::Reciprocal,
        Self::CubeRoot,
    ];

    /// Canonical lowercase name, also accepted as a key name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Reciprocal => "reciprocal",
            Self::CubeRoot => "cube_root",
        }
    }

    /// Label printed on the key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Square => "x²",
            Self::Reciprocal => "1/x",
            Self::CubeRoot => "∛",
            other => other.name(),
        }
    }

    /// Apply the function to `x`.
    ///
    /// Arguments outside the domain table are rejected up front. A NaN result
    /// from an otherwise accepted argument (negative cube roots, trig of an
    /// infinity) is reported as a domain error too.
    pub fn apply(self, x: f64) -> Result<f64, CalcError> {
        let domain_error = || CalcError::Domain { function: self, value: x };

        let result = match self {
            Self::Sin => x.to_radians().sin(),
            Self::Cos => x.to_radians().cos(),
            Self::Tan => x.to_radians().tan(),
            Self::Sqrt if x < 0.0 => return Err(domain_error()),
            Self::Sqrt => x.sqrt(),
            Self::Square => x * x,
            Self::Log | Self::Ln if x <= 0.0 => return Err(domain_error()),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Exp => x.exp(),
            Self::Reciprocal if x == 0.0 => return Err(domain_error()),
            Self::Reciprocal => 1.0 / x,
            // Real power, not a signed cube root: negative inputs give NaN.
            Self::CubeRoot => x.powf(1.0 / 3.0),
        };

        if result.is_nan() && !x.is_nan() {
            return Err(domain_error());
        }
        Ok(result)
    }
}

impl fmt::Display for ScientificFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
