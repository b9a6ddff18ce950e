//! Host-side sample type descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A host-side sample representation handled by the generated converters.
///
/// Each type is paired with two scalar conversion primitives in the host
/// driver (`<type>_to_item32` and `item32_to_<type>`). The generator only
/// references those primitives by name; whether they exist is a contract
/// with the consuming build and is checked when the artifact is compiled,
/// not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleType {
    /// 64-bit complex float
    Fc64,
    /// 32-bit complex float
    Fc32,
    /// 16-bit complex integer
    Sc16,
}

impl SampleType {
    /// All sample types, in the declared (inner-loop) enumeration order.
    pub const ALL: [SampleType; 3] = [SampleType::Fc64, SampleType::Fc32, SampleType::Sc16];

    /// Short type name as it appears in converter names and primitive calls.
    pub fn name(&self) -> &'static str {
        match self {
            SampleType::Fc64 => "fc64",
            SampleType::Fc32 => "fc32",
            SampleType::Sc16 => "sc16",
        }
    }

    /// Bit width of one scalar component of the complex sample.
    pub fn scalar_bits(&self) -> u32 {
        match self {
            SampleType::Fc64 => 64,
            SampleType::Fc32 => 32,
            SampleType::Sc16 => 16,
        }
    }

    /// Name of the scalar primitive converting one host sample to a wire word.
    pub fn to_wire_fn(&self) -> String {
        format!("{}_to_item32", self.name())
    }

    /// Name of the scalar primitive converting one wire word to a host sample.
    pub fn from_wire_fn(&self) -> String {
        format!("item32_to_{}", self.name())
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
