//! Assembly of the complete generated C++ source artifact.

use chrono::{DateTime, Local};
use convgen_matrix::VariantKey;
use tracing::debug;

use crate::emit::function_pair;
use crate::error::Result;
use crate::registry::NameRegistry;

/// Render the file preamble: the provenance banner, the includes the
/// generated functions rely on, and the namespace opening.
///
/// The banner carries the generating tool's name and a timestamp. The
/// timestamp is the only non-deterministic input to the artifact and is
/// supplied by the caller.
pub fn preamble(tool: &str, stamp: &DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str(
        "/***********************************************************************\n",
    );
    out.push_str(&format!(
        " * This file was generated by {} on {}\n",
        tool,
        stamp.format("%c")
    ));
    out.push_str(
        " **********************************************************************/\n",
    );
    out.push('\n');
    out.push_str("#include \"convert_common.hpp\"\n");
    out.push_str("#include <sdr/utils/byteswap.hpp>\n");
    out.push('\n');
    out.push_str("using namespace sdr::convert;\n");
    out
}

/// Generate the full converter source: the preamble followed by one
/// function pair per variant key, in matrix order.
///
/// Every converter name is claimed in a [`NameRegistry`] before its body is
/// appended, so a collision in the naming scheme surfaces as an error
/// instead of a silently shadowed registration.
pub fn generate_converter_source(tool: &str, stamp: DateTime<Local>) -> Result<String> {
    let keys = VariantKey::enumerate();
    let mut names = NameRegistry::new();
    let mut source = preamble(tool, &stamp);

    for key in &keys {
        names.claim(key.host_to_wire_name())?;
        names.claim(key.wire_to_host_name())?;
        debug!(variant = %key, "emitting converter pair");

        source.push('\n');
        source.push_str(&function_pair(key));
    }

    debug!(
        converters = names.len(),
        bytes = source.len(),
        "assembled converter source"
    );
    Ok(source)
}
