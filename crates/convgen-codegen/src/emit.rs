//! Skeleton instantiation for converter function pairs.
//!
//! Two structural skeletons exist. The single-channel shape (width 1) has
//! one host pointer and one wire pointer with a 1:1 index mapping. The
//! multi-channel shape (widths 2 through 4) binds one host pointer per
//! channel to `inputs[w]` / `outputs[w]` and drives a shared wire index `j`
//! that advances once per channel per outer iteration, interleaving the
//! channels into the linear wire buffer.
//!
//! Swap placement is shared between the skeletons: `SwapMode::wrap` is
//! applied to the conversion result on the host-to-wire path and to the raw
//! wire word on the wire-to-host path, so the scalar primitives always
//! operate on host-endian wire values.

use convgen_matrix::{SampleType, VariantKey};

/// Registration priority tag carried by every generated function. The
/// runtime registry treats these as the general fallback implementations
/// and prefers optimized registrations when any exist.
const PRIORITY: &str = "PRIORITY_GENERAL";

/// Scalar conversion call turning one host sample into a wire word.
fn to_wire_call(sample: SampleType, input: &str) -> String {
    format!("{}({}[i], float(scale_factor))", sample.to_wire_fn(), input)
}

/// Scalar conversion call turning one wire-word expression into a host sample.
fn from_wire_call(sample: SampleType, wire_expr: &str) -> String {
    format!(
        "{}({}, float(scale_factor))",
        sample.from_wire_fn(),
        wire_expr
    )
}

/// Emit the host-to-wire converter for one variant key.
pub fn host_to_wire(key: &VariantKey) -> String {
    let t = key.sample.name();
    let mut f = String::new();

    f.push_str(&format!(
        "DECLARE_CONVERTER({}, {}){{\n",
        key.host_to_wire_name(),
        PRIORITY
    ));
    if key.width == 1 {
        f.push_str(&format!(
            "    const {}_t *input = reinterpret_cast<const {}_t *>(inputs[0]);\n",
            t, t
        ));
    } else {
        for w in 0..key.width {
            f.push_str(&format!(
                "    const {}_t *input{} = reinterpret_cast<const {}_t *>(inputs[{}]);\n",
                t, w, t, w
            ));
        }
    }
    f.push_str("    item32_t *output = reinterpret_cast<item32_t *>(outputs[0]);\n");
    f.push('\n');

    if key.width == 1 {
        f.push_str("    for (size_t i = 0; i < nsamps; i++){\n");
        f.push_str(&format!(
            "        output[i] = {};\n",
            key.swap.wrap(&to_wire_call(key.sample, "input"))
        ));
        f.push_str("    }\n");
    } else {
        f.push_str("    for (size_t i = 0, j = 0; i < nsamps; i++){\n");
        for w in 0..key.width {
            f.push_str(&format!(
                "        output[j++] = {};\n",
                key.swap
                    .wrap(&to_wire_call(key.sample, &format!("input{}", w)))
            ));
        }
        f.push_str("    }\n");
    }
    f.push_str("}\n");
    f
}

/// Emit the wire-to-host converter for one variant key.
pub fn wire_to_host(key: &VariantKey) -> String {
    let t = key.sample.name();
    let mut f = String::new();

    f.push_str(&format!(
        "DECLARE_CONVERTER({}, {}){{\n",
        key.wire_to_host_name(),
        PRIORITY
    ));
    f.push_str("    const item32_t *input = reinterpret_cast<const item32_t *>(inputs[0]);\n");
    if key.width == 1 {
        f.push_str(&format!(
            "    {}_t *output = reinterpret_cast<{}_t *>(outputs[0]);\n",
            t, t
        ));
    } else {
        for w in 0..key.width {
            f.push_str(&format!(
                "    {}_t *output{} = reinterpret_cast<{}_t *>(outputs[{}]);\n",
                t, w, t, w
            ));
        }
    }
    f.push('\n');

    if key.width == 1 {
        f.push_str("    for (size_t i = 0; i < nsamps; i++){\n");
        f.push_str(&format!(
            "        output[i] = {};\n",
            from_wire_call(key.sample, &key.swap.wrap("input[i]"))
        ));
        f.push_str("    }\n");
    } else {
        f.push_str("    for (size_t i = 0, j = 0; i < nsamps; i++){\n");
        for w in 0..key.width {
            f.push_str(&format!(
                "        output{}[i] = {};\n",
                w,
                from_wire_call(key.sample, &key.swap.wrap("input[j++]"))
            ));
        }
        f.push_str("    }\n");
    }
    f.push_str("}\n");
    f
}

/// Emit both converters for one key, host-to-wire first, separated by one
/// blank line.
pub fn function_pair(key: &VariantKey) -> String {
    let mut pair = host_to_wire(key);
    pair.push('\n');
    pair.push_str(&wire_to_host(key));
    pair
}
