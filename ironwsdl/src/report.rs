//! Plain-text summaries of decoded definitions.

use ironwsdl_schema::{Definition, FormDefault};

/// Renders a human-readable summary of a definition.
#[must_use]
pub fn summarize(definition: &Definition) -> String {
    let mut out = String::new();

    if !definition.documentation.is_empty() {
        out.push_str(&format!(
            "documentation: {}\n",
            definition.documentation.trim()
        ));
    }

    out.push_str(&format!("messages ({}):\n", definition.messages.len()));
    for message in &definition.messages {
        out.push_str(&format!(
            "  {} [part {} -> {}]\n",
            message.name, message.part.name, message.part.element
        ));
    }

    out.push_str(&format!(
        "portType {} ({} operations):\n",
        display_or_dash(&definition.port_type.name),
        definition.port_type.operations.len()
    ));
    for operation in &definition.port_type.operations {
        out.push_str(&format!("  {}\n", operation.name));
        out.push_str(&format!(
            "    input:  {}\n",
            display_or_dash(&operation.input.message)
        ));
        out.push_str(&format!(
            "    output: {}\n",
            display_or_dash(&operation.output.message)
        ));
        if let Some(fault) = &operation.fault {
            out.push_str(&format!("    fault:  {} -> {}\n", fault.name, fault.message));
        }
    }

    let schema = &definition.types.schema;
    out.push_str(&format!(
        "schema: targetNamespace={} elementFormDefault={} attributeFormDefault={}\n",
        display_or_dash(&schema.target_namespace),
        form_or_dash(schema.element_form_default.as_ref()),
        form_or_dash(schema.attribute_form_default.as_ref())
    ));

    out
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

fn form_or_dash(form: Option<&FormDefault>) -> &str {
    form.map_or("-", FormDefault::as_str)
}
