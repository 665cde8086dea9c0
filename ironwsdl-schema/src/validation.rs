//! Reference checks for decoded definitions.
//!
//! The decoder accepts partial documents and never cross-checks references.
//! Callers that need a consistent document can run these checks afterwards.
//! A reference matches a message when its local part (after the prefix)
//! equals the message name; prefixes are never resolved.

use crate::error::{Direction, ReferenceError};
use crate::messages::{WsdlOperation, split_reference};
use crate::types::Definition;
use std::collections::HashSet;

/// Checks a decoded definition for dangling and duplicate names.
///
/// # Arguments
/// * `definition` - The definition to check
///
/// # Returns
/// Ok(()) if consistent, or the first problem found.
///
/// # Errors
/// Returns `ReferenceError` for the first duplicate or dangling reference.
pub fn validate_references(definition: &Definition) -> Result<(), ReferenceError> {
    match collect_reference_errors(definition).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Returns every reference problem in the definition, in document order.
#[must_use]
pub fn collect_reference_errors(definition: &Definition) -> Vec<ReferenceError> {
    let mut errors = Vec::new();

    let mut message_names = HashSet::new();
    for message in &definition.messages {
        if !message_names.insert(message.name.as_str()) {
            errors.push(ReferenceError::DuplicateMessage {
                name: message.name.clone(),
            });
        }
    }

    let mut operation_names = HashSet::new();
    for operation in &definition.port_type.operations {
        if !operation_names.insert(operation.name.as_str()) {
            errors.push(ReferenceError::DuplicateOperation {
                name: operation.name.clone(),
            });
        }
        check_operation(operation, &message_names, &mut errors);
    }

    errors
}

/// Checks the message references of one operation.
fn check_operation(
    operation: &WsdlOperation,
    message_names: &HashSet<&str>,
    errors: &mut Vec<ReferenceError>,
) {
    let references = [
        (Direction::Input, Some(operation.input.message.as_str())),
        (Direction::Output, Some(operation.output.message.as_str())),
        (
            Direction::Fault,
            operation.fault.as_ref().map(|f| f.message.as_str()),
        ),
    ];

    for (direction, reference) in references {
        let Some(reference) = reference.filter(|r| !r.is_empty()) else {
            continue;
        };
        let (_, local) = split_reference(reference);
        if !message_names.contains(local) {
            errors.push(ReferenceError::unknown_message(
                &operation.name,
                direction,
                reference,
            ));
        }
    }
}
