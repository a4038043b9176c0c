use serde::Serialize;

use crate::domain::chain::set_message_function;

/// An entry function call described for the wallet to sign and submit.
///
/// The shape is imposed by the target on-chain module: a fully qualified
/// function identifier, positional arguments, and (here always empty) type
/// arguments.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntryFunctionPayload {
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<String>,
}

impl EntryFunctionPayload {
    /// Builds the `set_message` call with the message as its sole argument,
    /// sent verbatim as UTF-8.
    pub fn set_message(address: &str, message: &str) -> Self {
        Self {
            function: set_message_function(address),
            type_arguments: Vec::new(),
            arguments: vec![message.to_owned()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_message_payload_has_fixed_shape() {
        let payload = EntryFunctionPayload::set_message("0xcafe", "hello");

        assert_eq!(payload.function, "0xcafe::message::set_message");
        assert_eq!(payload.arguments, vec!["hello".to_owned()]);
        assert!(payload.type_arguments.is_empty());
    }

    #[test]
    fn serializes_to_wallet_wire_shape() {
        let payload = EntryFunctionPayload::set_message("0xcafe", "hi");
        let json = serde_json::to_value(&payload).expect("payload must serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "function": "0xcafe::message::set_message",
                "type_arguments": [],
                "arguments": ["hi"],
            })
        );
    }

    #[test]
    fn message_is_carried_verbatim() {
        let payload = EntryFunctionPayload::set_message("0xcafe", "  spaced  ");

        assert_eq!(payload.arguments, vec!["  spaced  ".to_owned()]);
    }
}
