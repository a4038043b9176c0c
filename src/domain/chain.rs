//! On-chain naming conventions for the message module.
//!
//! The target module publishes a `MessageHolder` resource and a
//! `set_message` entry function under the publisher's own address. Both
//! identifiers are external contracts this client depends on but does not
//! define.

/// Name of the on-chain module whose presence enables the editor.
pub const MESSAGE_MODULE_NAME: &str = "message";

/// Field of the MessageHolder resource that carries the message text.
const MESSAGE_FIELD: &str = "message";

/// A published module, reduced to the ABI name used by the presence gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: String,
}

/// An address-scoped on-chain record, keyed by its full type string.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    pub type_tag: String,
    pub data: serde_json::Value,
}

/// True iff any published module is named `message`.
pub fn has_message_module(modules: &[ModuleInfo]) -> bool {
    modules.iter().any(|m| m.name == MESSAGE_MODULE_NAME)
}

/// Full type string of the MessageHolder resource published at `address`.
pub fn message_holder_type(address: &str) -> String {
    format!("{address}::{MESSAGE_MODULE_NAME}::MessageHolder")
}

/// Fully qualified entry function identifier for updating the message.
pub fn set_message_function(address: &str) -> String {
    format!("{address}::{MESSAGE_MODULE_NAME}::set_message")
}

/// Extracts the message string from the MessageHolder resource at `address`,
/// if present.
pub fn find_message<'a>(resources: &'a [ResourceRecord], address: &str) -> Option<&'a str> {
    let holder_type = message_holder_type(address);
    resources
        .iter()
        .find(|resource| resource.type_tag == holder_type)
        .and_then(|resource| resource.data.get(MESSAGE_FIELD))
        .and_then(|value| value.as_str())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const ADDRESS: &str = "0xcafe";

    fn holder(address: &str, message: &str) -> ResourceRecord {
        ResourceRecord {
            type_tag: message_holder_type(address),
            data: json!({ "message": message }),
        }
    }

    #[test]
    fn gate_is_true_when_message_module_is_published() {
        let modules = vec![
            ModuleInfo {
                name: "coin".to_owned(),
            },
            ModuleInfo {
                name: "message".to_owned(),
            },
        ];

        assert!(has_message_module(&modules));
    }

    #[test]
    fn gate_is_false_without_message_module() {
        let modules = vec![ModuleInfo {
            name: "coin".to_owned(),
        }];

        assert!(!has_message_module(&modules));
        assert!(!has_message_module(&[]));
    }

    #[test]
    fn holder_type_follows_address_scoped_convention() {
        assert_eq!(message_holder_type("0xcafe"), "0xcafe::message::MessageHolder");
    }

    #[test]
    fn set_message_function_is_fully_qualified() {
        assert_eq!(set_message_function("0xcafe"), "0xcafe::message::set_message");
    }

    #[test]
    fn finds_message_in_matching_holder_resource() {
        let resources = vec![
            ResourceRecord {
                type_tag: "0x1::coin::CoinStore".to_owned(),
                data: json!({ "value": "100" }),
            },
            holder(ADDRESS, "hello"),
        ];

        assert_eq!(find_message(&resources, ADDRESS), Some("hello"));
    }

    #[test]
    fn ignores_holder_published_at_other_address() {
        let resources = vec![holder("0xbeef", "hello")];

        assert_eq!(find_message(&resources, ADDRESS), None);
    }

    #[test]
    fn returns_none_when_message_field_is_missing() {
        let resources = vec![ResourceRecord {
            type_tag: message_holder_type(ADDRESS),
            data: json!({}),
        }];

        assert_eq!(find_message(&resources, ADDRESS), None);
    }

    #[test]
    fn returns_none_when_message_field_is_not_a_string() {
        let resources = vec![ResourceRecord {
            type_tag: message_holder_type(ADDRESS),
            data: json!({ "message": 7 }),
        }];

        assert_eq!(find_message(&resources, ADDRESS), None);
    }
}
