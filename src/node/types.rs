//! Wire representations of fullnode responses.
//!
//! The node serializes chain integers as decimal strings; the sequence
//! number is kept as a string and displayed verbatim.

use serde::Deserialize;

use crate::domain::chain::{ModuleInfo, ResourceRecord};

/// Account metadata from `GET /accounts/{address}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AccountData {
    pub sequence_number: String,
}

/// A published module from `GET /accounts/{address}/modules`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MoveModule {
    pub abi: Option<ModuleAbi>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ModuleAbi {
    pub name: String,
}

impl MoveModule {
    /// Reduces the module to the interface name used by the presence gate.
    /// Modules published without an ABI carry no name and are skipped.
    pub fn into_info(self) -> Option<ModuleInfo> {
        self.abi.map(|abi| ModuleInfo { name: abi.name })
    }
}

/// An on-chain resource from `GET /accounts/{address}/resources`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MoveResource {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub data: serde_json::Value,
}

impl MoveResource {
    pub fn into_record(self) -> ResourceRecord {
        ResourceRecord {
            type_tag: self.type_tag,
            data: self.data,
        }
    }
}
