//! The flat record written for each network finding.

use serde::Serialize;

/// Value of every field that no component has set.
pub const NOT_APPLICABLE: &str = "N/A";

/// Column header of the export, in field order.
pub const FIELDS: [&str; 14] = [
    "account",
    "region",
    "vpc_id",
    "subnet_id",
    "instance_id",
    "instance_arn",
    "instance_name",
    "resource_id",
    "resource_arn",
    "secgroup_id",
    "sgrule_direction",
    "sgrule_cidr",
    "sgrule_protocol",
    "sgrule_portrange",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedRecord {
    pub account: String,
    pub region: String,
    pub vpc_id: String,
    pub subnet_id: String,
    pub instance_id: String,
    pub instance_arn: String,
    pub instance_name: String,
    pub resource_id: String,
    pub resource_arn: String,
    pub secgroup_id: String,
    pub sgrule_direction: String,
    pub sgrule_cidr: String,
    pub sgrule_protocol: String,
    pub sgrule_portrange: String,
}

impl Default for ExtractedRecord {
    fn default() -> Self {
        let na = || NOT_APPLICABLE.to_string();
        Self {
            account: na(),
            region: na(),
            vpc_id: na(),
            subnet_id: na(),
            instance_id: na(),
            instance_arn: na(),
            instance_name: na(),
            resource_id: na(),
            resource_arn: na(),
            secgroup_id: na(),
            sgrule_direction: na(),
            sgrule_cidr: na(),
            sgrule_protocol: na(),
            sgrule_portrange: na(),
        }
    }
}

impl ExtractedRecord {
    /// Field values in [`FIELDS`] order.
    pub fn as_row(&self) -> [&str; 14] {
        [
            self.account.as_str(),
            self.region.as_str(),
            self.vpc_id.as_str(),
            self.subnet_id.as_str(),
            self.instance_id.as_str(),
            self.instance_arn.as_str(),
            self.instance_name.as_str(),
            self.resource_id.as_str(),
            self.resource_arn.as_str(),
            self.secgroup_id.as_str(),
            self.sgrule_direction.as_str(),
            self.sgrule_cidr.as_str(),
            self.sgrule_protocol.as_str(),
            self.sgrule_portrange.as_str(),
        ]
    }
}

/// Overwrite `slot` when the component supplied a value.
///
/// A missing attribute leaves the current value, so a field never reverts
/// to the sentinel once set.
pub(crate) fn assign(slot: &mut String, value: Option<&str>) {
    if let Some(value) = value {
        *slot = value.to_string();
    }
}
