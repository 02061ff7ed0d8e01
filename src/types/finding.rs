//! Network Access Analyzer findings.
//!
//! The analyzer exports each path component as an object that may carry several
//! shape keys at once (`Component`, `Vpc`, `Subnet`, `AttachedTo`,
//! `SecurityGroupRule`). Deserialization goes through [`RawFinding`] and then
//! normalizes every entry into the closed [`Component`] set, so extraction
//! dispatches on a variant tag instead of probing for keys.

use serde::{Deserialize, Serialize};

const NETWORK_INTERFACE_MARKER: &str = "network-interface";
const INTERNET_GATEWAY_MARKER: &str = "internet-gateway";
const VPC_MARKER: &str = "vpc";
const SECURITY_GROUP_MARKER: &str = "security-group";
const SUBNET_MARKER: &str = "subnet";
const INSTANCE_MARKER: &str = "instance";

/// An AWS resource reference as exported by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ResourceRef {
    fn arn_contains(&self, marker: &str) -> bool {
        self.arn.as_deref().is_some_and(|arn| arn.contains(marker))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortRange {
    pub from: i64,
    pub to: i64,
}

impl std::fmt::Display for PortRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// A security group rule as exported by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_range: Option<PortRange>,
}

/// One raw entry of `FindingComponents`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ResourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<ResourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<ResourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_to: Option<ResourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_group_rule: Option<RuleRef>,
    /// Some exports place the port range beside the rule instead of inside it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_range: Option<PortRange>,
}

/// Where a security group rule allows traffic from or to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulePeer {
    Cidr(String),
    SecurityGroup(String),
}

impl RulePeer {
    pub fn as_str(&self) -> &str {
        match self {
            RulePeer::Cidr(value) | RulePeer::SecurityGroup(value) => value,
        }
    }
}

/// A security group rule with its peer resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityGroupRule {
    /// `None` when the rule names neither a CIDR nor a security group.
    pub peer: Option<RulePeer>,
    pub direction: Option<String>,
    pub protocol: Option<String>,
    pub port_range: Option<PortRange>,
}

impl From<RuleRef> for SecurityGroupRule {
    fn from(rule: RuleRef) -> Self {
        let peer = match (rule.cidr, rule.security_group_id) {
            (Some(cidr), _) => Some(RulePeer::Cidr(cidr)),
            (None, Some(group)) => Some(RulePeer::SecurityGroup(group)),
            (None, None) => None,
        };
        Self {
            peer,
            direction: rule.direction,
            protocol: rule.protocol,
            port_range: rule.port_range,
        }
    }
}

/// A normalized finding component.
///
/// Variant order is extraction precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    NetworkInterface(ResourceRef),
    InternetGateway(ResourceRef),
    Vpc(ResourceRef),
    SecurityGroup(ResourceRef),
    SecurityGroupRule(SecurityGroupRule),
    Subnet(ResourceRef),
    Attachment(ResourceRef),
}

impl Component {
    pub fn kind(&self) -> &'static str {
        match self {
            Component::NetworkInterface(_) => NETWORK_INTERFACE_MARKER,
            Component::InternetGateway(_) => INTERNET_GATEWAY_MARKER,
            Component::Vpc(_) => VPC_MARKER,
            Component::SecurityGroup(_) => SECURITY_GROUP_MARKER,
            Component::SecurityGroupRule(_) => "security-group-rule",
            Component::Subnet(_) => SUBNET_MARKER,
            Component::Attachment(_) => "attachment",
        }
    }
}

impl ComponentEntry {
    /// Split this entry into typed components, in precedence order.
    ///
    /// Shape keys whose ARN does not name the expected resource type are
    /// dropped, as is an entry with no recognizable keys.
    pub fn into_components(self) -> Vec<Component> {
        let mut components = Vec::new();

        if let Some(ref resource) = self.component {
            if resource.arn_contains(NETWORK_INTERFACE_MARKER) {
                components.push(Component::NetworkInterface(resource.clone()));
            }
            if resource.arn_contains(INTERNET_GATEWAY_MARKER) {
                components.push(Component::InternetGateway(resource.clone()));
            }
        }

        if let Some(vpc) = self.vpc.filter(|v| v.arn_contains(VPC_MARKER)) {
            components.push(Component::Vpc(vpc));
        }

        if let Some(resource) = self
            .component
            .filter(|c| c.arn_contains(SECURITY_GROUP_MARKER))
        {
            components.push(Component::SecurityGroup(resource));
        }

        if let Some(mut rule) = self.security_group_rule {
            if rule.port_range.is_none() {
                rule.port_range = self.port_range;
            }
            components.push(Component::SecurityGroupRule(rule.into()));
        }

        if let Some(subnet) = self.subnet.filter(|s| s.arn_contains(SUBNET_MARKER)) {
            components.push(Component::Subnet(subnet));
        }

        if let Some(target) = self
            .attached_to
            .filter(|t| t.arn_contains(INSTANCE_MARKER))
        {
            components.push(Component::Attachment(target));
        }

        components
    }
}

/// A finding exactly as it appears in the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawFinding {
    pub finding_id: String,
    pub finding_components: Vec<ComponentEntry>,
}

/// A finding with its components normalized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFinding")]
pub struct Finding {
    pub id: String,
    pub components: Vec<Component>,
}

impl From<RawFinding> for Finding {
    fn from(raw: RawFinding) -> Self {
        Self {
            id: raw.finding_id,
            components: raw
                .finding_components
                .into_iter()
                .flat_map(ComponentEntry::into_components)
                .collect(),
        }
    }
}
