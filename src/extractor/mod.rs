//! Finding extraction.
//!
//! Turns each normalized [`Finding`] into one [`ExtractedRecord`] with a single
//! pass over its components. Precedence is the [`Component`] variant order;
//! when the same kind appears more than once the last one wins.

mod record;

pub use record::{ExtractedRecord, FIELDS, NOT_APPLICABLE};

use crate::error::{PostureError, Result};
use crate::suppression::ExclusionSet;
use crate::types::{Component, Finding, ResourceRef, SecurityGroupRule};
use record::assign;
use tracing::{debug, info};

/// Protocol value meaning "every protocol", which also implies every port.
pub const ALL_PROTOCOLS: &str = "all";

const REGION_SEGMENT: usize = 3;
const ACCOUNT_SEGMENT: usize = 4;

/// Outcome of extracting a batch of findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Records that survived the exclusion filter, in input order.
    pub records: Vec<ExtractedRecord>,
    /// Number of findings read.
    pub findings: usize,
    /// Number of records dropped by the exclusion filter.
    pub suppressed: usize,
}

/// Extract the flat record for one finding.
///
/// Every finding must reference an internet gateway: its ARN is the only
/// source of the account and region. A finding without one yields
/// [`PostureError::MissingComponent`].
pub fn extract(finding: &Finding) -> Result<ExtractedRecord> {
    let mut record = ExtractedRecord::default();
    let mut gateway: Option<&ResourceRef> = None;

    for component in &finding.components {
        match component {
            Component::NetworkInterface(eni) => {
                assign(&mut record.resource_id, eni.id.as_deref());
                assign(&mut record.resource_arn, eni.arn.as_deref());
            }
            Component::InternetGateway(igw) => gateway = Some(igw),
            Component::Vpc(vpc) => assign(&mut record.vpc_id, vpc.id.as_deref()),
            Component::SecurityGroup(group) => {
                assign(&mut record.secgroup_id, group.id.as_deref());
            }
            Component::SecurityGroupRule(rule) => apply_rule(&mut record, rule),
            Component::Subnet(subnet) => assign(&mut record.subnet_id, subnet.id.as_deref()),
            Component::Attachment(instance) => {
                assign(&mut record.instance_id, instance.id.as_deref());
                assign(&mut record.instance_arn, instance.arn.as_deref());
                assign(&mut record.instance_name, instance.name.as_deref());
            }
        }
    }

    let gateway = gateway.ok_or_else(|| PostureError::MissingComponent {
        finding_id: finding.id.clone(),
        component: "internet-gateway",
    })?;
    let (region, account) = region_and_account(&finding.id, gateway)?;
    record.region = region;
    record.account = account;

    Ok(record)
}

fn apply_rule(record: &mut ExtractedRecord, rule: &SecurityGroupRule) {
    if let Some(peer) = &rule.peer {
        record.sgrule_cidr = peer.as_str().to_string();
        assign(&mut record.sgrule_direction, rule.direction.as_deref());
        assign(&mut record.sgrule_protocol, rule.protocol.as_deref());
    }

    record.sgrule_portrange = match rule.port_range {
        Some(range) => range.to_string(),
        None if record.sgrule_protocol == ALL_PROTOCOLS => ALL_PROTOCOLS.to_string(),
        None => String::new(),
    };
}

/// `arn:partition:service:region:account:resource`
fn region_and_account(finding_id: &str, gateway: &ResourceRef) -> Result<(String, String)> {
    let invalid = || PostureError::InvalidArn {
        finding_id: finding_id.to_string(),
        arn: gateway.arn.clone().unwrap_or_default(),
    };

    let arn = gateway.arn.as_deref().ok_or_else(invalid)?;
    let segments: Vec<&str> = arn.split(':').collect();
    match (segments.get(REGION_SEGMENT), segments.get(ACCOUNT_SEGMENT)) {
        (Some(region), Some(account)) => Ok((region.to_string(), account.to_string())),
        _ => Err(invalid()),
    }
}

/// Extract every finding, then drop records matched by the exclusion set.
///
/// Extraction stops at the first malformed finding so no partial batch is
/// ever handed to a writer.
pub fn extract_all(findings: &[Finding], exclusions: &ExclusionSet) -> Result<Extraction> {
    let records = findings.iter().map(extract).collect::<Result<Vec<_>>>()?;
    let (records, suppressed) = exclusions.filter(records);

    for record in &records {
        debug!(resource = %record.resource_id, cidr = %record.sgrule_cidr, "Extracted finding");
    }
    info!(
        findings = findings.len(),
        kept = records.len(),
        suppressed,
        "Extraction complete"
    );

    Ok(Extraction {
        records,
        findings: findings.len(),
        suppressed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suppression::ExclusionEntry;
    use crate::test_utils::fixtures::{
        attachment_entry, finding, gateway_entry, interface_entry, rule_entry,
        security_group_entry, subnet_entry, vpc_entry,
    };
    use crate::types::{ComponentEntry, PortRange, ResourceRef, RuleRef};

    #[test]
    fn test_full_finding() {
        let f = finding(
            "f-1",
            vec![
                gateway_entry("us-east-1", "111111111111"),
                vpc_entry("vpc-1"),
                subnet_entry("subnet-1"),
                interface_entry("eni-1"),
                attachment_entry("i-1", "web-1"),
                security_group_entry("sg-1"),
                rule_entry(Some("0.0.0.0/0"), None, "ingress", "tcp", Some((443, 443))),
            ],
        );

        let record = extract(&f).unwrap();
        assert_eq!(record.account, "111111111111");
        assert_eq!(record.region, "us-east-1");
        assert_eq!(record.vpc_id, "vpc-1");
        assert_eq!(record.subnet_id, "subnet-1");
        assert_eq!(record.instance_id, "i-1");
        assert_eq!(
            record.instance_arn,
            "arn:aws:ec2:us-east-1:111111111111:instance/i-1"
        );
        assert_eq!(record.instance_name, "web-1");
        assert_eq!(record.resource_id, "eni-1");
        assert_eq!(
            record.resource_arn,
            "arn:aws:ec2:us-east-1:111111111111:network-interface/eni-1"
        );
        assert_eq!(record.secgroup_id, "sg-1");
        assert_eq!(record.sgrule_direction, "ingress");
        assert_eq!(record.sgrule_cidr, "0.0.0.0/0");
        assert_eq!(record.sgrule_protocol, "tcp");
        assert_eq!(record.sgrule_portrange, "443 to 443");
    }

    #[test]
    fn test_rule_only_finding_keeps_sentinels() {
        let f = finding(
            "f-ssh",
            vec![
                gateway_entry("us-east-1", "111111111111"),
                rule_entry(Some("0.0.0.0/0"), None, "ingress", "tcp", Some((22, 22))),
            ],
        );

        let record = extract(&f).unwrap();
        assert_eq!(record.sgrule_cidr, "0.0.0.0/0");
        assert_eq!(record.sgrule_portrange, "22 to 22");
        assert_eq!(record.instance_id, NOT_APPLICABLE);
        assert_eq!(record.subnet_id, NOT_APPLICABLE);
        assert_eq!(record.vpc_id, NOT_APPLICABLE);
        assert_eq!(record.resource_id, NOT_APPLICABLE);
    }

    #[test]
    fn test_account_and_region_from_gateway_arn() {
        let f = finding("f-1", vec![gateway_entry("ap-southeast-2", "123456789012")]);
        let record = extract(&f).unwrap();
        assert_eq!(record.region, "ap-southeast-2");
        assert_eq!(record.account, "123456789012");
    }

    #[test]
    fn test_last_gateway_wins() {
        let f = finding(
            "f-1",
            vec![
                gateway_entry("us-east-1", "111111111111"),
                gateway_entry("eu-west-1", "222222222222"),
            ],
        );
        let record = extract(&f).unwrap();
        assert_eq!(record.region, "eu-west-1");
        assert_eq!(record.account, "222222222222");
    }

    #[test]
    fn test_missing_gateway_is_data_shape_error() {
        let f = finding("f-2", vec![interface_entry("eni-1")]);
        let err = extract(&f).unwrap_err();
        assert!(matches!(
            err,
            PostureError::MissingComponent { ref finding_id, component: "internet-gateway" }
                if finding_id == "f-2"
        ));
        assert!(err.is_data_shape());
    }

    #[test]
    fn test_short_gateway_arn_is_invalid() {
        let f = Finding {
            id: "f-3".to_string(),
            components: vec![Component::InternetGateway(ResourceRef {
                id: Some("igw-1".to_string()),
                arn: Some("arn:aws:internet-gateway".to_string()),
                name: None,
            })],
        };
        let err = extract(&f).unwrap_err();
        assert!(matches!(err, PostureError::InvalidArn { .. }));
    }

    #[test]
    fn test_group_reference_used_when_no_cidr() {
        let f = finding(
            "f-1",
            vec![
                gateway_entry("us-east-1", "111111111111"),
                rule_entry(None, Some("sg-peer"), "egress", "udp", Some((53, 53))),
            ],
        );
        let record = extract(&f).unwrap();
        assert_eq!(record.sgrule_cidr, "sg-peer");
        assert_eq!(record.sgrule_direction, "egress");
        assert_eq!(record.sgrule_protocol, "udp");
    }

    #[test]
    fn test_all_protocols_implies_all_ports() {
        let f = finding(
            "f-1",
            vec![
                gateway_entry("us-east-1", "111111111111"),
                rule_entry(Some("10.0.0.0/8"), None, "ingress", "all", None),
            ],
        );
        let record = extract(&f).unwrap();
        assert_eq!(record.sgrule_portrange, "all");
    }

    #[test]
    fn test_rule_without_ports_or_all_protocol_is_empty_range() {
        let f = finding(
            "f-1",
            vec![
                gateway_entry("us-east-1", "111111111111"),
                rule_entry(Some("10.0.0.0/8"), None, "ingress", "icmp", None),
            ],
        );
        let record = extract(&f).unwrap();
        assert_eq!(record.sgrule_portrange, "");
    }

    #[test]
    fn test_rule_without_peer_keeps_direction_and_protocol_unset() {
        let rule = ComponentEntry {
            security_group_rule: Some(RuleRef {
                direction: Some("ingress".to_string()),
                protocol: Some("tcp".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let f = finding("f-1", vec![gateway_entry("us-east-1", "111111111111"), rule]);
        let record = extract(&f).unwrap();
        assert_eq!(record.sgrule_cidr, NOT_APPLICABLE);
        assert_eq!(record.sgrule_direction, NOT_APPLICABLE);
        assert_eq!(record.sgrule_protocol, NOT_APPLICABLE);
        assert_eq!(record.sgrule_portrange, "");
    }

    #[test]
    fn test_later_component_overwrites_earlier() {
        let f = finding(
            "f-1",
            vec![
                gateway_entry("us-east-1", "111111111111"),
                interface_entry("eni-1"),
                interface_entry("eni-2"),
            ],
        );
        assert_eq!(extract(&f).unwrap().resource_id, "eni-2");
    }

    #[test]
    fn test_missing_id_does_not_revert_field() {
        let f = Finding {
            id: "f-1".to_string(),
            components: vec![
                Component::Vpc(ResourceRef {
                    id: Some("vpc-1".to_string()),
                    arn: Some("arn:aws:ec2:us-east-1:1:vpc/vpc-1".to_string()),
                    name: None,
                }),
                Component::Vpc(ResourceRef {
                    id: None,
                    arn: Some("arn:aws:ec2:us-east-1:1:vpc/vpc-2".to_string()),
                    name: None,
                }),
                Component::InternetGateway(ResourceRef {
                    id: Some("igw-1".to_string()),
                    arn: Some("arn:aws:ec2:us-east-1:1:internet-gateway/igw-1".to_string()),
                    name: None,
                }),
            ],
        };
        assert_eq!(extract(&f).unwrap().vpc_id, "vpc-1");
    }

    #[test]
    fn test_port_range_string() {
        let range = PortRange { from: 0, to: 65535 };
        let rule = SecurityGroupRule {
            peer: None,
            direction: None,
            protocol: None,
            port_range: Some(range),
        };
        let mut record = ExtractedRecord::default();
        apply_rule(&mut record, &rule);
        assert_eq!(record.sgrule_portrange, "0 to 65535");
    }

    #[test]
    fn test_extract_all_suppresses_exact_match() {
        let findings = vec![
            finding(
                "f-1",
                vec![
                    gateway_entry("us-east-1", "111111111111"),
                    interface_entry("eni-1"),
                    security_group_entry("sg-1"),
                    rule_entry(Some("10.0.0.0/8"), None, "ingress", "all", None),
                ],
            ),
            finding(
                "f-2",
                vec![
                    gateway_entry("us-east-1", "111111111111"),
                    interface_entry("eni-2"),
                    security_group_entry("sg-1"),
                    rule_entry(Some("10.0.0.0/8"), None, "ingress", "all", None),
                ],
            ),
        ];

        let unfiltered = extract_all(&findings, &ExclusionSet::new()).unwrap();
        let exclusions: ExclusionSet = [ExclusionEntry::new("eni-1", "sg-1", "10.0.0.0/8", "all")]
            .into_iter()
            .collect();
        let filtered = extract_all(&findings, &exclusions).unwrap();

        assert_eq!(unfiltered.records.len(), 2);
        assert_eq!(filtered.records.len(), unfiltered.records.len() - 1);
        assert_eq!(filtered.suppressed, 1);
        assert_eq!(filtered.findings, 2);
        assert_eq!(filtered.records[0].resource_id, "eni-2");
    }

    #[test]
    fn test_extract_all_fails_on_first_malformed_finding() {
        let findings = vec![
            finding("f-1", vec![gateway_entry("us-east-1", "111111111111")]),
            finding("f-2", vec![interface_entry("eni-1")]),
        ];
        let err = extract_all(&findings, &ExclusionSet::new()).unwrap_err();
        assert!(err.to_string().contains("f-2"));
    }
}
