#[cfg(test)]
pub mod fixtures {
    use crate::types::{ComponentEntry, Finding, PortRange, RawFinding, ResourceRef, RuleRef};

    pub const REGION: &str = "us-east-1";
    pub const ACCOUNT: &str = "111111111111";

    /// Results file with six data rows, the last repeating the header.
    pub const SAMPLE_RESULTS: &str = "\
STATUS;SEVERITY;SERVICE_NAME;ACCOUNT_ID;CHECK_ID
FAIL;high;s3;111111111111;s3_bucket_public_access
FAIL;high;s3;222222222222;s3_bucket_default_encryption
FAIL;low;iam;111111111111;iam_root_mfa_enabled
PASS;medium;ec2;111111111111;ec2_ebs_volume_encryption
INFO;low;iam;333333333333;iam_support_role_created
STATUS;SEVERITY;SERVICE_NAME;ACCOUNT_ID;CHECK_ID
";

    fn resource(id: &str, kind: &str, region: &str, account: &str) -> ResourceRef {
        ResourceRef {
            id: Some(id.to_string()),
            arn: Some(format!("arn:aws:ec2:{region}:{account}:{kind}/{id}")),
            name: None,
        }
    }

    pub fn gateway_entry(region: &str, account: &str) -> ComponentEntry {
        ComponentEntry {
            component: Some(resource(
                &format!("igw-{region}"),
                "internet-gateway",
                region,
                account,
            )),
            ..Default::default()
        }
    }

    pub fn interface_entry(id: &str) -> ComponentEntry {
        ComponentEntry {
            component: Some(resource(id, "network-interface", REGION, ACCOUNT)),
            ..Default::default()
        }
    }

    pub fn security_group_entry(id: &str) -> ComponentEntry {
        ComponentEntry {
            component: Some(resource(id, "security-group", REGION, ACCOUNT)),
            ..Default::default()
        }
    }

    pub fn vpc_entry(id: &str) -> ComponentEntry {
        ComponentEntry {
            vpc: Some(resource(id, "vpc", REGION, ACCOUNT)),
            ..Default::default()
        }
    }

    pub fn subnet_entry(id: &str) -> ComponentEntry {
        ComponentEntry {
            subnet: Some(resource(id, "subnet", REGION, ACCOUNT)),
            ..Default::default()
        }
    }

    pub fn attachment_entry(id: &str, name: &str) -> ComponentEntry {
        ComponentEntry {
            attached_to: Some(ResourceRef {
                name: Some(name.to_string()),
                ..resource(id, "instance", REGION, ACCOUNT)
            }),
            ..Default::default()
        }
    }

    pub fn rule_entry(
        cidr: Option<&str>,
        security_group_id: Option<&str>,
        direction: &str,
        protocol: &str,
        ports: Option<(i64, i64)>,
    ) -> ComponentEntry {
        ComponentEntry {
            security_group_rule: Some(RuleRef {
                cidr: cidr.map(str::to_string),
                security_group_id: security_group_id.map(str::to_string),
                direction: Some(direction.to_string()),
                protocol: Some(protocol.to_string()),
                port_range: ports.map(|(from, to)| PortRange { from, to }),
            }),
            ..Default::default()
        }
    }

    fn raw_finding(id: &str, components: Vec<ComponentEntry>) -> RawFinding {
        RawFinding {
            finding_id: id.to_string(),
            finding_components: components,
        }
    }

    pub fn finding(id: &str, components: Vec<ComponentEntry>) -> Finding {
        raw_finding(id, components).into()
    }

    /// An analyzer export document as JSON text.
    pub fn findings_document(findings: &[(&str, Vec<ComponentEntry>)]) -> String {
        let findings: Vec<RawFinding> = findings
            .iter()
            .map(|(id, components)| raw_finding(id, components.clone()))
            .collect();
        serde_json::json!({ "AnalysisFindings": findings }).to_string()
    }
}
