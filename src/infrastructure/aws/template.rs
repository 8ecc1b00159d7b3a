//! Environment CloudFormation template

const ENVIRONMENT_TEMPLATE: &str = include_str!("templates/environment.yml");

/// File name the template is written under on dry run.
pub fn template_file_name(stack_name: &str) -> String {
    format!("{stack_name}-template.yml")
}

pub fn environment_template() -> &'static str {
    ENVIRONMENT_TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_declares_vpc_cluster_and_outputs() {
        let body = environment_template();
        assert!(body.starts_with("AWSTemplateFormatVersion"));
        for needle in ["AWS::EC2::VPC", "AWS::ECS::Cluster", "Outputs:", "VpcId:", "ClusterName:"] {
            assert!(body.contains(needle), "template missing {needle}");
        }
    }

    #[test]
    fn file_name_follows_stack_name() {
        assert_eq!(
            template_file_name("oam-ecs-environment"),
            "oam-ecs-environment-template.yml"
        );
    }
}
