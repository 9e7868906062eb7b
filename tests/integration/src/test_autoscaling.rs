//! Auto Scaling integration tests.

#[cfg(test)]
mod tests {
    use ruststack_autoscaling::{
        AutoScalingErrorCode, CreateAutoScalingGroupInput, CreateLaunchConfigurationInput,
        DeleteAutoScalingGroupInput, DeleteLaunchConfigurationInput,
        DescribeAutoScalingGroupsInput, DescribeLaunchConfigurationsInput, SetDesiredCapacityInput,
    };

    use crate::{autoscaling_client, unique_name};

    #[test]
    #[ignore = "requires running server"]
    fn test_should_manage_group_lifecycle() {
        let client = autoscaling_client();
        let config_name = unique_name("lc");
        let group_name = unique_name("asg");

        client
            .create_launch_configuration_async(CreateLaunchConfigurationInput {
                launch_configuration_name: config_name.clone(),
                image_id: Some("ami-12345678".to_owned()),
                instance_type: Some("t3.micro".to_owned()),
                ..Default::default()
            })
            .get()
            .expect("create launch configuration should succeed");

        let configs = client
            .describe_launch_configurations_async(DescribeLaunchConfigurationsInput {
                launch_configuration_names: vec![config_name.clone()],
                ..Default::default()
            })
            .get()
            .expect("describe launch configurations should succeed");
        assert_eq!(configs.launch_configurations.len(), 1);

        client
            .create_auto_scaling_group_async(CreateAutoScalingGroupInput {
                auto_scaling_group_name: group_name.clone(),
                launch_configuration_name: Some(config_name.clone()),
                min_size: 0,
                max_size: 2,
                availability_zones: vec!["us-east-1a".to_owned()],
                ..Default::default()
            })
            .get()
            .expect("create group should succeed");

        client
            .set_desired_capacity_async(SetDesiredCapacityInput {
                auto_scaling_group_name: group_name.clone(),
                desired_capacity: 1,
                ..Default::default()
            })
            .get()
            .expect("set desired capacity should succeed");

        let groups = client
            .describe_auto_scaling_groups_async(DescribeAutoScalingGroupsInput {
                auto_scaling_group_names: vec![group_name.clone()],
                ..Default::default()
            })
            .get()
            .expect("describe groups should succeed");
        assert_eq!(groups.auto_scaling_groups.len(), 1);
        assert_eq!(groups.auto_scaling_groups[0].desired_capacity, 1);

        client
            .delete_auto_scaling_group_async(DeleteAutoScalingGroupInput {
                auto_scaling_group_name: group_name,
                force_delete: Some(true),
                ..Default::default()
            })
            .get()
            .expect("delete group should succeed");
        client
            .delete_launch_configuration_async(DeleteLaunchConfigurationInput {
                launch_configuration_name: config_name,
                ..Default::default()
            })
            .get()
            .expect("delete launch configuration should succeed");
        client.shutdown();
    }

    #[test]
    #[ignore = "requires running server"]
    fn test_should_reject_duplicate_launch_configuration() {
        let client = autoscaling_client();
        let input = CreateLaunchConfigurationInput {
            launch_configuration_name: unique_name("dup-lc"),
            image_id: Some("ami-12345678".to_owned()),
            instance_type: Some("t3.micro".to_owned()),
            ..Default::default()
        };
        client
            .create_launch_configuration_async(input.clone())
            .get()
            .expect("first create should succeed");
        let err = client
            .create_launch_configuration_async(input.clone())
            .get()
            .expect_err("second create should fail");
        assert_eq!(
            err.service_code::<AutoScalingErrorCode>(),
            Some(AutoScalingErrorCode::AlreadyExists)
        );

        client
            .delete_launch_configuration_async(DeleteLaunchConfigurationInput {
                launch_configuration_name: input.launch_configuration_name,
                ..Default::default()
            })
            .get()
            .expect("delete should succeed");
    }
}
