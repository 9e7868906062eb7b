//! Elastic Load Balancing integration tests.

#[cfg(test)]
mod tests {
    use ruststack_elb::{
        ConfigureHealthCheckInput, CreateLoadBalancerInput, DeleteLoadBalancerInput,
        DescribeLoadBalancersInput, ElbErrorCode, HealthCheck, Listener,
    };

    use crate::{elb_client, unique_name};

    #[test]
    #[ignore = "requires running server"]
    fn test_should_create_describe_and_delete_load_balancer() {
        let client = elb_client();
        let name = unique_name("lb");

        let created = client
            .create_load_balancer_async(CreateLoadBalancerInput {
                load_balancer_name: name.clone(),
                listeners: vec![Listener::new("HTTP", 80, 8080)],
                availability_zones: vec!["us-east-1a".to_owned()],
                ..Default::default()
            })
            .get()
            .expect("create should succeed");
        assert!(created.dns_name.is_some());

        client
            .configure_health_check_async(ConfigureHealthCheckInput {
                load_balancer_name: name.clone(),
                health_check: HealthCheck {
                    target: "HTTP:8080/health".to_owned(),
                    interval: 30,
                    timeout: 5,
                    unhealthy_threshold: 2,
                    healthy_threshold: 3,
                },
                ..Default::default()
            })
            .get()
            .expect("configure health check should succeed");

        let described = client
            .describe_load_balancers_async(DescribeLoadBalancersInput {
                load_balancer_names: vec![name.clone()],
                ..Default::default()
            })
            .get()
            .expect("describe should succeed");
        assert_eq!(described.load_balancer_descriptions.len(), 1);
        assert_eq!(described.load_balancer_descriptions[0].load_balancer_name, name);

        client
            .delete_load_balancer_async(DeleteLoadBalancerInput {
                load_balancer_name: name,
                ..Default::default()
            })
            .get()
            .expect("delete should succeed");
        client.shutdown();
    }

    #[test]
    #[ignore = "requires running server"]
    fn test_should_report_missing_load_balancer() {
        let client = elb_client();
        let err = client
            .describe_load_balancers_async(DescribeLoadBalancersInput {
                load_balancer_names: vec![unique_name("missing")],
                ..Default::default()
            })
            .get()
            .expect_err("unknown load balancer should fail");
        assert_eq!(
            err.service_code::<ElbErrorCode>(),
            Some(ElbErrorCode::LoadBalancerNotFound)
        );
    }
}
