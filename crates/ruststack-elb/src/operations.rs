//! Elastic Load Balancing operation enum.

use std::fmt;

/// All supported Elastic Load Balancing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElbOperation {
    // Load balancers
    /// Create a classic load balancer.
    CreateLoadBalancer,
    /// Delete a load balancer.
    DeleteLoadBalancer,
    /// Describe load balancers.
    DescribeLoadBalancers,

    // Instances
    /// Add instances to a load balancer.
    RegisterInstancesWithLoadBalancer,
    /// Remove instances from a load balancer.
    DeregisterInstancesFromLoadBalancer,
    /// Describe the health of registered instances.
    DescribeInstanceHealth,

    // Health checks
    /// Set the health check of a load balancer.
    ConfigureHealthCheck,
}

impl ElbOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::CreateLoadBalancer,
        Self::DeleteLoadBalancer,
        Self::DescribeLoadBalancers,
        Self::RegisterInstancesWithLoadBalancer,
        Self::DeregisterInstancesFromLoadBalancer,
        Self::DescribeInstanceHealth,
        Self::ConfigureHealthCheck,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateLoadBalancer => "CreateLoadBalancer",
            Self::DeleteLoadBalancer => "DeleteLoadBalancer",
            Self::DescribeLoadBalancers => "DescribeLoadBalancers",
            Self::RegisterInstancesWithLoadBalancer => "RegisterInstancesWithLoadBalancer",
            Self::DeregisterInstancesFromLoadBalancer => "DeregisterInstancesFromLoadBalancer",
            Self::DescribeInstanceHealth => "DescribeInstanceHealth",
            Self::ConfigureHealthCheck => "ConfigureHealthCheck",
        }
    }

    /// Parse an operation name string into an `ElbOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for ElbOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
