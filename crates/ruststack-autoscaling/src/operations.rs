//! Auto Scaling operation enum.

use std::fmt;

/// All supported Auto Scaling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoScalingOperation {
    // Groups
    /// Create an Auto Scaling group.
    CreateAutoScalingGroup,
    /// Describe Auto Scaling groups.
    DescribeAutoScalingGroups,
    /// Update the settings of an Auto Scaling group.
    UpdateAutoScalingGroup,
    /// Delete an Auto Scaling group.
    DeleteAutoScalingGroup,
    /// Set the desired capacity of a group.
    SetDesiredCapacity,
    /// Describe the scaling activities of a group.
    DescribeScalingActivities,

    // Launch configurations
    /// Create a launch configuration.
    CreateLaunchConfiguration,
    /// Describe launch configurations.
    DescribeLaunchConfigurations,
    /// Delete a launch configuration.
    DeleteLaunchConfiguration,
}

impl AutoScalingOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::CreateAutoScalingGroup,
        Self::DescribeAutoScalingGroups,
        Self::UpdateAutoScalingGroup,
        Self::DeleteAutoScalingGroup,
        Self::SetDesiredCapacity,
        Self::DescribeScalingActivities,
        Self::CreateLaunchConfiguration,
        Self::DescribeLaunchConfigurations,
        Self::DeleteLaunchConfiguration,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateAutoScalingGroup => "CreateAutoScalingGroup",
            Self::DescribeAutoScalingGroups => "DescribeAutoScalingGroups",
            Self::UpdateAutoScalingGroup => "UpdateAutoScalingGroup",
            Self::DeleteAutoScalingGroup => "DeleteAutoScalingGroup",
            Self::SetDesiredCapacity => "SetDesiredCapacity",
            Self::DescribeScalingActivities => "DescribeScalingActivities",
            Self::CreateLaunchConfiguration => "CreateLaunchConfiguration",
            Self::DescribeLaunchConfigurations => "DescribeLaunchConfigurations",
            Self::DeleteLaunchConfiguration => "DeleteLaunchConfiguration",
        }
    }

    /// Parse an operation name string into an `AutoScalingOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for AutoScalingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_operation_names() {
        for op in AutoScalingOperation::ALL {
            assert_eq!(AutoScalingOperation::from_name(op.as_str()), Some(op));
        }
        assert_eq!(AutoScalingOperation::from_name("Nope"), None);
    }
}
