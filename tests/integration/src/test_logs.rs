//! CloudWatch Logs integration tests.

#[cfg(test)]
mod tests {
    use ruststack_logs::{
        CreateLogGroupInput, CreateLogStreamInput, DeleteLogGroupInput, DescribeLogGroupsInput,
        GetLogEventsInput, InputLogEvent, LogsErrorCode, PutLogEventsInput,
        PutRetentionPolicyInput,
    };

    use crate::{logs_client, unique_name};

    fn now_millis() -> i64 {
        let elapsed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock after epoch");
        i64::try_from(elapsed.as_millis()).expect("millis fit in i64")
    }

    #[test]
    #[ignore = "requires running server"]
    fn test_should_put_and_get_log_events() {
        let client = logs_client();
        let group = unique_name("group");
        let stream = "stream-1".to_owned();

        client
            .create_log_group_async(CreateLogGroupInput {
                log_group_name: group.clone(),
                ..Default::default()
            })
            .get()
            .expect("create group should succeed");
        client
            .create_log_stream_async(CreateLogStreamInput {
                log_group_name: group.clone(),
                log_stream_name: stream.clone(),
                ..Default::default()
            })
            .get()
            .expect("create stream should succeed");

        let now = now_millis();
        client
            .put_log_events_async(PutLogEventsInput {
                log_group_name: group.clone(),
                log_stream_name: stream.clone(),
                log_events: vec![
                    InputLogEvent::new(now, "first"),
                    InputLogEvent::new(now + 1, "second"),
                ],
                ..Default::default()
            })
            .get()
            .expect("put events should succeed");

        let events = client
            .get_log_events_async(GetLogEventsInput {
                log_group_name: group.clone(),
                log_stream_name: stream,
                start_from_head: Some(true),
                ..Default::default()
            })
            .get()
            .expect("get events should succeed");
        let messages: Vec<_> = events
            .events
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect();
        assert_eq!(messages, ["first", "second"]);

        client
            .delete_log_group_async(DeleteLogGroupInput {
                log_group_name: group,
                ..Default::default()
            })
            .get()
            .expect("delete group should succeed");
        client.shutdown();
    }

    #[test]
    #[ignore = "requires running server"]
    fn test_should_set_retention_policy() {
        let client = logs_client();
        let group = unique_name("retention");
        client
            .create_log_group_async(CreateLogGroupInput {
                log_group_name: group.clone(),
                ..Default::default()
            })
            .get()
            .expect("create group should succeed");
        client
            .put_retention_policy_async(PutRetentionPolicyInput {
                log_group_name: group.clone(),
                retention_in_days: 7,
                ..Default::default()
            })
            .get()
            .expect("put retention should succeed");

        let described = client
            .describe_log_groups_async(DescribeLogGroupsInput {
                log_group_name_prefix: Some(group.clone()),
                ..Default::default()
            })
            .get()
            .expect("describe should succeed");
        assert_eq!(described.log_groups.len(), 1);
        assert_eq!(described.log_groups[0].retention_in_days, Some(7));

        client
            .delete_log_group_async(DeleteLogGroupInput {
                log_group_name: group,
                ..Default::default()
            })
            .get()
            .expect("delete group should succeed");
    }

    #[test]
    #[ignore = "requires running server"]
    fn test_should_report_duplicate_log_group() {
        let client = logs_client();
        let group = unique_name("dup");
        let input = CreateLogGroupInput {
            log_group_name: group.clone(),
            ..Default::default()
        };
        client
            .create_log_group_async(input.clone())
            .get()
            .expect("first create should succeed");
        let err = client
            .create_log_group_async(input)
            .get()
            .expect_err("second create should fail");
        assert_eq!(
            err.service_code::<LogsErrorCode>(),
            Some(LogsErrorCode::ResourceAlreadyExistsException)
        );

        client
            .delete_log_group_async(DeleteLogGroupInput {
                log_group_name: group,
                ..Default::default()
            })
            .get()
            .expect("delete group should succeed");
    }
}
