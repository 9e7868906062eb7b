//! Route 53 integration tests.

#[cfg(test)]
mod tests {
    use ruststack_route53::{
        Change, ChangeAction, ChangeBatch, ChangeResourceRecordSetsInput, CreateHostedZoneInput,
        DeleteHostedZoneInput, GetChangeInput, GetHostedZoneInput, ListResourceRecordSetsInput,
        ResourceRecordSet, Route53ErrorCode,
    };

    use crate::{route53_client, unique_name};

    #[test]
    #[ignore = "requires running server"]
    fn test_should_create_and_delete_hosted_zone() {
        let client = route53_client();
        let name = format!("{}.example.com", unique_name("zone"));

        let created = client
            .create_hosted_zone_async(CreateHostedZoneInput {
                name: name.clone(),
                ..Default::default()
            })
            .get()
            .expect("create zone should succeed");
        assert!(created.hosted_zone.name.starts_with(&name));

        let fetched = client
            .get_hosted_zone_async(GetHostedZoneInput {
                id: created.hosted_zone.id.clone(),
                ..Default::default()
            })
            .get()
            .expect("get zone should succeed");
        assert_eq!(fetched.hosted_zone.id, created.hosted_zone.id);

        client
            .delete_hosted_zone_async(DeleteHostedZoneInput {
                id: created.hosted_zone.id,
                ..Default::default()
            })
            .get()
            .expect("delete zone should succeed");
        client.shutdown();
    }

    #[test]
    #[ignore = "requires running server"]
    fn test_should_upsert_record_set_and_list_it() {
        let client = route53_client();
        let name = format!("{}.example.com", unique_name("rrset"));
        let zone = client
            .create_hosted_zone_async(CreateHostedZoneInput {
                name: name.clone(),
                ..Default::default()
            })
            .get()
            .expect("create zone should succeed")
            .hosted_zone;

        let record = format!("www.{name}.");
        let changed = client
            .change_resource_record_sets_async(ChangeResourceRecordSetsInput {
                hosted_zone_id: zone.id.clone(),
                change_batch: ChangeBatch {
                    comment: None,
                    changes: vec![Change::new(
                        ChangeAction::Upsert,
                        ResourceRecordSet::new(record.clone(), "A", 300, ["192.0.2.10"]),
                    )],
                },
                ..Default::default()
            })
            .get()
            .expect("change should succeed");

        client
            .get_change_async(GetChangeInput {
                id: changed.change_info.id,
                ..Default::default()
            })
            .get()
            .expect("get change should succeed");

        let listed = client
            .list_resource_record_sets_async(ListResourceRecordSetsInput {
                hosted_zone_id: zone.id.clone(),
                ..Default::default()
            })
            .get()
            .expect("list should succeed");
        assert!(
            listed
                .resource_record_sets
                .iter()
                .any(|r| r.name == record && r.record_type == "A")
        );

        client
            .change_resource_record_sets_async(ChangeResourceRecordSetsInput {
                hosted_zone_id: zone.id.clone(),
                change_batch: ChangeBatch {
                    comment: None,
                    changes: vec![Change::new(
                        ChangeAction::Delete,
                        ResourceRecordSet::new(record, "A", 300, ["192.0.2.10"]),
                    )],
                },
                ..Default::default()
            })
            .get()
            .expect("delete record should succeed");
        client
            .delete_hosted_zone_async(DeleteHostedZoneInput {
                id: zone.id,
                ..Default::default()
            })
            .get()
            .expect("delete zone should succeed");
    }

    #[test]
    #[ignore = "requires running server"]
    fn test_should_report_no_such_hosted_zone() {
        let client = route53_client();
        let err = client
            .get_hosted_zone_async(GetHostedZoneInput {
                id: "/hostedzone/ZNOTAREALZONE".to_owned(),
                ..Default::default()
            })
            .get()
            .expect_err("unknown zone should fail");
        assert_eq!(
            err.service_code::<Route53ErrorCode>(),
            Some(Route53ErrorCode::NoSuchHostedZone)
        );
    }
}
