use crate::{
    CloudflareError, DisplayOptions, DnsContent, DnsRecordFilter, DnsRecordImportRequest,
    DnsRecordOperations, DnsRecordType, ModifiedDnsRecord, NewDnsRecord, OrderType,
    tests::support::{
        RECORD_ID, ZONE_ID, ZONE_NAME, a_record_json, failure_envelope, page_envelope,
        records_path, success_envelope, test_client,
    },
};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::{io::Write, net::Ipv4Addr};
use tempfile::NamedTempFile;
use wiremock::{
    Mock, MockServer, Request, ResponseTemplate,
    matchers::{body_json, body_string_contains, header, method, path, query_param},
};

const ZONE_FILE: &str = "www.tothnet.hu. 300 IN A 127.0.0.1\n";

#[tokio::test]
async fn test_add_record() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path(records_path("")))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "name": ZONE_NAME,
            "type": "A",
            "content": "127.0.0.1",
            "ttl": 120,
            "proxied": false
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(a_record_json(RECORD_ID, "127.0.0.1"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut record = NewDnsRecord::new(
        ZONE_NAME,
        DnsContent::A {
            content: Ipv4Addr::LOCALHOST,
        },
    );
    record.ttl = Some(120);
    record.proxied = Some(false);

    let response = client.zones().dns_records().add(ZONE_ID, &record).await.unwrap();
    assert!(response.success);
    let created = response.result.unwrap();
    assert_eq!(created.id, RECORD_ID);
    assert_eq!(created.record_type(), DnsRecordType::A);
    assert_eq!(created.tags, vec!["owner:dns-team".to_string()]);
}

#[tokio::test]
async fn test_add_record_rejected_by_provider() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path(records_path("")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(failure_envelope(81057, "Record already exists.")),
        )
        .mount(&mock_server)
        .await;

    let record = NewDnsRecord::new(
        ZONE_NAME,
        DnsContent::TXT {
            content: "v=spf1 -all".to_string(),
        },
    );

    let response = client.zones().dns_records().add(ZONE_ID, &record).await.unwrap();
    assert!(!response.success);
    assert!(response.result.is_none());
    assert_eq!(response.errors[0].message, "Record already exists.");

    let error = response.into_result().unwrap_err();
    assert!(matches!(error, CloudflareError::Rejected { .. }));
}

#[tokio::test]
async fn test_get_records_with_filter_and_display() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path(records_path("")))
        .and(query_param("page", "2"))
        .and(query_param("type", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(
            json!([
                a_record_json("second", "127.0.0.2"),
                a_record_json("first", "127.0.0.1")
            ]),
            2,
            20,
            22,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter = DnsRecordFilter::default()
        .name(ZONE_NAME)
        .content("127.0.0.1")
        .record_type(DnsRecordType::A)
        .match_all(true);
    let display = DisplayOptions::paged(2, 20)
        .unwrap()
        .order(OrderType::Desc)
        .order_by("type");

    let response = client
        .zones()
        .dns_records()
        .get(ZONE_ID, Some(&filter), Some(&display))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let query: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let expected: Vec<(String, String)> = [
        ("page", "2"),
        ("per_page", "20"),
        ("order", "desc"),
        ("order_by", "type"),
        ("name", ZONE_NAME),
        ("content", "127.0.0.1"),
        ("type", "A"),
        ("match", "all"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(query, expected);

    let info = response.result_info.unwrap();
    assert_eq!(info.page, 2);
    assert_eq!(info.total_count, 22);
    assert!(!info.has_next_page());

    let ids: Vec<String> = response.result.unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["second".to_string(), "first".to_string()]);
}

#[tokio::test]
async fn test_get_records_keeps_unlisted_record_types() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    let mut openpgp = a_record_json("pgp", "mQINBFit");
    openpgp["type"] = json!("OPENPGPKEY");

    Mock::given(method("GET"))
        .and(path(records_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(
            json!([a_record_json(RECORD_ID, "127.0.0.1"), openpgp]),
            1,
            20,
            2,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = client
        .zones()
        .dns_records()
        .get(ZONE_ID, None, None)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[1].record_type(),
        DnsRecordType::Unknown("OPENPGPKEY".to_string())
    );
    assert_eq!(records[1].content.content().as_deref(), Some("mQINBFit"));
}

#[tokio::test]
async fn test_get_records_without_options_sends_no_query() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path(records_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(json!([]), 1, 20, 0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .zones()
        .dns_records()
        .get(ZONE_ID, None, None)
        .await
        .unwrap();
    assert_eq!(response.result, Some(Vec::new()));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_get_record_details() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path(records_path(RECORD_ID)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(a_record_json(RECORD_ID, "127.0.0.1"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let record = client
        .zones()
        .dns_records()
        .get_details(ZONE_ID, RECORD_ID)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(record.name, ZONE_NAME);
    assert_eq!(record.zone_id.as_deref(), Some(ZONE_ID));
    assert_eq!(record.content.content().as_deref(), Some("127.0.0.1"));
    assert_eq!(record.comment.as_deref(), Some("Domain verification record"));
}

#[tokio::test]
async fn test_get_record_details_not_found() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path(records_path("missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(failure_envelope(
            81044,
            "Record does not exist.",
        )))
        .mount(&mock_server)
        .await;

    let error = client
        .zones()
        .dns_records()
        .get_details(ZONE_ID, "missing")
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(error.provider_errors()[0].code, 81044);
}

#[tokio::test]
async fn test_update_record_sends_only_changed_fields() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("PUT"))
        .and(path(records_path(RECORD_ID)))
        .and(body_json(json!({"content": "127.0.0.2"})))
        .respond_with(|request: &Request| {
            let changes: Value = request.body_json().unwrap();
            let mut record = a_record_json(RECORD_ID, "127.0.0.1");
            for (key, value) in changes.as_object().unwrap() {
                record[key] = value.clone();
            }
            ResponseTemplate::new(200).set_body_json(success_envelope(record))
        })
        .expect(1)
        .mount(&mock_server)
        .await;

    let changes = ModifiedDnsRecord {
        content: Some("127.0.0.2".to_string()),
        ..Default::default()
    };

    let updated = client
        .zones()
        .dns_records()
        .update(ZONE_ID, RECORD_ID, &changes)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(
        updated.content,
        DnsContent::A {
            content: Ipv4Addr::new(127, 0, 0, 2)
        }
    );
    assert_eq!(updated.name, ZONE_NAME);
    assert_eq!(updated.ttl, 120);
}

#[tokio::test]
async fn test_delete_record() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("DELETE"))
        .and(path(records_path(RECORD_ID)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success_envelope(json!({"id": RECORD_ID}))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let deleted = client
        .zones()
        .dns_records()
        .delete(ZONE_ID, RECORD_ID)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(deleted.id, RECORD_ID);
}

#[tokio::test]
async fn test_export_returns_zone_file_text() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path(records_path("export")))
        .respond_with(ResponseTemplate::new(200).set_body_string(ZONE_FILE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let exported = client.zones().dns_records().export(ZONE_ID).await.unwrap();
    assert_eq!(exported, ZONE_FILE);
}

#[tokio::test]
async fn test_import_zone_file() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path(records_path("import")))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains(ZONE_FILE.trim_end()))
        .and(body_string_contains("name=\"proxied\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "recs_added": 1,
            "total_records_parsed": 1
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", ZONE_FILE).unwrap();

    let summary = client
        .zones()
        .dns_records()
        .import(ZONE_ID, file.path(), false)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(summary.recs_added, 1);
    assert_eq!(summary.total_records_parsed, 1);

    let requests = mock_server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("false"));
}

#[tokio::test]
async fn test_import_missing_file_sends_nothing() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    let result = client
        .zones()
        .dns_records()
        .import(ZONE_ID, std::path::Path::new("/nonexistent/zone.txt"), true)
        .await;

    assert!(matches!(result, Err(CloudflareError::File { .. })));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_import_request_from_memory() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path(records_path("import")))
        .and(body_string_contains("filename=\"zone.txt\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "recs_added": 0,
            "total_records_parsed": 1
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = DnsRecordImportRequest::new("zone.txt", ZONE_FILE).proxied(true);
    let response = client
        .zones()
        .dns_records()
        .import_request(ZONE_ID, request)
        .await
        .unwrap();
    assert_eq!(response.result.unwrap().recs_added, 0);
}

#[tokio::test]
async fn test_scan_records() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path(records_path("scan")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "recs_added": 5,
            "total_records_parsed": 5
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scan = client
        .zones()
        .dns_records()
        .scan(ZONE_ID)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(scan.recs_added, 5);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_get_all_follows_pagination() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path(records_path("")))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .and(query_param("type", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(
            json!([a_record_json("1", "127.0.0.1"), a_record_json("2", "127.0.0.2")]),
            1,
            100,
            102,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(records_path("")))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(
            json!([a_record_json("3", "127.0.0.3")]),
            2,
            100,
            102,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter = DnsRecordFilter::default().record_type(DnsRecordType::A);
    let records = client
        .zones()
        .dns_records()
        .get_all(ZONE_ID, Some(&filter))
        .await
        .unwrap();

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_get_all_stops_on_rejected_page() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path(records_path("")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(failure_envelope(1000, "Invalid zone")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client.zones().dns_records().get_all(ZONE_ID, None).await;
    match result {
        Err(CloudflareError::Rejected { errors }) => assert_eq!(errors[0].code, 1000),
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_name_preserves_other_fields() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());
    let original = a_record_json("abc123", "127.0.0.1");

    Mock::given(method("GET"))
        .and(path(records_path("abc123")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(original.clone())))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path(records_path("abc123")))
        .and(body_json(json!({"name": "new.tothnet.hu"})))
        .respond_with(move |request: &Request| {
            let changes: Value = request.body_json().unwrap();
            let mut record = original.clone();
            record["name"] = changes["name"].clone();
            ResponseTemplate::new(200).set_body_json(success_envelope(record))
        })
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = client.zones().dns_records();
    let before = records
        .get_details(ZONE_ID, "abc123")
        .await
        .unwrap()
        .into_result()
        .unwrap();

    let changes = ModifiedDnsRecord {
        name: Some("new.tothnet.hu".to_string()),
        ..Default::default()
    };
    let after = records
        .update(ZONE_ID, "abc123", &changes)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(after.name, "new.tothnet.hu");
    let mut expected = before;
    expected.name = "new.tothnet.hu".to_string();
    assert_eq!(after, expected);
}

#[tokio::test]
async fn test_added_record_matches_details() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());
    let stored = a_record_json(RECORD_ID, "127.0.0.1");

    Mock::given(method("POST"))
        .and(path(records_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(stored.clone())))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(records_path(RECORD_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(stored)))
        .mount(&mock_server)
        .await;

    let records = client.zones().dns_records();
    let new_record = NewDnsRecord::new(
        ZONE_NAME,
        DnsContent::A {
            content: Ipv4Addr::LOCALHOST,
        },
    );
    let created = records.add(ZONE_ID, &new_record).await.unwrap().into_result().unwrap();
    let fetched = records
        .get_details(ZONE_ID, &created.id)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.name, new_record.name);
    assert_eq!(fetched.content, new_record.content);
}

#[tokio::test]
async fn test_update_with_empty_patch_sends_empty_object() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("PUT"))
        .and(path(records_path(RECORD_ID)))
        .and(body_json(json!({})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(a_record_json(RECORD_ID, "127.0.0.1"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let changes = ModifiedDnsRecord::default();
    assert!(changes.is_empty());

    let unchanged = client
        .zones()
        .dns_records()
        .update(ZONE_ID, RECORD_ID, &changes)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(unchanged.id, RECORD_ID);
}
