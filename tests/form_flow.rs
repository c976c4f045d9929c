//! Drives the submission lifecycle the way the portal component does:
//! edit fields, begin a submit, resolve it with an outcome.

use complaint_portal::form::{
    http_error_message, network_error_message, ComplaintForm, Field, SubmissionStatus,
};

fn fill(form: &mut ComplaintForm) {
    form.set_field(Field::Name, "Grace Hopper".to_string());
    form.set_field(Field::Email, "grace@example.com".to_string());
    form.set_field(Field::Complaint, "A moth got into the relay again.".to_string());
}

#[test]
fn test_successful_cycle_resets_the_form() {
    let mut form = ComplaintForm::new();
    fill(&mut form);

    let request = form.try_begin_submit().expect("valid form produces a payload");
    assert!(form.is_loading());

    // Endpoint answered 201.
    form.resolve(Ok(()));

    assert_eq!(form.status, SubmissionStatus::Success);
    assert!(form.state.name.is_empty());
    assert!(form.state.email.is_empty());
    assert!(form.state.complaint.is_empty());
    assert!(form.errors.is_empty());

    // The payload carried what the user typed.
    assert_eq!(request.name, "Grace Hopper");
    assert_eq!(request.message, "A moth got into the relay again.");
}

#[test]
fn test_rejected_response_surfaces_the_status_line() {
    let mut form = ComplaintForm::new();
    fill(&mut form);
    form.try_begin_submit().expect("payload");

    form.resolve(Err(http_error_message(500, "Internal Server Error")));

    assert_eq!(form.status, SubmissionStatus::Error);
    assert_eq!(form.error_message, "500 Internal Server Error");
    // Fields survive so the user can resubmit as-is.
    assert_eq!(form.state.name, "Grace Hopper");
}

#[test]
fn test_transport_failure_uses_description_or_fallback() {
    let mut form = ComplaintForm::new();
    fill(&mut form);
    form.try_begin_submit().expect("payload");
    form.resolve(Err(network_error_message("connection refused")));
    assert_eq!(form.error_message, "connection refused");

    fill(&mut form);
    form.try_begin_submit().expect("payload");
    form.resolve(Err(network_error_message("")));
    assert_eq!(form.error_message, "Network error");
    assert_eq!(form.status, SubmissionStatus::Error);
}

#[test]
fn test_invalid_form_never_produces_a_payload() {
    let mut form = ComplaintForm::new();
    form.set_field(Field::Name, "   ".to_string());
    form.set_field(Field::Email, "not-an-email".to_string());

    assert!(form.try_begin_submit().is_none());
    assert_eq!(form.status, SubmissionStatus::Idle);
    assert!(form.errors.name.is_some());
    assert!(form.errors.email.is_some());
    assert!(form.errors.complaint.is_some());
}

#[test]
fn test_one_request_per_cycle() {
    let mut form = ComplaintForm::new();
    fill(&mut form);

    assert!(form.try_begin_submit().is_some());
    // Repeated submit attempts during the in-flight window go nowhere.
    assert!(form.try_begin_submit().is_none());
    assert!(form.try_begin_submit().is_none());

    form.resolve(Ok(()));
    fill(&mut form);
    assert!(form.try_begin_submit().is_some());
}

#[test]
fn test_wire_payload_uses_message_key() {
    let mut form = ComplaintForm::new();
    fill(&mut form);
    let request = form.try_begin_submit().expect("payload");

    let json = serde_json::to_value(&request).expect("serializes");
    assert_eq!(json["name"], "Grace Hopper");
    assert_eq!(json["email"], "grace@example.com");
    assert_eq!(json["message"], "A moth got into the relay again.");
    // The internal field name never leaks onto the wire.
    assert!(json.get("complaint").is_none());
    assert_eq!(json.as_object().map(|o| o.len()), Some(3));
}
