use leads::client::{
    ContactClient, FormSubmissionHandler, HeadlessAlerter, HeadlessForm, HeadlessLinkBox,
    HeadlessSubmitEvent, PlainAlertPolicy, SubmitOutcome, WhatsAppPolicy,
    GENERIC_FAILURE_MESSAGE,
};

use crate::helper::spawn_app;

#[tokio::test]
async fn whatsapp_flow_against_running_server() {
    let app = spawn_app().await;
    let client = ContactClient::new(&app.address, None).unwrap();
    let mut handler = FormSubmissionHandler::new(
        client,
        HeadlessForm::new("Ana", "5551234", "Leaky pipe"),
        HeadlessAlerter::default(),
        WhatsAppPolicy::new(HeadlessLinkBox::default()),
    );
    let mut event = HeadlessSubmitEvent::default();

    let outcome = handler.on_submit(&mut event).await.unwrap();

    assert!(event.default_prevented());
    assert_eq!(SubmitOutcome::SuccessRendered, outcome);
    let link_box = handler.policy().link_box();
    assert!(link_box.visible);
    assert!(link_box
        .href
        .as_deref()
        .unwrap()
        .starts_with("https://wa.me/7900331626?text=Hello%2C%20"));
    assert!(handler.form().is_empty());
    assert_eq!(1, app.stored_leads().await.len());
}

#[tokio::test]
async fn whatsapp_flow_rejected_by_server_keeps_form() {
    let app = spawn_app().await;
    let client = ContactClient::new(&app.address, None).unwrap();
    let form = HeadlessForm::new("Ana", "", "Leaky pipe");
    let mut handler = FormSubmissionHandler::new(
        client,
        form.clone(),
        HeadlessAlerter::default(),
        WhatsAppPolicy::new(HeadlessLinkBox::default()),
    );

    let outcome = handler
        .on_submit(&mut HeadlessSubmitEvent::default())
        .await
        .unwrap();

    assert_eq!(SubmitOutcome::FailureAlerted, outcome);
    assert_eq!([GENERIC_FAILURE_MESSAGE], handler.alerter().messages());
    assert_eq!(&form, handler.form());
    assert!(!handler.policy().link_box().visible);
    assert!(app.stored_leads().await.is_empty());
}

#[tokio::test]
async fn plain_flow_alerts_once_per_submit() {
    let app = spawn_app().await;
    let client = ContactClient::new(&app.address, None).unwrap();
    let mut handler = FormSubmissionHandler::new(
        client,
        HeadlessForm::new("Ana", "5551234", "Leaky pipe"),
        HeadlessAlerter::default(),
        PlainAlertPolicy,
    );

    handler
        .on_submit(&mut HeadlessSubmitEvent::default())
        .await
        .unwrap();
    handler
        .on_submit(&mut HeadlessSubmitEvent::default())
        .await
        .unwrap();

    // 服务端响应中没有`message`字段
    assert_eq!(["undefined", "undefined"], handler.alerter().messages());
    assert_eq!(2, app.stored_leads().await.len());
}
