use crate::helper::spawn_app;

#[tokio::test]
async fn health_check() {
    let app = spawn_app().await;

    let res = app
        .api_client
        .get(format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("failed to execute request.");
    assert!(res.status().is_success());
}

#[tokio::test]
async fn home_page_contains_contact_form() {
    let app = spawn_app().await;

    let html = app
        .api_client
        .get(&app.address)
        .send()
        .await
        .expect("failed to execute request.")
        .text()
        .await
        .unwrap();
    for id in [
        "contactForm",
        "name",
        "phone",
        "message",
        "whatsappBox",
        "whatsappLink",
    ] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "{id}");
    }
}
