use crate::helper::{assert_is_redirect_to, spawn_app};

#[tokio::test]
async fn you_must_sign_in_to_access_dashboard() {
    let app = spawn_app().await;

    let res = app.get_admin_dashboard().await;

    assert_is_redirect_to(&res, "/admin/login");
}

#[tokio::test]
async fn dashboard_lists_newest_leads_first() {
    let app = spawn_app().await;

    for (name, message) in [("Ana", "Leaky pipe"), ("Bruno", "Broken boiler")] {
        app.post_contact(&serde_json::json!({
            "name": name,
            "phone": "5551234",
            "message": message,
        }))
        .await
        .error_for_status()
        .unwrap();
    }

    app.post_login_with_valid_user().await;
    let html_page = app.get_admin_dashboard_html().await;

    assert!(html_page.contains("<p>Total: 2</p>"));
    let ana = html_page.find("Leaky pipe").unwrap();
    let bruno = html_page.find("Broken boiler").unwrap();
    assert!(bruno < ana);
}

#[tokio::test]
async fn dashboard_escapes_lead_content() {
    let app = spawn_app().await;

    app.post_contact(&serde_json::json!({
        "name": "<script>alert(1)</script>",
        "phone": "5551234",
        "message": "Leaky pipe",
    }))
    .await
    .error_for_status()
    .unwrap();

    app.post_login_with_valid_user().await;
    let html_page = app.get_admin_dashboard_html().await;

    assert!(html_page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html_page.contains("<script>"));
}

#[tokio::test]
async fn logout_clears_session_state() {
    let app = spawn_app().await;

    // 1. sign in
    let res = app.post_login_with_valid_user().await;
    assert_is_redirect_to(&res, "/admin");

    // 2. sign out
    let res = app.get_logout().await;
    assert_is_redirect_to(&res, "/admin/login");

    // 3. follow redirect
    let html_page = app.get_login_html().await;
    assert!(html_page.contains("<p><i>Logged out.</i></p>"));

    // 4. try to access admin dashboard
    let res = app.get_admin_dashboard().await;
    assert_is_redirect_to(&res, "/admin/login");
}
