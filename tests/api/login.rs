use crate::helper::{assert_is_redirect_to, spawn_app};

#[tokio::test]
async fn show_flash_msg_when_login_failed() {
    let app = spawn_app().await;

    // 登录失败
    let body = serde_json::json!({
        "username": "random-username",
        "password": "random-password",
    });
    let res = app.post_login(&body).await;
    assert_is_redirect_to(&res, "/admin/login");

    // 跟随重定向，登录页面显示登录失败信息
    let login_html = app.get_login_html().await;
    assert!(login_html.contains("<p><i>Invalid credentials</i></p>"));

    // 再次加载登录页面，登录页面不会再次显示登录失败信息
    let login_html = app.get_login_html().await;
    assert!(!login_html.contains("<p><i>Invalid credentials</i></p>"));
}

#[tokio::test]
async fn wrong_password_for_admin_is_rejected() {
    let app = spawn_app().await;

    let res = app
        .post_login(&serde_json::json!({
            "username": &app.test_user.username,
            "password": "not-the-password",
        }))
        .await;
    assert_is_redirect_to(&res, "/admin/login");

    let res = app.get_admin_dashboard().await;
    assert_is_redirect_to(&res, "/admin/login");
}

#[tokio::test]
async fn redirect_to_admin_dashboard_after_login_success() {
    let app = spawn_app().await;

    let res = app.post_login_with_valid_user().await;
    assert_is_redirect_to(&res, "/admin");

    // 跟随重定向
    let html_page = app.get_admin_dashboard_html().await;
    assert!(html_page.contains("<h1>Leads</h1>"));
}

#[tokio::test]
async fn login_page_is_not_cached() {
    let app = spawn_app().await;

    let res = app
        .api_client
        .get(format!("{}/admin/login", &app.address))
        .send()
        .await
        .expect("failed to execute request.");

    assert_eq!(200, res.status().as_u16());
    assert_eq!("no-store", res.headers().get("Cache-Control").unwrap());
}
