use cms::seed::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use cms::test_utils::TestContext;
use cms::{Access, AdminScreen, AuthError, GateError, NewAdmin, Role};

#[test]
fn test_first_login_creates_default_superadmin() {
    let ctx = TestContext::new();
    assert!(ctx.raw("adminUsers").is_none());

    let access = ctx
        .cms
        .session()
        .login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
        .expect("default credentials should work");
    assert_eq!(access.role(), Some(Role::Superadmin));

    let admins = ctx.raw("adminUsers").expect("admin should be persisted");
    assert!(admins.contains(DEFAULT_ADMIN_USERNAME));
    assert!(!admins.contains(DEFAULT_ADMIN_PASSWORD), "password must be hashed");

    let logged_in: serde_json::Value =
        serde_json::from_str(&ctx.raw("loggedInUser").expect("loggedInUser should be set")).unwrap();
    assert_eq!(logged_in["username"], DEFAULT_ADMIN_USERNAME);
    assert!(ctx.raw("adminLoginTime").is_some());
}

#[test]
fn test_session_survives_reload() {
    let ctx = TestContext::new();
    ctx.cms
        .session()
        .login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
        .unwrap();
    let reloaded = ctx.reload();
    assert!(reloaded.session().require(AdminScreen::LogoTheme).is_ok());
}

#[test]
fn test_self_written_role_does_not_grant_access() {
    let ctx = TestContext::new();
    ctx.put_raw(
        "loggedInUser",
        r#"{"username":"superadmin","role":"superadmin","token":""}"#,
    );
    assert_eq!(ctx.cms.session().check(), Access::Anonymous);
    assert_eq!(
        ctx.cms.session().require(AdminScreen::Dashboard),
        Err(GateError::NotSignedIn)
    );
}

#[test]
fn test_promoting_self_in_admin_users_needs_new_login() {
    let ctx = TestContext::new();
    ctx.cms
        .admins()
        .create(&NewAdmin {
            username: "editor".to_string(),
            password: "editor-pass".to_string(),
            confirm_password: "editor-pass".to_string(),
            role: Role::Admin,
        })
        .unwrap();
    ctx.cms.session().login("editor", "editor-pass").unwrap();

    // Hand-edit the stored record to superadmin.
    let raw = ctx.raw("adminUsers").unwrap();
    let edited = raw.replace(r#""role":"admin""#, r#""role":"superadmin""#);
    ctx.put_raw("adminUsers", &edited);

    let access = ctx.reload().session().check();
    assert_eq!(access.role(), Some(Role::Admin));
    assert!(!access.can_open(AdminScreen::Admins));
}

#[test]
fn test_wrong_password_is_rejected_without_session() {
    let ctx = TestContext::new();
    let err = ctx
        .cms
        .session()
        .login(DEFAULT_ADMIN_USERNAME, "admin124")
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.message_key(), "login.invalid");
    assert!(ctx.raw("loggedInUser").is_none());
}

#[test]
fn test_logout_clears_session_keys() {
    let ctx = TestContext::new();
    ctx.cms
        .session()
        .login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
        .unwrap();
    ctx.cms.session().logout().unwrap();
    assert!(ctx.raw("loggedInUser").is_none());
    assert!(ctx.raw("adminLoginTime").is_none());
    assert!(!ctx.cms.session().check().is_signed_in());
}

#[test]
fn test_legacy_plaintext_admins_are_upgraded_in_place() {
    let ctx = TestContext::new();
    ctx.put_raw(
        "adminUsers",
        r#"[
            {"username":"owner","password":"owner-pass","role":"superadmin","createdAt":"2023-05-01T09:00:00Z"},
            {"username":"clerk","password":"clerk-pass","role":"admin","createdAt":"2023-06-01T09:00:00Z"}
        ]"#,
    );

    let access = ctx.cms.session().login("owner", "owner-pass").unwrap();
    assert_eq!(access.role(), Some(Role::Superadmin));
    assert!(matches!(
        ctx.cms.session().login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD),
        Err(AuthError::InvalidCredentials)
    ));

    let raw = ctx.raw("adminUsers").unwrap();
    assert!(!raw.contains("owner-pass"));
    assert!(!raw.contains("clerk-pass"));
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let stored = stored.as_array().unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|a| a.get("password").is_none()));
    assert!(stored.iter().all(|a| a["passwordHash"].as_str().is_some_and(|h| !h.is_empty())));
    assert_eq!(stored[0]["createdAt"], "2023-05-01T09:00:00Z");

    let reloaded = ctx.reload();
    assert!(reloaded.session().login("clerk", "clerk-pass").is_ok());
}

#[test]
fn test_unreadable_admin_list_is_not_reseeded() {
    let ctx = TestContext::new();
    ctx.put_raw("adminUsers", "[{\"username\": ");

    let err = ctx
        .cms
        .session()
        .login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
        .unwrap_err();
    assert_eq!(err.message_key(), "error.store.corrupt");
    assert_eq!(ctx.raw("adminUsers").as_deref(), Some("[{\"username\": "));
    assert!(ctx.cms.admins().list().is_err());
}

#[test]
fn test_empty_admin_list_gets_default_superadmin() {
    let ctx = TestContext::new();
    ctx.put_raw("adminUsers", "[]");
    assert!(ctx
        .cms
        .session()
        .login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
        .is_ok());
}
