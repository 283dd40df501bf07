use super::{apply_file_settings, normalize_api_base_url, prepare_api_base_url, ClientSettings};

#[test]
fn empty_base_url_falls_back_to_default() {
    assert_eq!(normalize_api_base_url("   "), "http://127.0.0.1:8000");
}

#[test]
fn strips_trailing_slashes_and_whitespace() {
    assert_eq!(
        normalize_api_base_url(" http://directory.internal:8000// "),
        "http://directory.internal:8000"
    );
}

#[test]
fn prepared_base_url_keeps_a_path_prefix() {
    assert_eq!(
        prepare_api_base_url("https://hr.example.com/api/").expect("valid url"),
        "https://hr.example.com/api"
    );
}

#[test]
fn rejects_unparseable_base_url() {
    let err = prepare_api_base_url("not a url").expect_err("must fail");
    assert!(err.to_string().contains("invalid api base url"));
}

#[test]
fn rejects_non_http_scheme() {
    let err = prepare_api_base_url("ftp://files.example.com").expect_err("must fail");
    assert!(err.to_string().contains("http or https"));
}

#[test]
fn settings_file_overrides_default_base_url() {
    let mut settings = ClientSettings::default();
    apply_file_settings(&mut settings, r#"api_base_url = "http://10.0.0.4:9000""#);
    assert_eq!(settings.api_base_url, "http://10.0.0.4:9000");
}

#[test]
fn unreadable_settings_file_is_ignored() {
    let mut settings = ClientSettings::default();
    apply_file_settings(&mut settings, "api_base_url = [");
    assert_eq!(settings, ClientSettings::default());
}
