/// Checks the status and the `code` of an error body against one of the
/// `prediction_league::error` constants. Consumes the response.
#[allow(unused_macros)]
macro_rules! assert_error {
    ($res:expr, $expected:expr) => {{
        let expected = $expected;
        assert_eq!(Some($res.status()), expected.status(), "status");

        let body: serde_json::Value = $res.json().await;
        assert_eq!(body["code"], expected.code(), "error body: {body}");
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_error;
