//! CSRF token handshake: the token lives in a cookie and is echoed in a header
//! on every state-changing request.

pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Finds `name` in a `document.cookie` style string and URL-decodes its value.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let prefix = format!("{}=", name);
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_finds_token() {
        let cookies = "sessionid=abc; csrftoken=Xy%2B9z; theme=dark";
        assert_eq!(
            cookie_value(cookies, CSRF_COOKIE_NAME),
            Some("Xy+9z".to_string())
        );
    }

    #[test]
    fn test_cookie_value_requires_exact_name() {
        let cookies = "xcsrftoken=nope; csrftokens=also-nope";
        assert_eq!(cookie_value(cookies, CSRF_COOKIE_NAME), None);
        assert_eq!(cookie_value("", CSRF_COOKIE_NAME), None);
    }

    #[test]
    fn test_cookie_value_takes_first_match() {
        let cookies = "csrftoken=first;csrftoken=second";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("first".into()));
    }
}
