
// GitHub caps logins at 39 characters.
pub const MAX_LOGIN_LENGTH: usize = 39;

pub fn is_str_valid_length(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

pub fn is_str_valid_pattern(value: &str, blacklist: &str) -> bool {
    value.chars().all(|char| {
        !char.is_control()
            && !char.is_whitespace()
            && blacklist.chars().all(|char_b| char != char_b)
    })
}

/// Checks a login given on the command line. Characters that need escaping
/// in a URL are allowed, the service escapes them.
pub fn parse_login(value: &str) -> Result<String, String> {
    if !is_str_valid_length(value, 1, MAX_LOGIN_LENGTH) {
        return Err(format!(
            "login must be between 1 and {} characters",
            MAX_LOGIN_LENGTH
        ));
    }
    if !is_str_valid_pattern(value, "") {
        return Err(String::from("login must not contain whitespace or control characters"));
    }
    Ok(value.to_string())
}
