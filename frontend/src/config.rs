use log::Level;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mrblelnl";

/// Where the contact form posts. Set `CONTACT_FORM_ENDPOINT` at build time to
/// point a staging build at a different form.
pub fn get_form_endpoint() -> &'static str {
    option_env!("CONTACT_FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

// Hidden form metadata understood by the form handler
pub const FORM_SUBJECT: &str = "New contact from portfolio website!";
pub const FORM_CAPTCHA: &str = "false";

pub const CV_PATH: &str = "/cv.pdf";
pub const CV_FILENAME: &str = "Mariam-Collins-CV.pdf";

pub const BRAND: &str = "Matte & Milk 🥛";
pub const CONTACT_EMAIL: &str = "mariamcollinslawal@gmail.com";
pub const CONTACT_PHONES: [&str; 2] = ["07026501406", "09136605197"];
pub const LINKEDIN_HANDLE: &str = "lawal-mariam-collins";

pub fn linkedin_url() -> String {
    format!("https://www.linkedin.com/in/{}", LINKEDIN_HANDLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_falls_back_to_default() {
        if option_env!("CONTACT_FORM_ENDPOINT").is_none() {
            assert_eq!(get_form_endpoint(), DEFAULT_FORM_ENDPOINT);
        }
        assert!(get_form_endpoint().starts_with("http"));
    }

    #[test]
    fn linkedin_url_uses_handle() {
        assert_eq!(linkedin_url(), "https://www.linkedin.com/in/lawal-mariam-collins");
    }
}
