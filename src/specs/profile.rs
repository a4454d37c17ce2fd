// src/specs/profile.rs
//! Display name from `UserInfo.aspx?GETUSER=M` (`div.headerleft.middle`).

use crate::config::consts::PROFILE_NAME_CLASS;
use crate::core::html;
use crate::error::{Error, Result};

pub fn parse(doc: &str) -> Result<String> {
    html::elements(doc, "div")
        .into_iter()
        .find(|d| d.has_classes(PROFILE_NAME_CLASS))
        .map(|d| d.text())
        .ok_or_else(|| Error::parse("profile", "name header not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_text_trimmed() {
        let doc = r#"<div class="headerleft">Menu</div>
                     <div class="headerleft middle">
                        Jane&nbsp;Q. <b>Pilot</b>
                     </div>"#;
        assert_eq!(parse(doc).unwrap(), "Jane Q. Pilot");
    }

    #[test]
    fn missing_header() {
        assert!(parse("<div class='middle'>x</div>").is_err());
    }
}
