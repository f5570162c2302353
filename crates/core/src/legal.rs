//! Legal text screens: privacy policy and terms of service.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegalDocument {
    PrivacyPolicy,
    TermsOfService,
}

impl LegalDocument {
    pub fn title(&self) -> &'static str {
        match self {
            LegalDocument::PrivacyPolicy => "Kebijakan Privasi",
            LegalDocument::TermsOfService => "Syarat dan Ketentuan",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            LegalDocument::PrivacyPolicy => "privacy-policy",
            LegalDocument::TermsOfService => "terms-of-service",
        }
    }

    /// Where the document is hosted, under the configured CDN.
    pub fn url(&self, config: &AppConfig) -> String {
        format!("{}/legal/{}.html", config.cdn_url, self.slug())
    }

    /// Address readers are told to write to about this document.
    pub fn contact_email<'a>(&self, config: &'a AppConfig) -> &'a str {
        match self {
            LegalDocument::PrivacyPolicy => &config.privacy_email,
            LegalDocument::TermsOfService => &config.support_email,
        }
    }
}
