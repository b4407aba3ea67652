//! Seller profile and bank details, plus the default-filling step applied
//! to partial records before they are printed.

use serde::{Deserialize, Serialize};
use url::Url;

use super::error::ValidationError;
use super::types::Client;

/// Terms printed when the seller has not configured any.
pub const DEFAULT_TERMS: &str = "1. Payment terms: 30 days\n2. Interest @24% p.a. will be charged on delayed payments\n3. Subject to jurisdiction";

/// Bank account printed in the payment block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetail {
    pub bank_name: String,
    pub branch: String,
    pub account_no: String,
    pub ifsc_code: String,
}

impl Default for BankDetail {
    fn default() -> Self {
        Self {
            bank_name: "Bank Name".into(),
            branch: "Branch Name".into(),
            account_no: "1234567890".into(),
            ifsc_code: "IFSC0001234".into(),
        }
    }
}

/// The issuing business, fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub company: String,
    pub gstin: String,
    pub phone: String,
    pub mobile: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub bank: BankDetail,
    pub terms: String,
}

impl Default for Profile {
    /// Placeholder values shown when the seller has not filled in a field.
    fn default() -> Self {
        Self {
            company: "Your Company Name".into(),
            gstin: "GSTIN123456789".into(),
            phone: "1234567890".into(),
            mobile: "9876543210".into(),
            address: "Company Address Line 1".into(),
            city: "City".into(),
            state: "State".into(),
            pincode: "123456".into(),
            logo_url: None,
            bank: BankDetail::default(),
            terms: DEFAULT_TERMS.into(),
        }
    }
}

/// Partial bank details as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetailDraft {
    pub bank_name: Option<String>,
    pub branch: Option<String>,
    pub account_no: Option<String>,
    pub ifsc_code: Option<String>,
}

/// A seller profile as stored, where any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub company: Option<String>,
    pub gstin: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub logo_url: Option<String>,
    pub bank_detail: Option<BankDetailDraft>,
    pub terms: Option<String>,
}

impl ProfileDraft {
    /// Fill every missing field from [`Profile::default`].
    ///
    /// Present values win even when empty; only absent ones are replaced.
    pub fn resolve(self) -> Profile {
        let d = Profile::default();
        let bank = self.bank_detail.unwrap_or_default();
        Profile {
            company: self.company.unwrap_or(d.company),
            gstin: self.gstin.unwrap_or(d.gstin),
            phone: self.phone.unwrap_or(d.phone),
            mobile: self.mobile.unwrap_or(d.mobile),
            address: self.address.unwrap_or(d.address),
            city: self.city.unwrap_or(d.city),
            state: self.state.unwrap_or(d.state),
            pincode: self.pincode.unwrap_or(d.pincode),
            logo_url: self.logo_url.filter(|u| !u.trim().is_empty()),
            bank: BankDetail {
                bank_name: bank.bank_name.unwrap_or(d.bank.bank_name),
                branch: bank.branch.unwrap_or(d.bank.branch),
                account_no: bank.account_no.unwrap_or(d.bank.account_no),
                ifsc_code: bank.ifsc_code.unwrap_or(d.bank.ifsc_code),
            },
            terms: self.terms.unwrap_or(d.terms),
        }
    }
}

/// A client record as stored, where any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDraft {
    pub name: Option<String>,
    pub gstin: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub shipping_name: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_state: Option<String>,
    pub shipping_pincode: Option<String>,
}

impl ClientDraft {
    /// Fill missing billing fields with placeholders. Shipping fields stay
    /// optional since they fall back to billing values when printed.
    pub fn resolve(self) -> Client {
        Client {
            name: self.name.unwrap_or_else(|| "Client Name".into()),
            gstin: self.gstin,
            address: self.address.unwrap_or_else(|| "Client Address".into()),
            city: self.city.unwrap_or_else(|| "City".into()),
            state: self.state.unwrap_or_else(|| "State".into()),
            pincode: self.pincode.unwrap_or_else(|| "123456".into()),
            shipping_name: self.shipping_name,
            shipping_address: self.shipping_address,
            shipping_city: self.shipping_city,
            shipping_state: self.shipping_state,
            shipping_pincode: self.shipping_pincode,
        }
    }
}

/// Validate a seller profile before it is saved.
/// Returns all validation errors found (not just the first).
pub fn validate_profile(profile: &Profile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let min_len = |value: &str, min: usize| value.trim().chars().count() >= min;

    if !min_len(&profile.company, 1) {
        errors.push(ValidationError::new("company", "company name must not be empty"));
    }
    if !min_len(&profile.gstin, 1) {
        errors.push(ValidationError::new("gstin", "GSTIN must not be empty"));
    }
    if !min_len(&profile.phone, 5) {
        errors.push(ValidationError::new(
            "phone",
            "phone must have at least 5 characters",
        ));
    }
    if !min_len(&profile.mobile, 5) {
        errors.push(ValidationError::new(
            "mobile",
            "mobile must have at least 5 characters",
        ));
    }
    if !min_len(&profile.pincode, 4) {
        errors.push(ValidationError::new(
            "pincode",
            "pincode must have at least 4 characters",
        ));
    }

    if let Some(logo_url) = &profile.logo_url {
        let web_url = Url::parse(logo_url).is_ok_and(|u| {
            matches!(u.scheme(), "http" | "https") && u.host_str().is_some_and(|h| !h.is_empty())
        });
        if !web_url {
            errors.push(ValidationError::new(
                "logo_url",
                "logo URL must be an absolute http(s) URL",
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            company: "Shree Steel Works".into(),
            gstin: "27AAPFU0939F1ZV".into(),
            phone: "020-2456789".into(),
            mobile: "9822012345".into(),
            address: "Plot 14, MIDC Bhosari".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            pincode: "411026".into(),
            logo_url: Some("https://cdn.example.in/logo.png".into()),
            bank: BankDetail {
                bank_name: "State Bank of India".into(),
                branch: "Bhosari".into(),
                account_no: "30012345678".into(),
                ifsc_code: "SBIN0001234".into(),
            },
            terms: "Payment within 15 days".into(),
        }
    }

    #[test]
    fn complete_profile_passes() {
        assert!(validate_profile(&profile()).is_empty());
    }

    #[test]
    fn short_fields_rejected() {
        let mut p = profile();
        p.company = " ".into();
        p.phone = "123".into();
        p.pincode = "41".into();
        p.logo_url = Some("logo.png".into());
        let fields: Vec<_> = validate_profile(&p).into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["company", "phone", "pincode", "logo_url"]);
    }

    #[test]
    fn logo_url_must_parse_as_web_url() {
        let mut p = profile();
        for bad in [
            "http://exa mple.com/logo.png",
            "https://",
            "ftp://cdn.example.in/logo.png",
            "/static/logo.png",
        ] {
            p.logo_url = Some(bad.into());
            let fields: Vec<_> = validate_profile(&p).into_iter().map(|e| e.field).collect();
            assert_eq!(fields, vec!["logo_url"], "{bad}");
        }

        p.logo_url = Some("http://localhost:8080/logo.png".into());
        assert!(validate_profile(&p).is_empty());
    }

    #[test]
    fn empty_draft_resolves_to_placeholders() {
        assert_eq!(ProfileDraft::default().resolve(), Profile::default());
    }

    #[test]
    fn draft_values_override_defaults() {
        let draft = ProfileDraft {
            company: Some("Shree Steel Works".into()),
            bank_detail: Some(BankDetailDraft {
                ifsc_code: Some("SBIN0001234".into()),
                ..BankDetailDraft::default()
            }),
            logo_url: Some("".into()),
            ..ProfileDraft::default()
        };
        let p = draft.resolve();
        assert_eq!(p.company, "Shree Steel Works");
        assert_eq!(p.city, "City");
        assert_eq!(p.bank.ifsc_code, "SBIN0001234");
        assert_eq!(p.bank.bank_name, "Bank Name");
        assert_eq!(p.logo_url, None);
        assert_eq!(p.terms, DEFAULT_TERMS);
    }

    #[test]
    fn client_draft_keeps_shipping_optional() {
        let c = ClientDraft {
            name: Some("Sharma Traders".into()),
            ..ClientDraft::default()
        }
        .resolve();
        assert_eq!(c.name, "Sharma Traders");
        assert_eq!(c.address, "Client Address");
        assert!(!c.has_shipping());
    }
}
