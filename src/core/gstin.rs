//! GSTIN format validation and place-of-supply detection.

use std::fmt;

use super::types::{Client, TaxType};

/// Error returned when a GSTIN fails format validation.
#[derive(Debug, Clone)]
pub struct GstinFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for GstinFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GSTIN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for GstinFormatError {}

/// A GSTIN that passed [`validate_gstin_format`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gstin(String);

impl Gstin {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit state code, e.g. "27" for Maharashtra.
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// The embedded PAN of the registered person.
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// GST state codes and the state or union territory they denote.
const STATE_CODES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("25", "Daman and Diu"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("28", "Andhra Pradesh (Old)"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
    ("99", "Centre Jurisdiction"),
];

const CHECKSUM_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Name of the state for a two-digit GST state code.
pub fn state_name(code: &str) -> Option<&'static str> {
    STATE_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// State code for a state name (case-insensitive, surrounding whitespace ignored).
///
/// "Andhra Pradesh" resolves to the current code 37.
pub fn state_code_for(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    STATE_CODES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(code, _)| *code)
}

/// Validate a GSTIN by structure and check character (no network call).
///
/// Layout: 2-digit state code, 10-character PAN (5 letters, 4 digits,
/// 1 letter), 1 entity code (alphanumeric, not `0`), the letter `Z`, and a
/// mod-36 check character. Lowercase input is accepted and normalized.
pub fn validate_gstin_format(gstin: &str) -> Result<Gstin, GstinFormatError> {
    let value = gstin.trim().to_ascii_uppercase();
    let fail = |reason: &str| GstinFormatError {
        value: gstin.trim().into(),
        reason: reason.into(),
    };

    if value.len() != 15 || !value.is_ascii() {
        return Err(fail("must be exactly 15 ASCII characters"));
    }
    let b = value.as_bytes();

    if !b[..2].iter().all(u8::is_ascii_digit) || state_name(&value[..2]).is_none() {
        return Err(fail("unknown state code"));
    }

    let pan = &b[2..12];
    let pan_ok = pan[..5].iter().all(u8::is_ascii_uppercase)
        && pan[5..9].iter().all(u8::is_ascii_digit)
        && pan[9].is_ascii_uppercase();
    if !pan_ok {
        return Err(fail("characters 3-12 must be a PAN (AAAAA9999A)"));
    }

    if !b[12].is_ascii_alphanumeric() || b[12] == b'0' {
        return Err(fail("entity code must be 1-9 or A-Z"));
    }

    if b[13] != b'Z' {
        return Err(fail("14th character must be 'Z'"));
    }

    let expected = checksum_char(&b[..14]);
    if b[14] != expected {
        return Err(fail(&format!(
            "check character should be '{}'",
            expected as char
        )));
    }

    Ok(Gstin(value))
}

/// Mod-36 check character over the first 14 characters.
fn checksum_char(body: &[u8]) -> u8 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let value = CHECKSUM_ALPHABET
                .iter()
                .position(|a| a == c)
                .unwrap_or(0) as u32;
            let factor = if i % 2 == 0 { 1 } else { 2 };
            let product = value * factor;
            product / 36 + product % 36
        })
        .sum();
    CHECKSUM_ALPHABET[((36 - sum % 36) % 36) as usize]
}

/// Suggest the tax type from the place of supply.
///
/// The seller's state comes from its GSTIN. The client's state comes from
/// its GSTIN when present and valid, otherwise from its state name. Same
/// state is an intra-state supply (CGST + SGST); different states is an
/// inter-state supply (IGST). Returns `None` when either side is unknown,
/// in which case the caller keeps whatever was chosen on the form.
pub fn determine_tax_type(seller_gstin: &str, client: &Client) -> Option<TaxType> {
    let seller = validate_gstin_format(seller_gstin).ok()?;

    let client_state = client
        .gstin
        .as_deref()
        .and_then(|g| validate_gstin_format(g).ok())
        .map(|g| g.state_code().to_string())
        .or_else(|| state_code_for(&client.state).map(String::from))?;

    if seller.state_code() == client_state {
        Some(TaxType::CgstSgst)
    } else {
        Some(TaxType::Igst)
    }
}
