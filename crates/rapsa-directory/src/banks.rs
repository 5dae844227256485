// rapsa-directory/src/banks.rs
// ============================================================================
// Module: Built-In Issuer Table
// Description: Static table of Iranian issuing banks.
// Purpose: Back the zero-config directory with known codes and BINs.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Each entry pairs a bank's numeric code (its IBAN bank identifier without
//! leading zeros) with the six-digit card BINs it issues. Codes double as
//! the lookup key for Sheba bank codes and wallet bank codes.

/// Built-in issuer table: `(code, name, BINs)`.
pub(crate) const BUILTIN_BANKS: &[(u32, &str, &[&str])] = &[
    (11, "Bank Sanat Va Madan", &["627961"]),
    (12, "Bank Mellat", &["610433", "991975"]),
    (13, "Bank Refah Kargaran", &["589463"]),
    (14, "Bank Maskan", &["628023"]),
    (15, "Bank Sepah", &["589210"]),
    (16, "Bank Keshavarzi", &["603770", "639217"]),
    (17, "Bank Melli Iran", &["603799"]),
    (18, "Bank Tejarat", &["627353", "585983"]),
    (19, "Bank Saderat Iran", &["603769"]),
    (20, "Export Development Bank of Iran", &["627648", "207177"]),
    (21, "Post Bank of Iran", &["627760"]),
    (22, "Tosee Taavon Bank", &["502908"]),
    (51, "Tosee Credit Institution", &["628157"]),
    (53, "Karafarin Bank", &["627488", "502910"]),
    (54, "Parsian Bank", &["622106", "639194", "627884"]),
    (55, "Eghtesad Novin Bank", &["627412"]),
    (56, "Saman Bank", &["621986"]),
    (57, "Bank Pasargad", &["502229", "639347"]),
    (58, "Sarmayeh Bank", &["639607"]),
    (59, "Sina Bank", &["639346"]),
    (60, "Gharzolhasaneh Mehr Iran Bank", &["606373"]),
    (61, "Shahr Bank", &["502806", "504706"]),
    (62, "Ayandeh Bank", &["636214"]),
    (64, "Tourism Bank", &["505416"]),
    (66, "Dey Bank", &["502938"]),
    (69, "Iran Zamin Bank", &["505785"]),
    (70, "Resalat Gharzolhasaneh Bank", &["504172"]),
];
