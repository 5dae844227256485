// rapsa-core/src/request/builder.rs
// ============================================================================
// Module: Request Builder
// Description: Mutable request aggregate with schema-enforced mutation.
// Purpose: Compose a path-scoped parameter set and serialize it to URI text.
// Dependencies: crate::{base62, identity, request}
// ============================================================================

//! ## Overview
//! [`Rapsa`] is a mutable request: a scheme constant, an optional path, and
//! an ordered wire-token parameter map of encoded values. Mutators validate
//! the key against the current path's schema before staging anything and
//! fail fast otherwise — a failed mutation leaves the request in its prior
//! state. Typed accessors decode numeric scalars back through the base-62
//! codec and reconstruct identifier values (re-validating checksums), so a
//! permissively parsed request surfaces embedded errors at access time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::base62;
use crate::identity::CardNumber;
use crate::identity::Sheba;
use crate::identity::WalletAddress;
use crate::request::ParamKey;
use crate::request::ParamValue;
use crate::request::RequestError;
use crate::request::RequestPath;
use crate::request::SCHEME;
use crate::request::query;

// ============================================================================
// SECTION: Request Aggregate
// ============================================================================

/// Mutable request composing a path-scoped, schema-validated parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rapsa {
    /// Selected request path, if any.
    path: Option<RequestPath>,
    /// Ordered wire-token parameter map holding encoded values.
    params: Vec<(String, ParamValue)>,
}

impl Rapsa {
    /// Creates an empty request with no path selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request in the pay state.
    #[must_use]
    pub fn pay() -> Self {
        Self {
            path: Some(RequestPath::Pay),
            params: Vec::new(),
        }
    }

    /// Creates a request in the transfer state.
    #[must_use]
    pub fn transfer() -> Self {
        Self {
            path: Some(RequestPath::Transfer),
            params: Vec::new(),
        }
    }

    /// Creates a request in the bill state.
    #[must_use]
    pub fn bill() -> Self {
        Self {
            path: Some(RequestPath::Bill),
            params: Vec::new(),
        }
    }

    /// Creates a request in the donate state.
    #[must_use]
    pub fn donate() -> Self {
        Self {
            path: Some(RequestPath::Donate),
            params: Vec::new(),
        }
    }

    /// Returns the selected path, if any.
    #[must_use]
    pub const fn path(&self) -> Option<RequestPath> {
        self.path
    }

    /// Returns the raw wire-token parameter map in insertion order.
    #[must_use]
    pub fn params(&self) -> &[(String, ParamValue)] {
        &self.params
    }

    /// Selects a path, clearing any previously staged parameters.
    pub fn select_path(&mut self, path: RequestPath) -> &mut Self {
        self.path = Some(path);
        self.params.clear();
        self
    }

    // ========================================================================
    // SECTION: Scalar Mutation
    // ========================================================================

    /// Stages the payment amount, base-62 encoding the decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the input is not decimal text.
    pub fn add_amount(&mut self, amount: &str) -> Result<&mut Self, RequestError> {
        self.add_numeric(ParamKey::Amount, amount)
    }

    /// Stages the invoice identifier, base-62 encoding the decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the input is not decimal text.
    pub fn add_invoice_id(&mut self, invoice_id: &str) -> Result<&mut Self, RequestError> {
        self.add_numeric(ParamKey::InvoiceId, invoice_id)
    }

    /// Stages the transaction reference, base-62 encoding the decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the input is not decimal text.
    pub fn add_transaction_ref(&mut self, transaction_ref: &str) -> Result<&mut Self, RequestError> {
        self.add_numeric(ParamKey::TransactionRef, transaction_ref)
    }

    /// Stages the bill identifier, base-62 encoding the decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the input is not decimal text.
    pub fn add_bill_id(&mut self, bill_id: &str) -> Result<&mut Self, RequestError> {
        self.add_numeric(ParamKey::BillId, bill_id)
    }

    /// Stages the payment identifier, base-62 encoding the decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the input is not decimal text.
    pub fn add_payment_id(&mut self, payment_id: &str) -> Result<&mut Self, RequestError> {
        self.add_numeric(ParamKey::PaymentId, payment_id)
    }

    /// Stages the currency unit, range-checked to the closed interval [1, 5].
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the unit falls outside the interval.
    pub fn add_unit(&mut self, unit: u8) -> Result<&mut Self, RequestError> {
        self.validate_param(ParamKey::Unit)?;
        if !(1..=5).contains(&unit) {
            return Err(RequestError::UnitOutOfRange {
                unit,
            });
        }
        self.put_scalar(ParamKey::Unit, unit.to_string());
        Ok(self)
    }

    /// Removes the payment amount.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current path.
    pub fn remove_amount(&mut self) -> Result<&mut Self, RequestError> {
        self.remove_scalar(ParamKey::Amount)
    }

    /// Removes the invoice identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current path.
    pub fn remove_invoice_id(&mut self) -> Result<&mut Self, RequestError> {
        self.remove_scalar(ParamKey::InvoiceId)
    }

    /// Removes the transaction reference.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current path.
    pub fn remove_transaction_ref(&mut self) -> Result<&mut Self, RequestError> {
        self.remove_scalar(ParamKey::TransactionRef)
    }

    /// Removes the bill identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current path.
    pub fn remove_bill_id(&mut self) -> Result<&mut Self, RequestError> {
        self.remove_scalar(ParamKey::BillId)
    }

    /// Removes the payment identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current path.
    pub fn remove_payment_id(&mut self) -> Result<&mut Self, RequestError> {
        self.remove_scalar(ParamKey::PaymentId)
    }

    /// Removes the currency unit.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current path.
    pub fn remove_unit(&mut self) -> Result<&mut Self, RequestError> {
        self.remove_scalar(ParamKey::Unit)
    }

    // ========================================================================
    // SECTION: List Mutation
    // ========================================================================

    /// Appends a card, accepted in decimal or compact form.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the card fails validation.
    pub fn add_card(&mut self, card: &str) -> Result<&mut Self, RequestError> {
        self.validate_param(ParamKey::Cards)?;
        let card = CardNumber::parse(card)?;
        self.push_list(ParamKey::Cards, card.encoded().to_string());
        Ok(self)
    }

    /// Appends an account (Sheba), accepted in decimal or compact form.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the account fails validation.
    pub fn add_account(&mut self, account: &str) -> Result<&mut Self, RequestError> {
        self.validate_param(ParamKey::Accounts)?;
        let account = Sheba::parse(account)?;
        self.push_list(ParamKey::Accounts, account.encoded().to_string());
        Ok(self)
    }

    /// Appends a wallet, accepted in decimal or compact form.
    ///
    /// On the transfer path the wallet category must be non-commercial; on
    /// the pay path it must be commercial. Other paths are unconstrained
    /// beyond the schema.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path, the wallet fails validation, or its category is not permitted
    /// on the current path.
    pub fn add_wallet(&mut self, wallet: &str) -> Result<&mut Self, RequestError> {
        let path = self.validate_param(ParamKey::Wallets)?;
        let wallet = WalletAddress::parse(wallet)?;
        let category = wallet.category();
        let allowed = match path {
            RequestPath::Transfer => category.is_non_commercial(),
            RequestPath::Pay => category.is_commercial(),
            RequestPath::Bill | RequestPath::Donate => true,
        };
        if !allowed {
            return Err(RequestError::WalletCategoryNotAllowed {
                category: category.digit(),
                path,
            });
        }
        self.push_list(ParamKey::Wallets, wallet.encoded().to_string());
        Ok(self)
    }

    /// Removes card entries equal to the given value by encoded equality.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the card fails validation.
    pub fn remove_card(&mut self, card: &str) -> Result<&mut Self, RequestError> {
        self.validate_param(ParamKey::Cards)?;
        let card = CardNumber::parse(card)?;
        self.remove_from_list(ParamKey::Cards, card.encoded());
        Ok(self)
    }

    /// Removes account entries equal to the given value by encoded equality.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the account fails validation.
    pub fn remove_account(&mut self, account: &str) -> Result<&mut Self, RequestError> {
        self.validate_param(ParamKey::Accounts)?;
        let account = Sheba::parse(account)?;
        self.remove_from_list(ParamKey::Accounts, account.encoded());
        Ok(self)
    }

    /// Removes wallet entries equal to the given value by encoded equality.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current
    /// path or the wallet fails validation.
    pub fn remove_wallet(&mut self, wallet: &str) -> Result<&mut Self, RequestError> {
        self.validate_param(ParamKey::Wallets)?;
        let wallet = WalletAddress::parse(wallet)?;
        self.remove_from_list(ParamKey::Wallets, wallet.encoded());
        Ok(self)
    }

    /// Clears the card list.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current path.
    pub fn remove_all_cards(&mut self) -> Result<&mut Self, RequestError> {
        self.validate_param(ParamKey::Cards)?;
        self.remove_entry(ParamKey::Cards);
        Ok(self)
    }

    /// Clears the account list.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current path.
    pub fn remove_all_accounts(&mut self) -> Result<&mut Self, RequestError> {
        self.validate_param(ParamKey::Accounts)?;
        self.remove_entry(ParamKey::Accounts);
        Ok(self)
    }

    /// Clears the wallet list.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the key is not legal on the current path.
    pub fn remove_all_wallets(&mut self) -> Result<&mut Self, RequestError> {
        self.validate_param(ParamKey::Wallets)?;
        self.remove_entry(ParamKey::Wallets);
        Ok(self)
    }

    // ========================================================================
    // SECTION: Typed Accessors
    // ========================================================================

    /// Returns the decoded payment amount, if present.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the stored value is not base-62 text
    /// or the scalar key was repeated in the source URI.
    pub fn amount(&self) -> Result<Option<String>, RequestError> {
        self.numeric(ParamKey::Amount)
    }

    /// Returns the decoded invoice identifier, if present.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the stored value is not base-62 text
    /// or the scalar key was repeated in the source URI.
    pub fn invoice_id(&self) -> Result<Option<String>, RequestError> {
        self.numeric(ParamKey::InvoiceId)
    }

    /// Returns the decoded transaction reference, if present.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the stored value is not base-62 text
    /// or the scalar key was repeated in the source URI.
    pub fn transaction_ref(&self) -> Result<Option<String>, RequestError> {
        self.numeric(ParamKey::TransactionRef)
    }

    /// Returns the decoded bill identifier, if present.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the stored value is not base-62 text
    /// or the scalar key was repeated in the source URI.
    pub fn bill_id(&self) -> Result<Option<String>, RequestError> {
        self.numeric(ParamKey::BillId)
    }

    /// Returns the decoded payment identifier, if present.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the stored value is not base-62 text
    /// or the scalar key was repeated in the source URI.
    pub fn payment_id(&self) -> Result<Option<String>, RequestError> {
        self.numeric(ParamKey::PaymentId)
    }

    /// Returns the currency unit, if present, range-checked at access time.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the stored value is not a number in
    /// the closed interval [1, 5].
    pub fn unit(&self) -> Result<Option<u8>, RequestError> {
        let Some(value) = self.raw(ParamKey::Unit) else {
            return Ok(None);
        };
        let ParamValue::Scalar(text) = value else {
            return Err(RequestError::MalformedUri("scalar parameter u repeated".to_string()));
        };
        let Ok(unit) = text.parse::<u8>() else {
            return Err(RequestError::MalformedUri(format!("unit value {text:?} is not numeric")));
        };
        if !(1..=5).contains(&unit) {
            return Err(RequestError::UnitOutOfRange {
                unit,
            });
        }
        Ok(Some(unit))
    }

    /// Reconstructs the card list, re-validating each entry.
    ///
    /// A scalar stored under the list key is treated as a one-element list.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when any entry fails card validation.
    pub fn cards(&self) -> Result<Option<Vec<CardNumber>>, RequestError> {
        let Some(values) = self.encoded_list(ParamKey::Cards) else {
            return Ok(None);
        };
        let mut cards = Vec::with_capacity(values.len());
        for value in values {
            cards.push(CardNumber::from_compact(value)?);
        }
        Ok(Some(cards))
    }

    /// Reconstructs the account list, re-validating each entry.
    ///
    /// A scalar stored under the list key is treated as a one-element list.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when any entry fails account validation.
    pub fn accounts(&self) -> Result<Option<Vec<Sheba>>, RequestError> {
        let Some(values) = self.encoded_list(ParamKey::Accounts) else {
            return Ok(None);
        };
        let mut accounts = Vec::with_capacity(values.len());
        for value in values {
            accounts.push(Sheba::from_compact(value)?);
        }
        Ok(Some(accounts))
    }

    /// Reconstructs the wallet list, re-validating each entry.
    ///
    /// A scalar stored under the list key is treated as a one-element list.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when any entry fails wallet validation.
    pub fn wallets(&self) -> Result<Option<Vec<WalletAddress>>, RequestError> {
        let Some(values) = self.encoded_list(ParamKey::Wallets) else {
            return Ok(None);
        };
        let mut wallets = Vec::with_capacity(values.len());
        for value in values {
            wallets.push(WalletAddress::from_compact(value)?);
        }
        Ok(Some(wallets))
    }

    // ========================================================================
    // SECTION: Serialization
    // ========================================================================

    /// Serializes the request into its URI form.
    ///
    /// List keys repeat once per element in insertion order. The `?` is
    /// omitted entirely when the parameter map is empty.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingPath`] when no path is selected.
    pub fn build(&self) -> Result<String, RequestError> {
        let Some(path) = self.path else {
            return Err(RequestError::MissingPath);
        };
        let mut uri = format!("{SCHEME}://{}", path.token());
        let mut pairs = Vec::new();
        for (token, value) in &self.params {
            match value {
                ParamValue::Scalar(scalar) => {
                    pairs.push(format!("{token}={}", query::encode_value(scalar)));
                }
                ParamValue::List(values) => {
                    pairs.extend(
                        values
                            .iter()
                            .map(|value| format!("{token}={}", query::encode_value(value))),
                    );
                }
            }
        }
        if !pairs.is_empty() {
            uri.push('?');
            uri.push_str(&pairs.join("&"));
        }
        Ok(uri)
    }

    // ========================================================================
    // SECTION: Internal Map Operations
    // ========================================================================

    /// Installs a raw token map directly, bypassing schema enforcement.
    ///
    /// Used by the parser, which deliberately does not re-run business
    /// rules; accessors validate lazily instead.
    pub(crate) fn install_raw(&mut self, params: Vec<(String, Vec<String>)>) {
        self.params = params
            .into_iter()
            .map(|(token, mut values)| {
                let value = if values.len() == 1 {
                    ParamValue::Scalar(values.swap_remove(0))
                } else {
                    ParamValue::List(values)
                };
                (token, value)
            })
            .collect();
    }

    /// Ensures the key is legal on the current path.
    fn validate_param(&self, key: ParamKey) -> Result<RequestPath, RequestError> {
        let Some(path) = self.path else {
            return Err(RequestError::MissingPath);
        };
        if path.allows(key) {
            Ok(path)
        } else {
            Err(RequestError::InvalidParameter {
                key,
                path,
            })
        }
    }

    /// Validates, base-62 encodes, and stages a numeric scalar.
    fn add_numeric(&mut self, key: ParamKey, value: &str) -> Result<&mut Self, RequestError> {
        self.validate_param(key)?;
        let encoded = base62::encode(value)?;
        self.put_scalar(key, encoded);
        Ok(self)
    }

    /// Validates the key and removes its scalar entry.
    fn remove_scalar(&mut self, key: ParamKey) -> Result<&mut Self, RequestError> {
        self.validate_param(key)?;
        self.remove_entry(key);
        Ok(self)
    }

    /// Returns the decoded numeric scalar stored under the key.
    fn numeric(&self, key: ParamKey) -> Result<Option<String>, RequestError> {
        match self.raw(key) {
            None => Ok(None),
            Some(ParamValue::Scalar(encoded)) => Ok(Some(base62::decode(encoded)?)),
            Some(ParamValue::List(_)) => Err(RequestError::MalformedUri(format!(
                "scalar parameter {} repeated",
                key.token()
            ))),
        }
    }

    /// Returns the stored value under the key's wire token.
    fn raw(&self, key: ParamKey) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(token, _)| token == key.token())
            .map(|(_, value)| value)
    }

    /// Returns list values under the key, treating a scalar as a singleton.
    fn encoded_list(&self, key: ParamKey) -> Option<Vec<&str>> {
        match self.raw(key)? {
            ParamValue::Scalar(value) => Some(vec![value.as_str()]),
            ParamValue::List(values) => Some(values.iter().map(String::as_str).collect()),
        }
    }

    /// Overwrites a scalar parameter under the key's wire token.
    fn put_scalar(&mut self, key: ParamKey, encoded: String) {
        let token = key.token();
        if let Some(entry) = self.params.iter_mut().find(|(existing, _)| existing == token) {
            entry.1 = ParamValue::Scalar(encoded);
        } else {
            self.params.push((token.to_string(), ParamValue::Scalar(encoded)));
        }
    }

    /// Appends a value to a list parameter under the key's wire token.
    ///
    /// A scalar already stored under the token (possible after permissive
    /// parsing collapsed a single-element list) is widened back to a list.
    fn push_list(&mut self, key: ParamKey, encoded: String) {
        let token = key.token();
        let Some(position) = self.params.iter().position(|(existing, _)| existing == token) else {
            self.params.push((token.to_string(), ParamValue::List(vec![encoded])));
            return;
        };
        let slot = &mut self.params[position].1;
        let widened = match std::mem::replace(slot, ParamValue::List(Vec::new())) {
            ParamValue::List(mut values) => {
                values.push(encoded);
                values
            }
            ParamValue::Scalar(existing_value) => vec![existing_value, encoded],
        };
        *slot = ParamValue::List(widened);
    }

    /// Removes values equal to `encoded` from a list parameter, dropping
    /// the entry entirely when the list empties.
    fn remove_from_list(&mut self, key: ParamKey, encoded: &str) {
        let token = key.token();
        let Some(position) = self.params.iter().position(|(existing, _)| existing == token) else {
            return;
        };
        let emptied = match &mut self.params[position].1 {
            ParamValue::List(values) => {
                values.retain(|value| value.as_str() != encoded);
                values.is_empty()
            }
            ParamValue::Scalar(value) => value.as_str() == encoded,
        };
        if emptied {
            self.params.remove(position);
        }
    }

    /// Removes the key's entry entirely.
    fn remove_entry(&mut self, key: ParamKey) {
        self.params.retain(|(token, _)| token != key.token());
    }
}
