keyword_enum! {
    /// The `type` of a native input.
    InputType, "input type" {
        Date => "date",
        DatetimeLocal => "datetime-local",
        Email => "email",
        Month => "month",
        Number => "number",
        Password => "password",
        Search => "search",
        Tel => "tel",
        Text => "text",
        Time => "time",
        Url => "url",
        Week => "week",
    }
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl InputType {
    /// Resolve a `type` attribute the way a browser does: missing or unknown
    /// keywords fall back to `text`.
    pub fn from_attr(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// Free-form text types: `pattern`, `minlength` and `maxlength` apply.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Search | Self::Url | Self::Tel | Self::Email | Self::Password
        )
    }

    /// Date and time types whose values parse to a point in time.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::DatetimeLocal | Self::Month | Self::Time | Self::Week
        )
    }

    /// Types for which `min`, `max` and `step` apply.
    pub fn has_range(&self) -> bool {
        *self == Self::Number || self.is_temporal()
    }
}

keyword_enum! {
    /// The `inputmode` virtual keyboard hint.
    InputMode, "inputmode" {
        None => "none",
        Text => "text",
        Tel => "tel",
        Url => "url",
        Email => "email",
        Numeric => "numeric",
        Decimal => "decimal",
        Search => "search",
    }
}

keyword_enum! {
    /// The `autocomplete` autofill hint.
    Autocomplete, "autocomplete" {
        On => "on",
        Off => "off",
        Name => "name",
        HonorificPrefix => "honorific-prefix",
        GivenName => "given-name",
        AdditionalName => "additional-name",
        FamilyName => "family-name",
        HonorificSuffix => "honorific-suffix",
        Nickname => "nickname",
        Email => "email",
        Username => "username",
        NewPassword => "new-password",
        CurrentPassword => "current-password",
        OneTimeCode => "one-time-code",
        OrganizationTitle => "organization-title",
        Organization => "organization",
        StreetAddress => "street-address",
        AddressLine1 => "address-line1",
        AddressLine2 => "address-line2",
        AddressLine3 => "address-line3",
        AddressLevel4 => "address-level4",
        AddressLevel3 => "address-level3",
        AddressLevel2 => "address-level2",
        AddressLevel1 => "address-level1",
        Country => "country",
        CountryName => "country-name",
        PostalCode => "postal-code",
        CcName => "cc-name",
        CcGivenName => "cc-given-name",
        CcAdditionalName => "cc-additional-name",
        CcFamilyName => "cc-family-name",
        CcNumber => "cc-number",
        CcExp => "cc-exp",
        CcExpMonth => "cc-exp-month",
        CcExpYear => "cc-exp-year",
        CcCsc => "cc-csc",
        CcType => "cc-type",
        TransactionCurrency => "transaction-currency",
        TransactionAmount => "transaction-amount",
        Language => "language",
        Bday => "bday",
        BdayDay => "bday-day",
        BdayMonth => "bday-month",
        BdayYear => "bday-year",
        Sex => "sex",
        Tel => "tel",
        TelCountryCode => "tel-country-code",
        TelNational => "tel-national",
        TelAreaCode => "tel-area-code",
        TelLocal => "tel-local",
        TelExtension => "tel-extension",
        Impp => "impp",
        Url => "url",
        Photo => "photo",
    }
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::Off
    }
}
