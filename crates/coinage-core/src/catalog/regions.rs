//! Region to currency resolution.
//!
//! Resolving the currency of a region is a capability the catalog consumes
//! rather than owns: hosts with their own territory data implement
//! [`RegionCurrency`]; everyone else gets [`IsoRegions`], backed by a static
//! ISO 3166 alpha-2 table.

use crate::error::{LookupKind, MoneyError, MoneyResult};
use crate::locale::Locale;

/// Maps a region identifier to the ISO 4217 code of the currency used there.
pub trait RegionCurrency {
    /// Returns the currency code for `region`.
    ///
    /// Implementations report unknown or malformed regions as errors; the
    /// catalog turns every failure into [`MoneyError::NotFound`].
    fn currency_code<'a>(&'a self, region: &str) -> MoneyResult<&'a str>;
}

/// Built-in resolver over ISO 3166 alpha-2 region codes.
///
/// Besides bare region codes (`"NL"`), a specific locale name (`"nl-NL"`,
/// `"en_GB.UTF-8"`) resolves through its region subtag.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoRegions;

impl IsoRegions {
    /// Returns every (region, currency code) pair known to the resolver.
    pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        REGIONS.iter().copied()
    }
}

impl RegionCurrency for IsoRegions {
    fn currency_code<'a>(&'a self, region: &str) -> MoneyResult<&'a str> {
        let region = region.trim();
        let key = if region.contains(['-', '_']) {
            let locale = Locale::parse(region)?;
            match locale.region() {
                Some(code) => code.to_string(),
                None => return Err(MoneyError::not_found(LookupKind::Region, region)),
            }
        } else {
            region.to_ascii_uppercase()
        };

        REGIONS
            .binary_search_by(|(code, _)| (*code).cmp(key.as_str()))
            .map(|idx| REGIONS[idx].1)
            .map_err(|_| MoneyError::not_found(LookupKind::Region, region))
    }
}

/// ISO 3166 alpha-2 region code to ISO 4217 currency code, sorted by region.
static REGIONS: &[(&str, &str)] = &[
    ("AD", "EUR"), ("AE", "AED"), ("AF", "AFN"), ("AG", "XCD"), ("AI", "XCD"), ("AL", "ALL"),
    ("AM", "AMD"), ("AO", "AOA"), ("AR", "ARS"), ("AS", "USD"), ("AT", "EUR"), ("AU", "AUD"),
    ("AW", "AWG"), ("AX", "EUR"), ("AZ", "AZN"), ("BA", "BAM"), ("BB", "BBD"), ("BD", "BDT"),
    ("BE", "EUR"), ("BF", "XOF"), ("BG", "BGN"), ("BH", "BHD"), ("BI", "BIF"), ("BJ", "XOF"),
    ("BL", "EUR"), ("BM", "BMD"), ("BN", "BND"), ("BO", "BOB"), ("BQ", "USD"), ("BR", "BRL"),
    ("BS", "BSD"), ("BT", "BTN"), ("BW", "BWP"), ("BY", "BYN"), ("BZ", "BZD"), ("CA", "CAD"),
    ("CC", "AUD"), ("CD", "CDF"), ("CF", "XAF"), ("CG", "XAF"), ("CH", "CHF"), ("CI", "XOF"),
    ("CK", "NZD"), ("CL", "CLP"), ("CM", "XAF"), ("CN", "CNY"), ("CO", "COP"), ("CR", "CRC"),
    ("CU", "CUP"), ("CV", "CVE"), ("CW", "ANG"), ("CX", "AUD"), ("CY", "EUR"), ("CZ", "CZK"),
    ("DE", "EUR"), ("DJ", "DJF"), ("DK", "DKK"), ("DM", "XCD"), ("DO", "DOP"), ("DZ", "DZD"),
    ("EC", "USD"), ("EE", "EUR"), ("EG", "EGP"), ("ER", "ERN"), ("ES", "EUR"), ("ET", "ETB"),
    ("FI", "EUR"), ("FJ", "FJD"), ("FK", "FKP"), ("FM", "USD"), ("FO", "DKK"), ("FR", "EUR"),
    ("GA", "XAF"), ("GB", "GBP"), ("GD", "XCD"), ("GE", "GEL"), ("GF", "EUR"), ("GG", "GBP"),
    ("GH", "GHS"), ("GI", "GIP"), ("GL", "DKK"), ("GM", "GMD"), ("GN", "GNF"), ("GP", "EUR"),
    ("GQ", "XAF"), ("GR", "EUR"), ("GT", "GTQ"), ("GU", "USD"), ("GW", "XOF"), ("GY", "GYD"),
    ("HK", "HKD"), ("HN", "HNL"), ("HR", "EUR"), ("HT", "HTG"), ("HU", "HUF"), ("ID", "IDR"),
    ("IE", "EUR"), ("IL", "ILS"), ("IM", "GBP"), ("IN", "INR"), ("IO", "USD"), ("IQ", "IQD"),
    ("IR", "IRR"), ("IS", "ISK"), ("IT", "EUR"), ("JE", "GBP"), ("JM", "JMD"), ("JO", "JOD"),
    ("JP", "JPY"), ("KE", "KES"), ("KG", "KGS"), ("KH", "KHR"), ("KI", "AUD"), ("KM", "KMF"),
    ("KN", "XCD"), ("KP", "KPW"), ("KR", "KRW"), ("KW", "KWD"), ("KY", "KYD"), ("KZ", "KZT"),
    ("LA", "LAK"), ("LB", "LBP"), ("LC", "XCD"), ("LI", "CHF"), ("LK", "LKR"), ("LR", "LRD"),
    ("LS", "LSL"), ("LT", "EUR"), ("LU", "EUR"), ("LV", "EUR"), ("LY", "LYD"), ("MA", "MAD"),
    ("MC", "EUR"), ("MD", "MDL"), ("ME", "EUR"), ("MF", "EUR"), ("MG", "MGA"), ("MH", "USD"),
    ("MK", "MKD"), ("ML", "XOF"), ("MM", "MMK"), ("MN", "MNT"), ("MO", "MOP"), ("MP", "USD"),
    ("MQ", "EUR"), ("MR", "MRU"), ("MS", "XCD"), ("MT", "EUR"), ("MU", "MUR"), ("MV", "MVR"),
    ("MW", "MWK"), ("MX", "MXN"), ("MY", "MYR"), ("MZ", "MZN"), ("NA", "NAD"), ("NC", "XPF"),
    ("NE", "XOF"), ("NF", "AUD"), ("NG", "NGN"), ("NI", "NIO"), ("NL", "EUR"), ("NO", "NOK"),
    ("NP", "NPR"), ("NR", "AUD"), ("NU", "NZD"), ("NZ", "NZD"), ("OM", "OMR"), ("PA", "PAB"),
    ("PE", "PEN"), ("PF", "XPF"), ("PG", "PGK"), ("PH", "PHP"), ("PK", "PKR"), ("PL", "PLN"),
    ("PM", "EUR"), ("PN", "NZD"), ("PR", "USD"), ("PS", "ILS"), ("PT", "EUR"), ("PW", "USD"),
    ("PY", "PYG"), ("QA", "QAR"), ("RE", "EUR"), ("RO", "RON"), ("RS", "RSD"), ("RU", "RUB"),
    ("RW", "RWF"), ("SA", "SAR"), ("SB", "SBD"), ("SC", "SCR"), ("SD", "SDG"), ("SE", "SEK"),
    ("SG", "SGD"), ("SH", "SHP"), ("SI", "EUR"), ("SJ", "NOK"), ("SK", "EUR"), ("SL", "SLL"),
    ("SM", "EUR"), ("SN", "XOF"), ("SO", "SOS"), ("SR", "SRD"), ("SS", "SSP"), ("ST", "STN"),
    ("SV", "USD"), ("SX", "ANG"), ("SY", "SYP"), ("SZ", "SZL"), ("TC", "USD"), ("TD", "XAF"),
    ("TF", "EUR"), ("TG", "XOF"), ("TH", "THB"), ("TJ", "TJS"), ("TK", "NZD"), ("TL", "USD"),
    ("TM", "TMT"), ("TN", "TND"), ("TO", "TOP"), ("TR", "TRY"), ("TT", "TTD"), ("TV", "AUD"),
    ("TW", "TWD"), ("TZ", "TZS"), ("UA", "UAH"), ("UG", "UGX"), ("UM", "USD"), ("US", "USD"),
    ("UY", "UYU"), ("UZ", "UZS"), ("VA", "EUR"), ("VC", "XCD"), ("VE", "VES"), ("VG", "USD"),
    ("VI", "USD"), ("VN", "VND"), ("VU", "VUV"), ("WF", "XPF"), ("WS", "WST"), ("XK", "EUR"),
    ("YE", "YER"), ("YT", "EUR"), ("ZA", "ZAR"), ("ZM", "ZMW"), ("ZW", "ZWL"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_codes() {
        let regions = IsoRegions;
        assert_eq!(regions.currency_code("US").unwrap(), "USD");
        assert_eq!(regions.currency_code("nl").unwrap(), "EUR");
        assert_eq!(regions.currency_code(" JP ").unwrap(), "JPY");
        assert_eq!(regions.currency_code("CN").unwrap(), "CNY");
    }

    #[test]
    fn test_locale_names_resolve_through_region() {
        let regions = IsoRegions;
        assert_eq!(regions.currency_code("en-GB").unwrap(), "GBP");
        assert_eq!(regions.currency_code("de_CH.UTF-8").unwrap(), "CHF");
        assert_eq!(regions.currency_code("zh-Hans-CN").unwrap(), "CNY");
    }

    #[test]
    fn test_unknown_regions() {
        let regions = IsoRegions;
        assert!(regions.currency_code("").is_err());
        assert!(regions.currency_code("QQ").is_err());
        assert!(regions.currency_code("USA").is_err());
        assert!(regions.currency_code("en-").is_err());
    }

    #[test]
    fn test_table_sorted_and_unique() {
        let codes: Vec<&str> = IsoRegions::entries().map(|(region, _)| region).collect();
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }
}
