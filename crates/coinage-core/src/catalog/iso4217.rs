//! ISO 4217 currency table.
//!
//! Sorted by code so lookups can binary search. Codes withdrawn from
//! circulation stay listed while they still appear in settlement data.

use crate::types::Currency;

/// Generic currency sign for entries without a circulating symbol.
pub(crate) const GENERIC_SYMBOL: &str = "\u{a4}";

const fn iso(
    code: &'static str,
    numeric: &'static str,
    decimal_digits: u32,
    english_name: &'static str,
    symbol: &'static str,
) -> Currency {
    Currency::new(code, numeric, decimal_digits, english_name, symbol, false)
}

const fn fund(
    code: &'static str,
    numeric: &'static str,
    decimal_digits: u32,
    english_name: &'static str,
) -> Currency {
    Currency::new(code, numeric, decimal_digits, english_name, GENERIC_SYMBOL, true)
}

// Precious metals, bond market units and other units of account.
const fn unit(code: &'static str, numeric: &'static str, english_name: &'static str) -> Currency {
    Currency::new(code, numeric, 0, english_name, GENERIC_SYMBOL, false)
}

pub(crate) static CURRENCIES: &[Currency] = &[
    iso("AED", "784", 2, "UAE Dirham", "د.إ"),
    iso("AFN", "971", 2, "Afghani", "؋"),
    iso("ALL", "008", 2, "Lek", "L"),
    iso("AMD", "051", 2, "Armenian Dram", "֏"),
    iso("ANG", "532", 2, "Netherlands Antillean Guilder", "ƒ"),
    iso("AOA", "973", 2, "Kwanza", "Kz"),
    iso("ARS", "032", 2, "Argentine Peso", "$"),
    iso("AUD", "036", 2, "Australian Dollar", "$"),
    iso("AWG", "533", 2, "Aruban Florin", "ƒ"),
    iso("AZN", "944", 2, "Azerbaijan Manat", "₼"),
    iso("BAM", "977", 2, "Convertible Mark", "KM"),
    iso("BBD", "052", 2, "Barbados Dollar", "$"),
    iso("BDT", "050", 2, "Taka", "৳"),
    iso("BGN", "975", 2, "Bulgarian Lev", "лв."),
    iso("BHD", "048", 3, "Bahraini Dinar", "BD"),
    iso("BIF", "108", 0, "Burundi Franc", "FBu"),
    iso("BMD", "060", 2, "Bermudian Dollar", "$"),
    iso("BND", "096", 2, "Brunei Dollar", "$"),
    iso("BOB", "068", 2, "Boliviano", "Bs."),
    fund("BOV", "984", 2, "Mvdol"),
    iso("BRL", "986", 2, "Brazilian Real", "R$"),
    iso("BSD", "044", 2, "Bahamian Dollar", "$"),
    iso("BTN", "064", 2, "Ngultrum", "Nu."),
    iso("BWP", "072", 2, "Pula", "P"),
    iso("BYN", "933", 2, "Belarusian Ruble", "Br"),
    iso("BZD", "084", 2, "Belize Dollar", "BZ$"),
    iso("CAD", "124", 2, "Canadian Dollar", "$"),
    iso("CDF", "976", 2, "Congolese Franc", "FC"),
    fund("CHE", "947", 2, "WIR Euro"),
    iso("CHF", "756", 2, "Swiss Franc", "CHF"),
    fund("CHW", "948", 2, "WIR Franc"),
    fund("CLF", "990", 4, "Unidad de Fomento"),
    iso("CLP", "152", 0, "Chilean Peso", "$"),
    iso("CNY", "156", 2, "Yuan Renminbi", "¥"),
    iso("COP", "170", 2, "Colombian Peso", "$"),
    fund("COU", "970", 2, "Unidad de Valor Real"),
    iso("CRC", "188", 2, "Costa Rican Colon", "₡"),
    iso("CUC", "931", 2, "Peso Convertible", "CUC$"),
    iso("CUP", "192", 2, "Cuban Peso", "₱"),
    iso("CVE", "132", 2, "Cabo Verde Escudo", "$"),
    iso("CZK", "203", 2, "Czech Koruna", "Kč"),
    iso("DJF", "262", 0, "Djibouti Franc", "Fdj"),
    iso("DKK", "208", 2, "Danish Krone", "kr."),
    iso("DOP", "214", 2, "Dominican Peso", "RD$"),
    iso("DZD", "012", 2, "Algerian Dinar", "د.ج"),
    iso("EGP", "818", 2, "Egyptian Pound", "£"),
    iso("ERN", "232", 2, "Nakfa", "Nfk"),
    iso("ETB", "230", 2, "Ethiopian Birr", "Br"),
    iso("EUR", "978", 2, "Euro", "€"),
    iso("FJD", "242", 2, "Fiji Dollar", "$"),
    iso("FKP", "238", 2, "Falkland Islands Pound", "£"),
    iso("GBP", "826", 2, "Pound Sterling", "£"),
    iso("GEL", "981", 2, "Lari", "₾"),
    iso("GHS", "936", 2, "Ghana Cedi", "GH₵"),
    iso("GIP", "292", 2, "Gibraltar Pound", "£"),
    iso("GMD", "270", 2, "Dalasi", "D"),
    iso("GNF", "324", 0, "Guinean Franc", "FG"),
    iso("GTQ", "320", 2, "Quetzal", "Q"),
    iso("GYD", "328", 2, "Guyana Dollar", "$"),
    iso("HKD", "344", 2, "Hong Kong Dollar", "HK$"),
    iso("HNL", "340", 2, "Lempira", "L"),
    iso("HRK", "191", 2, "Kuna", "kn"),
    iso("HTG", "332", 2, "Gourde", "G"),
    iso("HUF", "348", 2, "Forint", "Ft"),
    iso("IDR", "360", 2, "Rupiah", "Rp"),
    iso("ILS", "376", 2, "New Israeli Sheqel", "₪"),
    iso("INR", "356", 2, "Indian Rupee", "₹"),
    iso("IQD", "368", 3, "Iraqi Dinar", "ع.د"),
    iso("IRR", "364", 2, "Iranian Rial", "﷼"),
    iso("ISK", "352", 0, "Iceland Krona", "kr"),
    iso("JMD", "388", 2, "Jamaican Dollar", "J$"),
    iso("JOD", "400", 3, "Jordanian Dinar", "JD"),
    iso("JPY", "392", 0, "Yen", "¥"),
    iso("KES", "404", 2, "Kenyan Shilling", "KSh"),
    iso("KGS", "417", 2, "Som", "сом"),
    iso("KHR", "116", 2, "Riel", "៛"),
    iso("KMF", "174", 0, "Comorian Franc", "CF"),
    iso("KPW", "408", 2, "North Korean Won", "₩"),
    iso("KRW", "410", 0, "Won", "₩"),
    iso("KWD", "414", 3, "Kuwaiti Dinar", "KD"),
    iso("KYD", "136", 2, "Cayman Islands Dollar", "$"),
    iso("KZT", "398", 2, "Tenge", "₸"),
    iso("LAK", "418", 2, "Lao Kip", "₭"),
    iso("LBP", "422", 2, "Lebanese Pound", "ل.ل"),
    iso("LKR", "144", 2, "Sri Lanka Rupee", "Rs"),
    iso("LRD", "430", 2, "Liberian Dollar", "$"),
    iso("LSL", "426", 2, "Loti", "L"),
    iso("LYD", "434", 3, "Libyan Dinar", "LD"),
    iso("MAD", "504", 2, "Moroccan Dirham", "MAD"),
    iso("MDL", "498", 2, "Moldovan Leu", "L"),
    iso("MGA", "969", 2, "Malagasy Ariary", "Ar"),
    iso("MKD", "807", 2, "Denar", "ден"),
    iso("MMK", "104", 2, "Kyat", "K"),
    iso("MNT", "496", 2, "Tugrik", "₮"),
    iso("MOP", "446", 2, "Pataca", "MOP$"),
    iso("MRU", "929", 2, "Ouguiya", "UM"),
    iso("MUR", "480", 2, "Mauritius Rupee", "₨"),
    iso("MVR", "462", 2, "Rufiyaa", "Rf"),
    iso("MWK", "454", 2, "Malawi Kwacha", "MK"),
    iso("MXN", "484", 2, "Mexican Peso", "$"),
    fund("MXV", "979", 2, "Mexican Unidad de Inversion (UDI)"),
    iso("MYR", "458", 2, "Malaysian Ringgit", "RM"),
    iso("MZN", "943", 2, "Mozambique Metical", "MT"),
    iso("NAD", "516", 2, "Namibia Dollar", "$"),
    iso("NGN", "566", 2, "Naira", "₦"),
    iso("NIO", "558", 2, "Cordoba Oro", "C$"),
    iso("NOK", "578", 2, "Norwegian Krone", "kr"),
    iso("NPR", "524", 2, "Nepalese Rupee", "₨"),
    iso("NZD", "554", 2, "New Zealand Dollar", "$"),
    iso("OMR", "512", 3, "Rial Omani", "ر.ع."),
    iso("PAB", "590", 2, "Balboa", "B/."),
    iso("PEN", "604", 2, "Sol", "S/"),
    iso("PGK", "598", 2, "Kina", "K"),
    iso("PHP", "608", 2, "Philippine Peso", "₱"),
    iso("PKR", "586", 2, "Pakistan Rupee", "₨"),
    iso("PLN", "985", 2, "Zloty", "zł"),
    iso("PYG", "600", 0, "Guarani", "₲"),
    iso("QAR", "634", 2, "Qatari Rial", "ر.ق"),
    iso("RON", "946", 2, "Romanian Leu", "lei"),
    iso("RSD", "941", 2, "Serbian Dinar", "дин."),
    iso("RUB", "643", 2, "Russian Ruble", "₽"),
    iso("RWF", "646", 0, "Rwanda Franc", "RF"),
    iso("SAR", "682", 2, "Saudi Riyal", "ر.س"),
    iso("SBD", "090", 2, "Solomon Islands Dollar", "$"),
    iso("SCR", "690", 2, "Seychelles Rupee", "₨"),
    iso("SDG", "938", 2, "Sudanese Pound", "ج.س."),
    iso("SEK", "752", 2, "Swedish Krona", "kr"),
    iso("SGD", "702", 2, "Singapore Dollar", "$"),
    iso("SHP", "654", 2, "Saint Helena Pound", "£"),
    iso("SLL", "694", 2, "Leone", "Le"),
    iso("SOS", "706", 2, "Somali Shilling", "S"),
    iso("SRD", "968", 2, "Surinam Dollar", "$"),
    iso("SSP", "728", 2, "South Sudanese Pound", "£"),
    iso("STN", "930", 2, "Dobra", "Db"),
    iso("SVC", "222", 2, "El Salvador Colon", "₡"),
    iso("SYP", "760", 2, "Syrian Pound", "£"),
    iso("SZL", "748", 2, "Lilangeni", "E"),
    iso("THB", "764", 2, "Baht", "฿"),
    iso("TJS", "972", 2, "Somoni", "SM"),
    iso("TMT", "934", 2, "Turkmenistan New Manat", "m"),
    iso("TND", "788", 3, "Tunisian Dinar", "د.ت"),
    iso("TOP", "776", 2, "Pa'anga", "T$"),
    iso("TRY", "949", 2, "Turkish Lira", "₺"),
    iso("TTD", "780", 2, "Trinidad and Tobago Dollar", "TT$"),
    iso("TWD", "901", 2, "New Taiwan Dollar", "NT$"),
    iso("TZS", "834", 2, "Tanzanian Shilling", "TSh"),
    iso("UAH", "980", 2, "Hryvnia", "₴"),
    iso("UGX", "800", 0, "Uganda Shilling", "USh"),
    iso("USD", "840", 2, "US Dollar", "$"),
    fund("USN", "997", 2, "US Dollar (Next day)"),
    fund("UYI", "940", 0, "Uruguay Peso en Unidades Indexadas (UI)"),
    iso("UYU", "858", 2, "Peso Uruguayo", "$U"),
    fund("UYW", "927", 4, "Unidad Previsional"),
    iso("UZS", "860", 2, "Uzbekistan Sum", "soʻm"),
    iso("VES", "928", 2, "Bolivar Soberano", "Bs.S"),
    iso("VND", "704", 0, "Dong", "₫"),
    iso("VUV", "548", 0, "Vatu", "VT"),
    iso("WST", "882", 2, "Tala", "WS$"),
    iso("XAF", "950", 0, "CFA Franc BEAC", "FCFA"),
    unit("XAG", "961", "Silver"),
    unit("XAU", "959", "Gold"),
    unit("XBA", "955", "Bond Markets Unit European Composite Unit (EURCO)"),
    unit("XBB", "956", "Bond Markets Unit European Monetary Unit (E.M.U.-6)"),
    unit("XBC", "957", "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)"),
    unit("XBD", "958", "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)"),
    iso("XCD", "951", 2, "East Caribbean Dollar", "$"),
    unit("XDR", "960", "SDR (Special Drawing Right)"),
    iso("XOF", "952", 0, "CFA Franc BCEAO", "CFA"),
    unit("XPD", "964", "Palladium"),
    iso("XPF", "953", 0, "CFP Franc", "₣"),
    unit("XPT", "962", "Platinum"),
    unit("XSU", "994", "Sucre"),
    unit("XTS", "963", "Codes specifically reserved for testing purposes"),
    unit("XUA", "965", "ADB Unit of Account"),
    unit("XXX", "999", "The codes assigned for transactions where no currency is involved"),
    iso("YER", "886", 2, "Yemeni Rial", "﷼"),
    iso("ZAR", "710", 2, "Rand", "R"),
    iso("ZMW", "967", 2, "Zambian Kwacha", "ZK"),
    iso("ZWL", "932", 2, "Zimbabwe Dollar", "Z$"),
];
