/// Lowest valid day of month
pub const MIN_DAY: u8 = 1;
/// Highest day accepted for any month (no per-month calendar check)
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const MIN_MONTH: u8 = 1;
/// Month number for December
pub const MAX_MONTH: u8 = 12;

/// Years are rendered zero-padded to this many digits before truncation
pub const YEAR_PAD_WIDTH: usize = 4;
/// Number of trailing year digits kept in the MRZ date field
pub const MRZ_YEAR_DIGITS: u32 = 2;

/// Filler character used to pad MRZ fields; worth 0 in check digits
pub const FILLER: char = '<';

/// Repeating ICAO 9303 weight sequence
pub const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Check digits are the weighted sum modulo this value
pub const CHECK_DIGIT_MODULUS: u32 = 10;

/// Offset from an uppercase ASCII letter's code point to its MRZ value (A=10)
pub(crate) const LETTER_OFFSET: u32 = 55;

/// Issuing-authority and nationality codes accepted outside the plain
/// ISO 3166 list: UK passport variants, Kosovo, EU, UN bodies, ICAO
/// special-use codes (refugee, stateless, unspecified) and historic codes.
pub const ACCEPTED_CODES: [&str; 33] = [
    "GBD", // British Overseas Territories Citizen
    "GBS", // British Subject
    "GBN", // British National (Overseas)
    "GBP", // British Protected Person
    "GBO", // British Overseas Citizen
    "KS",  // Kosovo
    "RKS", // Republic of Kosovo
    "EU",  // European Union
    "EUE", // European Union
    "UN",  // United Nations
    "UNO", // United Nations Organization
    "UNA", // United Nations specialized agency
    "UNK", // UNMIK Kosovo
    "XBA", // African Development Bank
    "XIM", // African Export-Import Bank
    "XCC", // Caribbean Community
    "XCE", // Council of Europe
    "XCO", // Common Market for Eastern and Southern Africa
    "XEC", // Economic Community of West African States
    "XPO", // Interpol
    "XES", // Organisation of Eastern Caribbean States
    "XOM", // Sovereign Military Order of Malta
    "XDC", // Southern African Development Community
    "XXA", // Stateless person
    "XXB", // Refugee (1951 Convention)
    "XXC", // Refugee (other)
    "XXX", // Unspecified nationality
    "AN",  // Netherlands Antilles
    "ANT", // Netherlands Antilles
    "NT",  // Neutral Zone
    "NTZ", // Neutral Zone
    "UT",  // Utopia (specimen documents)
    "UTO", // Utopia (specimen documents)
];
